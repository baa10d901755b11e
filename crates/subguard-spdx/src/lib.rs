//! SPDX license data for subguard.
//!
//! Two halves:
//! - [`catalog`]: fetch the official SPDX license and exception lists and
//!   build an in-memory membership catalog. The only networked code in the
//!   workspace.
//! - [`expr`]: validate a license expression string against a catalog.
//!   Pure; usable from the domain crate without IO.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod expr;

pub use catalog::{fetch_catalog, CatalogError, SpdxCatalog, DEFAULT_SPDX_BASE_URL};
pub use expr::check_expression;

#[cfg(test)]
mod proptests;

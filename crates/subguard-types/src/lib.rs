//! Stable DTOs and IDs used across the subguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for accumulated findings and the final verdict
//! - stable string IDs and codes for every check
//! - canonical repo-relative path handling

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod report;

pub use path::RepoPath;
pub use report::{Finding, Severity, Verdict};

//! Pure consistency evaluation (no IO).
//!
//! Input: a repo model constructed elsewhere (manifest fields plus probed
//! submodule state).
//! Output: findings + verdict + severity counts.

#![forbid(unsafe_code)]

pub mod model;
pub mod report;

pub mod checks;
mod engine;

pub use engine::evaluate;

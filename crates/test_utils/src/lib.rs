//! Test Utilities Crate
//!
//! Shared builders and fixtures for the invoicing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common values
//! - `builders`: Builder patterns for drafts, records, and entries

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;

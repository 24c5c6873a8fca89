//! Directory Domain - Customer and Supplier Master Data
//!
//! This crate manages the anagrafica: customer ("clienti") and supplier
//! ("fornitori") records with per-category tax-ID uniqueness and
//! substring lookup for incremental counterparty search.
//!
//! Directory entries and invoice counterparties are independent free-text
//! data; there is deliberately no referential link between them.

pub mod directory;
pub mod entry;
pub mod error;
pub mod validation;

pub use directory::Directory;
pub use entry::{Category, DirectoryEntry, EntryDraft};
pub use error::{ensure_valid, DirectoryError};
pub use validation::{validate_draft, DirectoryValidationError};

//! Persistence layer - full-document JSON stores
//!
//! Both the ledger and the directory live in single JSON documents that
//! are read fully at session start and rewritten wholesale on every
//! mutation. Writes go through a temp-file-and-rename so a failed save
//! never corrupts the previous document.
//!
//! This is a single-user store: there is no locking and no defense against
//! concurrent writers.

pub mod documents;
pub mod error;
pub mod store;

pub use documents::{DirectoryDocument, LedgerDocument};
pub use error::StoreError;
pub use store::{load_directory, load_ledger, save_directory, save_ledger};

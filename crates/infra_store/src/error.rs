//! Store errors
//!
//! Only the save path produces errors; load degrades to an empty document
//! by policy (see `store`).

use thiserror::Error;

/// Errors that can occur while persisting a store document
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

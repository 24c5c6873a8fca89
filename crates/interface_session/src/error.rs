//! Session errors
//!
//! Validation failures are user-correctable and carry the full rule list;
//! store failures surface the underlying I/O problem. Thanks to the
//! append-rollback discipline in the session, a store failure never leaves
//! memory and disk out of step.

use thiserror::Error;

use domain_directory::DirectoryValidationError;
use domain_ledger::ValidationError;
use infra_store::StoreError;

/// Errors that can occur at the session boundary
#[derive(Debug, Error)]
pub enum SessionError {
    /// The invoice draft broke one or more validation rules
    #[error("Invoice draft rejected: {}", join(.0))]
    InvoiceValidation(Vec<ValidationError>),

    /// The directory draft broke one or more validation rules
    #[error("Directory entry rejected: {}", join(.0))]
    DirectoryValidation(Vec<DirectoryValidationError>),

    /// The store rewrite failed; the in-memory mutation was rolled back
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

fn join<E: std::fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

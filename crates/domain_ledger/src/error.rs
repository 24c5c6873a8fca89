//! Ledger domain errors

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error)]
pub enum LedgerError {
    /// One or more draft validation rules failed
    #[error("Invoice draft failed validation: {}", format_rules(.0))]
    Validation(Vec<ValidationError>),

    /// A persisted document named a partition this ledger does not have
    #[error("Unknown ledger partition: {0}")]
    UnknownPartition(String),
}

fn format_rules(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Returns `Ok` when a draft passes every rule, otherwise all broken rules
pub fn ensure_valid(draft: &crate::invoice::InvoiceDraft) -> Result<(), LedgerError> {
    let errors = crate::validation::validate_draft(draft);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(LedgerError::Validation(errors))
    }
}

//! Directory domain errors

use thiserror::Error;

use crate::validation::DirectoryValidationError;

/// Errors that can occur in the directory domain
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// One or more entry validation rules failed
    #[error("Directory entry failed validation: {}", format_rules(.0))]
    Validation(Vec<DirectoryValidationError>),

    /// A persisted document named a category this directory does not have
    #[error("Unknown directory category: {0}")]
    UnknownCategory(String),
}

fn format_rules(errors: &[DirectoryValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Returns `Ok` when a draft passes every rule, otherwise all broken rules
pub fn ensure_valid(
    category: crate::entry::Category,
    draft: &crate::entry::EntryDraft,
    directory: &crate::directory::Directory,
) -> Result<(), DirectoryError> {
    let errors = crate::validation::validate_draft(category, draft, directory);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DirectoryError::Validation(errors))
    }
}

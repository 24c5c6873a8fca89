//! Directory entry validation
//!
//! Same collect-all-errors discipline as invoice drafts, plus the
//! uniqueness rule: a tax ID may appear at most once per category.
//! Customers and suppliers are separate scopes, so the same tax ID can
//! legitimately exist in both.

use thiserror::Error;

use core_kernel::is_valid_vat_number;

use crate::directory::Directory;
use crate::entry::{Category, EntryDraft};

/// One broken directory validation rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryValidationError {
    #[error("Legal name is required")]
    MissingLegalName,

    #[error("Tax ID is missing or malformed: '{0}'")]
    InvalidTaxId(String),

    #[error("Tax ID '{tax_id}' already exists among {category}")]
    DuplicateTaxId { category: Category, tax_id: String },
}

/// Checks every rule against a draft and the current directory contents
pub fn validate_draft(
    category: Category,
    draft: &EntryDraft,
    directory: &Directory,
) -> Vec<DirectoryValidationError> {
    let mut errors = Vec::new();

    if draft.legal_name.trim().is_empty() {
        errors.push(DirectoryValidationError::MissingLegalName);
    }

    let tax_id = draft.tax_id.trim();
    if tax_id.is_empty() || !is_valid_vat_number(tax_id) {
        errors.push(DirectoryValidationError::InvalidTaxId(tax_id.to_string()));
    } else if directory.tax_id_exists(category, tax_id) {
        errors.push(DirectoryValidationError::DuplicateTaxId {
            category,
            tax_id: tax_id.to_string(),
        });
    }

    errors
}

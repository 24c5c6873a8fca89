//! Draft validation rules
//!
//! Rules are evaluated independently and all broken ones are reported, so
//! an entry form can surface the full list at once. An empty result means
//! the draft may be persisted.
//!
//! Zero taxable amounts are rejected here even though the totals
//! computation accepts them; a persisted invoice must carry a strictly
//! positive taxable amount.

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::is_valid_vat_number;

use crate::invoice::InvoiceDraft;

/// One broken validation rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Counterparty name is required")]
    MissingCounterpartyName,

    #[error("Tax ID is missing or malformed: '{0}'")]
    InvalidTaxId(String),

    #[error("Taxable amount must be greater than zero")]
    NonPositiveTaxableAmount,

    #[error("Invoice number is required")]
    MissingNumber,
}

/// Checks every rule and returns the broken ones, in no guaranteed order
pub fn validate_draft(draft: &InvoiceDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.counterparty_name.trim().is_empty() {
        errors.push(ValidationError::MissingCounterpartyName);
    }

    let tax_id = draft.tax_id.trim();
    if tax_id.is_empty() || !is_valid_vat_number(tax_id) {
        errors.push(ValidationError::InvalidTaxId(tax_id.to_string()));
    }

    if draft.taxable_amount <= Decimal::ZERO {
        errors.push(ValidationError::NonPositiveTaxableAmount);
    }

    if draft.number.trim().is_empty() {
        errors.push(ValidationError::MissingNumber);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::PaymentTerms;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn valid_draft() -> InvoiceDraft {
        InvoiceDraft {
            issue_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            number: "2026/1".to_string(),
            counterparty_name: "Mario Rossi Srl".to_string(),
            tax_id: "IT12345678901".to_string(),
            taxable_amount: dec!(1000),
            vat_rate_percent: dec!(22),
            payment_terms: PaymentTerms::BankTransfer30,
            notes: None,
            due_date: None,
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(validate_draft(&valid_draft()).is_empty());
    }

    #[test]
    fn test_whitespace_only_fields_rejected() {
        let mut draft = valid_draft();
        draft.counterparty_name = "   ".to_string();
        draft.number = "\t".to_string();

        let errors = validate_draft(&draft);
        assert!(errors.contains(&ValidationError::MissingCounterpartyName));
        assert!(errors.contains(&ValidationError::MissingNumber));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_zero_taxable_amount_rejected() {
        let mut draft = valid_draft();
        draft.taxable_amount = Decimal::ZERO;

        assert_eq!(
            validate_draft(&draft),
            vec![ValidationError::NonPositiveTaxableAmount]
        );
    }

    #[test]
    fn test_all_broken_rules_collected() {
        let mut draft = valid_draft();
        draft.counterparty_name = String::new();
        draft.taxable_amount = Decimal::ZERO;
        draft.tax_id = "ABCDEFGHIJK".to_string();

        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::MissingCounterpartyName));
        assert!(errors.contains(&ValidationError::NonPositiveTaxableAmount));
        assert!(errors.contains(&ValidationError::InvalidTaxId("ABCDEFGHIJK".to_string())));
    }

    #[test]
    fn test_tax_id_accepts_bare_digits() {
        let mut draft = valid_draft();
        draft.tax_id = "12345678901".to_string();
        assert!(validate_draft(&draft).is_empty());
    }
}

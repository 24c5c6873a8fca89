//! Ledger Domain - Two-Partition Invoice Collections
//!
//! This crate implements the invoice ledger: outgoing ("Attiva") invoices
//! issued to customers and incoming ("Passiva") invoices received from
//! suppliers, with derived-total arithmetic and draft validation.
//!
//! # Derived fields
//!
//! `vat_amount` and `total_amount` are never user-entered. They are
//! recomputed from `taxable_amount` and `vat_rate_percent` when a record is
//! built from a draft, rounded half-up to 2 decimal places:
//!
//! - `vat_amount = round(taxable_amount * vat_rate_percent / 100)`
//! - `total_amount = round(taxable_amount + vat_amount)`
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use domain_ledger::{Direction, InvoiceDraft, InvoiceRecord, Ledger, PaymentTerms};
//!
//! let draft = InvoiceDraft {
//!     issue_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
//!     number: "2026/1".to_string(),
//!     counterparty_name: "Mario Rossi Srl".to_string(),
//!     tax_id: "IT12345678901".to_string(),
//!     taxable_amount: dec!(1000),
//!     vat_rate_percent: dec!(22),
//!     payment_terms: PaymentTerms::BankTransfer30,
//!     notes: None,
//!     due_date: None,
//! };
//!
//! assert!(domain_ledger::validate_draft(&draft).is_empty());
//!
//! let mut ledger = Ledger::new();
//! ledger.append(Direction::Outgoing, InvoiceRecord::from_draft(draft));
//! assert_eq!(ledger.sum_of_totals(Direction::Outgoing), dec!(1220.00));
//! ```

pub mod error;
pub mod invoice;
pub mod ledger;
pub mod totals;
pub mod validation;

pub use error::{ensure_valid, LedgerError};
pub use invoice::{Direction, InvoiceDraft, InvoiceRecord, PaymentTerms};
pub use ledger::{DueStatus, Ledger};
pub use totals::{
    checked_derived_totals, derived_totals, derived_totals_from_input, DerivedTotals,
};
pub use validation::{validate_draft, ValidationError};

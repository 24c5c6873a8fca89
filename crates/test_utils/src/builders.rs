//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_directory::{DirectoryEntry, EntryDraft};
use domain_ledger::{InvoiceDraft, InvoiceRecord, PaymentTerms};

use crate::fixtures::{DateFixtures, TaxIdFixtures};

/// Builder for invoice drafts and records
pub struct InvoiceBuilder {
    issue_date: NaiveDate,
    number: String,
    counterparty_name: String,
    tax_id: String,
    taxable_amount: Decimal,
    vat_rate_percent: Decimal,
    payment_terms: PaymentTerms,
    notes: Option<String>,
    due_date: Option<NaiveDate>,
}

impl Default for InvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceBuilder {
    /// Creates a builder with a valid, persistable default draft
    pub fn new() -> Self {
        Self {
            issue_date: DateFixtures::issue_date(),
            number: "2026/1".to_string(),
            counterparty_name: "Mario Rossi Srl".to_string(),
            tax_id: TaxIdFixtures::VALID_WITH_PREFIX.to_string(),
            taxable_amount: dec!(1000),
            vat_rate_percent: dec!(22),
            payment_terms: PaymentTerms::BankTransfer30,
            notes: None,
            due_date: None,
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn with_counterparty(mut self, name: impl Into<String>) -> Self {
        self.counterparty_name = name.into();
        self
    }

    pub fn with_tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = tax_id.into();
        self
    }

    pub fn with_amounts(mut self, taxable: Decimal, rate: Decimal) -> Self {
        self.taxable_amount = taxable;
        self.vat_rate_percent = rate;
        self
    }

    pub fn with_issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = date;
        self
    }

    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn with_payment_terms(mut self, terms: PaymentTerms) -> Self {
        self.payment_terms = terms;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn build_draft(self) -> InvoiceDraft {
        InvoiceDraft {
            issue_date: self.issue_date,
            number: self.number,
            counterparty_name: self.counterparty_name,
            tax_id: self.tax_id,
            taxable_amount: self.taxable_amount,
            vat_rate_percent: self.vat_rate_percent,
            payment_terms: self.payment_terms,
            notes: self.notes,
            due_date: self.due_date,
        }
    }

    /// Builds a record with a fixed timestamp so equality checks are stable
    pub fn build_record(self) -> InvoiceRecord {
        let created_at = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();
        InvoiceRecord::from_draft_at(self.build_draft(), created_at)
    }
}

/// Builder for directory entry drafts and entries
pub struct EntryBuilder {
    legal_name: String,
    tax_id: String,
    email: Option<String>,
    city: Option<String>,
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryBuilder {
    pub fn new() -> Self {
        Self {
            legal_name: "Mario Rossi Srl".to_string(),
            tax_id: TaxIdFixtures::VALID_BARE.to_string(),
            email: None,
            city: None,
        }
    }

    pub fn with_legal_name(mut self, name: impl Into<String>) -> Self {
        self.legal_name = name.into();
        self
    }

    pub fn with_tax_id(mut self, tax_id: impl Into<String>) -> Self {
        self.tax_id = tax_id.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn build_draft(self) -> EntryDraft {
        EntryDraft {
            legal_name: self.legal_name,
            tax_id: self.tax_id,
            email: self.email,
            phone: None,
            address: None,
            city: self.city,
            province: None,
            postal_code: None,
        }
    }

    /// Builds an entry with a fixed timestamp so equality checks are stable
    pub fn build_entry(self) -> DirectoryEntry {
        let created_at = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();
        DirectoryEntry::from_draft_at(self.build_draft(), created_at)
    }
}

//! Invoice records and drafts
//!
//! A draft carries raw user-entered fields; a record is the persisted shape
//! with derived totals and a creation timestamp. Derived fields are only
//! ever set by [`InvoiceRecord::from_draft`] so the arithmetic invariant
//! (`vat == round(taxable * rate/100)`, `total == round(taxable + vat)`)
//! holds for every persisted record.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;
use crate::totals::derived_totals;

/// Ledger partition an invoice belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Issued to customers ("Attiva")
    Outgoing,
    /// Received from suppliers ("Passiva")
    Incoming,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Outgoing, Direction::Incoming];

    /// The key this partition uses in the persisted document
    pub fn partition_key(&self) -> &'static str {
        match self {
            Direction::Outgoing => "Attiva",
            Direction::Incoming => "Passiva",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.partition_key())
    }
}

impl FromStr for Direction {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Attiva" => Ok(Direction::Outgoing),
            "Passiva" => Ok(Direction::Incoming),
            other => Err(LedgerError::UnknownPartition(other.to_string())),
        }
    }
}

/// Payment terms offered at entry time
///
/// The option set is fixed in the entry form; persistence carries the
/// free-form label, so unknown labels read back as [`PaymentTerms::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentTerms {
    BankTransfer30,
    BankTransfer60,
    Advance,
    Cash,
    Other(String),
}

impl PaymentTerms {
    /// The labels offered by the entry form, in display order
    pub const ENTRY_OPTIONS: [PaymentTerms; 4] = [
        PaymentTerms::BankTransfer30,
        PaymentTerms::BankTransfer60,
        PaymentTerms::Advance,
        PaymentTerms::Cash,
    ];

    pub fn label(&self) -> &str {
        match self {
            PaymentTerms::BankTransfer30 => "Bonifico 30gg",
            PaymentTerms::BankTransfer60 => "Bonifico 60gg",
            PaymentTerms::Advance => "Anticipo",
            PaymentTerms::Cash => "Contanti",
            PaymentTerms::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Bonifico 30gg" => PaymentTerms::BankTransfer30,
            "Bonifico 60gg" => PaymentTerms::BankTransfer60,
            "Anticipo" => PaymentTerms::Advance,
            "Contanti" => PaymentTerms::Cash,
            other => PaymentTerms::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PaymentTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for PaymentTerms {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for PaymentTerms {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(PaymentTerms::from_label(&label))
    }
}

/// Raw user-entered invoice fields, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub issue_date: NaiveDate,
    pub number: String,
    pub counterparty_name: String,
    pub tax_id: String,
    pub taxable_amount: Decimal,
    pub vat_rate_percent: Decimal,
    pub payment_terms: PaymentTerms,
    pub notes: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// A persisted invoice record
///
/// Immutable once persisted; the source system offers no edit operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    #[serde(rename = "issueDate", with = "core_kernel::temporal::wire_date")]
    pub issue_date: NaiveDate,
    pub number: String,
    pub counterparty_name: String,
    pub tax_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub taxable_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub vat_rate_percent: Decimal,
    /// Derived: `round_half_up(taxable_amount * vat_rate_percent / 100)`
    #[serde(with = "rust_decimal::serde::float")]
    pub vat_amount: Decimal,
    /// Derived: `round_half_up(taxable_amount + vat_amount)`
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub payment_terms: PaymentTerms,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Only present in deadline-tracking entry forms
    #[serde(
        default,
        with = "core_kernel::temporal::wire_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl InvoiceRecord {
    /// Builds a record from a draft, computing derived totals and stamping
    /// the creation time. The only constructor; callers never set
    /// `vat_amount` or `total_amount` directly.
    pub fn from_draft(draft: InvoiceDraft) -> Self {
        Self::from_draft_at(draft, Utc::now())
    }

    /// As [`from_draft`](Self::from_draft) with an explicit timestamp
    pub fn from_draft_at(draft: InvoiceDraft, created_at: DateTime<Utc>) -> Self {
        let totals = derived_totals(draft.taxable_amount, draft.vat_rate_percent);

        Self {
            issue_date: draft.issue_date,
            number: draft.number,
            counterparty_name: draft.counterparty_name,
            tax_id: draft.tax_id,
            taxable_amount: draft.taxable_amount,
            vat_rate_percent: draft.vat_rate_percent,
            vat_amount: totals.vat_amount,
            total_amount: totals.total_amount,
            payment_terms: draft.payment_terms,
            notes: draft.notes,
            due_date: draft.due_date,
            created_at,
        }
    }

    /// Year of the issue date, used for calendar partitioning
    pub fn issue_year(&self) -> i32 {
        use chrono::Datelike;
        self.issue_date.year()
    }

    /// True when a due date exists and lies strictly before `as_of`
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        matches!(self.due_date, Some(due) if due < as_of)
    }
}

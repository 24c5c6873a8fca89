//! Directory entries
//!
//! Customers and suppliers share one entry shape. Contact fields are
//! optional free text; only the legal name and tax ID are validated.
//! Entries are never linked to invoice records - the ledger carries its own
//! free-text counterparty fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DirectoryError;

/// Uniqueness scope a directory entry lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// "clienti" - counterparties of outgoing invoices
    Customers,
    /// "fornitori" - counterparties of incoming invoices
    Suppliers,
}

impl Category {
    /// The key this category uses in the persisted document
    pub fn document_key(&self) -> &'static str {
        match self {
            Category::Customers => "clienti",
            Category::Suppliers => "fornitori",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.document_key())
    }
}

impl FromStr for Category {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clienti" => Ok(Category::Customers),
            "fornitori" => Ok(Category::Suppliers),
            other => Err(DirectoryError::UnknownCategory(other.to_string())),
        }
    }
}

/// Raw user-entered directory fields, before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub legal_name: String,
    pub tax_id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
}

/// A persisted customer or supplier record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub legal_name: String,
    pub tax_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DirectoryEntry {
    /// Builds an entry from a draft, trimming the validated fields and
    /// stamping the insertion time
    pub fn from_draft(draft: EntryDraft) -> Self {
        Self::from_draft_at(draft, Utc::now())
    }

    /// As [`from_draft`](Self::from_draft) with an explicit timestamp
    pub fn from_draft_at(draft: EntryDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            legal_name: draft.legal_name.trim().to_string(),
            tax_id: draft.tax_id.trim().to_string(),
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            city: draft.city,
            province: draft.province,
            postal_code: draft.postal_code,
            created_at,
        }
    }
}

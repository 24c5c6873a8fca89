//! Persisted document shapes
//!
//! Each store is one JSON document rewritten wholesale on every mutation.
//! The ledger document has exactly the two partition keys; the directory
//! document has exactly the two category keys. Records inside a partition
//! already serialize to their wire shape (see the domain crates), so the
//! documents are thin wrappers with lossless domain conversions.

use serde::{Deserialize, Serialize};

use domain_directory::{Directory, DirectoryEntry};
use domain_ledger::{InvoiceRecord, Ledger};

/// Wire shape of the ledger store:
/// `{"Attiva": [...], "Passiva": [...]}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(rename = "Attiva")]
    pub outgoing: Vec<InvoiceRecord>,
    #[serde(rename = "Passiva")]
    pub incoming: Vec<InvoiceRecord>,
}

impl From<&Ledger> for LedgerDocument {
    fn from(ledger: &Ledger) -> Self {
        Self {
            outgoing: ledger.records(domain_ledger::Direction::Outgoing).to_vec(),
            incoming: ledger.records(domain_ledger::Direction::Incoming).to_vec(),
        }
    }
}

impl From<LedgerDocument> for Ledger {
    fn from(document: LedgerDocument) -> Self {
        Ledger::from_partitions(document.outgoing, document.incoming)
    }
}

/// Wire shape of the directory store:
/// `{"clienti": [...], "fornitori": [...]}`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DirectoryDocument {
    #[serde(rename = "clienti")]
    pub customers: Vec<DirectoryEntry>,
    #[serde(rename = "fornitori")]
    pub suppliers: Vec<DirectoryEntry>,
}

impl From<&Directory> for DirectoryDocument {
    fn from(directory: &Directory) -> Self {
        Self {
            customers: directory.list(domain_directory::Category::Customers).to_vec(),
            suppliers: directory.list(domain_directory::Category::Suppliers).to_vec(),
        }
    }
}

impl From<DirectoryDocument> for Directory {
    fn from(document: DirectoryDocument) -> Self {
        Directory::from_categories(document.customers, document.suppliers)
    }
}

//! The application session
//!
//! One `Session` owns the in-memory ledger and directory plus their store
//! paths; a presentation layer holds exactly one and calls through it.
//! Every successful mutation is paired with a full-document save. If the
//! save fails the in-memory append is popped back off, keeping memory and
//! disk consistent.

use tracing::info;

use domain_directory::{Category, Directory, DirectoryEntry, EntryDraft};
use domain_ledger::{Direction, InvoiceDraft, InvoiceRecord, Ledger};
use infra_store::{load_directory, load_ledger, save_directory, save_ledger};

use crate::config::SessionConfig;
use crate::error::SessionError;

/// Explicit application state: ledger, directory, and their stores
#[derive(Debug)]
pub struct Session {
    ledger: Ledger,
    directory: Directory,
    config: SessionConfig,
}

impl Session {
    /// Opens a session, loading both documents. Unreadable documents
    /// degrade to empty state per store policy; opening never fails.
    pub fn open(config: SessionConfig) -> Self {
        let ledger = load_ledger(&config.ledger_path());
        let directory = load_directory(&config.directory_path());

        info!(
            data_dir = %config.data_dir().display(),
            outgoing = ledger.count(Direction::Outgoing),
            incoming = ledger.count(Direction::Incoming),
            customers = directory.len(Category::Customers),
            suppliers = directory.len(Category::Suppliers),
            "session opened"
        );

        Self {
            ledger,
            directory,
            config,
        }
    }

    /// Validates a draft, computes its derived totals, appends it to the
    /// chosen partition, and rewrites the ledger document.
    ///
    /// On a failed rewrite the append is rolled back and the store error
    /// returned; the previous document on disk is untouched.
    pub fn record_invoice(
        &mut self,
        direction: Direction,
        draft: InvoiceDraft,
    ) -> Result<InvoiceRecord, SessionError> {
        let errors = domain_ledger::validate_draft(&draft);
        if !errors.is_empty() {
            return Err(SessionError::InvoiceValidation(errors));
        }

        let record = InvoiceRecord::from_draft(draft);
        self.ledger.append(direction, record.clone());

        if let Err(e) = save_ledger(&self.config.ledger_path(), &self.ledger) {
            self.ledger.pop_last(direction);
            return Err(e.into());
        }

        info!(
            partition = direction.partition_key(),
            number = %record.number,
            total = %record.total_amount,
            "invoice recorded"
        );
        Ok(record)
    }

    /// Validates a directory draft (including per-category tax-ID
    /// uniqueness), appends it, and rewrites the directory document with
    /// the same rollback discipline as invoices.
    pub fn record_directory_entry(
        &mut self,
        category: Category,
        draft: EntryDraft,
    ) -> Result<DirectoryEntry, SessionError> {
        let errors = domain_directory::validate_draft(category, &draft, &self.directory);
        if !errors.is_empty() {
            return Err(SessionError::DirectoryValidation(errors));
        }

        let entry = DirectoryEntry::from_draft(draft);
        self.directory.append(category, entry.clone());

        if let Err(e) = save_directory(&self.config.directory_path(), &self.directory) {
            self.directory.pop_last(category);
            return Err(e.into());
        }

        info!(
            category = category.document_key(),
            legal_name = %entry.legal_name,
            "directory entry recorded"
        );
        Ok(entry)
    }

    /// Incremental counterparty search over one directory category
    pub fn lookup<'a>(
        &'a self,
        category: Category,
        query: &str,
    ) -> impl Iterator<Item = &'a DirectoryEntry> + 'a {
        self.directory.find_by_substring(category, query)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

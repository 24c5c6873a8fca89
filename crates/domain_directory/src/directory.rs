//! The customer/supplier directory
//!
//! Two independent uniqueness scopes over one entry shape. Lookups are
//! lazy iterators over the in-memory category; there is no cursor state and
//! a new call restarts from the beginning.

use tracing::debug;

use core_kernel::normalize_tax_id;

use crate::entry::{Category, DirectoryEntry};

/// The customer/supplier master-data store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    customers: Vec<DirectoryEntry>,
    suppliers: Vec<DirectoryEntry>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a directory from its persisted categories
    pub fn from_categories(
        customers: Vec<DirectoryEntry>,
        suppliers: Vec<DirectoryEntry>,
    ) -> Self {
        Self {
            customers,
            suppliers,
        }
    }

    fn category(&self, category: Category) -> &Vec<DirectoryEntry> {
        match category {
            Category::Customers => &self.customers,
            Category::Suppliers => &self.suppliers,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut Vec<DirectoryEntry> {
        match category {
            Category::Customers => &mut self.customers,
            Category::Suppliers => &mut self.suppliers,
        }
    }

    /// Appends an entry to the given category
    pub fn append(&mut self, category: Category, entry: DirectoryEntry) {
        debug!(
            category = category.document_key(),
            legal_name = %entry.legal_name,
            "appending directory entry"
        );
        self.category_mut(category).push(entry);
    }

    /// Removes and returns the most recently appended entry, if any.
    /// Used to roll back an append whose document save failed.
    pub fn pop_last(&mut self, category: Category) -> Option<DirectoryEntry> {
        self.category_mut(category).pop()
    }

    /// Entries of one category, in insertion order
    pub fn list(&self, category: Category) -> &[DirectoryEntry] {
        self.category(category)
    }

    pub fn len(&self, category: Category) -> usize {
        self.category(category).len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.suppliers.is_empty()
    }

    /// True when an entry with the same normalized tax ID already exists
    /// in the category. The other category is a separate scope.
    pub fn tax_id_exists(&self, category: Category, tax_id: &str) -> bool {
        let needle = normalize_tax_id(tax_id);
        self.category(category)
            .iter()
            .any(|e| normalize_tax_id(&e.tax_id) == needle)
    }

    /// Case-insensitive "contains" match over legal names.
    ///
    /// Lazy and restartable; drives incremental counterparty lookup during
    /// invoice entry.
    pub fn find_by_substring<'a>(
        &'a self,
        category: Category,
        query: &str,
    ) -> impl Iterator<Item = &'a DirectoryEntry> + 'a {
        let needle = query.to_lowercase();
        self.category(category)
            .iter()
            .filter(move |e| e.legal_name.to_lowercase().contains(&needle))
    }
}

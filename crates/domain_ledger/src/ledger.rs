//! Two-partition invoice ledger
//!
//! The ledger owns the in-memory record collections for both directions.
//! Persistence is a separate concern (`infra_store`); the session layer
//! pairs an append with a document save and pops the record back off on a
//! failed write, which is why [`Ledger::pop_last`] exists.
//!
//! Aggregates are computed on demand from the partition vectors; nothing
//! here is cached.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

use crate::invoice::{Direction, InvoiceRecord};

/// The two-partition collection of invoice records
///
/// # Invariants
///
/// - Records are append-only; insertion order is preserved per partition.
/// - Every record satisfies the derived-total arithmetic, guaranteed by
///   construction through `InvoiceRecord::from_draft`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    outgoing: Vec<InvoiceRecord>,
    incoming: Vec<InvoiceRecord>,
}

/// Result of splitting a partition by payment deadline
#[derive(Debug, Default)]
pub struct DueStatus<'a> {
    /// Records whose due date lies strictly before the reference date
    pub overdue: Vec<&'a InvoiceRecord>,
    /// Everything else, including records without a due date
    pub current: Vec<&'a InvoiceRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from its persisted partitions
    pub fn from_partitions(outgoing: Vec<InvoiceRecord>, incoming: Vec<InvoiceRecord>) -> Self {
        Self { outgoing, incoming }
    }

    fn partition(&self, direction: Direction) -> &Vec<InvoiceRecord> {
        match direction {
            Direction::Outgoing => &self.outgoing,
            Direction::Incoming => &self.incoming,
        }
    }

    fn partition_mut(&mut self, direction: Direction) -> &mut Vec<InvoiceRecord> {
        match direction {
            Direction::Outgoing => &mut self.outgoing,
            Direction::Incoming => &mut self.incoming,
        }
    }

    /// Appends a record to the given partition
    pub fn append(&mut self, direction: Direction, record: InvoiceRecord) {
        debug!(
            partition = direction.partition_key(),
            number = %record.number,
            total = %record.total_amount,
            "appending invoice record"
        );
        self.partition_mut(direction).push(record);
    }

    /// Removes and returns the most recently appended record, if any.
    /// Used to roll back an append whose document save failed.
    pub fn pop_last(&mut self, direction: Direction) -> Option<InvoiceRecord> {
        self.partition_mut(direction).pop()
    }

    /// Records of one partition, in insertion order
    pub fn records(&self, direction: Direction) -> &[InvoiceRecord] {
        self.partition(direction)
    }

    pub fn count(&self, direction: Direction) -> usize {
        self.partition(direction).len()
    }

    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty() && self.incoming.is_empty()
    }

    /// Sum of `total_amount` over one partition
    pub fn sum_of_totals(&self, direction: Direction) -> Decimal {
        self.partition(direction)
            .iter()
            .map(|r| r.total_amount)
            .sum()
    }

    /// Partition records by issue-date calendar year
    pub fn by_year(&self, direction: Direction) -> BTreeMap<i32, Vec<&InvoiceRecord>> {
        let mut years: BTreeMap<i32, Vec<&InvoiceRecord>> = BTreeMap::new();
        for record in self.partition(direction) {
            years.entry(record.issue_year()).or_default().push(record);
        }
        years
    }

    /// Splits a partition into overdue and current records as of a date.
    /// Records without a due date are always current.
    pub fn due_status(&self, direction: Direction, as_of: NaiveDate) -> DueStatus<'_> {
        let mut status = DueStatus::default();
        for record in self.partition(direction) {
            if record.is_overdue(as_of) {
                status.overdue.push(record);
            } else {
                status.current.push(record);
            }
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::{InvoiceDraft, PaymentTerms};
    use rust_decimal_macros::dec;

    fn record(number: &str, year: i32, due: Option<(u32, u32)>) -> InvoiceRecord {
        InvoiceRecord::from_draft(InvoiceDraft {
            issue_date: NaiveDate::from_ymd_opt(year, 3, 10).unwrap(),
            number: number.to_string(),
            counterparty_name: "Fornitore XYZ".to_string(),
            tax_id: "12345678901".to_string(),
            taxable_amount: dec!(500),
            vat_rate_percent: dec!(22),
            payment_terms: PaymentTerms::Cash,
            notes: None,
            due_date: due.and_then(|(m, d)| NaiveDate::from_ymd_opt(year, m, d)),
        })
    }

    #[test]
    fn test_partitions_are_independent() {
        let mut ledger = Ledger::new();
        ledger.append(Direction::Outgoing, record("A/1", 2026, None));

        assert_eq!(ledger.count(Direction::Outgoing), 1);
        assert_eq!(ledger.count(Direction::Incoming), 0);
        assert_eq!(ledger.sum_of_totals(Direction::Incoming), Decimal::ZERO);
    }

    #[test]
    fn test_sum_of_totals() {
        let mut ledger = Ledger::new();
        ledger.append(Direction::Outgoing, record("A/1", 2026, None));
        ledger.append(Direction::Outgoing, record("A/2", 2026, None));

        // each record: 500 + 110 VAT = 610
        assert_eq!(ledger.sum_of_totals(Direction::Outgoing), dec!(1220.00));
    }

    #[test]
    fn test_pop_last_reverses_append() {
        let mut ledger = Ledger::new();
        ledger.append(Direction::Incoming, record("P/1", 2026, None));
        ledger.append(Direction::Incoming, record("P/2", 2026, None));

        let popped = ledger.pop_last(Direction::Incoming).unwrap();
        assert_eq!(popped.number, "P/2");
        assert_eq!(ledger.count(Direction::Incoming), 1);
    }

    #[test]
    fn test_by_year_groups_on_issue_date() {
        let mut ledger = Ledger::new();
        ledger.append(Direction::Outgoing, record("A/1", 2025, None));
        ledger.append(Direction::Outgoing, record("A/2", 2026, None));
        ledger.append(Direction::Outgoing, record("A/3", 2026, None));

        let by_year = ledger.by_year(Direction::Outgoing);
        assert_eq!(by_year[&2025].len(), 1);
        assert_eq!(by_year[&2026].len(), 2);
    }

    #[test]
    fn test_due_status_split() {
        let mut ledger = Ledger::new();
        ledger.append(Direction::Incoming, record("P/1", 2026, Some((1, 31))));
        ledger.append(Direction::Incoming, record("P/2", 2026, Some((12, 31))));
        ledger.append(Direction::Incoming, record("P/3", 2026, None));

        let as_of = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let status = ledger.due_status(Direction::Incoming, as_of);

        assert_eq!(status.overdue.len(), 1);
        assert_eq!(status.overdue[0].number, "P/1");
        assert_eq!(status.current.len(), 2);
    }
}

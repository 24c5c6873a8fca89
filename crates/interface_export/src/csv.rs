//! Semicolon-delimited text export
//!
//! Header row matches the wire field names; one file per partition. The
//! delimiter is a semicolon because the target spreadsheets are localized
//! for comma-decimal locales.

use csv::WriterBuilder;
use std::io::Write;

use core_kernel::format_wire_date;
use domain_ledger::InvoiceRecord;

use crate::error::ExportError;

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    #[serde(rename = "issueDate")]
    issue_date: String,
    number: &'a str,
    counterparty_name: &'a str,
    tax_id: &'a str,
    taxable_amount: String,
    vat_rate_percent: String,
    vat_amount: String,
    total_amount: String,
    payment_terms: &'a str,
    notes: &'a str,
    due_date: String,
    created_at: String,
}

impl<'a> From<&'a InvoiceRecord> for CsvOutRow<'a> {
    fn from(record: &'a InvoiceRecord) -> Self {
        Self {
            issue_date: format_wire_date(record.issue_date),
            number: &record.number,
            counterparty_name: &record.counterparty_name,
            tax_id: &record.tax_id,
            taxable_amount: format!("{:.2}", record.taxable_amount),
            vat_rate_percent: record.vat_rate_percent.to_string(),
            vat_amount: format!("{:.2}", record.vat_amount),
            total_amount: format!("{:.2}", record.total_amount),
            payment_terms: record.payment_terms.label(),
            notes: record.notes.as_deref().unwrap_or(""),
            due_date: record.due_date.map(format_wire_date).unwrap_or_default(),
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

const HEADER: [&str; 12] = [
    "issueDate",
    "number",
    "counterparty_name",
    "tax_id",
    "taxable_amount",
    "vat_rate_percent",
    "vat_amount",
    "total_amount",
    "payment_terms",
    "notes",
    "due_date",
    "created_at",
];

/// Writes one partition's records as semicolon-separated UTF-8 text.
/// The header row is always present, even for an empty partition.
pub fn write_records<W: Write>(writer: W, records: &[InvoiceRecord]) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADER)?;
    for record in records {
        wtr.serialize(CsvOutRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Convenience wrapper returning the export as a string
pub fn records_to_string(records: &[InvoiceRecord]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;
    String::from_utf8(buf).map_err(|e| ExportError::Io(std::io::Error::other(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::InvoiceBuilder;

    #[test]
    fn test_header_and_delimiter() {
        let records = vec![InvoiceBuilder::new().build_record()];
        let out = records_to_string(&records).unwrap();

        let mut lines = out.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("issueDate;number;counterparty_name;tax_id"));

        let row = lines.next().unwrap();
        assert!(row.contains("15/01/2026"));
        assert!(row.contains(";1220.00;"));
    }

    #[test]
    fn test_empty_partition_yields_header_only() {
        let out = records_to_string(&[]).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("issueDate;number;counterparty_name"));
    }
}

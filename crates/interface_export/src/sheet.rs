//! XLSX workbook export
//!
//! One worksheet per ledger partition, named by its partition key. The
//! header row is bold and column widths are fitted to content; columns
//! follow the record field order.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

use core_kernel::format_wire_date;
use domain_ledger::{Direction, InvoiceRecord, Ledger};

use crate::error::ExportError;

const COLUMNS: [&str; 12] = [
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

fn decimal_cell(value: rust_decimal::Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn write_sheet(
    workbook: &mut Workbook,
    name: &str,
    records: &[InvoiceRecord],
    bold: &Format,
) -> Result<(), ExportError> {
    let sheet = workbook
        .add_worksheet()
        .set_name(name)
        .map_err(|e| ExportError::Workbook(e.to_string()))?;

    for (col, header) in COLUMNS.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *header, bold)
            .map_err(|e| ExportError::Workbook(e.to_string()))?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let cells: Result<_, rust_xlsxwriter::XlsxError> = (|| {
            sheet.write(row, 0, format_wire_date(record.issue_date))?;
            sheet.write(row, 1, record.number.as_str())?;
            sheet.write(row, 2, record.counterparty_name.as_str())?;
            sheet.write(row, 3, record.tax_id.as_str())?;
            sheet.write(row, 4, decimal_cell(record.taxable_amount))?;
            sheet.write(row, 5, decimal_cell(record.vat_rate_percent))?;
            sheet.write(row, 6, decimal_cell(record.vat_amount))?;
            sheet.write(row, 7, decimal_cell(record.total_amount))?;
            sheet.write(row, 8, record.payment_terms.label())?;
            sheet.write(row, 9, record.notes.as_deref().unwrap_or(""))?;
            sheet.write(
                row,
                10,
                record.due_date.map(format_wire_date).unwrap_or_default(),
            )?;
            sheet.write(row, 11, record.created_at.to_rfc3339())?;
            Ok(())
        })();
        cells.map_err(|e| ExportError::Workbook(e.to_string()))?;
    }

    sheet.autofit();
    Ok(())
}

/// Writes the whole ledger as an XLSX workbook, one sheet per direction
pub fn write_workbook(path: &Path, ledger: &Ledger) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    for direction in Direction::ALL {
        write_sheet(
            &mut workbook,
            direction.partition_key(),
            ledger.records(direction),
            &bold,
        )?;
    }

    workbook
        .save(path)
        .map_err(|e| ExportError::Workbook(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::InvoiceBuilder;

    #[test]
    fn test_workbook_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fatture.xlsx");

        let mut ledger = Ledger::new();
        ledger.append(Direction::Outgoing, InvoiceBuilder::new().build_record());
        ledger.append(
            Direction::Incoming,
            InvoiceBuilder::new().with_number("F-77").build_record(),
        );

        write_workbook(&path, &ledger).unwrap();
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_empty_ledger_still_produces_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vuoto.xlsx");

        write_workbook(&path, &Ledger::new()).unwrap();
        assert!(path.exists());
    }
}

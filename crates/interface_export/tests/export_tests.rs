//! Cross-format export tests

use domain_ledger::{Direction, Ledger};
use interface_export::{csv, preview, sheet, xml};
use test_utils::{DateFixtures, InvoiceBuilder};

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.append(
        Direction::Outgoing,
        InvoiceBuilder::new()
            .with_number("2026/1")
            .with_notes("consulenza; fase 1")
            .build_record(),
    );
    ledger.append(
        Direction::Incoming,
        InvoiceBuilder::new()
            .with_number("F-77")
            .with_counterparty("Fornitore XYZ")
            .with_due_date(DateFixtures::future_due())
            .build_record(),
    );
    ledger
}

#[test]
fn test_csv_quotes_fields_containing_delimiter() {
    let ledger = sample_ledger();
    let out = csv::records_to_string(ledger.records(Direction::Outgoing)).unwrap();

    // the notes field contains the delimiter and must be quoted
    assert!(out.contains("\"consulenza; fase 1\""));
}

#[test]
fn test_csv_row_count_matches_partition() {
    let ledger = sample_ledger();
    let out = csv::records_to_string(ledger.records(Direction::Incoming)).unwrap();
    // header + one record
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn test_xml_multi_record_export_per_partition() {
    let ledger = sample_ledger();
    let out = xml::fatture_xml(Direction::Outgoing, ledger.records(Direction::Outgoing)).unwrap();

    assert!(out.starts_with("<Fatture>"));
    assert!(out.contains("tipo=\"Attiva\""));
    assert!(!out.contains("tipo=\"Passiva\""));
}

#[test]
fn test_xml_due_date_surfaces_as_scadenza() {
    let ledger = sample_ledger();
    let record = &ledger.records(Direction::Incoming)[0];
    let out = xml::fattura_xml(Direction::Incoming, record).unwrap();

    assert!(out.contains("<Scadenza>31/12/2026</Scadenza>"));
}

#[test]
fn test_workbook_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.xlsx");

    sheet::write_workbook(&path, &sample_ledger()).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_preview_renders_each_direction() {
    let ledger = sample_ledger();

    let outgoing = preview::invoice_html(
        Direction::Outgoing,
        &ledger.records(Direction::Outgoing)[0],
    );
    assert!(outgoing.contains("Fattura Attiva"));

    let incoming = preview::invoice_html(
        Direction::Incoming,
        &ledger.records(Direction::Incoming)[0],
    );
    assert!(incoming.contains("Fattura Passiva"));
    assert!(incoming.contains("Fornitore XYZ"));
}

//! Simplified XML export
//!
//! One `<Fattura tipo="...">` element per record with `<Generale>`,
//! `<Controparte>` and `<Importi>` groups; multi-record exports wrap the
//! elements in a single `<Fatture>` root.
//!
//! This shape is NOT the national e-invoicing schema (FatturaPA) and must
//! never be presented as such; it exists for ad hoc interchange only.

use quick_xml::se::to_string;
use serde::Serialize;

use core_kernel::format_wire_date;
use domain_ledger::{Direction, InvoiceRecord};

use crate::error::ExportError;

#[derive(Serialize)]
struct XmlGenerale {
    #[serde(rename = "Data")]
    data: String,
    #[serde(rename = "Numero")]
    numero: String,
    #[serde(rename = "Pagamento")]
    pagamento: String,
    #[serde(rename = "Note", skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    #[serde(rename = "Scadenza", skip_serializing_if = "Option::is_none")]
    scadenza: Option<String>,
}

#[derive(Serialize)]
struct XmlControparte {
    #[serde(rename = "Nome")]
    nome: String,
    #[serde(rename = "PartitaIva")]
    partita_iva: String,
}

#[derive(Serialize)]
struct XmlImporti {
    #[serde(rename = "Imponibile")]
    imponibile: String,
    #[serde(rename = "AliquotaIva")]
    aliquota_iva: String,
    #[serde(rename = "Iva")]
    iva: String,
    #[serde(rename = "Totale")]
    totale: String,
}

#[derive(Serialize)]
#[serde(rename = "Fattura")]
struct XmlFattura {
    #[serde(rename = "@tipo")]
    tipo: String,
    #[serde(rename = "Generale")]
    generale: XmlGenerale,
    #[serde(rename = "Controparte")]
    controparte: XmlControparte,
    #[serde(rename = "Importi")]
    importi: XmlImporti,
}

#[derive(Serialize)]
#[serde(rename = "Fatture")]
struct XmlFatture {
    #[serde(rename = "Fattura")]
    fatture: Vec<XmlFattura>,
}

fn to_xml_record(direction: Direction, record: &InvoiceRecord) -> XmlFattura {
    XmlFattura {
        tipo: direction.partition_key().to_string(),
        generale: XmlGenerale {
            data: format_wire_date(record.issue_date),
            numero: record.number.clone(),
            pagamento: record.payment_terms.label().to_string(),
            note: record.notes.clone(),
            scadenza: record.due_date.map(format_wire_date),
        },
        controparte: XmlControparte {
            nome: record.counterparty_name.clone(),
            partita_iva: record.tax_id.clone(),
        },
        importi: XmlImporti {
            imponibile: format!("{:.2}", record.taxable_amount),
            aliquota_iva: record.vat_rate_percent.to_string(),
            iva: format!("{:.2}", record.vat_amount),
            totale: format!("{:.2}", record.total_amount),
        },
    }
}

/// Renders a single record as a `<Fattura>` element
pub fn fattura_xml(direction: Direction, record: &InvoiceRecord) -> Result<String, ExportError> {
    to_string(&to_xml_record(direction, record)).map_err(|e| ExportError::Xml(e.to_string()))
}

/// Renders records of one partition inside a `<Fatture>` root
pub fn fatture_xml(
    direction: Direction,
    records: &[InvoiceRecord],
) -> Result<String, ExportError> {
    let wrapper = XmlFatture {
        fatture: records
            .iter()
            .map(|r| to_xml_record(direction, r))
            .collect(),
    };
    to_string(&wrapper).map_err(|e| ExportError::Xml(e.to_string()))
}

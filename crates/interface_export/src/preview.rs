//! HTML preview of a single invoice
//!
//! A fixed-layout rendering used by print/preview surfaces. No business
//! logic lives here; every value is taken from the record as-is.

use core_kernel::format_wire_date;
use domain_ledger::{Direction, InvoiceRecord};

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders one invoice record as a self-contained HTML document
pub fn invoice_html(direction: Direction, record: &InvoiceRecord) -> String {
    let title = match direction {
        Direction::Outgoing => "Fattura Attiva",
        Direction::Incoming => "Fattura Passiva",
    };

    let notes_row = record
        .notes
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .map(|n| format!("<tr><th>Note</th><td>{}</td></tr>\n", escape(n)))
        .unwrap_or_default();

    let due_row = record
        .due_date
        .map(|d| format!("<tr><th>Scadenza</th><td>{}</td></tr>\n", format_wire_date(d)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"it\">\n\
         <head><meta charset=\"utf-8\"><title>{title} {number}</title></head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <table>\n\
         <tr><th>Numero</th><td>{number}</td></tr>\n\
         <tr><th>Data</th><td>{date}</td></tr>\n\
         <tr><th>Cliente/Fornitore</th><td>{name}</td></tr>\n\
         <tr><th>P.IVA</th><td>{tax_id}</td></tr>\n\
         <tr><th>Imponibile</th><td>&euro; {taxable:.2}</td></tr>\n\
         <tr><th>Aliquota IVA</th><td>{rate}%</td></tr>\n\
         <tr><th>IVA</th><td>&euro; {vat:.2}</td></tr>\n\
         <tr><th>TOTALE</th><td><strong>&euro; {total:.2}</strong></td></tr>\n\
         <tr><th>Pagamento</th><td>{payment}</td></tr>\n\
         {notes_row}{due_row}\
         </table>\n\
         </body>\n\
         </html>\n",
        title = title,
        number = escape(&record.number),
        date = format_wire_date(record.issue_date),
        name = escape(&record.counterparty_name),
        tax_id = escape(&record.tax_id),
        taxable = record.taxable_amount,
        rate = record.vat_rate_percent.normalize(),
        vat = record.vat_amount,
        total = record.total_amount,
        payment = escape(record.payment_terms.label()),
        notes_row = notes_row,
        due_row = due_row,
    )
}

//! Export Interfaces - On-Demand Format Translation
//!
//! Pure rendering leaves over ledger records. Nothing in this crate is
//! persisted as system state; every export is regenerated from the
//! in-memory ledger on request.
//!
//! - `csv`: semicolon-delimited UTF-8 text, one partition per file
//! - `xml`: simplified `<Fattura>` elements (not a national schema)
//! - `sheet`: XLSX workbook, one sheet per partition
//! - `preview`: fixed-layout HTML of a single record

pub mod csv;
pub mod error;
pub mod preview;
pub mod sheet;
pub mod xml;

pub use error::ExportError;

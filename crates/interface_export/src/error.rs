//! Export errors

use thiserror::Error;

/// Errors that can occur while rendering an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Workbook error: {0}")]
    Workbook(String),
}

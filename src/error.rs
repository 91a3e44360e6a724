//! Error types for package generation

use thiserror::Error;

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, XlsxError>;

/// Main error type for all generation failures
#[derive(Error, Debug)]
pub enum XlsxError {
    /// A cell value that cannot be represented in SpreadsheetML
    #[error("Invalid value in cell {reference} of sheet '{sheet}': {detail}")]
    InvalidCell {
        sheet: String,
        reference: String,
        detail: String,
    },

    /// A code point XML 1.0 cannot carry, even escaped
    #[error("Cannot represent code point U+{codepoint:04X} in XML content")]
    Unrepresentable { codepoint: u32 },

    /// Error occurred while writing the archive
    #[error("Failed to write package: {0}")]
    WriteError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for XlsxError {
    fn from(err: zip::result::ZipError) -> Self {
        XlsxError::WriteError(err.to_string())
    }
}

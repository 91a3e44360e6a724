//! # sheetpack
//!
//! Converts an in-memory table of sheets (title + grid of text/number
//! cells) into the bytes of a valid XLSX package (OOXML SpreadsheetML),
//! without depending on a spreadsheet engine.
//!
//! The pipeline is a single forward pass: cell references and the shared
//! string table are assigned while walking the input grid, each XML part
//! is rendered from the resulting model, and the parts are zipped into
//! the final archive. One call owns its whole model; concurrent calls
//! need no coordination.
//!
//! ## Quick start
//!
//! ```
//! use sheetpack::{generate, Cell, Sheet};
//!
//! # fn main() -> sheetpack::Result<()> {
//! let mut sheet = Sheet::new("Report");
//! sheet.push_row(["Name", "Score"]);
//! sheet.push_row(vec![Cell::from("Alice"), Cell::from(42)]);
//!
//! let bytes = generate(&[sheet])?;
//! assert!(!bytes.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! For incremental construction see [`WorkbookBuilder`].

pub mod error;
mod model;
mod package;
mod parts;
pub mod reference;
pub mod shared_strings;
pub mod types;
pub mod writer;
pub mod xml;

pub use error::{Result, XlsxError};
pub use types::{Cell, Row, Sheet};
pub use writer::WorkbookBuilder;

use chrono::Utc;

use crate::model::Workbook;

/// Generate a complete XLSX package from the given sheets
///
/// Synchronous and pure apart from the creation timestamp embedded in the
/// document properties. Returns the archive bytes, or fails before
/// producing any output; there is no partial-success mode.
pub fn generate(sheets: &[Sheet]) -> Result<Vec<u8>> {
    let iso_date = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    generate_at(sheets, iso_date)
}

/// [`generate`] with a caller-supplied creation timestamp, for
/// deterministic output
pub(crate) fn generate_at(sheets: &[Sheet], iso_date: String) -> Result<Vec<u8>> {
    let workbook = Workbook::build(sheets, iso_date)?;
    package::assemble(&workbook)
}

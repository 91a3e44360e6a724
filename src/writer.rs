//! Incremental workbook construction
//!
//! Convenience layer over [`crate::generate`] for callers that produce
//! rows one at a time instead of holding a finished grid.

use crate::error::{Result, XlsxError};
use crate::types::{Cell, Sheet};

/// Builds up sheets row by row, then generates the package in one go
///
/// # Examples
///
/// ```
/// use sheetpack::WorkbookBuilder;
///
/// # fn main() -> sheetpack::Result<()> {
/// let mut builder = WorkbookBuilder::new();
/// builder.add_sheet("People");
/// builder.write_row(["Name", "City"])?;
/// builder.write_row(["Alice", "New York"])?;
///
/// let bytes = builder.finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct WorkbookBuilder {
    sheets: Vec<Sheet>,
}

impl WorkbookBuilder {
    pub fn new() -> Self {
        WorkbookBuilder { sheets: Vec::new() }
    }

    /// Start a new sheet; subsequent rows go to it
    pub fn add_sheet(&mut self, title: impl Into<String>) {
        self.sheets.push(Sheet::new(title));
    }

    /// Append a row to the most recently added sheet
    pub fn write_row<I, C>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let sheet = self
            .sheets
            .last_mut()
            .ok_or_else(|| XlsxError::WriteError("no active sheet".to_string()))?;
        sheet.push_row(cells);
        Ok(())
    }

    /// Generate the package from everything written so far
    pub fn finish(self) -> Result<Vec<u8>> {
        crate::generate(&self.sheets)
    }
}

//! Input model for workbook generation

/// A single cell value in an input grid
///
/// Every cell is either plain text or a number. Text cells end up in the
/// package's shared-string table; numeric cells are written verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Text value, stored via the shared-string table
    Text(String),
    /// Integer value
    Int(i64),
    /// Float value (must be finite)
    Float(f64),
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

impl From<i32> for Cell {
    fn from(i: i32) -> Self {
        Cell::Int(i as i64)
    }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self {
        Cell::Float(f)
    }
}

/// A row of cells; rows in one sheet may have differing lengths
pub type Row = Vec<Cell>;

/// One input sheet: a title plus a grid of rows
///
/// Sheet order in the slice handed to [`crate::generate`] is preserved in
/// the output workbook.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    /// Sheet title as shown on the workbook tab
    pub title: String,
    /// Cell grid, outer order is rows, inner order is columns
    pub data: Vec<Row>,
}

impl Sheet {
    /// Create an empty sheet with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Sheet {
            title: title.into(),
            data: Vec::new(),
        }
    }

    /// Create a sheet from an existing grid
    pub fn with_rows(title: impl Into<String>, data: Vec<Row>) -> Self {
        Sheet {
            title: title.into(),
            data,
        }
    }

    /// Append one row of cells
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetpack::{Cell, Sheet};
    ///
    /// let mut sheet = Sheet::new("Report");
    /// sheet.push_row(["Name", "City"]);
    /// sheet.push_row(vec![Cell::from("Alice"), Cell::from(30)]);
    /// assert_eq!(sheet.data.len(), 2);
    /// ```
    pub fn push_row<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.data.push(cells.into_iter().map(Into::into).collect());
    }
}

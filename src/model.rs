//! Intermediate workbook model built from the input sheets
//!
//! One [`Workbook`] is built per generation call, consumed by the part
//! renderer and dropped with the call. Nothing here is shared or cached.

use crate::error::{Result, XlsxError};
use crate::reference::{cell_reference, column_letters};
use crate::shared_strings::SharedStrings;
use crate::types::{Cell, Sheet};
use crate::xml;

/// Cell type tag as written to the `t` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellTag {
    Number,
    SharedString,
}

impl CellTag {
    pub fn code(self) -> &'static str {
        match self {
            CellTag::Number => "n",
            CellTag::SharedString => "s",
        }
    }
}

/// A cell ready for serialization
///
/// `value` is the literal number text for numeric cells or the
/// shared-string table index for text cells, never the text itself.
#[derive(Debug)]
pub(crate) struct WorkbookCell {
    pub reference: String,
    pub tag: CellTag,
    pub value: String,
}

#[derive(Debug)]
pub(crate) struct WorkbookRow {
    /// 1-based row number
    pub number: u32,
    pub cells: Vec<WorkbookCell>,
}

#[derive(Debug)]
pub(crate) struct WorkbookSheet {
    /// 1-based sheet id, also the filename suffix and the `sheetId` attribute
    pub id: u32,
    /// Relationship id, `rId{id + 3}`; rId1-rId3 are reserved for fixed parts
    pub r_id: String,
    /// Title, escaped for XML
    pub title: String,
    /// Extent reference, widest column x row count (e.g. `"C5"`)
    pub extent: String,
    pub rows: Vec<WorkbookRow>,
}

#[derive(Debug)]
pub(crate) struct Workbook {
    /// Creation timestamp, ISO-8601 seconds precision, UTC
    pub iso_date: String,
    pub sheets: Vec<WorkbookSheet>,
    pub strings: SharedStrings,
}

impl Workbook {
    /// Build the full model in one forward pass over the input sheets
    pub fn build(sheets: &[Sheet], iso_date: String) -> Result<Workbook> {
        let mut strings = SharedStrings::new();
        let mut generated = Vec::with_capacity(sheets.len());

        for (index, sheet) in sheets.iter().enumerate() {
            let id = index as u32 + 1;
            generated.push(build_sheet(sheet, id, &mut strings)?);
        }

        Ok(Workbook {
            iso_date,
            sheets: generated,
            strings,
        })
    }
}

fn build_sheet(sheet: &Sheet, id: u32, strings: &mut SharedStrings) -> Result<WorkbookSheet> {
    let title = xml::escape(&sheet.title)?.into_owned();

    let mut widest = 1u32;
    let mut rows = Vec::with_capacity(sheet.data.len());

    for (y, row) in sheet.data.iter().enumerate() {
        let number = y as u32 + 1;
        widest = widest.max(row.len() as u32);

        let mut cells = Vec::with_capacity(row.len());
        for (x, cell) in row.iter().enumerate() {
            let reference = cell_reference(x as u32 + 1, number);
            let (tag, value) = render_value(cell, &sheet.title, &reference, strings)?;
            cells.push(WorkbookCell {
                reference,
                tag,
                value,
            });
        }
        rows.push(WorkbookRow { number, cells });
    }

    // A sheet with no rows keeps extent column A and row count 0 ("A0")
    let mut extent = column_letters(widest);
    let mut buf = itoa::Buffer::new();
    extent.push_str(buf.format(sheet.data.len() as u32));

    Ok(WorkbookSheet {
        id,
        r_id: format!("rId{}", id + 3),
        title,
        extent,
        rows,
    })
}

/// Classify one cell and render its stored value
///
/// Text is escaped before interning, so the shared-string table is keyed
/// on escaped identity.
fn render_value(
    cell: &Cell,
    sheet_title: &str,
    reference: &str,
    strings: &mut SharedStrings,
) -> Result<(CellTag, String)> {
    match cell {
        Cell::Text(text) => {
            let escaped = xml::escape(text)?;
            let index = strings.intern(&escaped);
            let mut buf = itoa::Buffer::new();
            Ok((CellTag::SharedString, buf.format(index).to_string()))
        }
        Cell::Int(i) => {
            let mut buf = itoa::Buffer::new();
            Ok((CellTag::Number, buf.format(*i).to_string()))
        }
        Cell::Float(f) => {
            if !f.is_finite() {
                return Err(XlsxError::InvalidCell {
                    sheet: sheet_title.to_string(),
                    reference: reference.to_string(),
                    detail: format!("non-finite number {f}"),
                });
            }
            Ok((CellTag::Number, f.to_string()))
        }
    }
}

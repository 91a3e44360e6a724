//! Final package assembly into a ZIP archive

use std::io::{Cursor, Write};

use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::error::Result;
use crate::model::Workbook;
use crate::parts;

/// Render every part and hand the path -> bytes tree to the archive writer
pub(crate) fn assemble(workbook: &Workbook) -> Result<Vec<u8>> {
    let mut entries: Vec<(String, Vec<u8>)> = Vec::with_capacity(9 + workbook.sheets.len());

    entries.push((
        "[Content_Types].xml".to_string(),
        parts::content_types(workbook),
    ));
    entries.push(("_rels/.rels".to_string(), parts::root_rels().to_vec()));
    entries.push(("docProps/app.xml".to_string(), parts::app_props(workbook)));
    entries.push(("docProps/core.xml".to_string(), parts::core_props(workbook)));
    entries.push((
        "xl/_rels/workbook.xml.rels".to_string(),
        parts::workbook_rels(workbook),
    ));
    entries.push((
        "xl/sharedStrings.xml".to_string(),
        parts::shared_strings_part(workbook),
    ));
    entries.push(("xl/styles.xml".to_string(), parts::styles().to_vec()));
    entries.push(("xl/theme/theme1.xml".to_string(), parts::theme().to_vec()));
    for sheet in &workbook.sheets {
        entries.push((
            format!("xl/worksheets/sheet{}.xml", sheet.id),
            parts::worksheet_part(sheet),
        ));
    }
    entries.push(("xl/workbook.xml".to_string(), parts::workbook_part(workbook)));

    write_archive(&entries)
}

/// Compress the logical file tree; compression choices live here, not in
/// the renderers
fn write_archive(entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(6));

    for (path, bytes) in entries {
        zip.start_file(path.as_str(), options)?;
        zip.write_all(bytes)?;
    }

    Ok(zip.finish()?.into_inner())
}

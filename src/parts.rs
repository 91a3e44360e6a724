//! Rendering of the individual XML parts of the package
//!
//! Every function here is a pure transformation from the workbook model to
//! the bytes of one part. Cross-part references (relationship ids, part
//! paths, sheet ids) all derive from the same model fields, so the parts
//! stay consistent with each other by construction.

use crate::model::{Workbook, WorkbookSheet};
use crate::xml::XmlBuffer;

const SPREADSHEETML_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// `[Content_Types].xml`: defaults for bare extensions plus one override
/// per part. The theme intentionally has no override and falls under the
/// `xml` default, matching the reference packages this format was verified
/// against.
pub(crate) fn content_types(workbook: &Workbook) -> Vec<u8> {
    let mut xml = XmlBuffer::new();
    xml.declaration();
    xml.raw(b"<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\n");
    xml.raw(b"<Default Extension=\"xml\" ContentType=\"application/xml\"/>\n");
    xml.raw(b"<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\n");
    xml.raw(b"<Override PartName=\"/xl/_rels/workbook.xml.rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\n");
    xml.raw(b"<Override PartName=\"/xl/sharedStrings.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml\"/>\n");
    for sheet in &workbook.sheets {
        xml.raw(b"<Override PartName=\"/xl/worksheets/sheet");
        xml.int(sheet.id);
        xml.raw(b".xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>\n");
    }
    xml.raw(b"<Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>\n");
    xml.raw(b"<Override PartName=\"/xl/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml\"/>\n");
    xml.raw(b"<Override PartName=\"/_rels/.rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\n");
    xml.raw(b"<Override PartName=\"/docProps/app.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.extended-properties+xml\"/>\n");
    xml.raw(b"<Override PartName=\"/docProps/core.xml\" ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>\n");
    xml.end_element("Types");
    xml.into_bytes()
}

/// `_rels/.rels`: the four fixed package-root relationships
pub(crate) fn root_rels() -> &'static [u8] {
    br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
<Relationship Id="rId4" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="theme/theme1.xml"/>
</Relationships>"#
}

/// `docProps/core.xml`: core properties carrying the creation timestamp
pub(crate) fn core_props(workbook: &Workbook) -> Vec<u8> {
    let mut xml = XmlBuffer::new();
    xml.declaration();
    xml.raw(b"<cp:coreProperties xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" xmlns:dc=\"http://purl.org/dc/elements/1.1/\" xmlns:dcterms=\"http://purl.org/dc/terms/\" xmlns:dcmitype=\"http://purl.org/dc/dcmitype/\" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\n");
    xml.raw(b"<dcterms:created xsi:type=\"dcterms:W3CDTF\">");
    xml.text(&workbook.iso_date);
    xml.raw(b"</dcterms:created>\n");
    xml.raw(b"<dc:creator></dc:creator>\n");
    xml.raw(b"<dc:description></dc:description>\n");
    xml.raw(b"<dc:language>en-GB</dc:language>\n");
    xml.raw(b"<cp:lastModifiedBy></cp:lastModifiedBy>\n");
    xml.raw(b"<dcterms:modified xsi:type=\"dcterms:W3CDTF\">");
    xml.text(&workbook.iso_date);
    xml.raw(b"</dcterms:modified>\n");
    xml.raw(b"<cp:revision>1</cp:revision>\n");
    xml.raw(b"<dc:subject></dc:subject>\n");
    xml.raw(b"<dc:title></dc:title>\n");
    xml.end_element("cp:coreProperties");
    xml.into_bytes()
}

/// `docProps/app.xml`: extended properties listing sheet count and titles
pub(crate) fn app_props(workbook: &Workbook) -> Vec<u8> {
    let mut xml = XmlBuffer::new();
    xml.declaration();
    xml.raw(b"<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\" xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\">\n");
    xml.raw(b"<Template></Template>\n");
    xml.raw(b"<TotalTime>0</TotalTime>\n");
    xml.raw(b"<Application>sheetpack</Application>\n");
    xml.raw(b"<DocSecurity>0</DocSecurity>\n");
    xml.raw(b"<ScaleCrop>false</ScaleCrop>\n");
    xml.raw(b"<HeadingPairs><vt:vector size=\"2\" baseType=\"variant\"><vt:variant><vt:lpstr>Worksheets</vt:lpstr></vt:variant><vt:variant><vt:i4>");
    xml.int(workbook.sheets.len() as u32);
    xml.raw(b"</vt:i4></vt:variant></vt:vector></HeadingPairs>\n");
    xml.raw(b"<TitlesOfParts><vt:vector size=\"");
    xml.int(workbook.sheets.len() as u32);
    xml.raw(b"\" baseType=\"lpstr\">");
    for sheet in &workbook.sheets {
        xml.raw(b"<vt:lpstr>");
        xml.text(&sheet.title);
        xml.raw(b"</vt:lpstr>");
    }
    xml.raw(b"</vt:vector></TitlesOfParts>\n");
    xml.raw(b"<LinksUpToDate>false</LinksUpToDate>\n");
    xml.raw(b"<SharedDoc>false</SharedDoc>\n");
    xml.raw(b"<HyperlinksChanged>false</HyperlinksChanged>\n");
    xml.raw(b"<AppVersion>1.0000</AppVersion>\n");
    xml.end_element("Properties");
    xml.into_bytes()
}

/// `xl/_rels/workbook.xml.rels`: rId1/rId2 are styles and shared strings,
/// worksheets follow at rId4 and up. The declaration omits `standalone`,
/// unlike every other part; reference packages carry this asymmetry.
pub(crate) fn workbook_rels(workbook: &Workbook) -> Vec<u8> {
    let mut xml = XmlBuffer::new();
    xml.raw(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.raw(b"<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\n");
    xml.raw(b"<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" Target=\"styles.xml\"/>\n");
    xml.raw(b"<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings\" Target=\"sharedStrings.xml\"/>\n");
    for sheet in &workbook.sheets {
        xml.raw(b"<Relationship Id=\"");
        xml.text(&sheet.r_id);
        xml.raw(b"\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet");
        xml.int(sheet.id);
        xml.raw(b".xml\"/>\n");
    }
    xml.end_element("Relationships");
    xml.into_bytes()
}

/// `xl/workbook.xml`: the workbook manifest listing every sheet in input
/// order with its escaped title, sheet id and relationship id
pub(crate) fn workbook_part(workbook: &Workbook) -> Vec<u8> {
    let mut xml = XmlBuffer::new();
    xml.declaration();
    xml.raw(b"<workbook");
    xml.attribute("xmlns", SPREADSHEETML_NS);
    xml.attribute("xmlns:r", RELATIONSHIPS_NS);
    xml.raw(b">\n");
    xml.raw(b"<fileVersion appName=\"sheetpack\"/>\n");
    xml.raw(b"<workbookPr backupFile=\"false\" showObjects=\"all\" date1904=\"false\"/>\n");
    xml.raw(b"<workbookProtection/>\n");
    xml.raw(b"<bookViews><workbookView xWindow=\"0\" yWindow=\"0\" windowWidth=\"1020\" windowHeight=\"765\" tabRatio=\"500\"/></bookViews>\n");
    xml.raw(b"<sheets>\n");
    for sheet in &workbook.sheets {
        xml.raw(b"<sheet");
        xml.attribute("name", &sheet.title);
        xml.attribute_int("sheetId", sheet.id);
        xml.attribute("r:id", &sheet.r_id);
        xml.raw(b"/>\n");
    }
    xml.raw(b"</sheets>\n");
    xml.end_element("workbook");
    xml.into_bytes()
}

/// `xl/worksheets/sheetN.xml`: the computed extent followed by the rows
///
/// Type `s` cells store the shared-string table index in `<v>`, never the
/// text itself; type `n` cells store the literal number.
pub(crate) fn worksheet_part(sheet: &WorkbookSheet) -> Vec<u8> {
    let mut xml = XmlBuffer::new();
    xml.declaration();
    xml.raw(b"<worksheet");
    xml.attribute("xmlns", SPREADSHEETML_NS);
    xml.attribute("xmlns:r", RELATIONSHIPS_NS);
    xml.raw(b">\n");
    xml.raw(b"<sheetPr filterMode=\"false\"><pageSetUpPr fitToPage=\"false\"/></sheetPr>\n");
    xml.raw(b"<dimension ref=\"A1:");
    xml.text(&sheet.extent);
    xml.raw(b"\"/>\n");
    xml.raw(b"<sheetViews><sheetView tabSelected=\"1\" zoomScale=\"79\" zoomScaleNormal=\"79\" workbookViewId=\"0\"/></sheetViews>\n");
    xml.raw(b"<sheetFormatPr defaultRowHeight=\"12.8\"></sheetFormatPr>\n");
    xml.raw(b"<cols><col max=\"1025\" min=\"1\" style=\"0\" width=\"11.52\"/></cols>\n");
    xml.raw(b"<sheetData>\n");
    for row in &sheet.rows {
        xml.raw(b"<row r=\"");
        xml.int(row.number);
        xml.raw(b"\">");
        for cell in &row.cells {
            xml.raw(b"<c r=\"");
            xml.text(&cell.reference);
            xml.raw(b"\" t=\"");
            xml.text(cell.tag.code());
            xml.raw(b"\"><v>");
            xml.text(&cell.value);
            xml.raw(b"</v></c>");
        }
        xml.raw(b"</row>\n");
    }
    xml.raw(b"</sheetData>\n");
    xml.raw(b"<pageMargins left=\"0.7\" right=\"0.7\" top=\"0.75\" bottom=\"0.75\" header=\"0.3\" footer=\"0.3\"/>\n");
    xml.end_element("worksheet");
    xml.into_bytes()
}

/// `xl/sharedStrings.xml`: `count` is every string-cell occurrence,
/// `uniqueCount` is the table length; readers tolerate the difference but
/// both must be computed faithfully
pub(crate) fn shared_strings_part(workbook: &Workbook) -> Vec<u8> {
    let mut xml = XmlBuffer::new();
    xml.declaration();
    xml.raw(b"<sst");
    xml.attribute("xmlns", SPREADSHEETML_NS);
    xml.attribute_int("count", workbook.strings.total());
    xml.attribute_int("uniqueCount", workbook.strings.unique());
    xml.raw(b">\n");
    for entry in workbook.strings.iter() {
        // entries were escaped before interning
        xml.raw(b"<si><t>");
        xml.text(entry);
        xml.raw(b"</t></si>\n");
    }
    xml.end_element("sst");
    xml.into_bytes()
}

/// `xl/styles.xml`: fixed minimal stylesheet, one font, default fills and
/// borders, no number formats
pub(crate) fn styles() -> &'static [u8] {
    br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006" mc:Ignorable="x14ac x16r2" xmlns:x14ac="http://schemas.microsoft.com/office/spreadsheetml/2009/9/ac" xmlns:x16r2="http://schemas.microsoft.com/office/spreadsheetml/2015/02/main"><fonts count="1" x14ac:knownFonts="1"><font><sz val="10"/><name val="Arial"/><family val="2"/></font></fonts><fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills><borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders><cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs><cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs><cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles><dxfs count="0"/><tableStyles count="0" defaultTableStyle="TableStyleMedium2" defaultPivotStyle="PivotStyleLight16"/><extLst><ext uri="{EB79DEF2-80B8-43e5-95BD-54CBDDF9020C}" xmlns:x14="http://schemas.microsoft.com/office/spreadsheetml/2009/9/main"><x14:slicerStyles defaultSlicerStyle="SlicerStyleLight1"/></ext><ext uri="{9260A510-F301-46a8-8635-F512D64BE5F5}" xmlns:x15="http://schemas.microsoft.com/office/spreadsheetml/2010/11/main"><x15:timelineStyles defaultTimelineStyle="TimeSlicerStyleLight1"/></ext></extLst></styleSheet>"#
}

/// `xl/theme/theme1.xml`: stock Office theme
pub(crate) fn theme() -> &'static [u8] {
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<a:theme xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" name=\"Office Theme\"><a:themeElements><a:clrScheme name=\"Office\"><a:dk1><a:sysClr val=\"windowText\" lastClr=\"000000\"/></a:dk1><a:lt1><a:sysClr val=\"window\" lastClr=\"FFFFFF\"/></a:lt1><a:dk2><a:srgbClr val=\"44546A\"/></a:dk2><a:lt2><a:srgbClr val=\"E7E6E6\"/></a:lt2><a:accent1><a:srgbClr val=\"5B9BD5\"/></a:accent1><a:accent2><a:srgbClr val=\"ED7D31\"/></a:accent2><a:accent3><a:srgbClr val=\"A5A5A5\"/></a:accent3><a:accent4><a:srgbClr val=\"FFC000\"/></a:accent4><a:accent5><a:srgbClr val=\"4472C4\"/></a:accent5><a:accent6><a:srgbClr val=\"70AD47\"/></a:accent6><a:hlink><a:srgbClr val=\"0563C1\"/></a:hlink><a:folHlink><a:srgbClr val=\"954F72\"/></a:folHlink></a:clrScheme><a:fontScheme name=\"Office\"><a:majorFont><a:latin typeface=\"Calibri Light\" panose=\"020F0302020204030204\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:majorFont><a:minorFont><a:latin typeface=\"Calibri\" panose=\"020F0502020204030204\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:minorFont></a:fontScheme><a:fmtScheme name=\"Office\"><a:fillStyleLst><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:fillStyleLst><a:lnStyleLst><a:ln w=\"6350\" cap=\"flat\" cmpd=\"sng\" algn=\"ctr\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:prstDash val=\"solid\"/><a:miter lim=\"800000\"/></a:ln><a:ln w=\"12700\" cap=\"flat\" cmpd=\"sng\" algn=\"ctr\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:prstDash val=\"solid\"/><a:miter lim=\"800000\"/></a:ln><a:ln w=\"19050\" cap=\"flat\" cmpd=\"sng\" algn=\"ctr\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:prstDash val=\"solid\"/><a:miter lim=\"800000\"/></a:ln></a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme></a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>".as_bytes()
}

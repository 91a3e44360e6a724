//! End-to-end package generation tests
//!
//! These unzip the generated bytes and assert on the XML parts the way a
//! conformant reader would interpret them.

use std::io::{Cursor, Read};

use sheetpack::{generate, Cell, Sheet, WorkbookBuilder};

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut content = String::new();
    part.read_to_string(&mut content).unwrap();
    content
}

fn part_names(bytes: &[u8]) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Pull the shared-string table entries out of xl/sharedStrings.xml
fn shared_strings(bytes: &[u8]) -> Vec<String> {
    let sst = read_part(bytes, "xl/sharedStrings.xml");
    sst.split("<si><t>")
        .skip(1)
        .map(|chunk| chunk.split("</t>").next().unwrap().to_string())
        .collect()
}

/// Reconstruct a sheet's grid values the way a reader resolves them:
/// type `s` cells indirect through the shared-string table.
fn grid(bytes: &[u8], sheet: u32) -> Vec<Vec<String>> {
    let table = shared_strings(bytes);
    let xml = read_part(bytes, &format!("xl/worksheets/sheet{sheet}.xml"));
    let sheet_data = xml
        .split("<sheetData>")
        .nth(1)
        .unwrap()
        .split("</sheetData>")
        .next()
        .unwrap();

    sheet_data
        .split("<row r=\"")
        .skip(1)
        .map(|row| {
            row.split("<c r=\"")
                .skip(1)
                .map(|cell| {
                    let tag = cell.split("t=\"").nth(1).unwrap();
                    let value = cell.split("<v>").nth(1).unwrap().split("</v>").next().unwrap();
                    if tag.starts_with('s') {
                        unescape(&table[value.parse::<usize>().unwrap()])
                    } else {
                        value.to_string()
                    }
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_round_trip_mixed_ragged_grid() {
    let sheets = vec![Sheet::with_rows(
        "Test1",
        vec![
            vec![Cell::from("foo"), Cell::from("bar")],
            vec![Cell::from("noo"), Cell::from("bar")],
            vec![Cell::from(9)],
            vec![Cell::from(1), Cell::from(2), Cell::from(3)],
            vec![Cell::from(3), Cell::from(4)],
        ],
    )];
    let bytes = generate(&sheets).unwrap();

    assert_eq!(shared_strings(&bytes), vec!["foo", "bar", "noo"]);
    let sst = read_part(&bytes, "xl/sharedStrings.xml");
    assert!(sst.contains("count=\"4\" uniqueCount=\"3\""));

    let sheet1 = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet1.contains("<dimension ref=\"A1:C5\"/>"));

    assert_eq!(
        grid(&bytes, 1),
        vec![
            vec!["foo", "bar"],
            vec!["noo", "bar"],
            vec!["9"],
            vec!["1", "2", "3"],
            vec!["3", "4"],
        ]
        .into_iter()
        .map(|row| row.into_iter().map(String::from).collect::<Vec<_>>())
        .collect::<Vec<_>>()
    );
}

#[test]
fn test_round_trip_single_row() {
    let sheets = vec![Sheet::with_rows(
        "Data",
        vec![vec![Cell::from("only"), Cell::from(1.25)]],
    )];
    let bytes = generate(&sheets).unwrap();

    assert_eq!(grid(&bytes, 1), vec![vec!["only".to_string(), "1.25".to_string()]]);
    let sheet1 = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet1.contains("<dimension ref=\"A1:B1\"/>"));
}

#[test]
fn test_package_layout_and_cross_references() {
    let sheets = vec![
        Sheet::with_rows("One", vec![vec![Cell::from("x")]]),
        Sheet::with_rows("Two", vec![vec![Cell::from("y")]]),
    ];
    let bytes = generate(&sheets).unwrap();

    let names = part_names(&bytes);
    for expected in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/app.xml",
        "docProps/core.xml",
        "xl/_rels/workbook.xml.rels",
        "xl/sharedStrings.xml",
        "xl/styles.xml",
        "xl/theme/theme1.xml",
        "xl/worksheets/sheet1.xml",
        "xl/worksheets/sheet2.xml",
        "xl/workbook.xml",
    ] {
        assert!(names.iter().any(|n| n == expected), "missing {expected}");
    }

    // workbook manifest and relationships agree on ids
    let workbook = read_part(&bytes, "xl/workbook.xml");
    assert!(workbook.contains("<sheet name=\"One\" sheetId=\"1\" r:id=\"rId4\"/>"));
    assert!(workbook.contains("<sheet name=\"Two\" sheetId=\"2\" r:id=\"rId5\"/>"));

    let rels = read_part(&bytes, "xl/_rels/workbook.xml.rels");
    assert!(rels.contains("Id=\"rId4\"") && rels.contains("Target=\"worksheets/sheet1.xml\""));
    assert!(rels.contains("Id=\"rId5\"") && rels.contains("Target=\"worksheets/sheet2.xml\""));

    // identical cell references may recur across sheets
    assert!(read_part(&bytes, "xl/worksheets/sheet1.xml").contains("<c r=\"A1\" t=\"s\">"));
    assert!(read_part(&bytes, "xl/worksheets/sheet2.xml").contains("<c r=\"A1\" t=\"s\">"));
}

#[test]
fn test_empty_sheet_round_trips() {
    let bytes = generate(&[Sheet::new("Empty")]).unwrap();
    let sheet1 = read_part(&bytes, "xl/worksheets/sheet1.xml");

    assert!(sheet1.contains("<dimension ref=\"A1:A0\"/>"));
    assert!(!sheet1.contains("<row"));
    assert!(grid(&bytes, 1).is_empty());
}

#[test]
fn test_special_characters_escape_and_read_back() {
    let sheets = vec![Sheet::with_rows(
        "A & B \"quoted\"",
        vec![vec![Cell::from("x < y & z"), Cell::from("\"q\"")]],
    )];
    let bytes = generate(&sheets).unwrap();

    let workbook = read_part(&bytes, "xl/workbook.xml");
    assert!(workbook.contains("name=\"A &amp; B &quot;quoted&quot;\""));

    let sst = read_part(&bytes, "xl/sharedStrings.xml");
    assert!(sst.contains("<si><t>x &lt; y &amp; z</t></si>"));

    assert_eq!(
        grid(&bytes, 1),
        vec![vec!["x < y & z".to_string(), "\"q\"".to_string()]]
    );
}

#[test]
fn test_shared_strings_deduplicate_across_sheets() {
    let sheets = vec![
        Sheet::with_rows("S1", vec![vec![Cell::from("shared")]]),
        Sheet::with_rows("S2", vec![vec![Cell::from("shared"), Cell::from("own")]]),
    ];
    let bytes = generate(&sheets).unwrap();

    assert_eq!(shared_strings(&bytes), vec!["shared", "own"]);
    // both sheets point at index 0
    assert!(read_part(&bytes, "xl/worksheets/sheet1.xml").contains("<c r=\"A1\" t=\"s\"><v>0</v></c>"));
    assert!(read_part(&bytes, "xl/worksheets/sheet2.xml").contains("<c r=\"A1\" t=\"s\"><v>0</v></c>"));
}

#[test]
fn test_repeat_generation_yields_identical_content_parts() {
    let sheets = vec![Sheet::with_rows(
        "S",
        vec![vec![Cell::from("a"), Cell::from(1)]],
    )];
    let first = generate(&sheets).unwrap();
    let second = generate(&sheets).unwrap();

    // everything except docProps/core.xml (the timestamp) is byte-identical
    for part in [
        "xl/worksheets/sheet1.xml",
        "xl/sharedStrings.xml",
        "xl/workbook.xml",
        "xl/_rels/workbook.xml.rels",
        "[Content_Types].xml",
    ] {
        assert_eq!(read_part(&first, part), read_part(&second, part));
    }
}

#[test]
fn test_non_finite_number_aborts_generation() {
    let sheets = vec![Sheet::with_rows("Bad", vec![vec![Cell::from(f64::INFINITY)]])];
    let err = generate(&sheets).unwrap_err();
    assert!(err.to_string().contains("A1"));
}

#[test]
fn test_builder_output_opens_from_disk() {
    let mut builder = WorkbookBuilder::new();
    builder.add_sheet("People");
    builder.write_row(["Name", "City"]).unwrap();
    builder.write_row(["Alice", "New York"]).unwrap();
    let bytes = builder.finish().unwrap();

    // write to disk and reopen, the way a download consumer would
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.xlsx");
    std::fs::write(&path, &bytes).unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    assert!(archive.by_name("xl/workbook.xml").is_ok());

    assert_eq!(
        grid(&bytes, 1),
        vec![
            vec!["Name".to_string(), "City".to_string()],
            vec!["Alice".to_string(), "New York".to_string()],
        ]
    );
}

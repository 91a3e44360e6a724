//! A1-style cell reference codec

/// Convert a 1-based column index to spreadsheet column letters
///
/// Columns follow bijective base-26 numbering with no zero digit:
/// 1 -> A, 26 -> Z, 27 -> AA, 703 -> AAA.
pub fn column_letters(col: u32) -> String {
    debug_assert!(col > 0, "column indices are 1-based");

    let mut letters = String::new();
    let mut n = col;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters
}

/// Build an A1 reference from 1-based column and row indices (3, 5 -> "C5")
pub fn cell_reference(col: u32, row: u32) -> String {
    debug_assert!(row > 0, "row indices are 1-based");

    let mut reference = column_letters(col);
    let mut buf = itoa::Buffer::new();
    reference.push_str(buf.format(row));
    reference
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse column letters back to a 1-based index
    fn parse_letters(letters: &str) -> u32 {
        letters
            .bytes()
            .fold(0, |acc, b| acc * 26 + (b - b'A' + 1) as u32)
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(1), "A");
        assert_eq!(column_letters(26), "Z");
        assert_eq!(column_letters(27), "AA");
        assert_eq!(column_letters(52), "AZ");
        assert_eq!(column_letters(702), "ZZ");
        assert_eq!(column_letters(703), "AAA");
    }

    #[test]
    fn test_column_letters_round_trip() {
        for n in (1..3000).chain([16_384, 1_000_000]) {
            assert_eq!(parse_letters(&column_letters(n)), n);
        }
    }

    #[test]
    fn test_cell_reference() {
        assert_eq!(cell_reference(1, 1), "A1");
        assert_eq!(cell_reference(3, 5), "C5");
        assert_eq!(cell_reference(27, 10), "AA10");
    }
}

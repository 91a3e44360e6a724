//! Shared strings table for string deduplication

use indexmap::IndexMap;

/// Shared strings table that deduplicates strings across the workbook
///
/// Entries are stored already escaped for XML content and keyed on that
/// escaped form, so two raw strings that escape identically share one
/// entry. The table holds each distinct string once in first-seen order;
/// a separate counter tracks every occurrence including repeats. The two
/// become the `uniqueCount` and `count` attributes of the part.
#[derive(Debug)]
pub struct SharedStrings {
    strings: IndexMap<String, u32>,
    total: u32,
}

impl SharedStrings {
    pub fn new() -> Self {
        SharedStrings {
            strings: IndexMap::new(),
            total: 0,
        }
    }

    /// Intern an escaped string and get its table index
    ///
    /// Returns the existing index when the string was seen before,
    /// otherwise appends it. The occurrence counter is bumped on every
    /// call, first occurrences included.
    pub fn intern(&mut self, escaped: &str) -> u32 {
        self.total += 1;

        if let Some(&index) = self.strings.get(escaped) {
            return index;
        }

        let index = self.strings.len() as u32;
        self.strings.insert(escaped.to_string(), index);
        index
    }

    /// Number of distinct strings (the `uniqueCount` attribute)
    pub fn unique(&self) -> u32 {
        self.strings.len() as u32
    }

    /// Number of string-cell occurrences including repeats (the `count` attribute)
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Iterate entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }
}

impl Default for SharedStrings {
    fn default() -> Self {
        Self::new()
    }
}

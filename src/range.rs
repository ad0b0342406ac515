use crate::consts::MAX_CODE_POINT;
use crate::error::{Error, Result};
use crate::width::EastAsianWidth;
use itertools::Itertools;

use std::cmp::Ordering;
use std::slice;

/// One record of `EastAsianWidth.txt`: an inclusive range of code points
/// sharing a width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub start: u32,
    pub end: u32,
    pub width: EastAsianWidth,
    /// Two-letter general category code, or `L&` for mixed-case letters.
    pub general_category: String,
    /// The `[n]` annotation from the source. Not checked against
    /// `end - start + 1`.
    pub range_length: u32,
    pub start_name: String,
    pub end_name: String,
}

/// Row layout of a generated static table, see [`crate::emit`].
pub type Row = (
    u32,
    u32,
    EastAsianWidth,
    &'static str,
    u32,
    &'static str,
    &'static str,
);

impl Entry {
    pub fn contains(&self, code_point: u32) -> bool {
        self.start <= code_point && code_point <= self.end
    }

    /// Number of code points actually covered.
    pub fn span(&self) -> u32 {
        self.end - self.start + 1
    }

    fn cmp_code_point(&self, code_point: u32) -> Ordering {
        if code_point < self.start {
            Ordering::Greater
        } else if code_point > self.end {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

impl<'a> From<&'a Row> for Entry {
    fn from(row: &'a Row) -> Entry {
        let &(start, end, width, general_category, range_length, start_name, end_name) = row;
        Entry {
            start,
            end,
            width,
            general_category: general_category.to_string(),
            range_length,
            start_name: start_name.to_string(),
            end_name: end_name.to_string(),
        }
    }
}

/// Entries sorted by `start`, pairwise disjoint, never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeTable {
    entries: Vec<Entry>,
}

impl RangeTable {
    /// Builds a table, rejecting entries that are out of bounds, unsorted
    /// or overlapping.
    pub fn new(entries: Vec<Entry>) -> Result<RangeTable> {
        if let Some(e) = entries
            .iter()
            .find(|e| e.start > e.end || e.end > MAX_CODE_POINT)
        {
            return Err(Error::InvalidTable(format!(
                "bad range {:04X}..{:04X}",
                e.start, e.end
            )));
        }

        if let Some((a, b)) = entries.iter().tuple_windows().find(|&(a, b)| a.end >= b.start) {
            let problem = if b.start < a.start { "unsorted" } else { "overlapping" };
            return Err(Error::InvalidTable(format!(
                "{} ranges {:04X}..{:04X} and {:04X}..{:04X}",
                problem, a.start, a.end, b.start, b.end
            )));
        }

        Ok(RangeTable { entries })
    }

    /// Loads a table previously written out by [`crate::emit`].
    pub fn from_rows(rows: &[Row]) -> Result<RangeTable> {
        RangeTable::new(rows.iter().map(Entry::from).collect())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Binary search for the entry containing `code_point`.
    pub fn find(&self, code_point: u32) -> Option<&Entry> {
        self.entries
            .binary_search_by(|entry| entry.cmp_code_point(code_point))
            .ok()
            .map(|i| &self.entries[i])
    }
}

impl<'a> IntoIterator for &'a RangeTable {
    type Item = &'a Entry;
    type IntoIter = slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

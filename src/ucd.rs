//! Parser for the UCD `EastAsianWidth.txt` format.
//!
//! Records look like either of
//!
//! ```text
//! 3000           ; F  # Zs         IDEOGRAPHIC SPACE
//! 0C92..0CA8     ; N  # Lo    [23] KANNADA LETTER O..KANNADA LETTER NA
//! ```
//!
//! Splitting on `;`, `#`, `[` and `]` yields three fields for the first
//! shape and five for the second. Anything else is rejected.

use crate::consts::{COMMENT_PREFIX, FIELD_DELIMITERS, MAX_CODE_POINT, RANGE_SEPARATOR};
use crate::error::{Error, Result};
use crate::range::{Entry, RangeTable};
use crate::width::EastAsianWidth;
use itertools::Itertools;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses a single line. `line_no` is only used for error reporting.
///
/// Blank lines and comments produce `Ok(None)`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Entry>> {
    if line.trim().is_empty() || line.starts_with(COMMENT_PREFIX) {
        trace!("line {}: skipped", line_no);
        return Ok(None);
    }

    let fields = line.split(FIELD_DELIMITERS).collect_vec();
    let (range, width, category, range_length, names) = match &fields[..] {
        &[range, width, rest] => {
            let (category, names) = split_compact(line_no, rest)?;
            (range, width, category, 1, names)
        }
        &[range, width, category, length, names] => {
            let length = length.trim().parse::<u32>().map_err(|e| {
                Error::malformed(line_no, format!("range length {:?}: {}", length, e))
            })?;
            (range, width, category.trim(), length, names)
        }
        _ => {
            return Err(Error::malformed(
                line_no,
                format!("expected 3 or 5 fields, found {}", fields.len()),
            ))
        }
    };

    let (start, end) = parse_range(line_no, range)?;
    let width = width.trim();
    let width = EastAsianWidth::from_abbreviation(width).ok_or_else(|| Error::UnknownWidthCode {
        line: line_no,
        code: width.to_string(),
    })?;
    if category.is_empty() {
        return Err(Error::malformed(line_no, "missing general category"));
    }
    let (start_name, end_name) = split_pair(names);

    Ok(Some(Entry {
        start,
        end,
        width,
        general_category: category.to_string(),
        range_length,
        start_name: start_name.to_string(),
        end_name: end_name.to_string(),
    }))
}

/// Parses every line, in order, into a validated table. The first bad
/// record aborts the whole parse.
pub fn parse_lines<I, S>(lines: I) -> Result<RangeTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = vec![];
    for (i, line) in lines.into_iter().enumerate() {
        if let Some(entry) = parse_line(i + 1, line.as_ref())? {
            entries.push(entry);
        }
    }
    debug!("parsed {} entries", entries.len());
    RangeTable::new(entries)
}

pub fn parse_str(text: &str) -> Result<RangeTable> {
    parse_lines(text.lines())
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<RangeTable> {
    let path = path.as_ref();
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(io_error)?);
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>().map_err(io_error)?;
    let table = parse_lines(lines)?;
    debug!("loaded {} ranges from {}", table.len(), path.display());
    Ok(table)
}

/// `" Zs         IDEOGRAPHIC SPACE"`: the category is the first three
/// characters, the rest is the name.
fn split_compact(line_no: usize, rest: &str) -> Result<(&str, &str)> {
    let at = rest
        .char_indices()
        .nth(3)
        .map(|(i, _)| i)
        .unwrap_or_else(|| rest.len());
    let (category, names) = rest.split_at(at);
    let category = category.trim();
    if category.contains(char::is_whitespace) {
        return Err(Error::malformed(
            line_no,
            format!("bad general category {:?}", category),
        ));
    }
    Ok((category, names))
}

fn parse_range(line_no: usize, range: &str) -> Result<(u32, u32)> {
    let bounds = range.splitn(2, RANGE_SEPARATOR).map(str::trim).collect_vec();
    let (start, end) = match &bounds[..] {
        &[l, r] => (parse_code_point(line_no, l)?, parse_code_point(line_no, r)?),
        &[x] => {
            let cp = parse_code_point(line_no, x)?;
            (cp, cp)
        }
        _ => return Err(Error::malformed(line_no, "missing code point")),
    };
    if start > end {
        return Err(Error::malformed(
            line_no,
            format!("reversed range {:04X}..{:04X}", start, end),
        ));
    }
    Ok((start, end))
}

fn parse_code_point(line_no: usize, hex: &str) -> Result<u32> {
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::malformed(line_no, format!("bad code point {:?}", hex)));
    }
    match u32::from_str_radix(hex, 16) {
        Ok(cp) if cp <= MAX_CODE_POINT => Ok(cp),
        _ => Err(Error::malformed(
            line_no,
            format!("code point {} out of range", hex),
        )),
    }
}

fn split_pair(names: &str) -> (&str, &str) {
    let names = names.splitn(2, RANGE_SEPARATOR).map(str::trim).collect_vec();
    match &names[..] {
        &[l, r] => (l, r),
        &[x] => (x, x),
        _ => ("", ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compact_record() {
        let entry = parse_line(1, "3000           ; F  # Zs         IDEOGRAPHIC SPACE")
            .unwrap()
            .unwrap();
        assert_eq!(
            entry,
            Entry {
                start: 0x3000,
                end: 0x3000,
                width: EastAsianWidth::FullWidth,
                general_category: String::from("Zs"),
                range_length: 1,
                start_name: String::from("IDEOGRAPHIC SPACE"),
                end_name: String::from("IDEOGRAPHIC SPACE"),
            }
        );
    }

    #[test]
    fn test_range_record() {
        let entry = parse_line(
            7,
            "0C92..0CA8     ; N  # Lo    [23] KANNADA LETTER O..KANNADA LETTER NA",
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            entry,
            Entry {
                start: 0x0C92,
                end: 0x0CA8,
                width: EastAsianWidth::Neutral,
                general_category: String::from("Lo"),
                range_length: 23,
                start_name: String::from("KANNADA LETTER O"),
                end_name: String::from("KANNADA LETTER NA"),
            }
        );
    }

    #[test]
    fn test_legacy_layout() {
        let entry = parse_line(1, "FF5E;F # Sm         FULLWIDTH TILDE").unwrap().unwrap();
        assert_eq!(entry.start, 0xFF5E);
        assert_eq!(entry.width, EastAsianWidth::FullWidth);
        assert_eq!(entry.general_category, "Sm");
        assert_eq!(entry.start_name, "FULLWIDTH TILDE");

        let entry = parse_line(1, "0102..0110;N # L&    [15] LATIN CAPITAL LETTER A WITH BREVE..LATIN CAPITAL LETTER D WITH STROKE")
            .unwrap()
            .unwrap();
        assert_eq!(entry.general_category, "L&");
        assert_eq!(entry.range_length, 15);
        assert_eq!(entry.end_name, "LATIN CAPITAL LETTER D WITH STROKE");
    }

    #[test]
    fn test_skips_comments_and_blanks() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(2, "   \t").unwrap(), None);
        assert_eq!(parse_line(3, "# EastAsianWidth-16.0.0.txt").unwrap(), None);
        assert_eq!(parse_line(4, "# @missing: 0000..10FFFF; N").unwrap(), None);
    }

    #[test]
    fn test_unknown_width_is_fatal() {
        match parse_line(12, "3000 ; X # Zs         IDEOGRAPHIC SPACE") {
            Err(Error::UnknownWidthCode { line, code }) => {
                assert_eq!(line, 12);
                assert_eq!(code, "X");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_wrong_field_count_is_malformed() {
        for line in &[
            "3000 ; F",
            "3000 ; F # Zs [1",
            "3000 ; F # Zs [1] A [B]",
        ] {
            match parse_line(5, line) {
                Err(Error::MalformedRecord { line, .. }) => assert_eq!(line, 5),
                other => panic!("{:?} gave {:?}", line, other),
            }
        }
    }

    #[test]
    fn test_bad_numbers_are_malformed() {
        for line in &[
            "30G0 ; F # Zs         IDEOGRAPHIC SPACE",
            "0x3000 ; F # Zs         IDEOGRAPHIC SPACE",
            "110000 ; N # Cn         <reserved>",
            "3003..3001 ; W # Po     [3] IDEOGRAPHIC COMMA..DITTO MARK",
            "3001..3003 ; W # Po     [x] IDEOGRAPHIC COMMA..DITTO MARK",
            " ; W # Po     [3] IDEOGRAPHIC COMMA..DITTO MARK",
        ] {
            assert!(
                matches!(parse_line(1, line), Err(Error::MalformedRecord { .. })),
                "{:?}",
                line
            );
        }
    }

    #[test]
    fn test_parse_str_is_all_or_nothing() {
        let text = "\
# comment
0020           ; Na # Zs         SPACE
0021..0023     ; Na # Po     [3] EXCLAMATION MARK..NUMBER SIGN
0024           ; Q  # Sc         DOLLAR SIGN
";
        match parse_str(text) {
            Err(Error::UnknownWidthCode { line, .. }) => assert_eq!(line, 4),
            other => panic!("unexpected {:?}", other),
        }

        let table = parse_str(&text.replace("; Q ", "; Na")).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.entries()[1].range_length, 3);
    }

    #[test]
    fn test_parse_str_validates_order() {
        let text = "\
0021..0023     ; Na # Po     [3] EXCLAMATION MARK..NUMBER SIGN
0020           ; Na # Zs         SPACE
";
        assert!(matches!(parse_str(text), Err(Error::InvalidTable(_))));
    }

    #[test]
    fn test_parse_missing_file() {
        match parse_file("does/not/exist/EastAsianWidth.txt") {
            Err(Error::Io { path, .. }) => assert!(path.ends_with("EastAsianWidth.txt")),
            other => panic!("unexpected {:?}", other),
        }
    }
}

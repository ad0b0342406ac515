/// Highest valid Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

pub const DEFAULT_UCD_PATH: &str = "ucd/EastAsianWidth.txt";

pub const UCD_PATH_VAR: &str = "TYPEWIDTH_UCD";
pub const THREADS_VAR: &str = "TYPEWIDTH_THREADS";

/// Field delimiters of an `EastAsianWidth.txt` record.
pub const FIELD_DELIMITERS: &[char] = &[';', '#', '[', ']'];
pub const RANGE_SEPARATOR: &str = "..";
pub const COMMENT_PREFIX: &str = "#";

/// Marker used in the source data for "any cased letter".
pub const CASED_LETTER_CODE: &str = "L&";

pub const REPORT_HEADER: &str = "CodePoint,ExpectedCategory,ActualCategory";

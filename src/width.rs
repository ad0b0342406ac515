use std::fmt;

/// East Asian Width classes from UAX #11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum EastAsianWidth {
    /// No specific width classification.
    Neutral = 0,
    /// Typically occupies a narrow cell.
    Narrow = 1,
    /// Typically occupies a wide cell.
    Wide = 2,
    /// Narrow or wide depending on context.
    Ambiguous = 3,
    /// Half of a standard wide cell.
    HalfWidth = 4,
    /// The full width of a standard wide cell.
    FullWidth = 5,
}

pub const ALL_WIDTHS: [EastAsianWidth; 6] = [
    EastAsianWidth::Neutral,
    EastAsianWidth::Narrow,
    EastAsianWidth::Wide,
    EastAsianWidth::Ambiguous,
    EastAsianWidth::HalfWidth,
    EastAsianWidth::FullWidth,
];

impl EastAsianWidth {
    /// Maps the abbreviation used in `EastAsianWidth.txt` (`A`, `F`, `H`,
    /// `N`, `Na`, `W`).
    pub fn from_abbreviation(code: &str) -> Option<EastAsianWidth> {
        match code {
            "A" => Some(EastAsianWidth::Ambiguous),
            "F" => Some(EastAsianWidth::FullWidth),
            "H" => Some(EastAsianWidth::HalfWidth),
            "N" => Some(EastAsianWidth::Neutral),
            "Na" => Some(EastAsianWidth::Narrow),
            "W" => Some(EastAsianWidth::Wide),
            _ => None,
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            EastAsianWidth::Ambiguous => "A",
            EastAsianWidth::FullWidth => "F",
            EastAsianWidth::HalfWidth => "H",
            EastAsianWidth::Neutral => "N",
            EastAsianWidth::Narrow => "Na",
            EastAsianWidth::Wide => "W",
        }
    }

    /// Converts a raw discriminant. Anything outside the enum is `None`.
    pub fn from_u8(code: u8) -> Option<EastAsianWidth> {
        ALL_WIDTHS.get(code as usize).cloned()
    }
}

impl fmt::Display for EastAsianWidth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

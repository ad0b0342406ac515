use crate::consts::CASED_LETTER_CODE;
use linked_hash_map::LinkedHashMap;

use std::fmt;

/// Unicode general category, one value per two-letter UCD code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneralCategory {
    UppercaseLetter,
    LowercaseLetter,
    TitlecaseLetter,
    ModifierLetter,
    OtherLetter,
    NonSpacingMark,
    SpacingCombiningMark,
    EnclosingMark,
    DecimalDigitNumber,
    LetterNumber,
    OtherNumber,
    SpaceSeparator,
    LineSeparator,
    ParagraphSeparator,
    Control,
    Format,
    Surrogate,
    PrivateUse,
    ConnectorPunctuation,
    DashPunctuation,
    OpenPunctuation,
    ClosePunctuation,
    InitialQuotePunctuation,
    FinalQuotePunctuation,
    OtherPunctuation,
    MathSymbol,
    CurrencySymbol,
    ModifierSymbol,
    OtherSymbol,
    OtherNotAssigned,
}

const CODES: [(&str, GeneralCategory); 30] = [
    ("Lu", GeneralCategory::UppercaseLetter),
    ("Ll", GeneralCategory::LowercaseLetter),
    ("Lt", GeneralCategory::TitlecaseLetter),
    ("Lm", GeneralCategory::ModifierLetter),
    ("Lo", GeneralCategory::OtherLetter),
    ("Mn", GeneralCategory::NonSpacingMark),
    ("Mc", GeneralCategory::SpacingCombiningMark),
    ("Me", GeneralCategory::EnclosingMark),
    ("Nd", GeneralCategory::DecimalDigitNumber),
    ("Nl", GeneralCategory::LetterNumber),
    ("No", GeneralCategory::OtherNumber),
    ("Zs", GeneralCategory::SpaceSeparator),
    ("Zl", GeneralCategory::LineSeparator),
    ("Zp", GeneralCategory::ParagraphSeparator),
    ("Cc", GeneralCategory::Control),
    ("Cf", GeneralCategory::Format),
    ("Cs", GeneralCategory::Surrogate),
    ("Co", GeneralCategory::PrivateUse),
    ("Pc", GeneralCategory::ConnectorPunctuation),
    ("Pd", GeneralCategory::DashPunctuation),
    ("Ps", GeneralCategory::OpenPunctuation),
    ("Pe", GeneralCategory::ClosePunctuation),
    ("Pi", GeneralCategory::InitialQuotePunctuation),
    ("Pf", GeneralCategory::FinalQuotePunctuation),
    ("Po", GeneralCategory::OtherPunctuation),
    ("Sm", GeneralCategory::MathSymbol),
    ("Sc", GeneralCategory::CurrencySymbol),
    ("Sk", GeneralCategory::ModifierSymbol),
    ("So", GeneralCategory::OtherSymbol),
    ("Cn", GeneralCategory::OtherNotAssigned),
];

lazy_static! {
    static ref BY_CODE: LinkedHashMap<&'static str, GeneralCategory> =
        CODES.iter().cloned().collect();
}

impl GeneralCategory {
    /// Looks up a two-letter code such as `"Lo"`. `"L&"` is not a category
    /// on its own; see [`CategoryCode`].
    pub fn from_code(code: &str) -> Option<GeneralCategory> {
        BY_CODE.get(code).cloned()
    }

    pub fn code(self) -> &'static str {
        BY_CODE
            .iter()
            .find(|&(_, category)| *category == self)
            .map(|(code, _)| *code)
            .unwrap_or("Cn")
    }

    /// All thirty categories, in UCD order.
    pub fn all() -> impl Iterator<Item = GeneralCategory> {
        BY_CODE.values().cloned()
    }

    pub fn is_cased_letter(self) -> bool {
        match self {
            GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter => true,
            _ => false,
        }
    }
}

impl fmt::Display for GeneralCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The category column of a table entry once decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryCode {
    Fixed(GeneralCategory),
    /// `L&`: the case has to be resolved per code point.
    CasedLetter,
}

impl CategoryCode {
    pub fn parse(code: &str) -> Option<CategoryCode> {
        if code == CASED_LETTER_CODE {
            Some(CategoryCode::CasedLetter)
        } else {
            GeneralCategory::from_code(code).map(CategoryCode::Fixed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_table_is_closed() {
        assert_eq!(GeneralCategory::all().count(), 30);
        for category in GeneralCategory::all() {
            assert_eq!(GeneralCategory::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(
            GeneralCategory::from_code("Lo"),
            Some(GeneralCategory::OtherLetter)
        );
        assert_eq!(
            GeneralCategory::from_code("Nd"),
            Some(GeneralCategory::DecimalDigitNumber)
        );
        assert_eq!(
            GeneralCategory::from_code("Cn"),
            Some(GeneralCategory::OtherNotAssigned)
        );
        assert_eq!(GeneralCategory::from_code("L&"), None);
        assert_eq!(GeneralCategory::from_code("Xx"), None);
        assert_eq!(GeneralCategory::from_code("lo"), None);
    }

    #[test]
    fn test_category_code() {
        assert_eq!(CategoryCode::parse("L&"), Some(CategoryCode::CasedLetter));
        assert_eq!(
            CategoryCode::parse("Zs"),
            Some(CategoryCode::Fixed(GeneralCategory::SpaceSeparator))
        );
        assert_eq!(CategoryCode::parse("Q?"), None);
    }

    #[test]
    fn test_is_cased_letter() {
        assert!(GeneralCategory::TitlecaseLetter.is_cased_letter());
        assert!(!GeneralCategory::ModifierLetter.is_cased_letter());
    }
}

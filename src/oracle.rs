use crate::category::GeneralCategory;
use unicode_general_category::{get_general_category, GeneralCategory as GC};

/// An independent source of truth for general categories.
///
/// Used to split `L&` ranges into upper, lower and title case, and by the
/// cross validator as the reference the table is compared against.
pub trait CategoryOracle: Sync {
    fn category_of(&self, code_point: u32) -> GeneralCategory;
}

/// Oracle backed by the `unicode-general-category` tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeOracle;

impl CategoryOracle for UnicodeOracle {
    fn category_of(&self, code_point: u32) -> GeneralCategory {
        match std::char::from_u32(code_point) {
            Some(c) => convert(get_general_category(c)),
            // not a scalar value
            None if (0xD800..=0xDFFF).contains(&code_point) => GeneralCategory::Surrogate,
            None => GeneralCategory::OtherNotAssigned,
        }
    }
}

#[allow(unreachable_patterns)]
fn convert(category: GC) -> GeneralCategory {
    match category {
        GC::UppercaseLetter => GeneralCategory::UppercaseLetter,
        GC::LowercaseLetter => GeneralCategory::LowercaseLetter,
        GC::TitlecaseLetter => GeneralCategory::TitlecaseLetter,
        GC::ModifierLetter => GeneralCategory::ModifierLetter,
        GC::OtherLetter => GeneralCategory::OtherLetter,
        GC::NonspacingMark => GeneralCategory::NonSpacingMark,
        GC::SpacingMark => GeneralCategory::SpacingCombiningMark,
        GC::EnclosingMark => GeneralCategory::EnclosingMark,
        GC::DecimalNumber => GeneralCategory::DecimalDigitNumber,
        GC::LetterNumber => GeneralCategory::LetterNumber,
        GC::OtherNumber => GeneralCategory::OtherNumber,
        GC::SpaceSeparator => GeneralCategory::SpaceSeparator,
        GC::LineSeparator => GeneralCategory::LineSeparator,
        GC::ParagraphSeparator => GeneralCategory::ParagraphSeparator,
        GC::Control => GeneralCategory::Control,
        GC::Format => GeneralCategory::Format,
        GC::Surrogate => GeneralCategory::Surrogate,
        GC::PrivateUse => GeneralCategory::PrivateUse,
        GC::ConnectorPunctuation => GeneralCategory::ConnectorPunctuation,
        GC::DashPunctuation => GeneralCategory::DashPunctuation,
        GC::OpenPunctuation => GeneralCategory::OpenPunctuation,
        GC::ClosePunctuation => GeneralCategory::ClosePunctuation,
        GC::InitialPunctuation => GeneralCategory::InitialQuotePunctuation,
        GC::FinalPunctuation => GeneralCategory::FinalQuotePunctuation,
        GC::OtherPunctuation => GeneralCategory::OtherPunctuation,
        GC::MathSymbol => GeneralCategory::MathSymbol,
        GC::CurrencySymbol => GeneralCategory::CurrencySymbol,
        GC::ModifierSymbol => GeneralCategory::ModifierSymbol,
        GC::OtherSymbol => GeneralCategory::OtherSymbol,
        GC::Unassigned => GeneralCategory::OtherNotAssigned,
        _ => GeneralCategory::OtherNotAssigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_oracle() {
        let oracle = UnicodeOracle;
        assert_eq!(oracle.category_of(0x41), GeneralCategory::UppercaseLetter);
        assert_eq!(oracle.category_of(0x61), GeneralCategory::LowercaseLetter);
        assert_eq!(oracle.category_of(0x01C5), GeneralCategory::TitlecaseLetter);
        assert_eq!(oracle.category_of(0x3000), GeneralCategory::SpaceSeparator);
        assert_eq!(oracle.category_of(0x0C92), GeneralCategory::OtherLetter);
        assert_eq!(oracle.category_of(0x0378), GeneralCategory::OtherNotAssigned);
        assert_eq!(oracle.category_of(0xE000), GeneralCategory::PrivateUse);
    }

    #[test]
    fn test_surrogates() {
        let oracle = UnicodeOracle;
        assert_eq!(oracle.category_of(0xD800), GeneralCategory::Surrogate);
        assert_eq!(oracle.category_of(0xDFFF), GeneralCategory::Surrogate);
        assert_eq!(oracle.category_of(0x110000), GeneralCategory::OtherNotAssigned);
    }
}

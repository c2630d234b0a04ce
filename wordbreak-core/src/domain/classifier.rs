//! Word-break classification of code points

use super::category::{CharProps, WordBreakCategory};
use super::tables;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Classify a code point into its word-break category
///
/// Total: unassigned and unlisted code points classify as `Other`.
pub fn classify(ch: char) -> WordBreakCategory {
    let cp = ch as u32;

    // ASCII letters are by far the most common input
    if ch.is_ascii_alphabetic() {
        return WordBreakCategory::ALetter;
    }

    if let Some(category) = tables::lookup_category(tables::WORD_BREAK_RANGES, cp) {
        return category;
    }

    match get_general_category(ch) {
        GeneralCategory::NonspacingMark
        | GeneralCategory::SpacingMark
        | GeneralCategory::EnclosingMark => WordBreakCategory::Extend,
        GeneralCategory::Format => WordBreakCategory::Format,
        GeneralCategory::DecimalNumber => WordBreakCategory::Numeric,
        GeneralCategory::SpaceSeparator => WordBreakCategory::WSegSpace,
        GeneralCategory::LineSeparator | GeneralCategory::ParagraphSeparator => {
            WordBreakCategory::Newline
        }
        GeneralCategory::UppercaseLetter
        | GeneralCategory::LowercaseLetter
        | GeneralCategory::TitlecaseLetter
        | GeneralCategory::ModifierLetter
        | GeneralCategory::OtherLetter
        | GeneralCategory::LetterNumber => {
            if is_ideographic(ch)
                || is_hiragana(ch)
                || tables::in_ranges(tables::COMPLEX_CONTEXT, cp)
            {
                WordBreakCategory::Other
            } else {
                WordBreakCategory::ALetter
            }
        }
        _ => WordBreakCategory::Other,
    }
}

/// Check the Extended_Pictographic property
#[inline]
pub fn is_extended_pictographic(ch: char) -> bool {
    !ch.is_ascii() && tables::in_ranges(tables::EXTENDED_PICTOGRAPHIC, ch as u32)
}

/// Check whether a code point is a CJK, Tangut or Nushu ideograph
#[inline]
pub fn is_ideographic(ch: char) -> bool {
    tables::in_ranges(tables::IDEOGRAPHIC, ch as u32)
}

/// Check whether a code point is Hiragana
#[inline]
pub fn is_hiragana(ch: char) -> bool {
    tables::in_ranges(tables::HIRAGANA, ch as u32)
}

/// Pluggable word-break classification
///
/// `UnicodeClassifier` implements the default Unicode assignment. Tailored
/// classifiers (for example one that treats `@` as a letter to keep e-mail
/// addresses whole) override `classify` and reuse the default for
/// everything else.
pub trait WordBreakClassifier: Send + Sync {
    /// Word-break category of a code point
    fn classify(&self, ch: char) -> WordBreakCategory;

    /// Extended_Pictographic property of a code point
    fn is_extended_pictographic(&self, ch: char) -> bool {
        is_extended_pictographic(ch)
    }

    /// Full rule-engine properties of a code point
    fn props(&self, ch: char) -> CharProps {
        CharProps {
            category: self.classify(ch),
            extended_pictographic: self.is_extended_pictographic(ch),
        }
    }
}

/// Default classifier backed by the static Unicode tables
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeClassifier;

impl WordBreakClassifier for UnicodeClassifier {
    #[inline]
    fn classify(&self, ch: char) -> WordBreakCategory {
        classify(ch)
    }
}

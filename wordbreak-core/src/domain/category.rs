//! Word-break categories (the Unicode Word_Break property values)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Word_Break property value of a code point
///
/// Exactly one category is assigned to every code point. Categories are
/// looked up once per code point and never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordBreakCategory {
    /// Carriage return (U+000D)
    CR,
    /// Line feed (U+000A)
    LF,
    /// Other hard line separators (VT, FF, NEL, LS, PS)
    Newline,
    /// Combining marks and other grapheme extenders
    Extend,
    /// Zero width joiner (U+200D)
    ZWJ,
    /// Regional indicator symbols used in flag sequences
    RegionalIndicator,
    /// Invisible formatting characters
    Format,
    /// Katakana and related marks
    Katakana,
    /// Hebrew letters
    HebrewLetter,
    /// Alphabetic letters
    ALetter,
    /// Apostrophe (U+0027)
    SingleQuote,
    /// Quotation mark (U+0022)
    DoubleQuote,
    /// Characters joining both letters and digits, such as `.`
    MidNumLet,
    /// Characters joining letters, such as `:`
    MidLetter,
    /// Characters joining digits, such as `,`
    MidNum,
    /// Decimal digits
    Numeric,
    /// Connector punctuation, such as `_`
    ExtendNumLet,
    /// Breaking space separators
    WSegSpace,
    /// Everything else
    Other,
}

impl WordBreakCategory {
    /// Categories that attach to the preceding code point and are skipped
    /// when establishing rule context
    #[inline]
    pub fn is_transparent(self) -> bool {
        matches!(
            self,
            WordBreakCategory::Extend | WordBreakCategory::Format | WordBreakCategory::ZWJ
        )
    }

    /// Hard line separators: always a boundary on both sides (except CR LF)
    #[inline]
    pub fn is_newline(self) -> bool {
        matches!(
            self,
            WordBreakCategory::CR | WordBreakCategory::LF | WordBreakCategory::Newline
        )
    }

    /// ALetter or Hebrew_Letter
    #[inline]
    pub fn is_ah_letter(self) -> bool {
        matches!(
            self,
            WordBreakCategory::ALetter | WordBreakCategory::HebrewLetter
        )
    }

    /// MidNumLet or Single_Quote
    #[inline]
    pub fn is_mid_num_let_q(self) -> bool {
        matches!(
            self,
            WordBreakCategory::MidNumLet | WordBreakCategory::SingleQuote
        )
    }

    /// Property value alias as written in the Unicode data files
    pub fn as_str(self) -> &'static str {
        match self {
            WordBreakCategory::CR => "CR",
            WordBreakCategory::LF => "LF",
            WordBreakCategory::Newline => "Newline",
            WordBreakCategory::Extend => "Extend",
            WordBreakCategory::ZWJ => "ZWJ",
            WordBreakCategory::RegionalIndicator => "Regional_Indicator",
            WordBreakCategory::Format => "Format",
            WordBreakCategory::Katakana => "Katakana",
            WordBreakCategory::HebrewLetter => "Hebrew_Letter",
            WordBreakCategory::ALetter => "ALetter",
            WordBreakCategory::SingleQuote => "Single_Quote",
            WordBreakCategory::DoubleQuote => "Double_Quote",
            WordBreakCategory::MidNumLet => "MidNumLet",
            WordBreakCategory::MidLetter => "MidLetter",
            WordBreakCategory::MidNum => "MidNum",
            WordBreakCategory::Numeric => "Numeric",
            WordBreakCategory::ExtendNumLet => "ExtendNumLet",
            WordBreakCategory::WSegSpace => "WSegSpace",
            WordBreakCategory::Other => "Other",
        }
    }
}

impl fmt::Display for WordBreakCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-code-point properties consumed by the rule engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharProps {
    /// Word_Break category
    pub category: WordBreakCategory,
    /// Extended_Pictographic property, used by the ZWJ emoji rule
    pub extended_pictographic: bool,
}

impl CharProps {
    /// Properties of a code point that is not pictographic
    pub const fn new(category: WordBreakCategory) -> Self {
        Self {
            category,
            extended_pictographic: false,
        }
    }
}

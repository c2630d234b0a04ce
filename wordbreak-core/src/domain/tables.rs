//! Static range tables for word-break classification
//!
//! Tables are sorted, non-overlapping inclusive intervals searched with
//! `binary_search_by`, so every lookup is O(log n) and no table is ever
//! allocated or mutated at runtime.
//!
//! `WORD_BREAK_RANGES` lists only the code points whose Word_Break value
//! cannot be derived from their General Category. Everything else is
//! resolved by the classifier's General Category fallback.

use super::category::WordBreakCategory as W;
use super::category::WordBreakCategory;

/// Inclusive code point interval mapped to a category
pub type CategoryRange = (u32, u32, WordBreakCategory);

/// Inclusive code point interval
pub type CodePointRange = (u32, u32);

/// Explicit Word_Break assignments, sorted by start
pub static WORD_BREAK_RANGES: &[CategoryRange] = &[
    (0x000A, 0x000A, W::LF),
    (0x000B, 0x000C, W::Newline),
    (0x000D, 0x000D, W::CR),
    (0x0022, 0x0022, W::DoubleQuote),
    (0x0027, 0x0027, W::SingleQuote),
    (0x002C, 0x002C, W::MidNum),
    (0x002E, 0x002E, W::MidNumLet),
    (0x003A, 0x003A, W::MidLetter),
    (0x003B, 0x003B, W::MidNum),
    (0x005F, 0x005F, W::ExtendNumLet),
    (0x0085, 0x0085, W::Newline),
    (0x00A0, 0x00A0, W::Other),
    (0x00B7, 0x00B7, W::MidLetter),
    (0x02C2, 0x02C5, W::ALetter),
    (0x02D2, 0x02D7, W::ALetter),
    (0x02DE, 0x02DF, W::ALetter),
    (0x02E5, 0x02EB, W::ALetter),
    (0x02ED, 0x02ED, W::ALetter),
    (0x02EF, 0x02FF, W::ALetter),
    (0x037E, 0x037E, W::MidNum),
    (0x0387, 0x0387, W::MidLetter),
    (0x055A, 0x055C, W::ALetter),
    (0x055E, 0x055E, W::ALetter),
    (0x055F, 0x055F, W::MidLetter),
    (0x0589, 0x0589, W::MidNum),
    (0x058A, 0x058A, W::ALetter),
    (0x05D0, 0x05EA, W::HebrewLetter),
    (0x05EF, 0x05F2, W::HebrewLetter),
    (0x05F3, 0x05F3, W::ALetter),
    (0x05F4, 0x05F4, W::MidLetter),
    (0x0600, 0x0605, W::Numeric),
    (0x060C, 0x060D, W::MidNum),
    (0x066B, 0x066B, W::Numeric),
    (0x066C, 0x066C, W::MidNum),
    (0x06DD, 0x06DD, W::Numeric),
    (0x070F, 0x070F, W::ALetter),
    (0x07F8, 0x07F8, W::MidNum),
    (0x0890, 0x0891, W::Numeric),
    (0x08E2, 0x08E2, W::Numeric),
    (0x2007, 0x2007, W::Other),
    (0x200B, 0x200B, W::Other),
    (0x200C, 0x200C, W::Extend),
    (0x200D, 0x200D, W::ZWJ),
    (0x2018, 0x2019, W::MidNumLet),
    (0x2024, 0x2024, W::MidNumLet),
    (0x2027, 0x2027, W::MidLetter),
    (0x2028, 0x2029, W::Newline),
    (0x202F, 0x202F, W::ExtendNumLet),
    (0x203F, 0x2040, W::ExtendNumLet),
    (0x2044, 0x2044, W::MidNum),
    (0x2054, 0x2054, W::ExtendNumLet),
    (0x24B6, 0x24E9, W::ALetter),
    (0x3031, 0x3035, W::Katakana),
    (0x309B, 0x309C, W::Katakana),
    (0x30A0, 0x30FA, W::Katakana),
    (0x30FC, 0x30FF, W::Katakana),
    (0x31F0, 0x31FF, W::Katakana),
    (0x32D0, 0x32FE, W::Katakana),
    (0x3300, 0x3357, W::Katakana),
    (0xA708, 0xA716, W::ALetter),
    (0xA720, 0xA721, W::ALetter),
    (0xA789, 0xA78A, W::ALetter),
    (0xAB5B, 0xAB5B, W::ALetter),
    (0xFB1D, 0xFB1D, W::HebrewLetter),
    (0xFB1F, 0xFB28, W::HebrewLetter),
    (0xFB2A, 0xFB36, W::HebrewLetter),
    (0xFB38, 0xFB3C, W::HebrewLetter),
    (0xFB3E, 0xFB3E, W::HebrewLetter),
    (0xFB40, 0xFB41, W::HebrewLetter),
    (0xFB43, 0xFB44, W::HebrewLetter),
    (0xFB46, 0xFB4F, W::HebrewLetter),
    (0xFE10, 0xFE10, W::MidNum),
    (0xFE13, 0xFE13, W::MidLetter),
    (0xFE14, 0xFE14, W::MidNum),
    (0xFE33, 0xFE34, W::ExtendNumLet),
    (0xFE4D, 0xFE4F, W::ExtendNumLet),
    (0xFE50, 0xFE50, W::MidNum),
    (0xFE52, 0xFE52, W::MidNumLet),
    (0xFE54, 0xFE54, W::MidNum),
    (0xFE55, 0xFE55, W::MidLetter),
    (0xFF07, 0xFF07, W::MidNumLet),
    (0xFF0C, 0xFF0C, W::MidNum),
    (0xFF0E, 0xFF0E, W::MidNumLet),
    (0xFF10, 0xFF19, W::Numeric),
    (0xFF1A, 0xFF1A, W::MidLetter),
    (0xFF1B, 0xFF1B, W::MidNum),
    (0xFF3F, 0xFF3F, W::ExtendNumLet),
    (0xFF66, 0xFF9D, W::Katakana),
    (0xFF9E, 0xFF9F, W::Extend),
    (0x110BD, 0x110BD, W::Numeric),
    (0x110CD, 0x110CD, W::Numeric),
    (0x1AFF0, 0x1AFFE, W::Katakana),
    (0x1B000, 0x1B000, W::Katakana),
    (0x1B120, 0x1B122, W::Katakana),
    (0x1B155, 0x1B155, W::Katakana),
    (0x1B164, 0x1B167, W::Katakana),
    (0x1F130, 0x1F149, W::ALetter),
    (0x1F150, 0x1F169, W::ALetter),
    (0x1F170, 0x1F189, W::ALetter),
    (0x1F1E6, 0x1F1FF, W::RegionalIndicator),
    (0x1F3FB, 0x1F3FF, W::Extend),
    (0xE0020, 0xE007F, W::Extend),
];

/// Extended_Pictographic code points, sorted by start
pub static EXTENDED_PICTOGRAPHIC: &[CodePointRange] = &[
    (0x00A9, 0x00A9),
    (0x00AE, 0x00AE),
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    (0x2122, 0x2122),
    (0x2139, 0x2139),
    (0x2194, 0x2199),
    (0x21A9, 0x21AA),
    (0x231A, 0x231B),
    (0x2328, 0x2328),
    (0x2388, 0x2388),
    (0x23CF, 0x23CF),
    (0x23E9, 0x23F3),
    (0x23F8, 0x23FA),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25AB),
    (0x25B6, 0x25B6),
    (0x25C0, 0x25C0),
    (0x25FB, 0x25FE),
    (0x2600, 0x2605),
    (0x2607, 0x2612),
    (0x2614, 0x2685),
    (0x2690, 0x2705),
    (0x2708, 0x2712),
    (0x2714, 0x2714),
    (0x2716, 0x2716),
    (0x271D, 0x271D),
    (0x2721, 0x2721),
    (0x2728, 0x2728),
    (0x2733, 0x2734),
    (0x2744, 0x2744),
    (0x2747, 0x2747),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2763, 0x2767),
    (0x2795, 0x2797),
    (0x27A1, 0x27A1),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2934, 0x2935),
    (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x3297, 0x3297),
    (0x3299, 0x3299),
    (0x1F000, 0x1F0FF),
    (0x1F10D, 0x1F10F),
    (0x1F12F, 0x1F12F),
    (0x1F16C, 0x1F171),
    (0x1F17E, 0x1F17F),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F1AD, 0x1F1E5),
    (0x1F201, 0x1F20F),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F23A),
    (0x1F23C, 0x1F23F),
    (0x1F249, 0x1F3FA),
    (0x1F400, 0x1F53D),
    (0x1F546, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F774, 0x1F77F),
    (0x1F7D5, 0x1F7FF),
    (0x1F80C, 0x1F80F),
    (0x1F848, 0x1F84F),
    (0x1F85A, 0x1F85F),
    (0x1F888, 0x1F88F),
    (0x1F8AE, 0x1F8FF),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1FAFF),
    (0x1FC00, 0x1FFFD),
];

/// Unified and compatibility ideographs, Tangut and Nushu
pub static IDEOGRAPHIC: &[CodePointRange] = &[
    (0x3006, 0x3007),
    (0x3021, 0x3029),
    (0x3038, 0x303A),
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFAFF),
    (0x17000, 0x18CFF),
    (0x1B170, 0x1B2FF),
    (0x20000, 0x2FFFF),
    (0x30000, 0x323AF),
];

/// Hiragana letters and iteration marks
pub static HIRAGANA: &[CodePointRange] = &[
    (0x3041, 0x3096),
    (0x309D, 0x309F),
    (0x1B001, 0x1B11F),
    (0x1B132, 0x1B132),
    (0x1B150, 0x1B152),
    (0x1F200, 0x1F200),
];

/// Scripts whose words are not delimited by spaces and need dictionary
/// segmentation (Line_Break = Complex_Context)
pub static COMPLEX_CONTEXT: &[CodePointRange] = &[
    (0x0E00, 0x0E7F),
    (0x0E80, 0x0EFF),
    (0x1000, 0x109F),
    (0x1780, 0x17FF),
    (0x1950, 0x197F),
    (0x1980, 0x19DF),
    (0x19E0, 0x19FF),
    (0x1A20, 0x1AAF),
    (0xA9E0, 0xA9FF),
    (0xAA60, 0xAA7F),
    (0xAA80, 0xAADF),
];

/// Look up the category assigned to `cp` by a category table
#[inline]
pub fn lookup_category(table: &[CategoryRange], cp: u32) -> Option<WordBreakCategory> {
    table
        .binary_search_by(|&(start, end, _)| {
            if end < cp {
                std::cmp::Ordering::Less
            } else if start > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .ok()
        .map(|idx| table[idx].2)
}

/// Check whether `cp` falls inside any interval of a range table
#[inline]
pub fn in_ranges(table: &[CodePointRange], cp: u32) -> bool {
    table
        .binary_search_by(|&(start, end)| {
            if end < cp {
                std::cmp::Ordering::Less
            } else if start > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

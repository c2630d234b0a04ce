//! Core value types shared by the adapter and the segmenter

use super::category::WordBreakCategory;
use super::classifier;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A decoded Unicode scalar value with its position in the source buffer
///
/// `offset` and `len` are measured in code units of the source encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodePoint {
    /// The scalar value (U+FFFD for replaced malformed input)
    pub scalar: char,
    /// Offset of the first code unit
    pub offset: usize,
    /// Number of code units
    pub len: usize,
}

impl CodePoint {
    /// Create a new code point record
    pub fn new(scalar: char, offset: usize, len: usize) -> Self {
        Self {
            scalar,
            offset,
            len,
        }
    }

    /// Offset one past the last code unit
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Coarse description of what a segment contains
///
/// Mirrors the rule status values of ICU's word break iterator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Whitespace, punctuation, symbols and other non-word runs
    #[default]
    None,
    /// Numbers
    Number,
    /// Words containing letters
    Letter,
    /// Kana
    Kana,
    /// Ideographs
    Ideographic,
}

impl SegmentKind {
    /// Whether the segment is a word (anything but `None`)
    #[inline]
    pub fn is_word(self) -> bool {
        self != SegmentKind::None
    }

    /// Lowercase name of the kind
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentKind::None => "none",
            SegmentKind::Number => "number",
            SegmentKind::Letter => "letter",
            SegmentKind::Kana => "kana",
            SegmentKind::Ideographic => "ideographic",
        }
    }

    /// Fold one more code point into the kind of the segment containing it
    ///
    /// Letters dominate kana, kana dominates ideographs, ideographs dominate
    /// numbers.
    pub fn absorb(self, ch: char, category: WordBreakCategory) -> SegmentKind {
        let kind = match category {
            WordBreakCategory::ALetter | WordBreakCategory::HebrewLetter => SegmentKind::Letter,
            WordBreakCategory::Katakana => SegmentKind::Kana,
            WordBreakCategory::Numeric => SegmentKind::Number,
            WordBreakCategory::Other if classifier::is_hiragana(ch) => SegmentKind::Kana,
            WordBreakCategory::Other if classifier::is_ideographic(ch) => {
                SegmentKind::Ideographic
            }
            _ => SegmentKind::None,
        };
        if kind.rank() > self.rank() {
            kind
        } else {
            self
        }
    }

    fn rank(self) -> u8 {
        match self {
            SegmentKind::None => 0,
            SegmentKind::Number => 1,
            SegmentKind::Ideographic => 2,
            SegmentKind::Kana => 3,
            SegmentKind::Letter => 4,
        }
    }
}

/// A half-open range of code units between two word boundaries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// First code unit of the segment
    pub start: usize,
    /// One past the last code unit
    pub end: usize,
    /// What the segment contains
    pub kind: SegmentKind,
}

impl Segment {
    /// Create a new segment
    pub fn new(start: usize, end: usize, kind: SegmentKind) -> Self {
        Self { start, end, kind }
    }

    /// Length in code units
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the segment is empty (never true for emitted segments)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Code unit range, usable to index a code unit slice
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Byte range for a code unit width
    #[inline]
    pub fn byte_range(&self, unit_width: usize) -> Range<usize> {
        self.start * unit_width..self.end * unit_width
    }

    /// `(start_offset, length)` pair in code units
    #[inline]
    pub fn as_pair(&self) -> (usize, usize) {
        (self.start, self.len())
    }

    /// Whether the segment is a word
    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind.is_word()
    }
}

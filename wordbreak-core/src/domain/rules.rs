//! Word boundary rule engine
//!
//! Implements the default word boundary rules of Unicode Standard Annex #29.
//! Rules are evaluated in priority order and the first matching rule
//! decides. Context lookups go through [`ContextCursor`], which skips
//! transparent code points.

use super::category::{CharProps, WordBreakCategory as W};
use super::cursor::ContextCursor;
use std::fmt;

/// The rule that produced a boundary decision
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BreakRule {
    /// Break at the start of text
    StartOfText,
    /// Break at the end of text
    EndOfText,
    /// Keep CR LF together
    CrLf,
    /// Break after a hard line separator
    AfterNewline,
    /// Break before a hard line separator
    BeforeNewline,
    /// Keep ZWJ emoji sequences together
    ZwjPictographic,
    /// Keep runs of horizontal whitespace together
    WhitespaceRun,
    /// Keep Extend, Format and ZWJ attached to what precedes them
    Attached,
    /// Keep letters together
    Letters,
    /// Keep letters joined by a mid-letter punctuation (before it)
    LetterBeforeMid,
    /// Keep letters joined by a mid-letter punctuation (after it)
    LetterAfterMid,
    /// Keep Hebrew letter followed by apostrophe
    HebrewApostrophe,
    /// Keep Hebrew letters joined by a quotation mark (before it)
    HebrewBeforeQuote,
    /// Keep Hebrew letters joined by a quotation mark (after it)
    HebrewAfterQuote,
    /// Keep digits together
    Digits,
    /// Keep a letter followed by a digit
    LetterDigit,
    /// Keep a digit followed by a letter
    DigitLetter,
    /// Keep digits joined by a numeric separator (after it)
    DigitAfterSeparator,
    /// Keep digits joined by a numeric separator (before it)
    DigitBeforeSeparator,
    /// Keep Katakana together
    Katakana,
    /// Keep alphanumerics followed by a connector
    BeforeConnector,
    /// Keep a connector followed by alphanumerics
    AfterConnector,
    /// Keep regional indicators paired into flags
    RegionalPair,
    /// Break everywhere else
    Otherwise,
}

impl BreakRule {
    /// Rule identifier as numbered in UAX #29
    pub fn id(self) -> &'static str {
        match self {
            BreakRule::StartOfText => "WB1",
            BreakRule::EndOfText => "WB2",
            BreakRule::CrLf => "WB3",
            BreakRule::AfterNewline => "WB3a",
            BreakRule::BeforeNewline => "WB3b",
            BreakRule::ZwjPictographic => "WB3c",
            BreakRule::WhitespaceRun => "WB3d",
            BreakRule::Attached => "WB4",
            BreakRule::Letters => "WB5",
            BreakRule::LetterBeforeMid => "WB6",
            BreakRule::LetterAfterMid => "WB7",
            BreakRule::HebrewApostrophe => "WB7a",
            BreakRule::HebrewBeforeQuote => "WB7b",
            BreakRule::HebrewAfterQuote => "WB7c",
            BreakRule::Digits => "WB8",
            BreakRule::LetterDigit => "WB9",
            BreakRule::DigitLetter => "WB10",
            BreakRule::DigitAfterSeparator => "WB11",
            BreakRule::DigitBeforeSeparator => "WB12",
            BreakRule::Katakana => "WB13",
            BreakRule::BeforeConnector => "WB13a",
            BreakRule::AfterConnector => "WB13b",
            BreakRule::RegionalPair => "WB15/16",
            BreakRule::Otherwise => "WB999",
        }
    }
}

impl fmt::Display for BreakRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Outcome of evaluating the rules at one position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryDecision {
    /// Whether a word boundary exists before the code point
    pub is_boundary: bool,
    /// Rule that decided
    pub rule: BreakRule,
}

impl BoundaryDecision {
    const fn split(rule: BreakRule) -> Self {
        Self {
            is_boundary: true,
            rule,
        }
    }

    const fn join(rule: BreakRule) -> Self {
        Self {
            is_boundary: false,
            rule,
        }
    }
}

/// Memo of the last regional indicator run length
///
/// A forward scan asks for the run ending at each regional indicator in
/// order, so remembering the previous answer keeps the whole scan linear.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionalRun {
    last: Option<usize>,
    len: usize,
}

/// Boundary rule engine over a classified stream
#[derive(Debug, Clone, Copy)]
pub struct BoundaryRules<'s> {
    cursor: ContextCursor<'s>,
}

impl<'s> BoundaryRules<'s> {
    /// Create a rule engine over `stream`
    pub fn new(stream: &'s [CharProps]) -> Self {
        Self {
            cursor: ContextCursor::new(stream),
        }
    }

    /// Number of code points in the stream
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Check if the stream is empty
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// Whether a word boundary occurs immediately before code point `index`
    ///
    /// Index 0 and index `len()` are always boundaries.
    pub fn boundary_before(&self, index: usize) -> bool {
        self.decide(index).is_boundary
    }

    /// Evaluate the rules at `index` and report which rule decided
    pub fn decide(&self, index: usize) -> BoundaryDecision {
        self.decide_with(index, &mut RegionalRun::default())
    }

    /// Evaluate the rules at `index`, reusing a regional indicator memo
    ///
    /// Callers scanning forward should keep one memo for the whole scan.
    pub fn decide_with(&self, index: usize, run: &mut RegionalRun) -> BoundaryDecision {
        if index == 0 {
            return BoundaryDecision::split(BreakRule::StartOfText);
        }
        if index >= self.cursor.len() {
            return BoundaryDecision::split(BreakRule::EndOfText);
        }

        let cur = self.cursor.props(index);
        let raw_prev = self.cursor.category(index - 1);
        let c = cur.category;

        if raw_prev == W::CR && c == W::LF {
            return BoundaryDecision::join(BreakRule::CrLf);
        }
        if raw_prev.is_newline() {
            return BoundaryDecision::split(BreakRule::AfterNewline);
        }
        if c.is_newline() {
            return BoundaryDecision::split(BreakRule::BeforeNewline);
        }
        if raw_prev == W::ZWJ && cur.extended_pictographic {
            return BoundaryDecision::join(BreakRule::ZwjPictographic);
        }
        if raw_prev == W::WSegSpace && c == W::WSegSpace {
            return BoundaryDecision::join(BreakRule::WhitespaceRun);
        }
        if c.is_transparent() {
            return BoundaryDecision::join(BreakRule::Attached);
        }

        let Some(prev_index) = self.cursor.prev_significant(index) else {
            return BoundaryDecision::split(BreakRule::StartOfText);
        };
        let p = self.cursor.category(prev_index);
        let before_prev = self.cursor.prev_category(prev_index);
        let next = self.cursor.next_category(index);

        if p.is_ah_letter() && c.is_ah_letter() {
            return BoundaryDecision::join(BreakRule::Letters);
        }
        if p.is_ah_letter()
            && (c == W::MidLetter || c.is_mid_num_let_q())
            && next.is_some_and(W::is_ah_letter)
        {
            return BoundaryDecision::join(BreakRule::LetterBeforeMid);
        }
        if (p == W::MidLetter || p.is_mid_num_let_q())
            && c.is_ah_letter()
            && before_prev.is_some_and(W::is_ah_letter)
        {
            return BoundaryDecision::join(BreakRule::LetterAfterMid);
        }
        if p == W::HebrewLetter && c == W::SingleQuote {
            return BoundaryDecision::join(BreakRule::HebrewApostrophe);
        }
        if p == W::HebrewLetter && c == W::DoubleQuote && next == Some(W::HebrewLetter) {
            return BoundaryDecision::join(BreakRule::HebrewBeforeQuote);
        }
        if p == W::DoubleQuote && c == W::HebrewLetter && before_prev == Some(W::HebrewLetter) {
            return BoundaryDecision::join(BreakRule::HebrewAfterQuote);
        }
        if p == W::Numeric && c == W::Numeric {
            return BoundaryDecision::join(BreakRule::Digits);
        }
        if p.is_ah_letter() && c == W::Numeric {
            return BoundaryDecision::join(BreakRule::LetterDigit);
        }
        if p == W::Numeric && c.is_ah_letter() {
            return BoundaryDecision::join(BreakRule::DigitLetter);
        }
        if (p == W::MidNum || p.is_mid_num_let_q())
            && c == W::Numeric
            && before_prev == Some(W::Numeric)
        {
            return BoundaryDecision::join(BreakRule::DigitAfterSeparator);
        }
        if p == W::Numeric
            && (c == W::MidNum || c.is_mid_num_let_q())
            && next == Some(W::Numeric)
        {
            return BoundaryDecision::join(BreakRule::DigitBeforeSeparator);
        }
        if p == W::Katakana && c == W::Katakana {
            return BoundaryDecision::join(BreakRule::Katakana);
        }
        if (p.is_ah_letter() || matches!(p, W::Numeric | W::Katakana | W::ExtendNumLet))
            && c == W::ExtendNumLet
        {
            return BoundaryDecision::join(BreakRule::BeforeConnector);
        }
        if p == W::ExtendNumLet && (c.is_ah_letter() || matches!(c, W::Numeric | W::Katakana)) {
            return BoundaryDecision::join(BreakRule::AfterConnector);
        }
        if p == W::RegionalIndicator
            && c == W::RegionalIndicator
            && self.regional_run_ending_at(prev_index, run) % 2 == 1
        {
            return BoundaryDecision::join(BreakRule::RegionalPair);
        }

        BoundaryDecision::split(BreakRule::Otherwise)
    }

    /// Number of consecutive significant regional indicators ending at
    /// (and including) `index`
    fn regional_run_ending_at(&self, index: usize, run: &mut RegionalRun) -> usize {
        if run.last == Some(index) {
            return run.len;
        }

        let mut len = 1;
        let mut cursor = index;
        while let Some(prev) = self.cursor.prev_significant(cursor) {
            if self.cursor.category(prev) != W::RegionalIndicator {
                break;
            }
            if run.last == Some(prev) {
                len += run.len;
                break;
            }
            len += 1;
            cursor = prev;
        }

        run.last = Some(index);
        run.len = len;
        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::{UnicodeClassifier, WordBreakClassifier};

    fn props_of(text: &str) -> Vec<CharProps> {
        text.chars().map(|ch| UnicodeClassifier.props(ch)).collect()
    }

    fn boundaries(text: &str) -> Vec<usize> {
        let stream = props_of(text);
        let rules = BoundaryRules::new(&stream);
        (0..=stream.len())
            .filter(|&i| rules.boundary_before(i))
            .collect()
    }

    #[test]
    fn test_edges_are_boundaries() {
        let stream = props_of("ab");
        let rules = BoundaryRules::new(&stream);
        assert_eq!(rules.decide(0).rule, BreakRule::StartOfText);
        assert_eq!(rules.decide(2).rule, BreakRule::EndOfText);
        assert!(rules.boundary_before(0));
        assert!(rules.boundary_before(2));
        assert!(!rules.boundary_before(1));
    }

    #[test]
    fn test_empty_stream() {
        let rules = BoundaryRules::new(&[]);
        assert!(rules.is_empty());
        assert!(rules.boundary_before(0));
    }

    #[test]
    fn test_contraction_keeps_apostrophe() {
        assert_eq!(boundaries("it's"), vec![0, 4]);
        let stream = props_of("it's");
        let rules = BoundaryRules::new(&stream);
        assert_eq!(rules.decide(2).rule, BreakRule::LetterBeforeMid);
        assert_eq!(rules.decide(3).rule, BreakRule::LetterAfterMid);
    }

    #[test]
    fn test_mid_letter_needs_both_neighbours() {
        // trailing apostrophe: no following letter
        assert_eq!(boundaries("dogs'"), vec![0, 4, 5]);
        // leading apostrophe: no preceding letter
        assert_eq!(boundaries("'tis"), vec![0, 1, 4]);
    }

    #[test]
    fn test_alphanumeric_runs() {
        assert_eq!(boundaries("A1B2"), vec![0, 4]);
        assert_eq!(boundaries("1A"), vec![0, 2]);
    }

    #[test]
    fn test_numeric_separators() {
        assert_eq!(boundaries("3.14"), vec![0, 4]);
        assert_eq!(boundaries("1,000"), vec![0, 5]);
        assert_eq!(boundaries("1,"), vec![0, 1, 2]);
        let stream = props_of("1,000");
        let rules = BoundaryRules::new(&stream);
        assert_eq!(rules.decide(1).rule, BreakRule::DigitBeforeSeparator);
        assert_eq!(rules.decide(2).rule, BreakRule::DigitAfterSeparator);
    }

    #[test]
    fn test_whitespace_breaks_both_sides() {
        assert_eq!(boundaries("foo bar"), vec![0, 3, 4, 7]);
        assert_eq!(boundaries("a  b"), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_whitespace_run_uses_raw_adjacency() {
        // a mark between spaces ends the run
        assert_eq!(boundaries("  \u{0301} "), vec![0, 3, 4]);
        let stream = props_of("  \u{0301} ");
        let rules = BoundaryRules::new(&stream);
        assert_eq!(rules.decide(1).rule, BreakRule::WhitespaceRun);
        assert_eq!(rules.decide(2).rule, BreakRule::Attached);
        assert!(rules.boundary_before(3));
    }

    #[test]
    fn test_crlf_and_newlines() {
        assert_eq!(boundaries("a\r\nb"), vec![0, 1, 3, 4]);
        assert_eq!(boundaries("\n\n"), vec![0, 1, 2]);
        let stream = props_of("\r\n");
        let rules = BoundaryRules::new(&stream);
        assert_eq!(rules.decide(1).rule, BreakRule::CrLf);
    }

    #[test]
    fn test_extend_attaches_and_is_skipped() {
        // e + combining acute stays whole, and context skips the mark
        assert_eq!(boundaries("e\u{0301}'s"), vec![0, 4]);
        // mark after newline starts its own segment
        assert_eq!(boundaries("\n\u{0301}a"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_katakana_and_connectors() {
        assert_eq!(boundaries("カタカナ"), vec![0, 4]);
        assert_eq!(boundaries("foo_bar"), vec![0, 7]);
        assert_eq!(boundaries("_1"), vec![0, 2]);
        assert_eq!(boundaries("カ_a"), vec![0, 3]);
    }

    #[test]
    fn test_hebrew_quotes() {
        // Hebrew letter, gershayim as ASCII double quote, Hebrew letter
        assert_eq!(boundaries("\u{05E6}\"\u{05D4}"), vec![0, 3]);
        assert_eq!(boundaries("\u{05D0}'"), vec![0, 2]);
        assert_eq!(boundaries("a\"b"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_regional_indicator_pairs() {
        let flags = "\u{1F1EF}\u{1F1F5}\u{1F1FA}\u{1F1F8}\u{1F1EB}";
        assert_eq!(boundaries(flags), vec![0, 2, 4, 5]);
    }

    #[test]
    fn test_regional_memo_matches_stateless() {
        let flags = "\u{1F1EF}\u{1F1F5}\u{1F1FA}\u{1F1F8}\u{1F1EB}\u{1F1F7}\u{1F1E9}";
        let stream = props_of(flags);
        let rules = BoundaryRules::new(&stream);
        let mut run = RegionalRun::default();
        for i in 0..=stream.len() {
            assert_eq!(rules.decide_with(i, &mut run), rules.decide(i), "index {i}");
        }
    }

    #[test]
    fn test_zwj_emoji_sequence() {
        // man, ZWJ, laptop
        assert_eq!(boundaries("\u{1F468}\u{200D}\u{1F4BB}"), vec![0, 3]);
        // skin tone modifier is Extend
        assert_eq!(boundaries("\u{1F44D}\u{1F3FD}"), vec![0, 2]);
    }

    #[test]
    fn test_ideographs_break_per_code_point() {
        assert_eq!(boundaries("漢字"), vec![0, 1, 2]);
        assert_eq!(boundaries("ひらがな"), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_rule_ids() {
        assert_eq!(BreakRule::Attached.id(), "WB4");
        assert_eq!(BreakRule::RegionalPair.to_string(), "WB15/16");
        assert_eq!(BreakRule::Otherwise.id(), "WB999");
    }
}

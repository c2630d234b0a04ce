//! Context cursor over a classified code point stream
//!
//! Word-break rules look at the previous, the one-before-previous and the
//! next code point, but Extend, Format and ZWJ code points are invisible to
//! those rules. The cursor peeks past them without touching the stream, so
//! the stream stays read-only and can be shared between threads.

use super::category::{CharProps, WordBreakCategory};

/// Read-only lookbehind/lookahead over a category stream
#[derive(Debug, Clone, Copy)]
pub struct ContextCursor<'s> {
    stream: &'s [CharProps],
}

impl<'s> ContextCursor<'s> {
    /// Create a cursor over `stream`
    pub fn new(stream: &'s [CharProps]) -> Self {
        Self { stream }
    }

    /// Number of code points in the stream
    #[inline]
    pub fn len(&self) -> usize {
        self.stream.len()
    }

    /// Check if the stream is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stream.is_empty()
    }

    /// Category at `index`
    #[inline]
    pub fn category(&self, index: usize) -> WordBreakCategory {
        self.stream[index].category
    }

    /// Properties at `index`
    #[inline]
    pub fn props(&self, index: usize) -> CharProps {
        self.stream[index]
    }

    /// Index of the significant code point that owns position `index - 1`
    ///
    /// Walks back over transparent code points. A transparent run that
    /// starts the text or directly follows a newline has nothing to attach
    /// to, so its first code point is returned and acts as itself.
    pub fn prev_significant(&self, index: usize) -> Option<usize> {
        if index == 0 || index > self.stream.len() {
            return None;
        }

        let mut j = index - 1;
        while j > 0
            && self.stream[j].category.is_transparent()
            && !self.stream[j - 1].category.is_newline()
        {
            j -= 1;
        }
        Some(j)
    }

    /// Index of the first significant code point after `index`
    ///
    /// Transparent code points following `index` belong to it and are
    /// skipped. Returns `None` at the end of the stream.
    pub fn next_significant(&self, index: usize) -> Option<usize> {
        let mut k = index + 1;
        while k < self.stream.len() && self.stream[k].category.is_transparent() {
            k += 1;
        }
        (k < self.stream.len()).then_some(k)
    }

    /// Category of the significant code point before `index`
    #[inline]
    pub fn prev_category(&self, index: usize) -> Option<WordBreakCategory> {
        self.prev_significant(index).map(|j| self.category(j))
    }

    /// Category of the significant code point after `index`
    #[inline]
    pub fn next_category(&self, index: usize) -> Option<WordBreakCategory> {
        self.next_significant(index).map(|k| self.category(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WordBreakCategory as W;

    fn stream(categories: &[WordBreakCategory]) -> Vec<CharProps> {
        categories.iter().copied().map(CharProps::new).collect()
    }

    #[test]
    fn test_adjacent_context() {
        let s = stream(&[W::ALetter, W::MidLetter, W::ALetter]);
        let cursor = ContextCursor::new(&s);

        assert_eq!(cursor.prev_significant(0), None);
        assert_eq!(cursor.prev_significant(1), Some(0));
        assert_eq!(cursor.prev_significant(2), Some(1));
        assert_eq!(cursor.next_significant(0), Some(1));
        assert_eq!(cursor.next_significant(2), None);
    }

    #[test]
    fn test_skips_transparent_code_points() {
        let s = stream(&[W::ALetter, W::Extend, W::Format, W::MidLetter, W::ZWJ, W::ALetter]);
        let cursor = ContextCursor::new(&s);

        assert_eq!(cursor.prev_significant(3), Some(0));
        assert_eq!(cursor.prev_category(5), Some(W::MidLetter));
        assert_eq!(cursor.next_significant(0), Some(3));
        assert_eq!(cursor.next_category(3), Some(W::ALetter));
    }

    #[test]
    fn test_transparent_run_after_newline_acts_as_itself() {
        let s = stream(&[W::LF, W::Extend, W::Extend, W::ALetter]);
        let cursor = ContextCursor::new(&s);

        assert_eq!(cursor.prev_significant(3), Some(1));
        assert_eq!(cursor.prev_category(3), Some(W::Extend));
    }

    #[test]
    fn test_transparent_run_at_start() {
        let s = stream(&[W::Extend, W::Extend, W::ALetter]);
        let cursor = ContextCursor::new(&s);

        assert_eq!(cursor.prev_significant(2), Some(0));
        assert_eq!(cursor.prev_category(2), Some(W::Extend));
    }

    #[test]
    fn test_trailing_transparent_has_no_next() {
        let s = stream(&[W::ALetter, W::Extend, W::Extend]);
        let cursor = ContextCursor::new(&s);

        assert_eq!(cursor.next_significant(0), None);
        assert!(!cursor.is_empty());
        assert_eq!(cursor.len(), 3);
    }
}

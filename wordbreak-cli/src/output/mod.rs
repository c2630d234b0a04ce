//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use wordbreak_core::{Encoding, SegmentKind};

/// One emitted segment, decoded for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentData {
    /// Segment text
    pub text: String,
    /// Start offset in code units of the segmented buffer
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// Kind of token
    pub kind: SegmentKind,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Begin the segments of one input source
    fn start_source(&mut self, name: &str, encoding: Encoding) -> Result<()>;

    /// Format and output a single segment
    fn format_segment(&mut self, segment: &SegmentData) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Render control characters visibly so each segment stays on one line
pub(crate) fn visible(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u{2028}"),
            '\u{2029}' => out.push_str("\\u{2029}"),
            other => out.push(other),
        }
    }
    out
}

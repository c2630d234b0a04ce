//! Markdown output formatter

use super::{visible, OutputFormatter, SegmentData};
use anyhow::Result;
use std::io::Write;
use wordbreak_core::Encoding;

/// Markdown formatter - outputs segments as a markdown list per source
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    segment_count: usize,
    source_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segment_count: 0,
            source_count: 0,
        }
    }

    /// Consume the formatter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn start_source(&mut self, name: &str, encoding: Encoding) -> Result<()> {
        if self.source_count > 0 {
            writeln!(self.writer)?;
        }
        self.source_count += 1;
        writeln!(self.writer, "## {name} ({encoding})")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_segment(&mut self, segment: &SegmentData) -> Result<()> {
        self.segment_count += 1;
        writeln!(
            self.writer,
            "{}. `{}` *{}* [{}..{})",
            self.segment_count,
            visible(&segment.text),
            segment.kind.as_str(),
            segment.start,
            segment.end
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total segments: {}*", self.segment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordbreak_core::SegmentKind;

    #[test]
    fn test_markdown_list() {
        let mut formatter = MarkdownFormatter::new(Vec::new());
        formatter.start_source("notes.md", Encoding::Utf8).unwrap();
        formatter
            .format_segment(&SegmentData {
                text: "カタカナ".to_string(),
                start: 0,
                end: 12,
                kind: SegmentKind::Kana,
            })
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(output.starts_with("## notes.md (utf-8)\n\n"));
        assert!(output.contains("1. `カタカナ` *kana* [0..12)"));
        assert!(output.ends_with("---\n*Total segments: 1*\n"));
    }
}

//! Plain text output formatter

use super::{visible, OutputFormatter, SegmentData};
use anyhow::Result;
use std::io::Write;
use wordbreak_core::Encoding;

/// Plain text formatter - outputs one segment per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn start_source(&mut self, _name: &str, _encoding: Encoding) -> Result<()> {
        Ok(())
    }

    fn format_segment(&mut self, segment: &SegmentData) -> Result<()> {
        writeln!(self.writer, "{}", visible(&segment.text))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

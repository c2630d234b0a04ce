//! JSON output formatter

use super::{OutputFormatter, SegmentData};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wordbreak_core::Encoding;

/// JSON formatter - outputs one object per input source
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    sources: Vec<SourceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceData {
    /// Input name
    pub source: String,
    /// Encoding whose code units the offsets count
    pub encoding: Encoding,
    /// Segments in order
    pub segments: Vec<SegmentData>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            sources: Vec::new(),
        }
    }

    /// Consume the formatter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn start_source(&mut self, name: &str, encoding: Encoding) -> Result<()> {
        self.sources.push(SourceData {
            source: name.to_string(),
            encoding,
            segments: Vec::new(),
        });
        Ok(())
    }

    fn format_segment(&mut self, segment: &SegmentData) -> Result<()> {
        match self.sources.last_mut() {
            Some(source) => source.segments.push(segment.clone()),
            None => anyhow::bail!("segment emitted before any input source"),
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sources)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sources)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

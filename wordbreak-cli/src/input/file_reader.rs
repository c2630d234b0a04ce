//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Raw byte reader; decoding is left to the segmenter
pub struct FileReader;

impl FileReader {
    /// Read a file's raw bytes
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        let content =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(content)
    }

    /// Read all of stdin
    pub fn read_stdin() -> Result<Vec<u8>> {
        let mut content = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }
}

/// Where one input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input (`-i -`)
    Stdin,
    /// A resolved file
    File(PathBuf),
}

impl InputSource {
    /// Display name used in logs and output
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Read the raw bytes
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            InputSource::Stdin => FileReader::read_stdin(),
            InputSource::File(path) => FileReader::read_bytes(path),
        }
    }
}

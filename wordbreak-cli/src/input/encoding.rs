//! Input encoding selection
//!
//! UTF encodings are segmented in place so offsets refer to the input's own
//! code units. Any other WHATWG encoding is transcoded to UTF-8 first.

use crate::error::CliError;
use std::fmt;
use std::str::FromStr;
use wordbreak_core::{Encoding, MalformedPolicy};

/// How raw input bytes become a segmentable buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEncoding {
    /// Sniff a UTF-8 or UTF-16 byte order mark, defaulting to UTF-8
    Auto,
    /// Segment the bytes as they are
    Native(Encoding),
    /// Transcode to UTF-8 before segmenting
    Transcode(&'static encoding_rs::Encoding),
}

/// Bytes ready for segmentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedInput {
    /// Buffer handed to the segmenter
    pub bytes: Vec<u8>,
    /// Encoding of `bytes`; segment offsets count its code units
    pub encoding: Encoding,
    /// Name of the encoding the input was read as
    pub source_encoding: &'static str,
}

impl InputEncoding {
    /// Turn raw bytes into a buffer for the segmenter
    ///
    /// A detected byte order mark is removed so it does not show up as a
    /// segment.
    pub fn prepare(self, mut bytes: Vec<u8>, policy: MalformedPolicy) -> Result<PreparedInput, CliError> {
        match self {
            InputEncoding::Auto => {
                let encoding = match encoding_rs::Encoding::for_bom(&bytes) {
                    Some((found, bom_len)) => {
                        bytes.drain(..bom_len);
                        native_for(found).unwrap_or_default()
                    }
                    None => Encoding::Utf8,
                };
                log::debug!("Detected input encoding: {encoding}");
                Ok(PreparedInput {
                    bytes,
                    encoding,
                    source_encoding: encoding.label(),
                })
            }
            InputEncoding::Native(encoding) => Ok(PreparedInput {
                bytes,
                encoding,
                source_encoding: encoding.label(),
            }),
            InputEncoding::Transcode(from) => {
                let (text, actual, had_errors) = from.decode(&bytes);
                if had_errors && policy == MalformedPolicy::Reject {
                    return Err(CliError::MalformedInput(format!(
                        "input is not valid {}",
                        actual.name()
                    )));
                }
                if had_errors {
                    log::warn!("Replaced malformed {} sequences", actual.name());
                }
                Ok(PreparedInput {
                    bytes: text.into_owned().into_bytes(),
                    encoding: Encoding::Utf8,
                    source_encoding: actual.name(),
                })
            }
        }
    }
}

impl FromStr for InputEncoding {
    type Err = CliError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if label.trim().eq_ignore_ascii_case("auto") {
            return Ok(InputEncoding::Auto);
        }
        if let Ok(encoding) = label.parse::<Encoding>() {
            return Ok(InputEncoding::Native(encoding));
        }

        let found = encoding_rs::Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| CliError::UnknownEncoding(label.to_string()))?;
        Ok(match native_for(found) {
            Some(encoding) => InputEncoding::Native(encoding),
            None => InputEncoding::Transcode(found),
        })
    }
}

impl fmt::Display for InputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEncoding::Auto => f.write_str("auto"),
            InputEncoding::Native(encoding) => write!(f, "{encoding}"),
            InputEncoding::Transcode(from) => f.write_str(from.name()),
        }
    }
}

fn native_for(encoding: &'static encoding_rs::Encoding) -> Option<Encoding> {
    if encoding == encoding_rs::UTF_8 {
        Some(Encoding::Utf8)
    } else if encoding == encoding_rs::UTF_16LE {
        Some(Encoding::Utf16Le)
    } else if encoding == encoding_rs::UTF_16BE {
        Some(Encoding::Utf16Be)
    } else {
        None
    }
}

//! Error types for word segmentation
//!
//! Every failure the engine can report is an encoding-validity failure
//! detected while decoding the input buffer, or a configuration error. The
//! rule engine and the segmenter themselves are total.

use crate::adapter::Encoding;
use thiserror::Error;

/// Errors reported while preparing a buffer for segmentation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// Buffer length is not a whole number of code units
    #[error("buffer of {len} bytes is not a multiple of the {width}-byte {encoding} code unit")]
    InvalidEncodingLength {
        /// Declared buffer length in bytes
        len: usize,
        /// Code unit width in bytes
        width: usize,
        /// Declared encoding
        encoding: Encoding,
    },

    /// UTF-16 surrogate without its partner
    #[error("unpaired surrogate 0x{unit:04X} at code unit {offset}")]
    UnpairedSurrogate {
        /// The offending code unit
        unit: u16,
        /// Offset of the code unit, in code units
        offset: usize,
    },

    /// A code unit sequence that does not decode to a scalar value
    #[error("malformed {encoding} sequence at code unit {offset}: {reason}")]
    MalformedSequence {
        /// Declared encoding
        encoding: Encoding,
        /// Offset of the first bad code unit, in code units
        offset: usize,
        /// Short diagnostic
        reason: &'static str,
    },

    /// Configuration rejected by validation or parsing
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SegmentError {
    /// Stable machine-readable name of the error, for host bindings
    pub fn code(&self) -> &'static str {
        match self {
            SegmentError::InvalidEncodingLength { .. } => "invalid_encoding_length",
            SegmentError::UnpairedSurrogate { .. } => "unpaired_surrogate",
            SegmentError::MalformedSequence { .. } => "malformed_sequence",
            SegmentError::InvalidConfig(_) => "invalid_config",
        }
    }

    /// Code unit offset at which decoding failed, if any
    pub fn offset(&self) -> Option<usize> {
        match self {
            SegmentError::UnpairedSurrogate { offset, .. }
            | SegmentError::MalformedSequence { offset, .. } => Some(*offset),
            SegmentError::InvalidEncodingLength { .. } | SegmentError::InvalidConfig(_) => None,
        }
    }
}

impl From<toml::de::Error> for SegmentError {
    fn from(err: toml::de::Error) -> Self {
        SegmentError::InvalidConfig(err.to_string())
    }
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, SegmentError>;

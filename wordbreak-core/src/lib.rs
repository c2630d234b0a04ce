//! Unicode word-boundary segmentation
//!
//! This crate splits text at word boundaries following the default Unicode
//! word-break rules (UAX #29) instead of naive whitespace splitting. Every
//! segment is a half-open range of code units over the caller's buffer, so
//! results can be mapped back to the original bytes without copying.
//!
//! # Architecture
//!
//! - **Domain layer**: character classification, the context cursor and the
//!   boundary rule engine. Pure and allocation-free.
//! - **Segmenter**: drives the rules forward and yields segments lazily.
//! - **Adapter layer**: decodes UTF-8, UTF-16 and UTF-32 buffers and slices
//!   them zero-copy.
//!
//! # Example
//!
//! ```rust
//! use wordbreak_core::{Encoding, Segmenter, SegmentKind, TextBuffer};
//!
//! let segmenter = Segmenter::new();
//!
//! // UTF-8 text
//! let words = segmenter.split_str("The U.S. can't wait.");
//! assert_eq!(words, vec!["The", " ", "U.S", ".", " ", "can't", " ", "wait", "."]);
//!
//! // UTF-16 bytes with offsets in code units
//! let bytes: Vec<u8> = "3.14 π".encode_utf16().flat_map(u16::to_le_bytes).collect();
//! let buffer = TextBuffer::new(&bytes, Encoding::Utf16Le).unwrap();
//! let segmentation = segmenter.segment(&buffer).unwrap();
//! let kinds: Vec<SegmentKind> = segmentation.iter().map(|s| s.kind).collect();
//! assert_eq!(kinds, vec![SegmentKind::Number, SegmentKind::None, SegmentKind::Letter]);
//! ```

#![warn(missing_docs)]

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod segmenter;

pub use adapter::{Encoding, MalformedPolicy, TextBuffer};
pub use config::{SegmenterConfig, SegmenterConfigBuilder};
pub use domain::{
    classify, BoundaryRules, CharProps, CodePoint, Segment, SegmentKind, UnicodeClassifier,
    WordBreakCategory, WordBreakClassifier,
};
pub use error::{Result, SegmentError};
pub use segmenter::{
    split_utf16_bytes, split_words, OwnedSegmentation, Segmentation, Segmenter, Segments,
};

//! Zero-copy view over a caller-owned text buffer

use super::encoding::{self, Encoding, MalformedPolicy};
use crate::domain::{CodePoint, Segment};
use crate::error::{Result, SegmentError};

/// A borrowed text buffer with a declared encoding
///
/// The buffer is never copied or converted. Slices returned by
/// [`TextBuffer::slice`] borrow from the caller's bytes, so the caller must
/// keep those bytes alive for as long as the slices are used; the `'a`
/// lifetime enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBuffer<'a> {
    bytes: &'a [u8],
    encoding: Encoding,
}

impl<'a> TextBuffer<'a> {
    /// Wrap `bytes` declared as `encoding`
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidEncodingLength`] when the length is
    /// not a whole number of code units.
    pub fn new(bytes: &'a [u8], encoding: Encoding) -> Result<Self> {
        let width = encoding.code_unit_width();
        if bytes.len() % width != 0 {
            return Err(SegmentError::InvalidEncodingLength {
                len: bytes.len(),
                width,
                encoding,
            });
        }
        Ok(Self { bytes, encoding })
    }

    /// Wrap a string slice (always valid UTF-8)
    pub fn from_text(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            encoding: Encoding::Utf8,
        }
    }

    /// Declared encoding
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Underlying bytes
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Length in code units
    pub fn len_units(&self) -> usize {
        self.bytes.len() / self.encoding.code_unit_width()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode the whole buffer into code points with code-unit offsets
    ///
    /// # Errors
    ///
    /// Returns an encoding error for malformed input under
    /// [`MalformedPolicy::Reject`].
    pub fn decode(&self, policy: MalformedPolicy) -> Result<Vec<CodePoint>> {
        encoding::decode(self.bytes, self.encoding, policy)
    }

    /// Bytes of `segment` within the original buffer
    ///
    /// Returns `None` if the segment does not lie inside this buffer.
    pub fn slice(&self, segment: &Segment) -> Option<&'a [u8]> {
        self.bytes
            .get(segment.byte_range(self.encoding.code_unit_width()))
    }

    /// `segment` as a string slice, for UTF-8 buffers
    ///
    /// Returns `None` for other encodings or when the bytes are not valid
    /// UTF-8 (a replaced malformed sequence).
    pub fn slice_str(&self, segment: &Segment) -> Option<&'a str> {
        if self.encoding != Encoding::Utf8 {
            return None;
        }
        self.slice(segment)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}

impl<'a> From<&'a str> for TextBuffer<'a> {
    fn from(text: &'a str) -> Self {
        TextBuffer::from_text(text)
    }
}

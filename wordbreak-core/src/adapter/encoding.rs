//! Encodings understood by the buffer adapter and their decoders
//!
//! Decoders turn a byte buffer into `CodePoint`s whose offsets are counted in
//! code units of the source encoding, so segment ranges can be mapped back
//! onto the original buffer without any conversion.

use crate::domain::CodePoint;
use crate::error::{Result, SegmentError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text encoding of an input buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// UTF-8, one-byte code units
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    /// UTF-16 little endian, two-byte code units
    #[serde(rename = "utf-16le", alias = "utf16le")]
    Utf16Le,
    /// UTF-16 big endian, two-byte code units
    #[serde(rename = "utf-16be", alias = "utf16be")]
    Utf16Be,
    /// UTF-32 little endian, four-byte code units
    #[serde(rename = "utf-32le", alias = "utf32le")]
    Utf32Le,
    /// UTF-32 big endian, four-byte code units
    #[serde(rename = "utf-32be", alias = "utf32be")]
    Utf32Be,
}

impl Encoding {
    /// All supported encodings
    pub const ALL: [Encoding; 5] = [
        Encoding::Utf8,
        Encoding::Utf16Le,
        Encoding::Utf16Be,
        Encoding::Utf32Le,
        Encoding::Utf32Be,
    ];

    /// UTF-16 in the byte order of the running platform
    pub const fn utf16_native() -> Self {
        if cfg!(target_endian = "big") {
            Encoding::Utf16Be
        } else {
            Encoding::Utf16Le
        }
    }

    /// UTF-32 in the byte order of the running platform
    pub const fn utf32_native() -> Self {
        if cfg!(target_endian = "big") {
            Encoding::Utf32Be
        } else {
            Encoding::Utf32Le
        }
    }

    /// Code unit width in bytes
    pub const fn code_unit_width(self) -> usize {
        match self {
            Encoding::Utf8 => 1,
            Encoding::Utf16Le | Encoding::Utf16Be => 2,
            Encoding::Utf32Le | Encoding::Utf32Be => 4,
        }
    }

    /// Canonical lowercase label
    pub const fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
            Encoding::Utf32Le => "utf-32le",
            Encoding::Utf32Be => "utf-32be",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = SegmentError;

    /// Parse a label; `utf-16` and `utf-32` without a byte order mean the
    /// platform's native order
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "utf-16le" | "utf16le" => Ok(Encoding::Utf16Le),
            "utf-16be" | "utf16be" => Ok(Encoding::Utf16Be),
            "utf-16" | "utf16" => Ok(Encoding::utf16_native()),
            "utf-32le" | "utf32le" => Ok(Encoding::Utf32Le),
            "utf-32be" | "utf32be" => Ok(Encoding::Utf32Be),
            "utf-32" | "utf32" => Ok(Encoding::utf32_native()),
            other => Err(SegmentError::InvalidConfig(format!(
                "unknown encoding '{other}'"
            ))),
        }
    }
}

/// What to do with code units that do not decode to a scalar value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the whole call with an encoding error
    #[default]
    Reject,
    /// Decode each malformed sequence as one U+FFFD covering its code units
    Replace,
}

/// Decode a whole buffer according to `encoding`
pub fn decode(bytes: &[u8], encoding: Encoding, policy: MalformedPolicy) -> Result<Vec<CodePoint>> {
    let width = encoding.code_unit_width();
    if bytes.len() % width != 0 {
        return Err(SegmentError::InvalidEncodingLength {
            len: bytes.len(),
            width,
            encoding,
        });
    }

    let decoded = match encoding {
        Encoding::Utf8 => decode_utf8(bytes, policy),
        Encoding::Utf16Le => decode_utf16(
            bytes
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]])),
            policy,
        ),
        Encoding::Utf16Be => decode_utf16(
            bytes
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]])),
            policy,
        ),
        Encoding::Utf32Le => decode_utf32(
            bytes
                .chunks_exact(4)
                .map(|quad| u32::from_le_bytes([quad[0], quad[1], quad[2], quad[3]])),
            encoding,
            policy,
        ),
        Encoding::Utf32Be => decode_utf32(
            bytes
                .chunks_exact(4)
                .map(|quad| u32::from_be_bytes([quad[0], quad[1], quad[2], quad[3]])),
            encoding,
            policy,
        ),
    }?;

    let replaced = decoded
        .iter()
        .filter(|cp| cp.scalar == char::REPLACEMENT_CHARACTER)
        .count();
    if policy == MalformedPolicy::Replace && replaced > 0 {
        tracing::warn!(
            encoding = %encoding,
            replaced,
            "replaced malformed or literal U+FFFD code points"
        );
    }

    Ok(decoded)
}

/// Decode UTF-8 bytes
pub fn decode_utf8(bytes: &[u8], policy: MalformedPolicy) -> Result<Vec<CodePoint>> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut offset = 0;

    for chunk in bytes.utf8_chunks() {
        for ch in chunk.valid().chars() {
            let len = ch.len_utf8();
            out.push(CodePoint::new(ch, offset, len));
            offset += len;
        }

        let invalid = chunk.invalid();
        if invalid.is_empty() {
            continue;
        }

        match policy {
            MalformedPolicy::Reject => {
                let truncated = offset + invalid.len() == bytes.len();
                return Err(SegmentError::MalformedSequence {
                    encoding: Encoding::Utf8,
                    offset,
                    reason: if truncated {
                        "truncated multi-byte sequence"
                    } else {
                        "invalid byte sequence"
                    },
                });
            }
            MalformedPolicy::Replace => {
                out.push(CodePoint::new(
                    char::REPLACEMENT_CHARACTER,
                    offset,
                    invalid.len(),
                ));
                offset += invalid.len();
            }
        }
    }

    Ok(out)
}

/// Decode a sequence of UTF-16 code units
pub fn decode_utf16<I>(units: I, policy: MalformedPolicy) -> Result<Vec<CodePoint>>
where
    I: IntoIterator<Item = u16>,
{
    let units = units.into_iter();
    let mut out = Vec::with_capacity(units.size_hint().0);
    let mut offset = 0;

    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(ch) => {
                let len = ch.len_utf16();
                out.push(CodePoint::new(ch, offset, len));
                offset += len;
            }
            Err(err) => match policy {
                MalformedPolicy::Reject => {
                    return Err(SegmentError::UnpairedSurrogate {
                        unit: err.unpaired_surrogate(),
                        offset,
                    });
                }
                MalformedPolicy::Replace => {
                    out.push(CodePoint::new(char::REPLACEMENT_CHARACTER, offset, 1));
                    offset += 1;
                }
            },
        }
    }

    Ok(out)
}

/// Decode a sequence of UTF-32 code units
pub fn decode_utf32<I>(units: I, encoding: Encoding, policy: MalformedPolicy) -> Result<Vec<CodePoint>>
where
    I: IntoIterator<Item = u32>,
{
    let units = units.into_iter();
    let mut out = Vec::with_capacity(units.size_hint().0);

    for (offset, unit) in units.enumerate() {
        match char::from_u32(unit) {
            Some(ch) => out.push(CodePoint::new(ch, offset, 1)),
            None => match policy {
                MalformedPolicy::Reject => {
                    return Err(SegmentError::MalformedSequence {
                        encoding,
                        offset,
                        reason: "value is not a Unicode scalar value",
                    });
                }
                MalformedPolicy::Replace => {
                    out.push(CodePoint::new(char::REPLACEMENT_CHARACTER, offset, 1));
                }
            },
        }
    }

    Ok(out)
}

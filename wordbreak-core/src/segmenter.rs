//! Word segmenter
//!
//! Decodes and classifies a whole buffer up front, then walks the boundary
//! rules forward and yields segments lazily.

use crate::adapter::{encoding, Encoding, TextBuffer};
use crate::config::SegmenterConfig;
use crate::domain::{
    BoundaryRules, CharProps, CodePoint, RegionalRun, Segment, SegmentKind, UnicodeClassifier,
    WordBreakClassifier,
};
use crate::error::Result;

/// Word segmenter parameterised over a classifier
///
/// The segmenter holds no per-call state, so one instance can be shared by
/// reference across threads.
#[derive(Debug, Clone, Default)]
pub struct Segmenter<C = UnicodeClassifier> {
    classifier: C,
    config: SegmenterConfig,
}

impl Segmenter<UnicodeClassifier> {
    /// Create a segmenter with the default classifier and configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter with the default classifier
    pub fn with_config(config: SegmenterConfig) -> Self {
        Self {
            classifier: UnicodeClassifier,
            config,
        }
    }
}

impl<C: WordBreakClassifier> Segmenter<C> {
    /// Create a segmenter with a tailored classifier
    pub fn with_classifier(classifier: C, config: SegmenterConfig) -> Self {
        Self { classifier, config }
    }

    /// Active configuration
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Active classifier
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Segment an encoded buffer
    ///
    /// The whole buffer is decoded and classified before this returns, so
    /// encoding errors surface here and never halfway through iteration.
    ///
    /// # Errors
    ///
    /// Returns a [`SegmentError`](crate::SegmentError) for malformed input
    /// under the reject policy.
    pub fn segment<'a>(&self, buffer: &TextBuffer<'a>) -> Result<Segmentation<'a>> {
        let code_points = buffer.decode(self.config.malformed)?;
        let props = self.classify_all(&code_points);

        tracing::debug!(
            encoding = %buffer.encoding(),
            units = buffer.len_units(),
            code_points = code_points.len(),
            "decoded buffer for segmentation"
        );

        Ok(Segmentation {
            buffer: *buffer,
            code_points,
            props,
        })
    }

    /// Segment raw bytes in the configured default encoding
    ///
    /// # Errors
    ///
    /// Same as [`Segmenter::segment`], plus a length check against the
    /// encoding's code unit width.
    pub fn segment_bytes<'a>(&self, bytes: &'a [u8]) -> Result<Segmentation<'a>> {
        let buffer = TextBuffer::new(bytes, self.config.encoding)?;
        self.segment(&buffer)
    }

    /// Segment a string slice
    ///
    /// A `&str` is always valid UTF-8, so this cannot fail.
    pub fn segment_str<'a>(&self, text: &'a str) -> Segmentation<'a> {
        let code_points: Vec<CodePoint> = text
            .char_indices()
            .map(|(offset, ch)| CodePoint::new(ch, offset, ch.len_utf8()))
            .collect();
        let props = self.classify_all(&code_points);

        Segmentation {
            buffer: TextBuffer::from_text(text),
            code_points,
            props,
        }
    }

    /// Split a string slice into its segments
    pub fn split_str<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let segmentation = self.segment_str(text);
        segmentation
            .iter()
            .filter_map(|segment| text.get(segment.range()))
            .collect()
    }

    /// Segment a slice of UTF-16 code units
    ///
    /// Ranges index `units` directly.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::UnpairedSurrogate`](crate::SegmentError::UnpairedSurrogate)
    /// under the reject policy.
    pub fn segment_utf16(&self, units: &[u16]) -> Result<Vec<Segment>> {
        let code_points = encoding::decode_utf16(units.iter().copied(), self.config.malformed)?;
        let props = self.classify_all(&code_points);
        Ok(Segments::new(&code_points, &props, units.len()).collect())
    }

    /// Segment independent texts, in parallel when the `parallel` feature is
    /// enabled
    ///
    /// Results keep the order of `texts`.
    #[cfg(feature = "parallel")]
    pub fn segment_batch(&self, texts: &[&str]) -> Vec<Vec<Segment>> {
        use rayon::prelude::*;

        tracing::debug!(texts = texts.len(), "segmenting batch in parallel");
        texts
            .par_iter()
            .map(|text| {
                let segmentation = self.segment_str(text);
                segmentation.segments()
            })
            .collect()
    }

    /// Segment independent texts sequentially
    ///
    /// Results keep the order of `texts`.
    #[cfg(not(feature = "parallel"))]
    pub fn segment_batch(&self, texts: &[&str]) -> Vec<Vec<Segment>> {
        texts
            .iter()
            .map(|text| {
                let segmentation = self.segment_str(text);
                segmentation.segments()
            })
            .collect()
    }

    fn classify_all(&self, code_points: &[CodePoint]) -> Vec<CharProps> {
        code_points
            .iter()
            .map(|cp| self.classifier.props(cp.scalar))
            .collect()
    }
}

/// Result of segmenting one buffer
///
/// Holds the decoded code points and their properties; segments are
/// computed on each call to [`Segmentation::iter`].
#[derive(Debug, Clone)]
pub struct Segmentation<'a> {
    buffer: TextBuffer<'a>,
    code_points: Vec<CodePoint>,
    props: Vec<CharProps>,
}

impl<'a> Segmentation<'a> {
    /// Source buffer
    pub fn buffer(&self) -> TextBuffer<'a> {
        self.buffer
    }

    /// Decoded code points
    pub fn code_points(&self) -> &[CodePoint] {
        &self.code_points
    }

    /// Lazily iterate over the segments from the start of the buffer
    pub fn iter(&self) -> Segments<'_> {
        Segments::new(&self.code_points, &self.props, self.buffer.len_units())
    }

    /// All segments in order
    pub fn segments(&self) -> Vec<Segment> {
        self.iter().collect()
    }

    /// Segments whose kind is a word (letters, numbers, kana, ideographs)
    pub fn words(&self) -> impl Iterator<Item = Segment> + '_ {
        self.iter().filter(Segment::is_word)
    }

    /// Every segment as a slice of the original bytes
    pub fn slices(&self) -> Vec<&'a [u8]> {
        let buffer = self.buffer;
        self.iter()
            .filter_map(|segment| buffer.slice(&segment))
            .collect()
    }

    /// Every segment as a string slice
    ///
    /// Returns `None` unless the buffer is UTF-8 and every segment is valid
    /// UTF-8.
    pub fn strs(&self) -> Option<Vec<&'a str>> {
        let buffer = self.buffer;
        self.iter()
            .map(|segment| buffer.slice_str(&segment))
            .collect()
    }

    /// Decoded text of `segment`, whatever the source encoding
    pub fn text_of(&self, segment: &Segment) -> String {
        let from = self
            .code_points
            .partition_point(|cp| cp.offset < segment.start);
        let to = self.code_points.partition_point(|cp| cp.offset < segment.end);
        self.code_points[from..to].iter().map(|cp| cp.scalar).collect()
    }

    /// Boundary offsets, including 0 and the buffer length
    pub fn boundaries(&self) -> Vec<usize> {
        std::iter::once(0)
            .chain(self.iter().map(|segment| segment.end))
            .collect()
    }

    /// Copy the buffer so the result can outlive the input
    pub fn into_owned(self) -> OwnedSegmentation {
        let segments = self.segments();
        OwnedSegmentation {
            bytes: self.buffer.as_bytes().to_vec(),
            encoding: self.buffer.encoding(),
            segments,
        }
    }
}

impl<'s> IntoIterator for &'s Segmentation<'_> {
    type Item = Segment;
    type IntoIter = Segments<'s>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy forward iterator over segments
#[derive(Debug, Clone)]
pub struct Segments<'s> {
    code_points: &'s [CodePoint],
    props: &'s [CharProps],
    rules: BoundaryRules<'s>,
    run: RegionalRun,
    pos: usize,
    end: usize,
}

impl<'s> Segments<'s> {
    fn new(code_points: &'s [CodePoint], props: &'s [CharProps], end: usize) -> Self {
        Self {
            code_points,
            props,
            rules: BoundaryRules::new(props),
            run: RegionalRun::default(),
            pos: 0,
            end,
        }
    }

    fn offset_of(&self, index: usize) -> usize {
        self.code_points
            .get(index)
            .map_or(self.end, |cp| cp.offset)
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let count = self.code_points.len();
        if self.pos >= count {
            return None;
        }

        let first = self.pos;
        let mut kind = SegmentKind::default();
        let mut index = first;
        loop {
            kind = kind.absorb(self.code_points[index].scalar, self.props[index].category);
            index += 1;
            if index >= count || self.rules.decide_with(index, &mut self.run).is_boundary {
                break;
            }
        }
        self.pos = index;

        let segment = Segment::new(self.offset_of(first), self.offset_of(index), kind);
        tracing::trace!(start = segment.start, end = segment.end, kind = %kind.as_str(), "segment");
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.code_points.len() - self.pos;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// Segments together with an owned copy of their buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedSegmentation {
    bytes: Vec<u8>,
    encoding: Encoding,
    segments: Vec<Segment>,
}

impl OwnedSegmentation {
    /// Owned bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encoding of the bytes
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Segments in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Every segment as a slice of the owned bytes
    pub fn slices(&self) -> Vec<&[u8]> {
        let width = self.encoding.code_unit_width();
        self.segments
            .iter()
            .filter_map(|segment| self.bytes.get(segment.byte_range(width)))
            .collect()
    }
}

/// Split UTF-8 text at word boundaries
///
/// ```
/// assert_eq!(
///     wordbreak_core::split_words("it's a test"),
///     vec!["it's", " ", "a", " ", "test"]
/// );
/// ```
pub fn split_words(text: &str) -> Vec<&str> {
    Segmenter::new().split_str(text)
}

/// Split native-endian UTF-16 bytes at word boundaries
///
/// Each returned slice borrows from `bytes`.
///
/// # Errors
///
/// Returns an error for an odd byte length or an unpaired surrogate.
pub fn split_utf16_bytes(bytes: &[u8]) -> Result<Vec<&[u8]>> {
    let buffer = TextBuffer::new(bytes, Encoding::utf16_native())?;
    Ok(Segmenter::new().segment(&buffer)?.slices())
}

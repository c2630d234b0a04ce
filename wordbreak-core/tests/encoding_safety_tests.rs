//! Tests for encoding validation and code-unit safety of segment offsets

use wordbreak_core::{
    split_utf16_bytes, Encoding, MalformedPolicy, SegmentError, Segmenter, SegmenterConfig,
    TextBuffer,
};

fn lossy() -> Segmenter {
    Segmenter::with_config(SegmenterConfig::builder().lossy().build().unwrap())
}

fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

fn utf16be(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

fn utf32le(text: &str) -> Vec<u8> {
    text.chars().flat_map(|ch| (ch as u32).to_le_bytes()).collect()
}

#[test]
fn test_odd_length_utf16_is_rejected() {
    let err = TextBuffer::new(&[0x61], Encoding::Utf16Le).unwrap_err();
    assert!(matches!(
        err,
        SegmentError::InvalidEncodingLength {
            len: 1,
            width: 2,
            encoding: Encoding::Utf16Le
        }
    ));
    assert_eq!(err.code(), "invalid_encoding_length");
}

#[test]
fn test_length_mismatch_is_rejected_even_when_lossy() {
    let config = SegmenterConfig::builder()
        .encoding("utf-32le")
        .lossy()
        .build()
        .unwrap();
    let err = Segmenter::with_config(config)
        .segment_bytes(&[0x61, 0x00, 0x00])
        .unwrap_err();
    assert_eq!(err.code(), "invalid_encoding_length");
}

#[test]
fn test_surrogate_pairs_are_never_split() {
    let text = "a😀b😀 c";
    let units: Vec<u16> = text.encode_utf16().collect();
    let segments = Segmenter::new().segment_utf16(&units).unwrap();

    for segment in &segments {
        // A boundary never lands on a low surrogate
        if segment.start < units.len() {
            assert!(!(0xDC00..=0xDFFF).contains(&units[segment.start]));
        }
        if segment.end < units.len() {
            assert!(!(0xDC00..=0xDFFF).contains(&units[segment.end]));
        }
    }
    assert_eq!(segments.last().map(|s| s.end), Some(units.len()));
}

#[test]
fn test_utf16_and_utf8_agree() {
    let text = "Naïve café: 3.14, カタカナ 🇯🇵!";
    let from_utf8 = Segmenter::new().split_str(text);

    let bytes = utf16le(text);
    let buffer = TextBuffer::new(&bytes, Encoding::Utf16Le).unwrap();
    let segmentation = Segmenter::new().segment(&buffer).unwrap();
    let from_utf16: Vec<String> = segmentation
        .iter()
        .map(|segment| segmentation.text_of(&segment))
        .collect();

    assert_eq!(from_utf8, from_utf16);
}

#[test]
fn test_big_endian_utf16() {
    let bytes = utf16be("foo bar");
    let buffer = TextBuffer::new(&bytes, Encoding::Utf16Be).unwrap();
    let segmentation = Segmenter::new().segment(&buffer).unwrap();
    assert_eq!(segmentation.boundaries(), vec![0, 3, 4, 7]);
    assert_eq!(segmentation.slices()[2], &bytes[8..14]);
}

#[test]
fn test_utf32_offsets_are_code_points() {
    let bytes = utf32le("ab 😀");
    let buffer = TextBuffer::new(&bytes, Encoding::Utf32Le).unwrap();
    let segmentation = Segmenter::new().segment(&buffer).unwrap();
    assert_eq!(segmentation.boundaries(), vec![0, 2, 3, 4]);
}

#[test]
fn test_utf32_out_of_range_value() {
    let mut bytes = utf32le("ab");
    bytes.extend_from_slice(&0x0011_0000u32.to_le_bytes());
    let buffer = TextBuffer::new(&bytes, Encoding::Utf32Le).unwrap();

    let err = Segmenter::new().segment(&buffer).unwrap_err();
    assert_eq!(err.code(), "malformed_sequence");
    assert_eq!(err.offset(), Some(2));

    let segmentation = lossy().segment(&buffer).unwrap();
    assert_eq!(segmentation.boundaries(), vec![0, 2, 3]);
}

#[test]
fn test_unpaired_surrogates() {
    // High surrogate followed by a letter
    let units = [0x0061u16, 0xD83D, 0x0062];
    let err = Segmenter::new().segment_utf16(&units).unwrap_err();
    assert_eq!(
        err,
        SegmentError::UnpairedSurrogate {
            unit: 0xD83D,
            offset: 1
        }
    );

    // Lone low surrogate at the end
    let units = [0x0061u16, 0xDE00];
    let err = Segmenter::new().segment_utf16(&units).unwrap_err();
    assert_eq!(err.offset(), Some(1));
    assert!(err.to_string().contains("0xDE00"));
}

#[test]
fn test_lossy_utf16_keeps_offsets() {
    let units = [0x0061u16, 0x0062, 0xD800, 0x0063];
    let segments = lossy().segment_utf16(&units).unwrap();
    let pairs: Vec<(usize, usize)> = segments.iter().map(|s| s.as_pair()).collect();
    assert_eq!(pairs, vec![(0, 2), (2, 1), (3, 1)]);
}

#[test]
fn test_lossy_utf8_truncated_sequence() {
    // A truncated three-byte sequence at the end
    let bytes = b"ok \xE3\x81";
    let buffer = TextBuffer::new(bytes, Encoding::Utf8).unwrap();

    let err = Segmenter::new().segment(&buffer).unwrap_err();
    assert_eq!(err.offset(), Some(3));

    let segmentation = lossy().segment(&buffer).unwrap();
    let slices = segmentation.slices();
    assert_eq!(slices.last().copied(), Some(&b"\xE3\x81"[..]));
    assert_eq!(slices.concat(), bytes.to_vec());
}

#[test]
fn test_split_utf16_bytes_matches_native_contract() {
    let text = "Hello, ICU world";
    let bytes: Vec<u8> = text.encode_utf16().flat_map(u16::to_ne_bytes).collect();
    let parts = split_utf16_bytes(&bytes).unwrap();

    let decoded: Vec<String> = parts
        .iter()
        .map(|part| {
            let units: Vec<u16> = part
                .chunks_exact(2)
                .map(|pair| u16::from_ne_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16(&units).unwrap()
        })
        .collect();
    assert_eq!(decoded, vec!["Hello", ",", " ", "ICU", " ", "world"]);
    assert_eq!(parts.concat(), bytes);
}

#[test]
fn test_split_utf16_bytes_errors() {
    assert_eq!(
        split_utf16_bytes(&[0x00]).unwrap_err().code(),
        "invalid_encoding_length"
    );

    let lone: Vec<u8> = [0xD800u16].iter().flat_map(|u| u.to_ne_bytes()).collect();
    assert_eq!(
        split_utf16_bytes(&lone).unwrap_err().code(),
        "unpaired_surrogate"
    );
    assert!(split_utf16_bytes(&[]).unwrap().is_empty());
}

#[test]
fn test_default_policy_is_reject() {
    assert_eq!(MalformedPolicy::default(), MalformedPolicy::Reject);
    assert_eq!(
        Segmenter::new().config().malformed,
        MalformedPolicy::Reject
    );
}

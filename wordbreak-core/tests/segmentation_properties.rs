//! Property tests: partition, boundary totality and idempotence

use proptest::prelude::*;
use wordbreak_core::{split_words, Segmenter};

/// Characters that exercise every rule family
const ALPHABET: &[char] = &[
    'a', 'Z', 'é', '1', '9', ' ', ' ', '\t', '\'', '"', '.', ',', ':', ';', '_', '-', '!', '\r',
    '\n', '\u{2028}', '\u{301}', '\u{200D}', '\u{200B}', '\u{00AD}', '\u{1F468}', '\u{1F3FD}',
    '\u{1F1FA}', '\u{1F1F8}', '\u{05D0}', '\u{05D1}', 'カ', 'ー', 'ひ', '日', 'ไ', '\u{2019}',
];

fn tricky_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..48)
        .prop_map(|chars| chars.into_iter().collect())
}

fn assert_partition(text: &str) {
    let segments = Segmenter::new().segment_str(text).segments();

    let mut expected_start = 0;
    for segment in &segments {
        assert_eq!(segment.start, expected_start, "gap or overlap in {text:?}");
        assert!(segment.end > segment.start, "empty segment in {text:?}");
        assert!(text.is_char_boundary(segment.start));
        assert!(text.is_char_boundary(segment.end));
        expected_start = segment.end;
    }
    assert_eq!(expected_start, text.len());
    assert_eq!(split_words(text).concat(), text);
}

fn assert_idempotent(text: &str) {
    for part in split_words(text) {
        assert_eq!(
            split_words(part),
            vec![part],
            "segment {part:?} of {text:?} contains an internal boundary"
        );
    }
}

proptest! {
    #[test]
    fn prop_partition_tricky(text in tricky_text()) {
        assert_partition(&text);
    }

    #[test]
    fn prop_partition_any(text in any::<String>()) {
        assert_partition(&text);
    }

    #[test]
    fn prop_boundary_totality(text in tricky_text()) {
        let boundaries = Segmenter::new().segment_str(&text).boundaries();
        prop_assert_eq!(boundaries.first().copied(), Some(0));
        prop_assert_eq!(boundaries.last().copied(), Some(text.len()));
        prop_assert!(boundaries.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn prop_idempotent_tricky(text in tricky_text()) {
        assert_idempotent(&text);
    }

    #[test]
    fn prop_idempotent_any(text in any::<String>()) {
        assert_idempotent(&text);
    }

    #[test]
    fn prop_utf16_matches_utf8(text in tricky_text()) {
        let units: Vec<u16> = text.encode_utf16().collect();
        let utf16 = Segmenter::new().segment_utf16(&units).unwrap();
        let utf8 = Segmenter::new().segment_str(&text).segments();

        prop_assert_eq!(utf16.len(), utf8.len());
        for (wide, narrow) in utf16.iter().zip(&utf8) {
            prop_assert_eq!(wide.kind, narrow.kind);
            prop_assert_eq!(
                String::from_utf16(&units[wide.range()]).unwrap(),
                &text[narrow.range()]
            );
        }
    }

    #[test]
    fn prop_batch_matches_single(texts in prop::collection::vec(tricky_text(), 0..8)) {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let segmenter = Segmenter::new();
        let batch = segmenter.segment_batch(&refs);

        prop_assert_eq!(batch.len(), refs.len());
        for (text, segments) in refs.iter().zip(&batch) {
            prop_assert_eq!(&segmenter.segment_str(text).segments(), segments);
        }
    }
}

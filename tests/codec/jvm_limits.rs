//! Behaviour at the real class-file ceilings.

use super::common::{chunk_sizes, reassemble};
use litsplit::codec::{ByteMeasure, Codec, JavaEscaper, Limits, MAX_BYTES, MAX_LENGTH};
use litsplit::SourceText;

#[test]
fn test_exactly_max_length_ascii_is_direct() {
    let text = "a".repeat(MAX_LENGTH);
    assert_eq!(chunk_sizes(&text, Limits::JVM), vec![MAX_LENGTH]);
}

#[test]
fn test_one_past_max_length_splits() {
    let text = "a".repeat(MAX_LENGTH + 1);
    assert_eq!(chunk_sizes(&text, Limits::JVM), vec![MAX_LENGTH, 1]);
}

#[test]
fn test_three_byte_text_splits_on_bytes() {
    // 21845 * 3 == 65535 bytes: the byte cap binds long before the length cap.
    let per_fragment = MAX_BYTES / 3;
    let text = "€".repeat(per_fragment * 2 + 7);
    assert_eq!(
        chunk_sizes(&text, Limits::JVM),
        vec![per_fragment, per_fragment, 7]
    );
}

#[test]
fn test_large_file_round_trips_through_codec() {
    let line = "The quick brown fox, naïve café, 東京, 😀 \"quoted\" \\ path\n";
    let text = SourceText::new(line.repeat(4000));
    assert!(text.byte_len() > 2 * MAX_BYTES);

    let codec = Codec::new(Limits::JVM, Box::new(JavaEscaper));
    let set = codec.encode(&text, "content").unwrap();

    assert!(set.is_chunked());
    assert!(set.fragment_count() >= 3);
    assert_eq!(reassemble(&set, &JavaEscaper), text.as_str());
    for literal in set.literals() {
        assert!(literal.byte_len <= MAX_BYTES);
        assert!(literal.char_len <= MAX_LENGTH);
    }
}

#[test]
fn test_modified_utf8_counts_nul_as_two_bytes() {
    let text = "\0".repeat(10);
    let limits = Limits::new(100, 10)
        .unwrap()
        .with_measure(ByteMeasure::ModifiedUtf8);
    assert_eq!(chunk_sizes(&text, limits), vec![5, 5]);
}

#[test]
fn test_utf8_measure_undercounts_supplementary_code_points() {
    // 16383 * 4 == 65532 UTF-8 bytes, but 16383 * 6 == 98298 in the class file.
    let text = "😀".repeat(16383);
    assert_eq!(chunk_sizes(&text, Limits::JVM), vec![16383]);

    let exact = Limits::JVM.with_measure(ByteMeasure::ModifiedUtf8);
    let per_fragment = MAX_BYTES / 6;
    assert_eq!(
        chunk_sizes(&text, exact),
        vec![per_fragment, 16383 - per_fragment]
    );
}

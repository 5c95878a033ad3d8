//! The worked scenarios every implementation of the codec has to reproduce.

use super::common::{chunk_sizes, limits, reassemble};
use litsplit::codec::{chunk, Codec, Escaper, JavaEscaper};
use litsplit::{AccessorSet, CodecError, SourceText};

fn java_codec(max_length: usize, max_bytes: usize) -> Codec {
    Codec::new(limits(max_length, max_bytes), Box::new(JavaEscaper))
}

#[test]
fn test_empty_text_gives_direct_empty_accessor() {
    let text = SourceText::new("");
    let fragments = chunk(&text, limits(10, 10)).unwrap();
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].text, "");

    let set = java_codec(10, 10).encode(&text, "content").unwrap();
    match set {
        AccessorSet::Direct { name, literal } => {
            assert_eq!(name, "content");
            assert_eq!(literal.literal, "");
        }
        other => panic!("expected Direct, got {:?}", other),
    }
}

#[test]
fn test_short_ascii_is_direct() {
    let text = SourceText::new("hello");
    assert_eq!(chunk_sizes("hello", limits(10, 10)), vec![5]);

    let set = java_codec(10, 10).encode(&text, "content").unwrap();
    assert!(!set.is_chunked());
    assert_eq!(set.literals()[0].literal, "hello");
}

#[test]
fn test_ascii_splits_ten_ten_five() {
    let text = SourceText::new("abcdefghijklmnopqrstuvwxy");
    assert_eq!(chunk_sizes(text.as_str(), limits(10, 10)), vec![10, 10, 5]);

    let set = java_codec(10, 10).encode(&text, "content").unwrap();
    assert_eq!(
        set.assembly(),
        vec!["__content0", "__content1", "__content2"]
    );
    assert_eq!(reassemble(&set, &JavaEscaper), text.as_str());
}

#[test]
fn test_four_byte_code_points_split_seven_three() {
    let text = SourceText::new("😀".repeat(10));
    let fragments = chunk(&text, limits(100, 30)).unwrap();

    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].char_len(), 7);
    assert_eq!(fragments[0].byte_len(), 28);
    assert_eq!(fragments[1].char_len(), 3);
    assert_eq!(fragments[1].byte_len(), 12);

    // No fragment boundary lands inside a code point.
    for fragment in &fragments {
        assert!(text.as_str().is_char_boundary(fragment.bytes.start));
        assert!(text.as_str().is_char_boundary(fragment.bytes.end));
    }
}

#[test]
fn test_quote_and_backslash_round_trip() {
    let raw = r#"say "hi" \ bye"#;
    let text = SourceText::new(raw);

    let set = java_codec(100, 100).encode(&text, "content").unwrap();
    let literal = &set.literals()[0].literal;
    assert_eq!(literal, r#"say \"hi\" \\ bye"#);
    assert_eq!(JavaEscaper.unescape(literal).unwrap(), raw);
}

#[test]
fn test_code_point_wider_than_max_bytes_fails() {
    let text = SourceText::new("😀");
    let err = java_codec(10, 2).encode(&text, "content").unwrap_err();
    assert_eq!(
        err,
        CodecError::FragmentTooLarge {
            offset: 0,
            code_point: '😀',
            width: 4,
            max_bytes: 2,
        }
    );
}

#[test]
fn test_mixed_widths_fill_each_fragment() {
    // 1 + 2 + 3 + 4 bytes, repeated.
    let text = "aé€😀".repeat(5);
    let sizes = chunk_sizes(&text, limits(100, 10));
    // Each fragment stops when the next code point would overflow 10 bytes.
    let source = SourceText::new(text.as_str());
    let fragments = chunk(&source, limits(100, 10)).unwrap();
    for pair in fragments.windows(2) {
        let next = pair[1].text.chars().next().unwrap();
        assert!(pair[0].byte_len() + next.len_utf8() > 10);
    }
    assert_eq!(sizes.iter().sum::<usize>(), 20);
}

//! Escaping through the full codec, for both JVM targets.

use super::common::{limits, reassemble};
use litsplit::codec::{Codec, Escaper, JavaEscaper, KotlinEscaper};
use litsplit::emit::Target;
use litsplit::SourceText;

const AWKWARD: &str = "line one\nline two\r\n\ttabbed \"quoted\" \\back\\ $template ${x} \u{0} \u{7f} \u{2028} é 東京 😀 𝄞";

#[test]
fn test_every_target_round_trips_awkward_text() {
    let text = SourceText::new(AWKWARD.repeat(7));
    for target in [Target::Java, Target::Kotlin] {
        let codec = Codec::new(limits(16, 24), target.escaper());
        let set = codec.encode(&text, "content").unwrap();
        assert!(set.is_chunked(), "{}", target);
        assert_eq!(reassemble(&set, codec.escaper()), text.as_str(), "{}", target);
    }
}

#[test]
fn test_escaped_literals_are_single_line_ascii() {
    let text = SourceText::new(AWKWARD);
    for escaper in [&JavaEscaper as &dyn Escaper, &KotlinEscaper] {
        let literal = escaper.escape(text.as_str());
        assert!(literal.is_ascii());
        assert!(!literal.contains('\n'));
        assert!(!literal.contains('\r'));
    }
}

#[test]
fn test_no_unescaped_quote_survives() {
    let literal = JavaEscaper.escape(AWKWARD);
    let bytes = literal.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'"' {
            // Count the backslashes in front: an odd run means the quote is escaped.
            let run = bytes[..i].iter().rev().take_while(|&&c| c == b'\\').count();
            assert_eq!(run % 2, 1, "bare quote at {}", i);
        }
    }
}

#[test]
fn test_kotlin_never_leaves_a_bare_template() {
    let literal = KotlinEscaper.escape(AWKWARD);
    for (i, _) in literal.match_indices('$') {
        assert_eq!(&literal[i - 1..i], "\\", "bare $ at {}", i);
    }
}

#[test]
fn test_surrogate_pair_stays_in_one_literal() {
    // With max_length 1 every fragment is one code point; an emoji becomes one
    // literal holding both halves of its surrogate pair.
    let text = SourceText::new("a😀b");
    let codec = Codec::new(limits(1, 4), Box::new(JavaEscaper));
    let set = codec.encode(&text, "content").unwrap();
    let literals: Vec<&str> = set.literals().iter().map(|l| l.literal.as_str()).collect();
    assert_eq!(literals, vec!["a", "\\uD83D\\uDE00", "b"]);
}

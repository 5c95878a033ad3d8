//! Escaping properties for both JVM targets.

use super::text_strategy;
use litsplit::codec::{unescape_jvm, Escaper, JavaEscaper, KotlinEscaper};
use proptest::prelude::*;

fn escapers() -> [&'static dyn Escaper; 2] {
    [&JavaEscaper, &KotlinEscaper]
}

proptest! {
    /// Property: unescape(escape(s)) == s for every target.
    #[test]
    fn prop_escape_round_trip(text in text_strategy()) {
        for escaper in escapers() {
            let literal = escaper.escape(&text);
            prop_assert_eq!(escaper.unescape(&literal).unwrap(), text.clone());
            prop_assert_eq!(unescape_jvm(&literal).unwrap(), text.clone());
        }
    }

    /// Property: Escaped literals are printable ASCII on a single line.
    #[test]
    fn prop_escape_is_printable_ascii(text in text_strategy()) {
        for escaper in escapers() {
            let literal = escaper.escape(&text);
            prop_assert!(
                literal.chars().all(|c| (' '..='~').contains(&c)),
                "non-printable output: {:?}",
                literal
            );
        }
    }

    /// Property: Escaping distributes over concatenation, so fragments can be
    /// escaped independently.
    #[test]
    fn prop_escape_concatenates(a in text_strategy(), b in text_strategy()) {
        for escaper in escapers() {
            let whole = escaper.escape(&format!("{}{}", a, b));
            prop_assert_eq!(whole, format!("{}{}", escaper.escape(&a), escaper.escape(&b)));
        }
    }

    /// Property: Printable ASCII without quote, backslash or `$` passes through untouched.
    #[test]
    fn prop_plain_ascii_unchanged(text in "[a-zA-Z0-9 .,:;!?()\\[\\]{}<>@#%&*+=_-]{0,200}") {
        for escaper in escapers() {
            prop_assert_eq!(escaper.escape(&text), text.clone());
        }
    }
}

//! Whole-codec properties: encode, then check the accessor set from the outside.

use super::{limits_strategy, text_strategy};
use litsplit::codec::{Codec, JavaEscaper, KotlinEscaper};
use litsplit::{verify_accessor_set, AccessorSet, SourceText};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    /// Property: Every encoded set passes independent verification.
    #[test]
    fn prop_encoded_sets_verify(text in text_strategy(), limits in limits_strategy(), kotlin in any::<bool>()) {
        let source = SourceText::new(text.as_str());
        let codec = if kotlin {
            Codec::new(limits, Box::new(KotlinEscaper))
        } else {
            Codec::new(limits, Box::new(JavaEscaper))
        };

        let set = codec.encode(&source, "content").unwrap();
        let report = verify_accessor_set(&set, &source, codec.escaper(), limits);
        prop_assert!(report.is_ok(), "{:?}", report.as_ref().err());

        let report = report.unwrap();
        prop_assert_eq!(report.fragments, set.fragment_count());
        prop_assert_eq!(report.chars, source.char_len());
        prop_assert_eq!(report.chunked, set.is_chunked());
    }

    /// Property: Fragment accessor names are distinct, ordered, and never the public name.
    #[test]
    fn prop_accessor_names_distinct(text in text_strategy(), limits in limits_strategy()) {
        let source = SourceText::new(text.as_str());
        let set = Codec::new(limits, Box::new(JavaEscaper)).encode(&source, "body").unwrap();

        match &set {
            AccessorSet::Direct { name, .. } => {
                prop_assert_eq!(name.as_str(), "body");
            }
            AccessorSet::Chunked { name, parts } => {
                prop_assert!(parts.len() >= 2);
                let mut seen = HashSet::new();
                seen.insert(name.as_str());
                for (i, part) in parts.iter().enumerate() {
                    prop_assert_eq!(&part.name, &format!("__body{}", i));
                    prop_assert_eq!(part.literal.index, i);
                    prop_assert!(seen.insert(part.name.as_str()));
                }
            }
        }
    }

    /// Property: Tampering with the fragment order is caught by verification.
    #[test]
    fn prop_swapped_parts_fail_verification(text in "[a-z]{20,60}") {
        let source = SourceText::new(text.as_str());
        let limits = super::limits(7, 100);
        let set = Codec::new(limits, Box::new(JavaEscaper)).encode(&source, "body").unwrap();

        let AccessorSet::Chunked { name, mut parts } = set else {
            return Err(TestCaseError::fail("expected a chunked set"));
        };
        parts.swap(0, 1);
        let tampered = AccessorSet::Chunked { name, parts };

        prop_assert!(verify_accessor_set(&tampered, &source, &JavaEscaper, limits).is_err());
    }
}

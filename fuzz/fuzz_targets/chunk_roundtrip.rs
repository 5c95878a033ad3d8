// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the chunker.
//!
//! Arbitrary text and arbitrary (small) limits. Chunking either fails with
//! `FragmentTooLarge` or yields fragments that validate and round-trip.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use litsplit::codec::{chunk, ByteMeasure, Limits};
use litsplit::{CodecError, SourceText, ValidatedFragments};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    max_length: u8,
    max_bytes: u8,
    modified_utf8: bool,
}

fuzz_target!(|input: Input| {
    let Ok(limits) = Limits::new(usize::from(input.max_length), usize::from(input.max_bytes)) else {
        return;
    };
    let limits = if input.modified_utf8 {
        limits.with_measure(ByteMeasure::ModifiedUtf8)
    } else {
        limits
    };
    let source = SourceText::new(input.text.as_str());

    match chunk(&source, limits) {
        Ok(fragments) => {
            let rebuilt: String = fragments.iter().map(|f| f.text).collect();
            assert_eq!(rebuilt, input.text, "fragments must concatenate to the input");

            if let Err(e) = ValidatedFragments::new(&source, fragments, limits) {
                panic!("chunker output failed validation: {}", e);
            }
        }
        Err(CodecError::FragmentTooLarge { width, max_bytes, .. }) => {
            assert!(width > max_bytes);
        }
        Err(e) => panic!("unexpected error: {}", e),
    }
});

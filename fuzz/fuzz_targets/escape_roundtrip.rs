// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for literal escaping.
//!
//! Whatever goes in must come back out of `unescape`, and the literal must be
//! printable ASCII so it survives any source encoding.

#![no_main]

use libfuzzer_sys::fuzz_target;
use litsplit::codec::{Escaper, JavaEscaper, KotlinEscaper};

fuzz_target!(|text: &str| {
    for escaper in [&JavaEscaper as &dyn Escaper, &KotlinEscaper] {
        let literal = escaper.escape(text);
        assert!(
            literal.bytes().all(|b| (b' '..=b'~').contains(&b)),
            "literal is not printable ASCII: {:?}",
            literal
        );

        let decoded = escaper
            .unescape(&literal)
            .expect("escaped literal should always decode");
        assert_eq!(decoded, text);
    }
});

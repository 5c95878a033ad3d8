// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the literal decoder used by `--verify`.
//!
//! Garbage in should give `Err`, never a panic. Anything that does decode must
//! survive a second trip through the Java escaper.

#![no_main]

use libfuzzer_sys::fuzz_target;
use litsplit::codec::{unescape_jvm, Escaper, JavaEscaper};

fuzz_target!(|literal: &str| {
    if let Ok(decoded) = unescape_jvm(literal) {
        let reescaped = JavaEscaper.escape(&decoded);
        assert_eq!(unescape_jvm(&reescaped).ok().as_deref(), Some(decoded.as_str()));
    }
});

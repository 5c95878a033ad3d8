// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-build postconditions of the codec.
//!
//! The chunker and the codec call these on their own output. They:
//!
//! 1. Are **free in release builds** (`debug_assert!`, early return)
//! 2. Fail **at the stage that broke**, not three stages later in a compiler error
//! 3. Mirror the checks in `ValidatedFragments` without building an error value
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function     | Property                                        |
//! |-----------------------|-------------------------------------------------|
//! | `check_fragments`     | non-empty, contiguous, bounded, maximal, covers the text |
//! | `check_accessor_set`  | direct iff one fragment, parts in index order   |

use crate::codec::Limits;
use crate::types::{AccessorSet, Fragment, SourceText};

// ============================================================================
// CHUNKER CONTRACTS
// ============================================================================

/// Check a chunk plan against its text and limits.
///
/// # Panics (debug builds only)
/// Panics if the plan is empty, has a gap or overlap, exceeds a limit, leaves a
/// non-final fragment short, or does not reproduce `text`.
#[inline]
pub fn check_fragments(text: &SourceText, fragments: &[Fragment<'_>], limits: Limits) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert!(
        !fragments.is_empty(),
        "Contract violation: chunk returned no fragments for a text of {} code points",
        text.char_len()
    );

    let mut cursor = 0;
    for (i, fragment) in fragments.iter().enumerate() {
        debug_assert_eq!(
            fragment.index, i,
            "Contract violation: fragments[{}].index is {}",
            i, fragment.index
        );
        debug_assert_eq!(
            fragment.start, cursor,
            "Contract violation: fragments[{}] starts at {} but previous ended at {}",
            i, fragment.start, cursor
        );
        debug_assert!(
            fragment.char_len() <= limits.max_length(),
            "Contract violation: fragments[{}] has {} code points > max_length {}",
            i,
            fragment.char_len(),
            limits.max_length()
        );

        let size = limits.measure().encoded_len(fragment.text);
        debug_assert!(
            size <= limits.max_bytes(),
            "Contract violation: fragments[{}] has {} bytes > max_bytes {}",
            i,
            size,
            limits.max_bytes()
        );

        cursor = fragment.end;
    }

    debug_assert_eq!(
        cursor,
        text.char_len(),
        "Contract violation: fragments end at {} but text has {} code points",
        cursor,
        text.char_len()
    );

    // Greedy-maximal: the next code point would have broken a limit.
    for (i, pair) in fragments.windows(2).enumerate() {
        let Some(next) = pair[1].text.chars().next() else {
            continue;
        };
        let full_length = pair[0].char_len() == limits.max_length();
        let full_bytes = limits.measure().encoded_len(pair[0].text) + limits.measure().width(next)
            > limits.max_bytes();
        debug_assert!(
            full_length || full_bytes,
            "Contract violation: fragments[{}] could take one more code point",
            i
        );
    }

    debug_assert!(
        fragments.iter().map(|f| f.text).collect::<String>() == text.as_str(),
        "Contract violation: fragments do not concatenate to the source text"
    );
}

// ============================================================================
// ASSEMBLER CONTRACTS
// ============================================================================

/// Check that an accessor set has the shape its fragment count calls for.
///
/// # Panics (debug builds only)
/// Panics if a single fragment became `Chunked`, several became `Direct`, or the
/// parts are out of index order.
#[inline]
pub fn check_accessor_set(set: &AccessorSet, fragment_count: usize) {
    debug_assert_eq!(
        set.fragment_count(),
        fragment_count,
        "Contract violation: accessor '{}' holds {} fragments, chunk produced {}",
        set.name(),
        set.fragment_count(),
        fragment_count
    );
    debug_assert_eq!(
        set.is_chunked(),
        fragment_count > 1,
        "Contract violation: accessor '{}' with {} fragment(s) has the wrong shape",
        set.name(),
        fragment_count
    );

    for (i, literal) in set.literals().iter().enumerate() {
        debug_assert_eq!(
            literal.index, i,
            "Contract violation: accessor '{}' part {} carries fragment {}",
            set.name(),
            i,
            literal.index
        );
    }
}

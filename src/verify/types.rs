// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked wrappers and the runtime verifier.
//!
//! `ValidatedFragments` checks a chunk plan once at construction: if you hold one,
//! the fragments are contiguous, cover the text, respect the limits, and are
//! greedy-maximal. `verify_accessor_set` works from the other end: it takes the
//! generated accessors, decodes every literal, and proves the round-trip law
//! against the original text.
//!
//! # What Gets Checked
//!
//! | Check                 | `ValidatedFragments` | `verify_accessor_set` |
//! |-----------------------|----------------------|-----------------------|
//! | at least one fragment | yes                  | yes                   |
//! | contiguity / indices  | yes                  | indices only          |
//! | length and byte caps  | yes                  | yes (decoded)         |
//! | maximality            | yes                  | yes                   |
//! | round-trip            | coverage             | decode + concatenate  |
//! | single-fragment rule  | n/a                  | yes                   |
//! | accessor names unique | n/a                  | yes                   |

use std::collections::HashSet;
use std::fmt;

use crate::codec::{Escaper, Limits};
use crate::error::UnescapeError;
use crate::types::{AccessorSet, Fragment, SourceText};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// No fragments at all (empty text must still give one empty fragment).
    EmptyFragmentSequence,
    /// Fragment `index` does not start where the previous one ended.
    NotContiguous {
        index: usize,
        expected_start: usize,
        actual_start: usize,
    },
    /// Fragment is longer than `max_length` code points.
    FragmentTooLong {
        index: usize,
        char_len: usize,
        max_length: usize,
    },
    /// Fragment encodes to more than `max_bytes`.
    FragmentTooHeavy {
        index: usize,
        byte_len: usize,
        max_bytes: usize,
    },
    /// Fragment at `position` carries index `index`.
    IndexMismatch { position: usize, index: usize },
    /// Fragments cover a different number of code points than the text.
    CoverageMismatch { covered: usize, total: usize },
    /// A non-final fragment could have taken one more code point.
    NotMaximal { index: usize },
    /// Reassembled text differs from the original at code point `offset`.
    RoundTripMismatch { offset: usize },
    /// One fragment was emitted as a chunked set, or several as direct.
    ShortcutViolation { fragments: usize, chunked: bool },
    /// Two accessors of one set share a name.
    DuplicateAccessorName { name: String },
    /// Literal of fragment `index` does not decode.
    Unescape { index: usize, error: UnescapeError },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::EmptyFragmentSequence => write!(f, "fragment sequence is empty"),
            InvariantError::NotContiguous {
                index,
                expected_start,
                actual_start,
            } => {
                write!(
                    f,
                    "fragment {} starts at {} but previous fragment ended at {}",
                    index, actual_start, expected_start
                )
            }
            InvariantError::FragmentTooLong {
                index,
                char_len,
                max_length,
            } => {
                write!(
                    f,
                    "fragment {} has {} code points > max_length {}",
                    index, char_len, max_length
                )
            }
            InvariantError::FragmentTooHeavy {
                index,
                byte_len,
                max_bytes,
            } => {
                write!(
                    f,
                    "fragment {} has {} bytes > max_bytes {}",
                    index, byte_len, max_bytes
                )
            }
            InvariantError::IndexMismatch { position, index } => {
                write!(f, "fragment at position {} has index {}", position, index)
            }
            InvariantError::CoverageMismatch { covered, total } => {
                write!(
                    f,
                    "fragments cover {} code points but text has {}",
                    covered, total
                )
            }
            InvariantError::NotMaximal { index } => {
                write!(f, "fragment {} could be extended by one code point", index)
            }
            InvariantError::RoundTripMismatch { offset } => {
                write!(f, "reassembled text differs at code point {}", offset)
            }
            InvariantError::ShortcutViolation { fragments, chunked } => {
                let kind = if *chunked { "chunked" } else { "direct" };
                write!(f, "{} fragment(s) emitted as a {} accessor", fragments, kind)
            }
            InvariantError::DuplicateAccessorName { name } => {
                write!(f, "accessor name '{}' is used twice", name)
            }
            InvariantError::Unescape { index, error } => {
                write!(f, "literal of fragment {} does not decode: {}", index, error)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

// =============================================================================
// VALIDATED FRAGMENTS
// =============================================================================

/// A chunk plan proven well-formed against its text and limits.
///
/// # Invariants (enforced at construction)
///
/// - at least one fragment; `fragments[i].index == i`
/// - `fragments[0].start == 0`, `fragments[i].end == fragments[i + 1].start`,
///   last `end == text.char_len()`, and the texts concatenate to `text`
/// - every fragment within `max_length` and `max_bytes`
/// - every non-final fragment is maximal
#[derive(Debug, Clone)]
pub struct ValidatedFragments<'a> {
    fragments: Vec<Fragment<'a>>,
}

impl<'a> ValidatedFragments<'a> {
    pub fn new(
        text: &SourceText,
        fragments: Vec<Fragment<'a>>,
        limits: Limits,
    ) -> Result<Self, InvariantError> {
        if fragments.is_empty() {
            return Err(InvariantError::EmptyFragmentSequence);
        }

        let mut expected_start = 0;
        let mut expected_byte = 0;
        for (position, fragment) in fragments.iter().enumerate() {
            if fragment.index != position {
                return Err(InvariantError::IndexMismatch {
                    position,
                    index: fragment.index,
                });
            }
            if fragment.start != expected_start || fragment.bytes.start != expected_byte {
                return Err(InvariantError::NotContiguous {
                    index: position,
                    expected_start,
                    actual_start: fragment.start,
                });
            }
            check_bounds(position, fragment.text, limits)?;
            expected_start = fragment.end;
            expected_byte = fragment.bytes.end;
        }

        if expected_start != text.char_len() {
            return Err(InvariantError::CoverageMismatch {
                covered: expected_start,
                total: text.char_len(),
            });
        }

        let rebuilt: String = fragments.iter().map(|f| f.text).collect();
        if let Some(offset) = first_difference(&rebuilt, text.as_str()) {
            return Err(InvariantError::RoundTripMismatch { offset });
        }

        for (index, pair) in fragments.windows(2).enumerate() {
            check_maximal(index, pair[0].text, pair[1].text, limits)?;
        }

        Ok(Self { fragments })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Fragment<'a>] {
        &self.fragments
    }

    pub fn into_inner(self) -> Vec<Fragment<'a>> {
        self.fragments
    }
}

// =============================================================================
// ACCESSOR SET VERIFICATION
// =============================================================================

/// Summary of a verified accessor set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationReport {
    pub fragments: usize,
    pub chars: usize,
    pub bytes: usize,
    pub largest_fragment_bytes: usize,
    pub chunked: bool,
}

/// Decode every literal of `set` and check it against `original` and `limits`.
pub fn verify_accessor_set(
    set: &AccessorSet,
    original: &SourceText,
    escaper: &dyn Escaper,
    limits: Limits,
) -> Result<VerificationReport, InvariantError> {
    let literals = set.literals();
    if literals.is_empty() {
        return Err(InvariantError::EmptyFragmentSequence);
    }
    if set.is_chunked() != (literals.len() > 1) {
        return Err(InvariantError::ShortcutViolation {
            fragments: literals.len(),
            chunked: set.is_chunked(),
        });
    }

    let mut names = HashSet::new();
    names.insert(set.name());
    for name in set.assembly() {
        if !names.insert(name) {
            return Err(InvariantError::DuplicateAccessorName {
                name: name.to_string(),
            });
        }
    }

    let mut decoded = Vec::with_capacity(literals.len());
    for (position, literal) in literals.iter().enumerate() {
        if literal.index != position {
            return Err(InvariantError::IndexMismatch {
                position,
                index: literal.index,
            });
        }
        let text = escaper
            .unescape(&literal.literal)
            .map_err(|error| InvariantError::Unescape {
                index: position,
                error,
            })?;
        check_bounds(position, &text, limits)?;
        decoded.push(text);
    }

    let rebuilt = decoded.concat();
    if let Some(offset) = first_difference(&rebuilt, original.as_str()) {
        return Err(InvariantError::RoundTripMismatch { offset });
    }

    for (index, pair) in decoded.windows(2).enumerate() {
        check_maximal(index, &pair[0], &pair[1], limits)?;
    }

    let measure = limits.measure();
    Ok(VerificationReport {
        fragments: decoded.len(),
        chars: original.char_len(),
        bytes: measure.encoded_len(original.as_str()),
        largest_fragment_bytes: decoded
            .iter()
            .map(|t| measure.encoded_len(t))
            .max()
            .unwrap_or(0),
        chunked: set.is_chunked(),
    })
}

fn check_bounds(index: usize, text: &str, limits: Limits) -> Result<(), InvariantError> {
    let char_len = text.chars().count();
    if char_len > limits.max_length() {
        return Err(InvariantError::FragmentTooLong {
            index,
            char_len,
            max_length: limits.max_length(),
        });
    }
    let byte_len = limits.measure().encoded_len(text);
    if byte_len > limits.max_bytes() {
        return Err(InvariantError::FragmentTooHeavy {
            index,
            byte_len,
            max_bytes: limits.max_bytes(),
        });
    }
    Ok(())
}

fn check_maximal(index: usize, text: &str, next: &str, limits: Limits) -> Result<(), InvariantError> {
    let Some(first) = next.chars().next() else {
        return Ok(());
    };
    let fits_length = text.chars().count() < limits.max_length();
    let fits_bytes =
        limits.measure().encoded_len(text) + limits.measure().width(first) <= limits.max_bytes();
    if fits_length && fits_bytes {
        return Err(InvariantError::NotMaximal { index });
    }
    Ok(())
}

/// Code-point offset of the first difference, or `None` if equal.
fn first_difference(a: &str, b: &str) -> Option<usize> {
    if a == b {
        return None;
    }
    let mut left = a.chars();
    let mut right = b.chars();
    let mut offset = 0;
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) if x == y => offset += 1,
            (None, None) => return None,
            _ => return Some(offset),
        }
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy, code-point-safe chunking under two simultaneous limits.
//!
//! A JVM string constant is capped twice: by its length and by the size of its
//! encoded form in the class file. The chunker cuts text into the fewest fragments
//! that respect both caps, scanning left to right and making every fragment as long
//! as it can be.
//!
//! Each step proposes `max_length` code points, then, if the proposal is too heavy,
//! gives back one code point at a time until it fits. Retraction is per code point,
//! never per byte, so a multi-byte sequence (or a surrogate pair on the JVM side) is
//! never split across two literals.
//!
//! # Example
//!
//! ```
//! use litsplit::codec::{chunk, Limits};
//! use litsplit::SourceText;
//!
//! let text = SourceText::new("a".repeat(25));
//! let limits = Limits::new(10, 10).unwrap();
//! let sizes: Vec<usize> = chunk(&text, limits)
//!     .unwrap()
//!     .iter()
//!     .map(|f| f.char_len())
//!     .collect();
//! assert_eq!(sizes, vec![10, 10, 5]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::types::{Fragment, SourceText};
use crate::verify::contracts;

/// Maximum length of one JVM string constant, in code points.
pub const MAX_LENGTH: usize = 65534;

/// Maximum encoded size of one JVM string constant, in bytes.
pub const MAX_BYTES: usize = 65535;

// =============================================================================
// LIMITS
// =============================================================================

/// How the byte size of a fragment is measured.
///
/// `Utf8` undercounts the class-file encoding for U+0000 and for supplementary
/// code points, so text heavy in either can pass the byte cap and still be
/// rejected by the compiler. Use `ModifiedUtf8` to match the class file exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ByteMeasure {
    /// Standard UTF-8: 1 to 4 bytes per code point.
    #[default]
    Utf8,
    /// The class-file constant pool encoding: U+0000 takes 2 bytes and every
    /// supplementary code point takes 6 (two 3-byte surrogates).
    ModifiedUtf8,
}

impl ByteMeasure {
    /// Encoded width of a single code point.
    #[inline]
    pub fn width(self, c: char) -> usize {
        match self {
            ByteMeasure::Utf8 => c.len_utf8(),
            ByteMeasure::ModifiedUtf8 => match c {
                '\0' => 2,
                c if u32::from(c) > 0xFFFF => 6,
                c => c.len_utf8(),
            },
        }
    }

    /// Encoded size of a whole string.
    #[inline]
    pub fn encoded_len(self, text: &str) -> usize {
        match self {
            ByteMeasure::Utf8 => text.len(),
            ByteMeasure::ModifiedUtf8 => text.chars().map(|c| self.width(c)).sum(),
        }
    }
}

/// The pair of caps every fragment must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    max_length: usize,
    max_bytes: usize,
    measure: ByteMeasure,
}

impl Limits {
    /// Ceilings of a JVM string constant, measuring bytes as UTF-8.
    ///
    /// Combine with `with_measure(ByteMeasure::ModifiedUtf8)` when the input may
    /// contain NUL or code points above U+FFFF.
    pub const JVM: Limits = Limits {
        max_length: MAX_LENGTH,
        max_bytes: MAX_BYTES,
        measure: ByteMeasure::Utf8,
    };

    /// Create limits, measuring bytes as UTF-8.
    ///
    /// Both caps must be at least 1. A `max_bytes` below the widest code point of
    /// the input is accepted here and reported by `chunk` as `FragmentTooLarge`.
    pub fn new(max_length: usize, max_bytes: usize) -> Result<Self, CodecError> {
        if max_length == 0 || max_bytes == 0 {
            return Err(CodecError::InvalidLimits {
                max_length,
                max_bytes,
            });
        }
        Ok(Self {
            max_length,
            max_bytes,
            measure: ByteMeasure::Utf8,
        })
    }

    pub fn with_measure(self, measure: ByteMeasure) -> Self {
        Self { measure, ..self }
    }

    #[inline]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    #[inline]
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    #[inline]
    pub fn measure(&self) -> ByteMeasure {
        self.measure
    }

    /// True if `text` fits in a single fragment.
    pub fn admits(&self, text: &str) -> bool {
        self.measure.encoded_len(text) <= self.max_bytes
            && text.chars().count() <= self.max_length
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::JVM
    }
}

// =============================================================================
// CHUNKER
// =============================================================================

/// Split `text` into the minimal ordered run of fragments that respect `limits`.
///
/// Always returns at least one fragment: empty text yields a single empty fragment,
/// so the assembler can still produce an accessor that returns `""`.
pub fn chunk(text: &SourceText, limits: Limits) -> Result<Vec<Fragment<'_>>, CodecError> {
    let src = text.as_str();
    let total = text.char_len();

    if total == 0 {
        return Ok(vec![Fragment {
            index: 0,
            start: 0,
            end: 0,
            bytes: 0..0,
            text: "",
        }]);
    }

    let mut fragments = Vec::with_capacity(total / limits.max_length + 1);
    let mut start = 0;
    let mut start_byte = 0;

    while start < total {
        let rest = &src[start_byte..];

        // Propose the longest fragment the length cap allows.
        let proposed = limits.max_length.min(total - start);
        let mut end = start + proposed;
        let mut end_byte = start_byte + byte_offset_of_char(rest, proposed);
        let mut size = limits.measure.encoded_len(&src[start_byte..end_byte]);

        // Give back whole code points until the byte cap holds.
        while size > limits.max_bytes {
            let Some(last) = src[start_byte..end_byte].chars().next_back() else {
                break;
            };
            end -= 1;
            end_byte -= last.len_utf8();
            size -= limits.measure.width(last);
        }

        if end == start {
            // Even one code point is too wide for the byte cap.
            let code_point = rest.chars().next().unwrap_or_default();
            return Err(CodecError::FragmentTooLarge {
                offset: start,
                code_point,
                width: limits.measure.width(code_point),
                max_bytes: limits.max_bytes,
            });
        }

        fragments.push(Fragment {
            index: fragments.len(),
            start,
            end,
            bytes: start_byte..end_byte,
            text: &src[start_byte..end_byte],
        });

        start = end;
        start_byte = end_byte;
    }

    contracts::check_fragments(text, &fragments, limits);

    Ok(fragments)
}

/// Byte offset of the `n`th code point of `s`, or `s.len()` past the end.
#[inline]
fn byte_offset_of_char(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(offset, _)| offset)
}

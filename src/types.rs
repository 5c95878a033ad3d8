// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value objects that flow through the generator.
//!
//! Everything here is created once and never mutated. The pipeline is a strict
//! forward chain: a `SourceText` is cut into `Fragment`s, each fragment becomes an
//! `EscapedFragment`, the escaped fragments of one file become an `AccessorSet`,
//! and the accessor sets of a run end up as `GeneratedType`s inside one `Container`.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Fragment**: `start <= end`, byte range lies on char boundaries of the parent,
//!   `fragments[i].end == fragments[i + 1].start`. Concatenating every fragment in
//!   index order gives back the parent text byte for byte.
//!
//! - **AccessorSet**: `Direct` iff the file produced exactly one fragment. `Chunked`
//!   parts are in fragment order, and the public accessor concatenates them in that
//!   same order.
//!
//! Chunker output is checked against these in debug builds by `contracts`, and at
//! runtime on request by `verify`.

use std::ops::Range;
use std::path::PathBuf;

// =============================================================================
// SOURCE TEXT
// =============================================================================

/// Immutable text of one input file.
///
/// Caches the code-point count since every chunking decision is made in code
/// points, while Rust strings are indexed in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    text: String,
    char_len: usize,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_len = text.chars().count();
        Self { text, char_len }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in code points.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Length in UTF-8 bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        SourceText::new(text)
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        SourceText::new(text)
    }
}

// =============================================================================
// FRAGMENTS
// =============================================================================

/// A contiguous, size-bounded slice of a `SourceText`.
///
/// `start` and `end` are code-point offsets into the parent; `bytes` is the same
/// span as a byte range, always on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub bytes: Range<usize>,
    pub text: &'a str,
}

impl Fragment<'_> {
    /// Length in code points.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }

    /// Length in UTF-8 bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.end - self.bytes.start
    }
}

/// A fragment rendered as the body of a string literal (without quotes).
///
/// Keeps the raw fragment's sizes around for reporting; the literal itself is
/// output-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapedFragment {
    pub index: usize,
    pub literal: String,
    pub char_len: usize,
    pub byte_len: usize,
}

// =============================================================================
// ACCESSORS
// =============================================================================

/// A private accessor that returns exactly one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentAccessor {
    pub name: String,
    pub literal: EscapedFragment,
}

/// The accessors generated for one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessorSet {
    /// One public accessor returning a single literal.
    Direct {
        name: String,
        literal: EscapedFragment,
    },
    /// One private accessor per fragment, plus a public accessor that
    /// concatenates them left to right.
    Chunked {
        name: String,
        parts: Vec<FragmentAccessor>,
    },
}

impl AccessorSet {
    /// Name of the public accessor.
    pub fn name(&self) -> &str {
        match self {
            AccessorSet::Direct { name, .. } | AccessorSet::Chunked { name, .. } => name,
        }
    }

    pub fn fragment_count(&self) -> usize {
        match self {
            AccessorSet::Direct { .. } => 1,
            AccessorSet::Chunked { parts, .. } => parts.len(),
        }
    }

    /// Escaped literals in assembly order.
    pub fn literals(&self) -> Vec<&EscapedFragment> {
        match self {
            AccessorSet::Direct { literal, .. } => vec![literal],
            AccessorSet::Chunked { parts, .. } => parts.iter().map(|p| &p.literal).collect(),
        }
    }

    /// Names the public accessor calls, in concatenation order.
    ///
    /// Empty for `Direct`, which returns its literal without delegating.
    pub fn assembly(&self) -> Vec<&str> {
        match self {
            AccessorSet::Direct { .. } => Vec::new(),
            AccessorSet::Chunked { parts, .. } => parts.iter().map(|p| p.name.as_str()).collect(),
        }
    }

    pub fn is_chunked(&self) -> bool {
        matches!(self, AccessorSet::Chunked { .. })
    }
}

// =============================================================================
// DECLARATIONS AND OUTPUT
// =============================================================================

/// A declaration that passed the shape filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Simple name of the generated type (last segment of `interface`).
    pub type_name: String,
    /// Qualified name of the interface the generated type implements.
    pub interface: String,
    /// Name of the single text-returning member.
    pub accessor: String,
    /// Source file, as written in the manifest.
    pub path: PathBuf,
}

/// A declaration paired with its accessors, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedType {
    pub declaration: Declaration,
    pub accessors: AccessorSet,
}

/// Every generated type of a run, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Dotted package; empty means the default package.
    pub package: String,
    pub name: String,
    pub types: Vec<GeneratedType>,
}

impl Container {
    /// Package as a relative directory (`com.example` -> `com/example`).
    pub fn package_dir(&self) -> PathBuf {
        self.package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}

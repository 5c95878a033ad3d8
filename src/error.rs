// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for every stage of a run.
//!
//! Two levels matter. A `BuildError` aborts the whole run (bad manifest, output not
//! writable). Everything else is scoped to one declaration: it is reported, that
//! declaration is excluded, and the rest of the run carries on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::verify::InvariantError;

/// Failures of the chunking codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid limits: max_length {max_length}, max_bytes {max_bytes} (both must be at least 1)")]
    InvalidLimits { max_length: usize, max_bytes: usize },

    /// A single code point is wider than `max_bytes`. No split can fix this.
    #[error(
        "code point {} at offset {offset} needs {width} bytes but max_bytes is {max_bytes}",
        code_point_label(.code_point)
    )]
    FragmentTooLarge {
        offset: usize,
        code_point: char,
        width: usize,
        max_bytes: usize,
    },
}

fn code_point_label(c: &char) -> String {
    format!("U+{:04X}", u32::from(*c))
}

/// Malformed escaped literal text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnescapeError {
    #[error("literal ends with a lone backslash")]
    DanglingBackslash,

    #[error("unknown escape sequence `\\{0}`")]
    UnknownEscape(char),

    #[error("malformed unicode escape `\\u{0}`")]
    BadUnicodeEscape(String),

    #[error("unpaired surrogate \\u{0:04X}")]
    LoneSurrogate(u16),
}

/// Failures of the content loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    NotUtf8 { path: PathBuf },
}

/// A manifest declaration that does not match the declaration contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("`{0}` is not a valid qualified interface name")]
    InvalidInterface(String),

    #[error("interface `{0}` has no package; the generated type would implement itself")]
    UnpackagedInterface(String),

    #[error("cannot parse member signature `{0}`")]
    MalformedMember(String),

    #[error("member `{member}` takes parameters; only zero-argument members are supported")]
    HasParameters { member: String },

    #[error("member `{member}` returns `{returns}`, expected String")]
    NonTextReturn { member: String, returns: String },

    #[error("`{0}` is not a valid identifier")]
    InvalidIdentifier(String),

    #[error("declaration has an empty path")]
    EmptyPath,

    #[error("generated type `{0}` is declared more than once")]
    DuplicateType(String),

    #[error("generated type `{0}` has the same name as its container")]
    ShadowsContainer(String),
}

/// Failure generating one declaration after it passed the shape filter.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("generated accessors failed verification: {0}")]
    Invariant(#[from] InvariantError),
}

/// Failures that abort the whole run.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read manifest {}: {source}", .path.display())]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid manifest JSON in {}: {source}", .path.display())]
    ParseManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported manifest version {0} (expected 1)")]
    UnsupportedVersion(u32),

    #[error(transparent)]
    InvalidLimits(#[from] CodecError),

    #[error("invalid {what} `{value}`")]
    InvalidName { what: &'static str, value: String },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

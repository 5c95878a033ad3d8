// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Embed text files in generated JVM sources as size-safe string literals.
//!
//! A JVM string constant is capped at 65534 code points and 65535 encoded bytes.
//! This crate cuts arbitrary text into the fewest fragments that respect both caps,
//! escapes each fragment into a Java or Kotlin literal, and generates one accessor
//! per declaration that returns the original text, concatenating private fragment
//! accessors when the file does not fit in one literal.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────────────────────┐     ┌──────────────┐
//! │  build      │────▶│  codec                        │────▶│  emit        │
//! │ (manifest,  │     │ chunk ─▶ escape ─▶ assemble   │     │ (Java,       │
//! │  loader)    │     │                               │     │  Kotlin)     │
//! └─────────────┘     └───────────────────────────────┘     └──────────────┘
//!                                     │
//!                                     ▼
//!                     ┌───────────────────────────────┐
//!                     │  verify                       │
//!                     │ (contracts, round-trip check) │
//!                     └───────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use litsplit::codec::{Codec, JavaEscaper, Limits};
//! use litsplit::{AccessorSet, SourceText};
//!
//! let codec = Codec::new(Limits::new(10, 10).unwrap(), Box::new(JavaEscaper));
//! let set = codec.encode(&SourceText::new("x".repeat(25)), "content").unwrap();
//!
//! assert!(matches!(set, AccessorSet::Chunked { .. }));
//! assert_eq!(set.assembly(), vec!["__content0", "__content1", "__content2"]);
//! ```

pub mod build;
pub mod codec;
pub mod emit;
pub mod error;
pub mod testing;
pub mod types;
pub mod verify;

pub use build::{run_build, BuildOptions, BuildOutcome, BuildReport, RunGuard};
pub use codec::{Codec, Limits, MAX_BYTES, MAX_LENGTH};
pub use error::{BuildError, CodecError, GenerateError, LoadError, ShapeError, UnescapeError};
pub use types::{
    AccessorSet, Container, Declaration, EscapedFragment, Fragment, FragmentAccessor,
    GeneratedType, SourceText,
};
pub use verify::{contracts, verify_accessor_set, InvariantError, ValidatedFragments};

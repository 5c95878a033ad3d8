// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The chunking-and-assembly codec.
//!
//! Three pure stages per file, no I/O, no shared state:
//!
//! ```text
//! SourceText ──chunk──▶ [Fragment] ──escape──▶ [EscapedFragment] ──assemble──▶ AccessorSet
//! ```
//!
//! `Codec` bundles the configuration of all three (limits, escaper, accessor naming)
//! so the build pipeline can run it per declaration, in parallel.

pub mod assemble;
pub mod chunk;
pub mod escape;

pub use assemble::{assemble, AccessorNaming, PrefixNaming};
pub use chunk::{chunk, ByteMeasure, Limits, MAX_BYTES, MAX_LENGTH};
pub use escape::{unescape_jvm, Escaper, JavaEscaper, KotlinEscaper};

use crate::error::CodecError;
use crate::types::{AccessorSet, EscapedFragment, Fragment, SourceText};
use crate::verify::contracts;

/// Render one fragment as a literal body.
pub fn escape_fragment(fragment: &Fragment<'_>, escaper: &dyn Escaper) -> EscapedFragment {
    EscapedFragment {
        index: fragment.index,
        literal: escaper.escape(fragment.text),
        char_len: fragment.char_len(),
        byte_len: fragment.byte_len(),
    }
}

/// Chunk, escape and assemble with one fixed configuration.
pub struct Codec {
    limits: Limits,
    escaper: Box<dyn Escaper>,
    naming: Box<dyn AccessorNaming>,
}

impl Codec {
    /// Codec with the default `__{accessor}{index}` naming.
    pub fn new(limits: Limits, escaper: Box<dyn Escaper>) -> Self {
        Self {
            limits,
            escaper,
            naming: Box::new(PrefixNaming::default()),
        }
    }

    pub fn with_naming(self, naming: impl AccessorNaming + 'static) -> Self {
        Self {
            naming: Box::new(naming),
            ..self
        }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn escaper(&self) -> &dyn Escaper {
        self.escaper.as_ref()
    }

    /// Produce the accessor set for one file.
    pub fn encode(&self, text: &SourceText, accessor: &str) -> Result<AccessorSet, CodecError> {
        let fragments = chunk(text, self.limits)?;
        let fragment_count = fragments.len();

        let escaped = fragments
            .iter()
            .map(|fragment| escape_fragment(fragment, self.escaper.as_ref()))
            .collect();
        let accessors = assemble(escaped, accessor, self.naming.as_ref());

        contracts::check_accessor_set(&accessors, fragment_count);

        Ok(accessors)
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec")
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

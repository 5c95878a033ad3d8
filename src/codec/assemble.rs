// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Building the accessor contract from escaped fragments.
//!
//! One fragment gives a `Direct` accessor. Several give a `Chunked` set: one private
//! accessor per fragment and a public accessor that concatenates them in order.

use crate::types::{AccessorSet, EscapedFragment, FragmentAccessor};

/// Names the private accessor that returns fragment `index`.
///
/// Must be a pure function of its arguments: accessor names are part of the
/// generated output and have to be stable across runs.
pub trait AccessorNaming: Send + Sync {
    fn fragment_accessor(&self, accessor: &str, index: usize) -> String;
}

/// `{prefix}{accessor}{index}`, e.g. `__content0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixNaming {
    prefix: String,
}

impl PrefixNaming {
    pub const DEFAULT_PREFIX: &'static str = "__";

    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PrefixNaming {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX)
    }
}

impl AccessorNaming for PrefixNaming {
    fn fragment_accessor(&self, accessor: &str, index: usize) -> String {
        format!("{}{}{}", self.prefix, accessor, index)
    }
}

/// Assemble the accessors for one declaration.
///
/// # Panics
///
/// Panics if `fragments` is empty. The chunker yields at least one fragment for
/// every input, so an empty sequence is a bug upstream, not a user error.
pub fn assemble(
    mut fragments: Vec<EscapedFragment>,
    accessor: &str,
    naming: &dyn AccessorNaming,
) -> AccessorSet {
    assert!(
        !fragments.is_empty(),
        "assemble: no fragments for accessor `{}`; chunk must yield at least one",
        accessor
    );

    if fragments.len() == 1 {
        if let Some(literal) = fragments.pop() {
            return AccessorSet::Direct {
                name: accessor.to_string(),
                literal,
            };
        }
    }

    let parts = fragments
        .into_iter()
        .enumerate()
        .map(|(position, literal)| FragmentAccessor {
            name: naming.fragment_accessor(accessor, position),
            literal,
        })
        .collect();

    AccessorSet::Chunked {
        name: accessor.to_string(),
        parts,
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Chunk plans for `litsplit inspect`: how each declaration would be split,
//! without escaping or writing anything.

use std::path::PathBuf;

use crate::codec::{chunk, AccessorNaming, Limits};
use crate::error::GenerateError;
use crate::types::Declaration;
use crate::verify::ValidatedFragments;

use super::loader::ContentLoader;

/// Size of one planned fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentSize {
    pub chars: usize,
    pub bytes: usize,
}

/// How one declaration's file is cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    pub type_name: String,
    pub accessor: String,
    pub path: PathBuf,
    pub chars: usize,
    /// Encoded size under the configured byte measure.
    pub bytes: usize,
    pub fragments: Vec<FragmentSize>,
    /// Private accessor names, empty when the file fits in one literal.
    pub fragment_accessors: Vec<String>,
}

impl ChunkPlan {
    pub fn is_chunked(&self) -> bool {
        self.fragments.len() > 1
    }
}

/// Plan one declaration.
pub fn plan_declaration(
    declaration: &Declaration,
    loader: &dyn ContentLoader,
    limits: Limits,
    naming: &dyn AccessorNaming,
) -> Result<ChunkPlan, GenerateError> {
    let text = loader.load(&declaration.path)?;
    let fragments = ValidatedFragments::new(&text, chunk(&text, limits)?, limits)?;

    let measure = limits.measure();
    let sizes: Vec<FragmentSize> = fragments
        .as_slice()
        .iter()
        .map(|f| FragmentSize {
            chars: f.char_len(),
            bytes: measure.encoded_len(f.text),
        })
        .collect();

    let fragment_accessors = if sizes.len() > 1 {
        (0..sizes.len())
            .map(|i| naming.fragment_accessor(&declaration.accessor, i))
            .collect()
    } else {
        Vec::new()
    };

    Ok(ChunkPlan {
        type_name: declaration.type_name.clone(),
        accessor: declaration.accessor.clone(),
        path: declaration.path.clone(),
        chars: text.char_len(),
        bytes: measure.encoded_len(text.as_str()),
        fragments: sizes,
        fragment_accessors,
    })
}

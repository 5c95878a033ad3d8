// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-declaration generation fan-out.
//!
//! Loading and encoding one declaration touches nothing another declaration
//! touches, so the whole set is a single `par_iter()`. `collect()` keeps manifest
//! order, which is the order types appear in the container. The join at the end
//! of the collect is the only synchronization point of a run.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::codec::Codec;
use crate::error::GenerateError;
use crate::types::{Declaration, GeneratedType};
use crate::verify::verify_accessor_set;

use super::loader::ContentLoader;
use super::GeneratedSummary;

/// Outcome of one declaration: the type to emit plus its report line.
pub type GenerateResult = Result<(GeneratedType, GeneratedSummary), GenerateError>;

/// Load, encode and (optionally) verify one declaration.
pub fn generate_one(
    declaration: &Declaration,
    loader: &dyn ContentLoader,
    codec: &Codec,
    verify: bool,
) -> GenerateResult {
    info!(
        path = %declaration.path.display(),
        type_name = %declaration.type_name,
        "processing file"
    );

    let text = loader.load(&declaration.path)?;
    let accessors = codec.encode(&text, &declaration.accessor)?;

    if verify {
        verify_accessor_set(&accessors, &text, codec.escaper(), codec.limits())?;
    }

    debug!(
        type_name = %declaration.type_name,
        fragments = accessors.fragment_count(),
        chars = text.char_len(),
        bytes = text.byte_len(),
        "chunk plan"
    );

    let summary = GeneratedSummary {
        type_name: declaration.type_name.clone(),
        accessor: declaration.accessor.clone(),
        fragments: accessors.fragment_count(),
        chars: text.char_len(),
        bytes: text.byte_len(),
        chunked: accessors.is_chunked(),
    };
    let generated = GeneratedType {
        declaration: declaration.clone(),
        accessors,
    };
    Ok((generated, summary))
}

/// Generate every declaration, in parallel when the `parallel` feature is on.
pub fn generate_types(
    declarations: &[Declaration],
    loader: &dyn ContentLoader,
    codec: &Codec,
    verify: bool,
) -> Vec<GenerateResult> {
    #[cfg(feature = "parallel")]
    let iter = declarations.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = declarations.iter();

    iter.map(|declaration| generate_one(declaration, loader, codec, verify))
        .collect()
}

/// Generate every declaration in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn generate_types_with_progress(
    declarations: &[Declaration],
    loader: &dyn ContentLoader,
    codec: &Codec,
    verify: bool,
    progress: &ProgressBar,
) -> Vec<GenerateResult> {
    let counter = AtomicUsize::new(0);
    let total = declarations.len();

    declarations
        .par_iter()
        .map(|declaration| {
            let result = generate_one(declaration, loader, codec, verify);

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            result
        })
        .collect()
}

/// Non-parallel fallback (no progress).
#[cfg(not(feature = "parallel"))]
pub fn generate_types_with_progress(
    declarations: &[Declaration],
    loader: &dyn ContentLoader,
    codec: &Codec,
    verify: bool,
) -> Vec<GenerateResult> {
    generate_types(declarations, loader, codec, verify)
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering a `Container` as source code for one target language.
//!
//! Emitters only format. Every literal they receive is already escaped for the
//! target, and every accessor set already has its final shape, so rendering is a
//! straight walk over the container with no failure modes.

mod java;
mod kotlin;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::codec::{Escaper, JavaEscaper, KotlinEscaper};
use crate::types::Container;

pub use java::JavaEmitter;
pub use kotlin::KotlinEmitter;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Generated by litsplit. Do not edit.";

/// Output language of a run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Java,
    Kotlin,
}

impl Target {
    /// Escaper producing literals this target's compiler accepts.
    pub fn escaper(self) -> Box<dyn Escaper> {
        match self {
            Target::Java => Box::new(JavaEscaper),
            Target::Kotlin => Box::new(KotlinEscaper),
        }
    }

    pub fn emitter(self) -> Box<dyn Emitter> {
        match self {
            Target::Java => Box::new(JavaEmitter),
            Target::Kotlin => Box::new(KotlinEmitter),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Java => write!(f, "java"),
            Target::Kotlin => write!(f, "kotlin"),
        }
    }
}

/// Turns a container into the text of one source file.
pub trait Emitter: Send + Sync {
    fn render(&self, container: &Container) -> String;

    fn extension(&self) -> &'static str;

    /// `<Container>.<ext>`
    fn file_name(&self, container: &Container) -> String {
        format!("{}.{}", container.name, self.extension())
    }
}

/// Line buffer with four-space indentation.
pub(crate) struct SourceBuf {
    out: String,
}

impl SourceBuf {
    pub(crate) fn new() -> Self {
        Self { out: String::new() }
    }

    pub(crate) fn line(&mut self, depth: usize, text: &str) {
        if !text.is_empty() {
            for _ in 0..depth {
                self.out.push_str("    ");
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

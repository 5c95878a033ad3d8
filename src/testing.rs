// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::build::ContentLoader;
use crate::error::LoadError;
use crate::types::{
    AccessorSet, Declaration, EscapedFragment, FragmentAccessor, GeneratedType, SourceText,
};

/// In-memory `ContentLoader`, keyed by the path as written in the declaration.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: HashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl ContentLoader for MemoryLoader {
    fn load(&self, path: &Path) -> Result<SourceText, LoadError> {
        self.files
            .get(path)
            .map(|content| SourceText::new(content.as_str()))
            .ok_or_else(|| LoadError::NotFound {
                path: path.to_path_buf(),
            })
    }
}

/// A declaration implementing `fixtures.<type_name>`.
pub fn declaration(type_name: &str, accessor: &str, path: &str) -> Declaration {
    Declaration {
        type_name: type_name.to_string(),
        interface: format!("fixtures.{}", type_name),
        accessor: accessor.to_string(),
        path: PathBuf::from(path),
    }
}

/// An escaped fragment whose literal is `literal`, sizes taken from it as-is.
pub fn escaped(index: usize, literal: &str) -> EscapedFragment {
    EscapedFragment {
        index,
        literal: literal.to_string(),
        char_len: literal.chars().count(),
        byte_len: literal.len(),
    }
}

/// A generated type with a `Direct` accessor.
pub fn direct_type(type_name: &str, interface: &str, accessor: &str, literal: &str) -> GeneratedType {
    GeneratedType {
        declaration: Declaration {
            interface: interface.to_string(),
            ..declaration(type_name, accessor, "input.txt")
        },
        accessors: AccessorSet::Direct {
            name: accessor.to_string(),
            literal: escaped(0, literal),
        },
    }
}

/// A generated type with a `Chunked` accessor using the default `__` naming.
pub fn chunked_type(
    type_name: &str,
    interface: &str,
    accessor: &str,
    literals: &[&str],
) -> GeneratedType {
    GeneratedType {
        declaration: Declaration {
            interface: interface.to_string(),
            ..declaration(type_name, accessor, "input.txt")
        },
        accessors: AccessorSet::Chunked {
            name: accessor.to_string(),
            parts: literals
                .iter()
                .enumerate()
                .map(|(i, literal)| FragmentAccessor {
                    name: format!("__{}{}", accessor, i),
                    literal: escaped(i, literal),
                })
                .collect(),
        },
    }
}

/// Write `manifest.json` plus `files` into `dir`, returning the manifest path.
pub fn write_fixture(dir: &Path, manifest: &str, files: &[(&str, &str)]) -> PathBuf {
    for (name, content) in files {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture directory");
        }
        std::fs::write(&path, content).expect("write fixture file");
    }
    let manifest_path = dir.join("manifest.json");
    std::fs::write(&manifest_path, manifest).expect("write fixture manifest");
    manifest_path
}

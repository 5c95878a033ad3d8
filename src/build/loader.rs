// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::types::SourceText;

/// Produces the full text of a declared file.
///
/// Called from worker threads, one declaration at a time.
pub trait ContentLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<SourceText, LoadError>;
}

/// Reads files relative to a root directory (normally the manifest's directory).
///
/// Content is taken byte for byte: no BOM stripping, no newline normalization.
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<SourceText, LoadError> {
        let full = self.root.join(path);
        let bytes = fs::read(&full).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path: full.clone() },
            _ => LoadError::Io {
                path: full.clone(),
                source,
            },
        })?;
        let text = String::from_utf8(bytes).map_err(|_| LoadError::NotUtf8 { path: full })?;
        Ok(SourceText::new(text))
    }
}

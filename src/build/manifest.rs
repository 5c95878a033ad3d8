// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec::{ByteMeasure, Limits, PrefixNaming, MAX_BYTES, MAX_LENGTH};
use crate::emit::Target;
use crate::error::{BuildError, CodecError};

/// The only manifest version this build understands.
pub const MANIFEST_VERSION: u32 = 1;

/// Container type name when the manifest does not set one.
pub const DEFAULT_CONTAINER: &str = "Embedded";

/// Declarations plus run configuration, as read from `manifest.json`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: u32,
    #[serde(default)]
    pub target: Target,
    /// Dotted package of the generated file; empty for the default package.
    #[serde(default)]
    pub package: String,
    #[serde(default = "default_container")]
    pub container: String,
    #[serde(default = "default_fragment_prefix")]
    pub fragment_prefix: String,
    #[serde(default)]
    pub limits: LimitsConfig,
    pub declarations: Vec<DeclarationEntry>,
}

/// One `{ interface, member, path }` triple, before the shape filter.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DeclarationEntry {
    pub interface: String,
    pub member: String,
    pub path: PathBuf,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LimitsConfig {
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
    #[serde(default)]
    pub byte_measure: ByteMeasure,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_length: MAX_LENGTH,
            max_bytes: MAX_BYTES,
            byte_measure: ByteMeasure::default(),
        }
    }
}

impl LimitsConfig {
    pub fn to_limits(self) -> Result<Limits, CodecError> {
        Ok(Limits::new(self.max_length, self.max_bytes)?.with_measure(self.byte_measure))
    }
}

fn default_container() -> String {
    DEFAULT_CONTAINER.to_string()
}

fn default_fragment_prefix() -> String {
    PrefixNaming::DEFAULT_PREFIX.to_string()
}

fn default_max_length() -> usize {
    MAX_LENGTH
}

fn default_max_bytes() -> usize {
    MAX_BYTES
}

impl Manifest {
    /// Read, parse and version-check a manifest file.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        let content = fs::read_to_string(path).map_err(|source| BuildError::ReadManifest {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Manifest =
            serde_json::from_str(&content).map_err(|source| BuildError::ParseManifest {
                path: path.to_path_buf(),
                source,
            })?;
        if manifest.version != MANIFEST_VERSION {
            return Err(BuildError::UnsupportedVersion(manifest.version));
        }
        Ok(manifest)
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::emit::Emitter;
use crate::error::BuildError;
use crate::types::Container;

/// Where `container` lands under `output_dir`: `<output>/<package dirs>/<Name>.<ext>`.
pub fn container_path(container: &Container, emitter: &dyn Emitter, output_dir: &Path) -> PathBuf {
    output_dir
        .join(container.package_dir())
        .join(emitter.file_name(container))
}

/// Render and persist the container. One write per run.
pub fn write_container(
    container: &Container,
    emitter: &dyn Emitter,
    output_dir: &Path,
) -> Result<PathBuf, BuildError> {
    let path = container_path(container, emitter, output_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| BuildError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let source = emitter.render(container);
    fs::write(&path, &source).map_err(|source| BuildError::Write {
        path: path.clone(),
        source,
    })?;

    info!(
        path = %path.display(),
        types = container.types.len(),
        bytes = source.len(),
        "wrote container"
    );
    Ok(path)
}

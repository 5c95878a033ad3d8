// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The build pipeline: manifest in, one generated source file out.
//!
//! ```text
//! manifest.json ─▶ shape filter ─▶ par_iter(load ─▶ encode ─▶ verify?) ─▶ join ─▶ emit ─▶ write
//! ```
//!
//! Failures are scoped. A bad manifest or an unwritable output aborts the run with a
//! `BuildError`. A bad declaration (wrong shape, missing file, a code point wider
//! than `maxBytes`) is logged, listed in the `BuildReport`, and left out of the
//! container; the rest of the run carries on and the container is still written.

pub mod declaration;
pub mod loader;
pub mod manifest;
pub mod parallel;
pub mod plan;
pub mod writer;

use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::codec::{Codec, Limits, PrefixNaming};
use crate::emit::Target;
use crate::error::{BuildError, GenerateError, ShapeError};
use crate::types::{Container, Declaration};

pub use declaration::{
    check_declaration, check_declarations, filter_declarations, is_identifier, parse_member,
    Rejection,
};
pub use loader::{ContentLoader, FsLoader};
pub use manifest::*;
pub use plan::{ChunkPlan, FragmentSize};

// =============================================================================
// RUN GUARD
// =============================================================================

/// One-shot state for `run_build`.
///
/// Marked at entry, before the manifest is read: a run that fails still counts,
/// and every later call with the same guard is a no-op returning
/// `BuildOutcome::Skipped`.
#[derive(Debug, Default)]
pub struct RunGuard {
    started: bool,
}

impl RunGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_run(&self) -> bool {
        self.started
    }

    /// True the first time only.
    fn begin(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }
}

// =============================================================================
// OPTIONS AND CONFIGURATION
// =============================================================================

/// Inputs of one `run_build` call.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub manifest_path: PathBuf,
    pub output_dir: PathBuf,
    /// Overrides the manifest's `target`.
    pub target: Option<Target>,
    /// Overrides the manifest's `container`.
    pub container: Option<String>,
    /// Decode every generated accessor set and check it against its file.
    pub verify: bool,
    /// Progress bar and summary on stderr.
    pub progress: bool,
}

impl BuildOptions {
    pub fn new(manifest_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            output_dir: output_dir.into(),
            target: None,
            container: None,
            verify: false,
            progress: false,
        }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Directory declaration paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.manifest_path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Manifest settings merged with CLI overrides and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub target: Target,
    pub package: String,
    pub container: String,
    pub fragment_prefix: String,
    pub limits: Limits,
}

impl RunConfig {
    pub fn resolve(
        manifest: &Manifest,
        target: Option<Target>,
        container: Option<&str>,
    ) -> Result<Self, BuildError> {
        let container = container.unwrap_or(&manifest.container).to_string();
        if !is_identifier(&container) {
            return Err(BuildError::InvalidName {
                what: "container name",
                value: container,
            });
        }

        let package = manifest.package.trim().to_string();
        if !package.is_empty() && !declaration::is_qualified_name(&package) {
            return Err(BuildError::InvalidName {
                what: "package",
                value: package,
            });
        }

        // The prefix is glued in front of an identifier, so it must keep it one.
        let fragment_prefix = manifest.fragment_prefix.clone();
        if !fragment_prefix.is_empty() && !is_identifier(&format!("{}x", fragment_prefix)) {
            return Err(BuildError::InvalidName {
                what: "fragment prefix",
                value: fragment_prefix,
            });
        }

        Ok(Self {
            target: target.unwrap_or(manifest.target),
            package,
            container,
            fragment_prefix,
            limits: manifest.limits.to_limits()?,
        })
    }

    pub fn codec(&self) -> Codec {
        Codec::new(self.limits, self.target.escaper())
            .with_naming(PrefixNaming::new(self.fragment_prefix.clone()))
    }
}

// =============================================================================
// REPORTS
// =============================================================================

/// One generated type, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSummary {
    pub type_name: String,
    pub accessor: String,
    pub fragments: usize,
    pub chars: usize,
    pub bytes: usize,
    pub chunked: bool,
}

/// Why a declaration was left out of the container.
#[derive(Debug, Error)]
pub enum FailureReason {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

#[derive(Debug)]
pub struct DeclarationFailure {
    /// Interface name as written in the manifest.
    pub name: String,
    pub reason: FailureReason,
}

/// Container plus per-declaration results, before anything is written.
#[derive(Debug)]
pub struct Generated {
    pub container: Container,
    pub summaries: Vec<GeneratedSummary>,
    pub failures: Vec<DeclarationFailure>,
}

#[derive(Debug)]
pub struct BuildReport {
    pub output_path: PathBuf,
    pub target: Target,
    pub generated: Vec<GeneratedSummary>,
    pub failures: Vec<DeclarationFailure>,
}

impl BuildReport {
    /// True when every declaration made it into the container.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total_fragments(&self) -> usize {
        self.generated.iter().map(|g| g.fragments).sum()
    }

    pub fn total_bytes(&self) -> usize {
        self.generated.iter().map(|g| g.bytes).sum()
    }
}

#[derive(Debug)]
pub enum BuildOutcome {
    /// The guard had already been used.
    Skipped,
    Completed(BuildReport),
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Create a progress style for the generation progress bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Shape-filter the manifest, logging every rejection.
fn shape_filter(manifest: &Manifest, config: &RunConfig) -> (Vec<Declaration>, Vec<DeclarationFailure>) {
    let (declarations, rejected) = filter_declarations(&manifest.declarations, &config.container);
    let failures = rejected
        .into_iter()
        .map(|(name, error)| {
            warn!(interface = %name, error = %error, "declaration excluded");
            DeclarationFailure {
                name,
                reason: FailureReason::Shape(error),
            }
        })
        .collect();
    (declarations, failures)
}

/// Split per-declaration results into the container and the failure list.
fn collect_generated(
    config: &RunConfig,
    declarations: &[Declaration],
    results: Vec<parallel::GenerateResult>,
    mut failures: Vec<DeclarationFailure>,
) -> Generated {
    let mut types = Vec::with_capacity(results.len());
    let mut summaries = Vec::with_capacity(results.len());

    for (declaration, result) in declarations.iter().zip(results) {
        match result {
            Ok((generated, summary)) => {
                types.push(generated);
                summaries.push(summary);
            }
            Err(error) => {
                warn!(
                    interface = %declaration.interface,
                    path = %declaration.path.display(),
                    error = %error,
                    "declaration failed"
                );
                failures.push(DeclarationFailure {
                    name: declaration.interface.clone(),
                    reason: FailureReason::Generate(error),
                });
            }
        }
    }

    Generated {
        container: Container {
            package: config.package.clone(),
            name: config.container.clone(),
            types,
        },
        summaries,
        failures,
    }
}

/// Build the container in memory. No progress output, nothing written.
pub fn generate(
    manifest: &Manifest,
    config: &RunConfig,
    loader: &dyn ContentLoader,
    verify: bool,
) -> Generated {
    let (declarations, failures) = shape_filter(manifest, config);
    let results = parallel::generate_types(&declarations, loader, &config.codec(), verify);
    collect_generated(config, &declarations, results, failures)
}

/// Run the whole pipeline once per guard.
pub fn run_build(guard: &mut RunGuard, options: &BuildOptions) -> Result<BuildOutcome, BuildError> {
    if !guard.begin() {
        debug!("run guard already used; skipping");
        return Ok(BuildOutcome::Skipped);
    }

    info!(manifest = %options.manifest_path.display(), "starting generation");

    // 1. Read manifest and resolve configuration
    let manifest = Manifest::load(&options.manifest_path)?;
    let config = RunConfig::resolve(&manifest, options.target, options.container.as_deref())?;
    debug!(?config, "resolved configuration");

    // 2. Shape filter
    let (declarations, failures) = shape_filter(&manifest, &config);

    // 3. Load, encode and verify in parallel
    let loader = FsLoader::new(options.base_dir());
    let codec = config.codec();

    #[cfg(feature = "parallel")]
    let results = {
        let progress = if options.progress {
            ProgressBar::new(declarations.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        progress.set_style(create_progress_style());
        progress.set_prefix("Generating");
        progress.set_message("declarations...");

        let results = parallel::generate_types_with_progress(
            &declarations,
            &loader,
            &codec,
            options.verify,
            &progress,
        );
        progress.finish_with_message(format!("encoded {} files", results.len()));
        results
    };
    #[cfg(not(feature = "parallel"))]
    let results =
        parallel::generate_types_with_progress(&declarations, &loader, &codec, options.verify);

    // 4. Join, emit, write
    let generated = collect_generated(&config, &declarations, results, failures);
    let emitter = config.target.emitter();
    let output_path = writer::write_container(&generated.container, emitter.as_ref(), &options.output_dir)?;

    let report = BuildReport {
        output_path,
        target: config.target,
        generated: generated.summaries,
        failures: generated.failures,
    };

    info!(
        generated = report.generated.len(),
        failed = report.failures.len(),
        fragments = report.total_fragments(),
        "generation finished"
    );

    if options.progress {
        print_summary(&report);
    }

    Ok(BuildOutcome::Completed(report))
}

/// Plan every declaration of a manifest without writing anything.
pub fn inspect(
    manifest_path: &Path,
) -> Result<(RunConfig, Vec<Result<ChunkPlan, DeclarationFailure>>), BuildError> {
    let manifest = Manifest::load(manifest_path)?;
    let config = RunConfig::resolve(&manifest, None, None)?;
    let loader = FsLoader::new(manifest_path.parent().unwrap_or_else(|| Path::new(".")));
    let naming = PrefixNaming::new(config.fragment_prefix.clone());

    // One entry per declaration, in manifest order, rejected ones included.
    let plans = check_declarations(&manifest.declarations, &config.container)
        .into_iter()
        .map(|checked| match checked {
            Ok(declaration) => plan::plan_declaration(&declaration, &loader, config.limits, &naming)
                .map_err(|error| DeclarationFailure {
                    name: declaration.interface.clone(),
                    reason: FailureReason::Generate(error),
                }),
            Err((name, error)) => {
                warn!(interface = %name, error = %error, "declaration excluded");
                Err(DeclarationFailure {
                    name,
                    reason: FailureReason::Shape(error),
                })
            }
        })
        .collect();

    Ok((config, plans))
}

fn print_summary(report: &BuildReport) {
    eprintln!();
    if report.is_success() {
        eprintln!("✅ Build complete");
    } else {
        eprintln!("⚠️  Build complete with {} failed declaration(s)", report.failures.len());
        for failure in &report.failures {
            eprintln!("   ✗ {}: {}", failure.name, failure.reason);
        }
    }
    eprintln!(
        "   {} types │ {} fragments │ {} │ {}",
        report.generated.len(),
        report.total_fragments(),
        format_bytes(report.total_bytes()),
        report.output_path.display()
    );
}

/// Human-readable byte count (`512 B`, `2.0 KB`, `3.0 MB`).
pub fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

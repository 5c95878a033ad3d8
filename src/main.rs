// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use litsplit::build::{self, format_bytes, BuildOptions, BuildOutcome, RunGuard};
use litsplit::emit::Target;

mod cli;
use cli::display::{
    accessor_badge, fill_bar, pad_left, pad_right, paint, row, section_bot,
    section_top, status_mark, title, truncate_path, Color,
};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            manifest,
            output,
            target,
            container,
            verify,
        } => run_generate(&manifest, &output, target, container, verify),
        Commands::Inspect { manifest } => run_inspect(&manifest),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when the run completed but some declarations failed.
fn run_generate(
    manifest: &Path,
    output: &Path,
    target: Option<Target>,
    container: Option<String>,
    verify: bool,
) -> Result<bool> {
    let mut options = BuildOptions::new(manifest, output)
        .with_verify(verify)
        .with_progress(atty::is(atty::Stream::Stderr));
    if let Some(target) = target {
        options = options.with_target(target);
    }
    if let Some(container) = container {
        options = options.with_container(container);
    }

    let mut guard = RunGuard::new();
    let outcome = build::run_build(&mut guard, &options)
        .with_context(|| format!("generation from {} failed", manifest.display()))?;

    match outcome {
        BuildOutcome::Completed(report) => Ok(report.is_success()),
        BuildOutcome::Skipped => Ok(true),
    }
}

fn run_inspect(manifest: &Path) -> Result<bool> {
    let (config, plans) = build::inspect(manifest)
        .with_context(|| format!("cannot inspect {}", manifest.display()))?;

    title(&format!("LITSPLIT {}", manifest.display()));
    println!();

    section_top("CONFIGURATION");
    row(&format!(" target      {}", config.target));
    row(&format!(
        " package     {}",
        if config.package.is_empty() {
            "(default)"
        } else {
            config.package.as_str()
        }
    ));
    row(&format!(" container   {}", config.container));
    row(&format!(
        " limits      {} code points │ {} bytes │ {:?}",
        config.limits.max_length(),
        config.limits.max_bytes(),
        config.limits.measure()
    ));
    section_bot();
    println!();

    let mut all_ok = true;
    section_top("DECLARATIONS");
    for plan in &plans {
        match plan {
            Ok(plan) => {
                row(&format!(
                    " {} {} {} {}",
                    status_mark(true),
                    pad_right(&paint(Color::Cyan, &[], &plan.type_name), 20),
                    pad_right(&accessor_badge(plan.is_chunked()), 10),
                    paint(Color::Gray, &[], &truncate_path(&plan.path.display().to_string(), 34))
                ));
                row(&format!(
                    "     {} code points │ {} │ {} fragment(s)",
                    plan.chars,
                    format_bytes(plan.bytes),
                    plan.fragments.len()
                ));
                if plan.is_chunked() {
                    for (fragment, name) in plan.fragments.iter().zip(&plan.fragment_accessors) {
                        row(&format!(
                            "     {} {} {}",
                            pad_right(name, 18),
                            pad_left(&fragment.bytes.to_string(), 8),
                            fill_bar(fragment.bytes, config.limits.max_bytes(), 20)
                        ));
                    }
                }
            }
            Err(failure) => {
                all_ok = false;
                row(&format!(
                    " {} {}",
                    status_mark(false),
                    paint(Color::Red, &[], &failure.name)
                ));
                row(&format!("     {}", failure.reason));
            }
        }
    }
    section_bot();

    Ok(all_ok)
}

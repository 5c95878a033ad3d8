// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the litsplit command-line interface.
//!
//! Two subcommands: `generate` runs the manifest through the codec and writes the
//! container source file, `inspect` prints how each declared file would be split
//! without writing anything.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use litsplit::emit::Target;

#[derive(Parser)]
#[command(
    name = "litsplit",
    about = "Embed text files in generated JVM sources as size-safe string literals",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the container source file from a manifest
    Generate {
        /// Path to manifest.json; declaration paths resolve relative to its directory
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output source root (package directories are created beneath it)
        #[arg(short, long)]
        output: PathBuf,

        /// Target language, overriding the manifest
        #[arg(short, long, value_enum)]
        target: Option<Target>,

        /// Container type name, overriding the manifest
        #[arg(long)]
        container: Option<String>,

        /// Decode every generated accessor and check it against its source file
        #[arg(long)]
        verify: bool,
    },

    /// Show the chunk plan of every declaration in a manifest
    Inspect {
        /// Path to manifest.json
        manifest: PathBuf,
    },
}

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use litsplit::build::{run_build, BuildOptions, BuildOutcome, BuildReport, RunGuard};
use litsplit::codec::{chunk, Escaper, Limits};
use litsplit::{AccessorSet, Fragment, SourceText};
use tempfile::TempDir;

// Re-export canonical test utilities from litsplit::testing
pub use litsplit::testing::{write_fixture, MemoryLoader};

// ============================================================================
// CODEC HELPERS
// ============================================================================

pub fn limits(max_length: usize, max_bytes: usize) -> Limits {
    Limits::new(max_length, max_bytes).unwrap()
}

/// Code-point length of every fragment.
pub fn char_sizes(fragments: &[Fragment<'_>]) -> Vec<usize> {
    fragments.iter().map(|f| f.char_len()).collect()
}

/// Chunk and return the code-point sizes.
pub fn chunk_sizes(text: &str, limits: Limits) -> Vec<usize> {
    let text = SourceText::new(text);
    char_sizes(&chunk(&text, limits).unwrap())
}

/// Decode every literal of `set` in assembly order and concatenate.
pub fn reassemble(set: &AccessorSet, escaper: &dyn Escaper) -> String {
    set.literals()
        .iter()
        .map(|literal| escaper.unescape(&literal.literal).unwrap())
        .collect()
}

// ============================================================================
// BUILD FIXTURES
// ============================================================================

/// A temp directory holding a manifest, its input files and an `out/` directory.
pub struct Fixture {
    pub dir: TempDir,
    pub manifest: PathBuf,
}

impl Fixture {
    pub fn new(manifest: &str, files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let manifest = write_fixture(dir.path(), manifest, files);
        Self { dir, manifest }
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    pub fn options(&self) -> BuildOptions {
        BuildOptions::new(&self.manifest, self.output())
    }

    /// Run the pipeline with fresh guard and return the report.
    pub fn build(&self, options: BuildOptions) -> BuildReport {
        let mut guard = RunGuard::new();
        match run_build(&mut guard, &options) {
            Ok(BuildOutcome::Completed(report)) => report,
            Ok(BuildOutcome::Skipped) => panic!("fresh guard skipped the run"),
            Err(e) => panic!("build failed: {}", e),
        }
    }

    pub fn read(&self, relative: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.output().join(relative)).unwrap()
    }
}

/// Pull the body of every `return "...";` / `= "..."` literal out of generated source.
pub fn extract_literals(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let start = line.find('"')?;
            let end = line.rfind('"')?;
            (end > start).then(|| line[start + 1..end].to_string())
        })
        .collect()
}

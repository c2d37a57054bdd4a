// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The invocation layer: paths in, generated file out.
//!
//! Everything here returns `Result<_, String>` with a message ready for the
//! terminal. Per-type failures are not errors at this level: they are
//! reported, the remaining types still generate, and the caller decides the
//! exit status from the returned [`GenerateReport`].

pub mod output;
pub mod package;
pub mod parallel;

use std::io::Write;
use std::path::PathBuf;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::collect::{CollectOptions, PackageIndex};
use crate::emit::render_file;
use crate::generate::generate_artifact;
use crate::types::GeneratedArtifact;

pub use output::*;
pub use package::*;
pub use parallel::*;

/// Everything `enumtab generate` was asked to do.
#[derive(Clone, Debug, Default)]
pub struct GenerateOptions {
    /// Target type names, in the order their fragments are emitted.
    pub types: Vec<String>,
    /// Explicit output file; defaults to `<dir>/<type>_enumslice.go`.
    pub output: Option<PathBuf>,
    pub trim_prefix: Option<String>,
    pub line_comment: bool,
    /// Print to stdout instead of writing.
    pub dry_run: bool,
    /// Files or one directory. Empty means `.`.
    pub paths: Vec<PathBuf>,
    /// Command-line arguments echoed into the generated-file header.
    pub args: Vec<String>,
}

impl GenerateOptions {
    pub fn collect_options(&self) -> CollectOptions {
        CollectOptions {
            trim_prefix: self.trim_prefix.clone(),
            line_comment: self.line_comment,
        }
    }
}

/// One failed type, as reported.
#[derive(Clone, Debug, Serialize)]
pub struct TypeFailure {
    pub type_name: String,
    pub message: String,
}

/// What a `generate` run did.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GenerateReport {
    pub succeeded: Vec<String>,
    pub failed: Vec<TypeFailure>,
    /// Output file, if one was written or found unchanged.
    pub output: Option<PathBuf>,
    pub status: Option<WriteStatus>,
}

impl GenerateReport {
    /// Exit-status rule: success only if every requested type generated.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty() && !self.succeeded.is_empty()
    }
}

/// Progress style for the per-type bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// A bar on a terminal, a hidden one in pipelines.
#[cfg(feature = "parallel")]
fn create_progress_bar(len: usize) -> ProgressBar {
    if !atty::is(atty::Stream::Stderr) {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(create_progress_style());
    pb.set_prefix("Generating");
    pb
}

/// Split a `--type` value list like `["Day,Month", "Year"]` into names.
pub fn split_type_names(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn run_generate(options: &GenerateOptions) -> Result<GenerateReport, String> {
    if options.types.is_empty() {
        return Err("No type names given; use --type".to_string());
    }

    // 1. Load and parse the package
    let package = load_package(&options.paths)?;
    let index = PackageIndex::new(&package.files);

    // 2. Run the pipeline for each type
    #[cfg(feature = "parallel")]
    let pb = create_progress_bar(options.types.len());

    let outcomes = generate_types_with_progress(
        &index,
        &options.types,
        &options.collect_options(),
        #[cfg(feature = "parallel")]
        &pb,
    );

    #[cfg(feature = "parallel")]
    pb.finish_and_clear();

    // 3. Report each type, keep fragments of the good ones
    let mut report = GenerateReport::default();
    let mut fragments = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome.result {
            Ok(generated) => {
                eprintln!(
                    "  ✓ {} ({} values)",
                    outcome.type_name,
                    generated.artifact.len()
                );
                report.succeeded.push(outcome.type_name);
                fragments.push(generated.fragment);
            }
            Err(err) => {
                eprintln!("  ❌ {}", err);
                report.failed.push(TypeFailure {
                    type_name: outcome.type_name,
                    message: err.to_string(),
                });
            }
        }
    }

    if fragments.is_empty() {
        eprintln!("⚠️  No type generated; nothing written");
        return Ok(report);
    }

    // 4. Assemble and write
    let content = render_file(&options.args, &package.name, &fragments);

    if options.dry_run {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .map_err(|e| format!("Failed to write to stdout: {}", e))?;
        return Ok(report);
    }

    let path = match &options.output {
        Some(path) => path.clone(),
        None => default_output_path(&package.dir, &options.types[0]),
    };
    let status = write_if_changed(&path, &content)?;
    match status {
        WriteStatus::Written => eprintln!("✅ Wrote {}", path.display()),
        WriteStatus::Unchanged => eprintln!("✓ {} unchanged", path.display()),
    }

    report.output = Some(path);
    report.status = Some(status);
    Ok(report)
}

/// Build the artifact for one type without writing anything.
pub fn run_inspect(type_name: &str, paths: &[PathBuf]) -> Result<GeneratedArtifact, String> {
    let package = load_package(paths)?;
    let index = PackageIndex::new(&package.files);
    generate_artifact(&index, type_name, &CollectOptions::default()).map_err(|e| e.to_string())
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel parsing and per-type generation.
//!
//! Both steps are embarrassingly parallel: files parse independently, and
//! target types share nothing but the read-only `PackageIndex`. Rayon's
//! indexed `collect` keeps results in input order, so the generated file is
//! identical with or without the `parallel` feature.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use crate::collect::{CollectOptions, PackageIndex};
use crate::error::GenerateError;
use crate::generate::generate_fragment;
use crate::source::{parse_file, SourceFile};
use crate::types::GeneratedArtifact;

/// Result of running the pipeline for one requested type.
#[derive(Debug)]
pub struct TypeOutcome {
    pub type_name: String,
    pub result: Result<Generated, GenerateError>,
}

/// A successfully generated type.
#[derive(Debug)]
pub struct Generated {
    pub artifact: GeneratedArtifact,
    pub fragment: String,
}

impl TypeOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

fn read_and_parse(path: &Path) -> Result<SourceFile, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    parse_file(&path.display().to_string(), &source).map_err(|e| e.to_string())
}

/// Read and parse every file. The first error aborts the load.
#[cfg(feature = "parallel")]
pub fn parse_files(paths: &[PathBuf]) -> Result<Vec<SourceFile>, String> {
    paths.par_iter().map(|p| read_and_parse(p)).collect()
}

/// Read and parse every file. Sequential fallback.
#[cfg(not(feature = "parallel"))]
pub fn parse_files(paths: &[PathBuf]) -> Result<Vec<SourceFile>, String> {
    paths.iter().map(|p| read_and_parse(p)).collect()
}

fn generate_one(index: &PackageIndex<'_>, type_name: &str, options: &CollectOptions) -> TypeOutcome {
    TypeOutcome {
        type_name: type_name.to_string(),
        result: generate_fragment(index, type_name, options)
            .map(|(artifact, fragment)| Generated { artifact, fragment }),
    }
}

/// Generate every requested type, in request order.
#[cfg(feature = "parallel")]
pub fn generate_types(
    index: &PackageIndex<'_>,
    types: &[String],
    options: &CollectOptions,
) -> Vec<TypeOutcome> {
    types
        .par_iter()
        .map(|t| generate_one(index, t, options))
        .collect()
}

/// Generate every requested type, in request order. Sequential fallback.
#[cfg(not(feature = "parallel"))]
pub fn generate_types(
    index: &PackageIndex<'_>,
    types: &[String],
    options: &CollectOptions,
) -> Vec<TypeOutcome> {
    types.iter().map(|t| generate_one(index, t, options)).collect()
}

/// Generate every requested type with progress reporting.
#[cfg(feature = "parallel")]
pub fn generate_types_with_progress(
    index: &PackageIndex<'_>,
    types: &[String],
    options: &CollectOptions,
    progress: &ProgressBar,
) -> Vec<TypeOutcome> {
    let counter = AtomicUsize::new(0);

    types
        .par_iter()
        .map(|t| {
            let outcome = generate_one(index, t, options);

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            progress.set_message(t.clone());

            outcome
        })
        .collect()
}

/// Generate every requested type with progress reporting.
/// Non-parallel fallback (no-op progress).
#[cfg(not(feature = "parallel"))]
pub fn generate_types_with_progress(
    index: &PackageIndex<'_>,
    types: &[String],
    options: &CollectOptions,
) -> Vec<TypeOutcome> {
    generate_types(index, types, options)
}

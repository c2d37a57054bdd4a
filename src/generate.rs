// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-type pipeline.
//!
//! ```text
//! PackageIndex + type name
//!        │
//!        ▼
//!   resolve_target ──► Collector ──► dedup ──► sort_by_value ──► build_name_table
//!                                                                      │
//!                                                 GeneratedArtifact ◄──┘
//! ```
//!
//! Pure and synchronous: every entity is created fresh for one target type
//! and dropped when the artifact is returned. Independent types share nothing
//! but the read-only index, which is what lets `build::parallel` fan them out.

use crate::collect::{resolve_target, CollectOptions, Collector, PackageIndex};
use crate::emit::render_fragment;
use crate::error::GenerateError;
use crate::table::{build_name_table, dedup, sort_by_value};
use crate::types::{GeneratedArtifact, KeySequence};
use crate::verify::contracts::{
    check_artifact_aligned, check_name_table, check_sorted_by_value, check_unique_values,
    check_value_in_domain,
};

/// Run the pipeline for one type, stopping before emission.
pub fn generate_artifact(
    index: &PackageIndex<'_>,
    type_name: &str,
    options: &CollectOptions,
) -> Result<GeneratedArtifact, GenerateError> {
    let target = resolve_target(index, type_name)?;
    let entries = Collector::new(index, &target, options).collect()?;
    if entries.is_empty() {
        return Err(GenerateError::NoConstants {
            type_name: target.name,
        });
    }

    let unique = dedup(entries);
    check_unique_values(&unique);

    let sorted = sort_by_value(unique);
    check_sorted_by_value(&sorted);

    let table = build_name_table(&sorted);
    check_name_table(&table);

    let values: Vec<i128> = sorted.iter().map(|e| e.value).collect();
    for &value in &values {
        check_value_in_domain(value, target.kind);
    }

    let artifact = GeneratedArtifact {
        type_name: target.name,
        blob: table.blob,
        keys: KeySequence {
            kind: target.kind,
            values,
        },
        names: table.ranges,
    };
    check_artifact_aligned(&artifact);
    Ok(artifact)
}

/// Run the whole pipeline for one type, fragment text included.
pub fn generate_fragment(
    index: &PackageIndex<'_>,
    type_name: &str,
    options: &CollectOptions,
) -> Result<(GeneratedArtifact, String), GenerateError> {
    let artifact = generate_artifact(index, type_name, options)?;
    let fragment = render_fragment(&artifact);
    Ok((artifact, fragment))
}

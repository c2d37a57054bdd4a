// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for dedup, value ordering and name packing.
//!
//! Whatever constants the collector hands over, the table stages must
//! produce one entry per value, strictly ascending keys, and contiguous
//! byte ranges that cover the blob exactly.

#![no_main]

use arbitrary::Arbitrary;
use enumtab::table::{build_name_table, dedup, sort_by_value};
use enumtab::{ConstantEntry, GeneratedArtifact, IntKind, KeySequence, WellFormedArtifact};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzConstant {
    name: String,
    value: i16,
}

fuzz_target!(|input: Vec<FuzzConstant>| {
    let entries: Vec<ConstantEntry> = input
        .into_iter()
        .enumerate()
        .map(|(decl_order, c)| ConstantEntry {
            identifier: c.name,
            value: i128::from(c.value),
            decl_order,
        })
        .collect();

    let distinct: std::collections::HashSet<i128> = entries.iter().map(|e| e.value).collect();

    let sorted = sort_by_value(dedup(entries));
    assert_eq!(sorted.len(), distinct.len(), "Dedup lost or kept extra values");

    let table = build_name_table(&sorted);
    let artifact = GeneratedArtifact {
        type_name: "Fuzz".to_string(),
        blob: table.blob,
        keys: KeySequence {
            kind: IntKind::Int16,
            values: sorted.iter().map(|e| e.value).collect(),
        },
        names: table.ranges,
    };

    let checked = WellFormedArtifact::from_artifact(artifact);
    assert!(checked.is_ok(), "Table layout failed validation: {:?}", checked);

    // Every name reads back as the identifier that won its value
    let checked = checked.unwrap();
    for (i, entry) in sorted.iter().enumerate() {
        assert_eq!(checked.name(i), Some(entry.identifier.as_str()));
    }
});

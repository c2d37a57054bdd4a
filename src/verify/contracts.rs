// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode contracts for the table pipeline.
//!
//! Every function here is a `debug_assert!` wrapper: free in release builds,
//! loud in tests. Each one names the invariant it checks.
//!
//! | Contract                      | Invariant                                   |
//! |-------------------------------|---------------------------------------------|
//! | `check_unique_values`         | no two surviving entries share a value      |
//! | `check_sorted_by_value`       | keys strictly ascending                     |
//! | `check_name_table`            | ranges contiguous, cover the whole blob     |
//! | `check_artifact_aligned`      | keys and names pair up one to one           |
//! | `check_value_in_domain`       | every key fits the target integer kind      |

use crate::types::{ConstantEntry, GeneratedArtifact, IntKind, NameTable};

/// No value appears twice after dedup.
#[inline]
pub fn check_unique_values(entries: &[ConstantEntry]) {
    #[cfg(debug_assertions)]
    {
        let mut seen = std::collections::HashSet::with_capacity(entries.len());
        for entry in entries {
            debug_assert!(
                seen.insert(entry.value),
                "Contract violation: duplicate value {} survived dedup ({})",
                entry.value,
                entry.identifier
            );
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = entries;
}

/// Values strictly ascending (strict because dedup ran first).
#[inline]
pub fn check_sorted_by_value(entries: &[ConstantEntry]) {
    for (i, pair) in entries.windows(2).enumerate() {
        debug_assert!(
            pair[0].value < pair[1].value,
            "Contract violation: values not strictly ascending at {}: {} then {}",
            i + 1,
            pair[0].value,
            pair[1].value
        );
    }
}

/// Ranges start at 0, abut each other, and end at `blob.len()`.
#[inline]
pub fn check_name_table(table: &NameTable) {
    let mut expected_start = 0;
    for (i, range) in table.ranges.iter().enumerate() {
        debug_assert!(
            range.start == expected_start,
            "Contract violation: range {} starts at {}, expected {}",
            i,
            range.start,
            expected_start
        );
        debug_assert!(
            range.start <= range.end,
            "Contract violation: range {} is reversed ({}..{})",
            i,
            range.start,
            range.end
        );
        debug_assert!(
            table.blob.is_char_boundary(range.end),
            "Contract violation: range {} ends inside a UTF-8 sequence",
            i
        );
        expected_start = range.end;
    }
    debug_assert!(
        expected_start == table.blob.len(),
        "Contract violation: ranges end at {}, blob is {} bytes",
        expected_start,
        table.blob.len()
    );
}

/// Keys and names have equal length.
#[inline]
pub fn check_artifact_aligned(artifact: &GeneratedArtifact) {
    debug_assert!(
        artifact.keys.len() == artifact.names.len(),
        "Contract violation: {} keys but {} names for {}",
        artifact.keys.len(),
        artifact.names.len(),
        artifact.type_name
    );
}

/// Every value is inside the kind's range.
#[inline]
pub fn check_value_in_domain(value: i128, kind: IntKind) {
    debug_assert!(
        value >= kind.min_value() && value <= kind.max_value(),
        "Contract violation: {} outside {} domain",
        value,
        kind
    );
}

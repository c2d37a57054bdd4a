// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Packing identifiers into one blob.

use crate::types::{ConstantEntry, NameTable};

/// Concatenate identifiers in order, recording a half-open byte range each.
///
/// No separators: `["Two", "Three"]` packs to `"TwoThree"` with ranges
/// `0..3, 3..8`. Ranges count UTF-8 bytes, which is what Go slices index.
pub fn build_name_table(entries: &[ConstantEntry]) -> NameTable {
    let total: usize = entries.iter().map(|e| e.identifier.len()).sum();
    let mut blob = String::with_capacity(total);
    let mut ranges = Vec::with_capacity(entries.len());

    // INVARIANT: RANGES_CONTIGUOUS
    for entry in entries {
        let start = blob.len();
        blob.push_str(&entry.identifier);
        ranges.push(start..blob.len());
    }

    NameTable { blob, ranges }
}

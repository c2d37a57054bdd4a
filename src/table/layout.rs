// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deduplication and ordering.
//!
//! Two constants with the same value are aliases: only the first one declared
//! gets a slot in the table. That is the one a value-to-name lookup returns,
//! which is what users expect when they write `AnotherOne = One` after `One`.

use std::collections::HashMap;

use crate::types::ConstantEntry;

/// Keep one entry per value: the one with the smallest `decl_order`.
///
/// The result is in declaration order. Input order does not matter, so this
/// is also correct when entries arrive shuffled from parallel collection.
pub fn dedup(entries: Vec<ConstantEntry>) -> Vec<ConstantEntry> {
    let mut winners: HashMap<i128, ConstantEntry> = HashMap::with_capacity(entries.len());

    // INVARIANT: FIRST_DECLARED_WINS
    for entry in entries {
        match winners.get(&entry.value) {
            Some(kept) if kept.decl_order <= entry.decl_order => {}
            _ => {
                winners.insert(entry.value, entry);
            }
        }
    }

    let mut unique: Vec<ConstantEntry> = winners.into_values().collect();
    unique.sort_by_key(|e| e.decl_order);
    unique
}

/// Stable ascending sort by value.
///
/// Values are already normalized into the target's domain, so a plain
/// integer comparison is the comparison in the target's signedness.
pub fn sort_by_value(mut entries: Vec<ConstantEntry>) -> Vec<ConstantEntry> {
    // INVARIANT: STABLE_VALUE_ORDER
    entries.sort_by_key(|e| e.value);
    entries
}

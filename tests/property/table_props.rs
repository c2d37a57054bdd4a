//! Laws of the dedup → sort → pack stages.

use std::collections::HashMap;

use enumtab::table::{build_name_table, dedup, sort_by_value};
use enumtab::ConstantEntry;
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Identifier-like names, including non-ASCII letters.
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,10}").unwrap(),
        prop::sample::select(vec![
            "Größe".to_string(),
            "café".to_string(),
            "తెలుగు".to_string(),
            "ñ".to_string(),
        ]),
    ]
}

/// Entries in declaration order with values drawn from a small range so
/// duplicates are common.
fn entries_strategy() -> impl Strategy<Value = Vec<ConstantEntry>> {
    prop::collection::vec((identifier_strategy(), -20i128..20), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(decl_order, (identifier, value))| ConstantEntry {
                identifier,
                value,
                decl_order,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Exactly one survivor per distinct value, and it is the first declared.
    #[test]
    fn prop_dedup_keeps_first_per_value(entries in entries_strategy()) {
        let mut first: HashMap<i128, &ConstantEntry> = HashMap::new();
        for e in &entries {
            first.entry(e.value).or_insert(e);
        }

        let unique = dedup(entries.clone());
        prop_assert_eq!(unique.len(), first.len());
        for e in &unique {
            prop_assert_eq!(first[&e.value].decl_order, e.decl_order);
        }
    }

    /// Dedup does not care what order entries arrive in.
    #[test]
    fn prop_dedup_order_independent(entries in entries_strategy()) {
        let mut reversed = entries.clone();
        reversed.reverse();
        prop_assert_eq!(dedup(entries), dedup(reversed));
    }

    /// After dedup and sort, values are strictly ascending.
    #[test]
    fn prop_sorted_strictly_ascending(entries in entries_strategy()) {
        let sorted = sort_by_value(dedup(entries));
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].value < pair[1].value);
        }
    }

    /// Sorting is stable: equal values keep declaration order.
    #[test]
    fn prop_sort_is_stable(entries in entries_strategy()) {
        let sorted = sort_by_value(entries);
        for pair in sorted.windows(2) {
            if pair[0].value == pair[1].value {
                prop_assert!(pair[0].decl_order < pair[1].decl_order);
            }
        }
    }

    /// Every range slices back to its identifier; ranges tile the blob.
    #[test]
    fn prop_name_table_round_trip(entries in entries_strategy()) {
        let table = build_name_table(&entries);
        prop_assert_eq!(table.len(), entries.len());

        let mut expected_start = 0;
        for (range, entry) in table.ranges.iter().zip(&entries) {
            prop_assert_eq!(range.start, expected_start);
            prop_assert_eq!(&table.blob[range.clone()], entry.identifier.as_str());
            expected_start = range.end;
        }
        prop_assert_eq!(expected_start, table.blob.len());
    }
}

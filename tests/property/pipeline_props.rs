//! Laws of the whole pipeline, driven from generated Go source.

use std::collections::HashMap;

use enumtab::{generate_artifact, render_fragment, CollectOptions, PackageIndex};
use proptest::prelude::*;

use crate::common::package_from_source;

/// Distinct identifiers `c0, c1, ...` paired with random values.
fn declarations_strategy() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::vec(-50i64..50, 1..30).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (format!("c{}", i), v))
            .collect()
    })
}

/// One const block for `type T <kind>`, each line with an explicit value.
fn render_source(kind: &str, decls: &[(String, i64)]) -> String {
    let mut src = format!("type T {}\nconst (\n", kind);
    for (name, value) in decls {
        src.push_str(&format!("\t{} T = {}\n", name, value));
    }
    src.push_str(")\n");
    src
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Round-trip, sortedness, alignment and dedup for a signed type.
    #[test]
    fn prop_signed_pipeline_laws(decls in declarations_strategy()) {
        let files = package_from_source(&render_source("int", &decls));
        let index = PackageIndex::new(&files);
        let artifact = generate_artifact(&index, "T", &CollectOptions::default()).unwrap();

        // Alignment
        prop_assert_eq!(artifact.keys.len(), artifact.names.len());

        // Sortedness
        for pair in artifact.keys.values.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }

        // Dedup: the survivor for each value is the first declared
        let mut first: HashMap<i128, &str> = HashMap::new();
        for (name, value) in &decls {
            first.entry(i128::from(*value)).or_insert(name.as_str());
        }
        prop_assert_eq!(artifact.len(), first.len());

        // Round-trip
        for (value, name) in artifact.entries() {
            prop_assert_eq!(first[&value], name);
            prop_assert_eq!(artifact.name_of(value), Some(name));
            prop_assert_eq!(artifact.value_of(name), Some(value));
        }
    }

    /// Unsigned targets wrap negatives to the top of the range.
    #[test]
    fn prop_unsigned_values_in_domain(decls in declarations_strategy()) {
        let files = package_from_source(&render_source("uint8", &decls));
        let index = PackageIndex::new(&files);
        let artifact = generate_artifact(&index, "T", &CollectOptions::default()).unwrap();

        for value in artifact.keys.iter() {
            prop_assert!((0..=255).contains(&value));
        }
        prop_assert!(artifact.keys.to_vec_of::<u8>().is_some());
    }

    /// Same input, same bytes.
    #[test]
    fn prop_idempotent(decls in declarations_strategy()) {
        let src = render_source("int16", &decls);
        let render = || {
            let files = package_from_source(&src);
            let index = PackageIndex::new(&files);
            render_fragment(&generate_artifact(&index, "T", &CollectOptions::default()).unwrap())
        };
        prop_assert_eq!(render(), render());
    }

    /// Block order never changes the table, only which alias survives.
    #[test]
    fn prop_distinct_values_independent_of_declaration_order(decls in declarations_strategy()) {
        let mut seen = std::collections::HashSet::new();
        let distinct: Vec<_> = decls.into_iter().filter(|(_, v)| seen.insert(*v)).collect();
        let mut reversed = distinct.clone();
        reversed.reverse();

        let build = |d: &[(String, i64)]| {
            let files = package_from_source(&render_source("int", d));
            let index = PackageIndex::new(&files);
            generate_artifact(&index, "T", &CollectOptions::default()).unwrap()
        };
        let a = build(&distinct);
        let b = build(&reversed);
        prop_assert_eq!(a.blob, b.blob);
        prop_assert_eq!(a.keys, b.keys);
    }
}

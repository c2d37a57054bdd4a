// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Go declaration parser and the evaluator behind it.
//!
//! The generator runs on whatever is in the package directory, including
//! half-edited files. Parsing must return Err on garbage, and generation
//! must return a typed error, never panic (iota overflow, shift amounts,
//! deep parentheses, reference cycles).

#![no_main]

use enumtab::{generate_artifact, parse_file, CollectOptions, PackageIndex, WellFormedArtifact};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Property 1: parse_file never panics
    let Ok(file) = parse_file("fuzz.go", text) else {
        return;
    };

    let files = vec![file];
    let index = PackageIndex::new(&files);

    for decl in &files[0].types {
        // Property 2: generation never panics, whatever the declarations
        let Ok(artifact) = generate_artifact(&index, &decl.name, &CollectOptions::default()) else {
            continue;
        };

        // Property 3: anything that generated is well formed
        let checked = WellFormedArtifact::from_artifact(artifact);
        assert!(checked.is_ok(), "Generated artifact failed validation: {:?}", checked);
    }
});

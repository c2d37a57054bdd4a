// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for Go string-literal quoting.
//!
//! The name blob is emitted as one interpreted string literal. Whatever the
//! identifiers contain, the literal must stay on one line, be delimited by
//! exactly its two outer quotes, and never end on a dangling escape.

#![no_main]

use enumtab::emit::quote_go_string;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: String| {
    let quoted = quote_go_string(&text);

    assert!(quoted.len() >= 2);
    assert!(quoted.starts_with('"') && quoted.ends_with('"'));
    assert!(!quoted.contains('\n'), "Literal spans lines: {}", quoted);

    // Walk the body: every backslash starts an escape, no bare quote inside
    let body = &quoted[1..quoted.len() - 1];
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => assert!(chars.next().is_some(), "Dangling escape in {}", quoted),
            '"' => panic!("Unescaped quote in {}", quoted),
            _ => {}
        }
    }
});

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Go source emission.
//!
//! Output is written gofmt-canonical from the start (tabs, one element per
//! line, trailing commas), so there is no formatting pass afterwards. The
//! golden tests compare byte for byte, so treat every `\n` and `\t` here as
//! load-bearing.
//!
//! # Fragment shape
//!
//! ```text
//!
//! const _Day_name = "MondayTuesday"
//!
//! var _Day_key_slice = []interface{}{
//! 	Day(0),
//! 	Day(1),
//! }
//!
//! var _Day_val_slice = []string{
//! 	_Day_name[0:6],
//! 	_Day_name[6:13],
//! }
//!
//! func (i Day) GetEnumSlices() ([]interface{}, []string) {
//! 	return _Day_key_slice, _Day_val_slice
//! }
//! ```

mod quote;

pub use quote::quote_go_string;

use crate::types::GeneratedArtifact;

/// Name of the generated method.
pub const ACCESSOR: &str = "GetEnumSlices";

/// Render one type's fragment. Starts with a blank line, ends with `}\n`.
pub fn render_fragment(artifact: &GeneratedArtifact) -> String {
    let t = artifact.type_name.as_str();
    // ~24 bytes per key line and per val line, plus the fixed parts.
    let mut out = String::with_capacity(256 + artifact.blob.len() + 48 * artifact.len());

    out.push_str(&format!(
        "\nconst _{}_name = {}\n",
        t,
        quote_go_string(&artifact.blob)
    ));

    out.push_str(&format!("\nvar _{}_key_slice = []interface{{}}{{\n", t));
    for value in artifact.keys.iter() {
        out.push_str(&format!("\t{}({}),\n", t, value));
    }
    out.push_str("}\n");

    out.push_str(&format!("\nvar _{}_val_slice = []string{{\n", t));
    for range in &artifact.names {
        out.push_str(&format!("\t_{}_name[{}:{}],\n", t, range.start, range.end));
    }
    out.push_str("}\n");

    out.push_str(&format!(
        "\nfunc (i {t}) {ACCESSOR}() ([]interface{{}}, []string) {{\n\treturn _{t}_key_slice, _{t}_val_slice\n}}\n",
        t = t,
        ACCESSOR = ACCESSOR
    ));

    out
}

/// Header line naming the command that produced the file.
///
/// Matches the pattern Go tooling recognizes as generated code.
pub fn generated_header(args: &[String]) -> String {
    format!("// Code generated by \"enumtab {}\"; DO NOT EDIT.\n", args.join(" "))
}

/// Assemble a complete Go file: header, package clause, fragments in order.
pub fn render_file(args: &[String], package: &str, fragments: &[String]) -> String {
    let body: usize = fragments.iter().map(String::len).sum();
    let mut out = String::with_capacity(128 + body);
    out.push_str(&generated_header(args));
    out.push('\n');
    out.push_str(&format!("package {}\n", package));
    for fragment in fragments {
        out.push_str(fragment);
    }
    out
}

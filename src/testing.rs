//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::collect::{CollectOptions, PackageIndex};
use crate::error::GenerateError;
use crate::generate::generate_fragment;
use crate::source::{parse_file, SourceFile};

/// Package clause prepended to every test input.
pub const TEST_PACKAGE: &str = "package test\n";

/// Parse one declaration snippet as the single file of package `test`.
///
/// Panics on a parse error: test inputs are expected to be valid Go.
pub fn package_from_source(declarations: &str) -> Vec<SourceFile> {
    package_from_files(&[("test.go", declarations)])
}

/// Parse several `(file name, declarations)` snippets as one package.
pub fn package_from_files(files: &[(&str, &str)]) -> Vec<SourceFile> {
    files
        .iter()
        .map(|(name, declarations)| {
            let source = format!("{}{}", TEST_PACKAGE, declarations);
            match parse_file(name, &source) {
                Ok(file) => file,
                Err(err) => panic!("test input does not parse: {}", err),
            }
        })
        .collect()
}

/// Generate the fragment for `type_name` with default options.
pub fn generate_from_source(declarations: &str, type_name: &str) -> Result<String, GenerateError> {
    generate_with_options(declarations, type_name, &CollectOptions::default())
}

/// Generate the fragment for `type_name` with explicit options.
pub fn generate_with_options(
    declarations: &str,
    type_name: &str,
    options: &CollectOptions,
) -> Result<String, GenerateError> {
    let files = package_from_source(declarations);
    let index = PackageIndex::new(&files);
    generate_fragment(&index, type_name, options).map(|(_, fragment)| fragment)
}

/// Build a const block declaring `names` as consecutive `iota` values of `type_name`.
pub fn iota_block(type_name: &str, names: &[&str]) -> String {
    let mut out = format!("type {} int\nconst (\n", type_name);
    for (i, name) in names.iter().enumerate() {
        if i == 0 {
            out.push_str(&format!("\t{} {} = iota\n", name, type_name));
        } else {
            out.push_str(&format!("\t{}\n", name));
        }
    }
    out.push_str(")\n");
    out
}

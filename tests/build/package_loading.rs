//! Package discovery and parsing across files.

use enumtab::build::load_package;
use tempfile::TempDir;

use crate::common::write_files;

#[test]
fn test_directory_loads_sorted_sources_without_tests() {
    let tmp = TempDir::new().unwrap();
    write_files(
        tmp.path(),
        &[
            ("z.go", "package colors\n\nconst (\n\tBlue Color = iota + 2\n)\n"),
            ("a.go", "package colors\n\ntype Color int\n\nconst (\n\tRed Color = iota\n\tGreen\n)\n"),
            ("a_test.go", "package colors_test\n\nconst Oops = 1\n"),
        ],
    );

    let package = load_package(&[tmp.path().to_path_buf()]).unwrap();
    assert_eq!(package.name, "colors");
    let paths: Vec<_> = package.files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("a.go"));
    assert!(paths[1].ends_with("z.go"));
}

#[test]
fn test_explicit_file_list() {
    let tmp = TempDir::new().unwrap();
    let paths = write_files(
        tmp.path(),
        &[
            ("one.go", "package p\n\ntype T int\n"),
            ("two.go", "package p\n\nconst X T = 1\n"),
            ("three.go", "package p\n\nconst Y T = 2\n"),
        ],
    );

    let package = load_package(&paths[..2]).unwrap();
    assert_eq!(package.files.len(), 2);
    assert_eq!(package.dir, tmp.path());
}

#[test]
fn test_parse_error_names_file_and_position() {
    let tmp = TempDir::new().unwrap();
    write_files(tmp.path(), &[("bad.go", "package p\n\nconst (\n\tA = \n)\n")]);

    let err = load_package(&[tmp.path().to_path_buf()]).unwrap_err();
    assert!(err.contains("bad.go:"), "{}", err);
}

#[test]
fn test_missing_path() {
    let tmp = TempDir::new().unwrap();
    let err = load_package(&[tmp.path().join("nope.go")]).unwrap_err();
    assert!(err.contains("No such file"), "{}", err);
}

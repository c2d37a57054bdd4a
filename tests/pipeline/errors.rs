//! Per-type failures: every one names the type and enough context to find
//! the faulty declaration, and none of them leaks into sibling types.

use enumtab::{generate_artifact, CollectOptions, GenerateError, IntKind, PackageIndex};

use crate::common::package_from_source;

fn generate(declarations: &str, type_name: &str) -> Result<Vec<i128>, GenerateError> {
    let files = package_from_source(declarations);
    let index = PackageIndex::new(&files);
    generate_artifact(&index, type_name, &CollectOptions::default()).map(|a| a.keys.values)
}

fn unresolvable(err: GenerateError) -> (String, String, String) {
    match err {
        GenerateError::UnresolvableExpression {
            identifier,
            expression,
            reason,
            ..
        } => (identifier, expression, reason),
        other => panic!("expected UnresolvableExpression, got {:?}", other),
    }
}

#[test]
fn test_type_not_found() {
    let err = generate("type Day int\n", "Month").unwrap_err();
    assert!(matches!(err, GenerateError::TypeNotFound { .. }));
    assert_eq!(err.type_name(), "Month");
}

#[test]
fn test_non_integer_types_are_not_found() {
    for decl in [
        "type T string\n",
        "type T float64\n",
        "type T struct{ x int }\n",
        "type T []int\n",
        "type T other.Kind\n",
    ] {
        let err = generate(decl, "T").unwrap_err();
        assert!(
            matches!(err, GenerateError::TypeNotFound { .. }),
            "{}: {:?}",
            decl,
            err
        );
    }
}

#[test]
fn test_no_constants() {
    let err = generate("type Day int\nconst Unrelated = 1\n", "Day").unwrap_err();
    assert_eq!(err.to_string(), "type Day: no values defined");
}

#[test]
fn test_function_call_is_unresolvable() {
    let err = generate("type T int\nconst (\n\tA T = len(\"abc\")\n)\n", "T").unwrap_err();
    let (identifier, expression, _) = unresolvable(err);
    assert_eq!(identifier, "A");
    assert_eq!(expression, "len(\"abc\")");
}

#[test]
fn test_cycle_is_unresolvable() {
    let err = generate("type T int\nconst (\n\tA T = B + 1\n\tB T = A + 1\n)\n", "T").unwrap_err();
    let (identifier, _, reason) = unresolvable(err);
    assert_eq!(identifier, "A");
    assert!(reason.contains("cycle"), "{}", reason);
}

#[test]
fn test_division_by_zero_is_unresolvable() {
    let err = generate("type T int\nconst (\n\tA T = 1 / (iota - iota)\n)\n", "T").unwrap_err();
    let (_, expression, _) = unresolvable(err);
    assert_eq!(expression, "1 / (iota - iota)");
}

#[test]
fn test_missing_value_is_unresolvable() {
    let err = generate("type T int\nconst (\n\tA, B T = 1\n)\n", "T").unwrap_err();
    let (identifier, _, _) = unresolvable(err);
    assert_eq!(identifier, "B");
}

#[test]
fn test_discard_is_still_evaluated() {
    let err = generate("type T int\nconst (\n\t_ T = missing\n\tA T = 1\n)\n", "T").unwrap_err();
    let (identifier, expression, _) = unresolvable(err);
    assert_eq!(identifier, "_");
    assert_eq!(expression, "missing");
}

#[test]
fn test_signed_overflow_is_out_of_range() {
    let err = generate("type S int8\nconst (\n\tA S = 127 + iota\n\tB\n)\n", "S").unwrap_err();
    assert_eq!(
        err,
        GenerateError::ValueOutOfRange {
            type_name: "S".into(),
            identifier: "B".into(),
            value: "128".into(),
            kind: IntKind::Int8,
        }
    );
    assert_eq!(err.to_string(), "type S: value 128 of B overflows int8");
}

#[test]
fn test_int_is_64_bit() {
    let err = generate("type I int\nconst (\n\tTop I = 1 << 63\n)\n", "I").unwrap_err();
    assert!(matches!(err, GenerateError::ValueOutOfRange { kind: IntKind::Int, .. }));
    assert_eq!(
        generate("type I int\nconst (\n\tTop I = 1<<63 - 1\n)\n", "I").unwrap(),
        vec![i64::MAX as i128]
    );
}

#[test]
fn test_unsigned_never_out_of_range() {
    assert_eq!(
        generate("type U uint32\nconst (\n\tA U = -1\n\tB U = 1 << 32\n)\n", "U").unwrap(),
        vec![0, u32::MAX as i128]
    );
}

#[test]
fn test_unsigned_wraps_past_128_bits() {
    let files = package_from_source("type U uint8\nconst (\n\tA U = 1 << 130\n\tB U = 3\n)\n");
    let index = PackageIndex::new(&files);
    let artifact = generate_artifact(&index, "U", &CollectOptions::default()).unwrap();
    assert_eq!(artifact.keys.values, vec![0, 3]);
    assert_eq!(artifact.blob, "AB");

    assert_eq!(
        generate("type W uint64\nconst (\n\tBig W = (1 << 100) * (1 << 100) + 9\n)\n", "W").unwrap(),
        vec![9]
    );
}

#[test]
fn test_signed_overflow_past_128_bits_is_fatal() {
    let err = generate("type S int64\nconst (\n\tA S = 1 << 130\n)\n", "S").unwrap_err();
    assert!(matches!(err, GenerateError::ValueOutOfRange { kind: IntKind::Int64, .. }));
}

#[test]
fn test_failure_is_isolated_to_its_type() {
    let src = "type Good int\ntype Bad int\nconst (\n\tG Good = iota\n\tB Bad = nowhere.X\n)\n";
    assert!(generate(src, "Bad").is_err());
    assert_eq!(generate(src, "Good").unwrap(), vec![0]);
}

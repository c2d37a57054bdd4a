//! Type inference, implicit repetition and constant-expression evaluation.

use enumtab::testing::generate_with_options;
use enumtab::{generate_artifact, CollectOptions, GeneratedArtifact, PackageIndex};

use crate::common::{package_from_files, package_from_source};

fn artifact(declarations: &str, type_name: &str) -> GeneratedArtifact {
    let files = package_from_source(declarations);
    let index = PackageIndex::new(&files);
    generate_artifact(&index, type_name, &CollectOptions::default())
        .unwrap_or_else(|e| panic!("{}", e))
}

fn pairs(artifact: &GeneratedArtifact) -> Vec<(i128, String)> {
    artifact
        .entries()
        .map(|(v, n)| (v, n.to_string()))
        .collect()
}

#[test]
fn test_multiple_names_per_line() {
    let a = artifact(
        "type T int\nconst (\n\tA, B T = iota, iota * 10\n\tC, D\n)\n",
        "T",
    );
    assert_eq!(
        pairs(&a),
        vec![
            (0, "A".into()),
            (1, "C".into()),
            (10, "D".into()),
        ]
    );
}

#[test]
fn test_conversion_makes_line_typed() {
    let a = artifact(
        "type Color uint8\nconst (\n\tRed = Color(iota)\n\tGreen\n\tBlue\n)\n",
        "Color",
    );
    assert_eq!(a.blob, "RedGreenBlue");
    assert_eq!(a.keys.values, vec![0, 1, 2]);
}

#[test]
fn test_typed_operand_propagates_through_arithmetic() {
    let a = artifact(
        "type Level int\nconst Base Level = 10\nconst (\n\tLow = Base + iota\n\tMid\n\tHigh = 2 * Base\n)\n",
        "Level",
    );
    assert_eq!(
        pairs(&a),
        vec![
            (10, "Base".into()),
            (11, "Mid".into()),
            (20, "High".into()),
        ]
    );
    // Low == Base, declared later: dropped.
    assert_eq!(a.value_of("Low"), None);
}

#[test]
fn test_shift_sequences() {
    let a = artifact(
        "type Size uint64\nconst (\n\t_ = iota\n\tKB Size = 1 << (10 * iota)\n\tMB\n\tGB\n)\n",
        "Size",
    );
    assert_eq!(a.keys.values, vec![1 << 10, 1 << 20, 1 << 30]);
}

#[test]
fn test_untyped_lines_in_block_still_advance_iota() {
    let a = artifact(
        "type Op int\nconst (\n\tmaxArgs = 3\n\tAdd Op = iota\n\tSub\n)\n",
        "Op",
    );
    assert_eq!(pairs(&a), vec![(1, "Add".into()), (2, "Sub".into())]);
}

#[test]
fn test_literal_forms() {
    let a = artifact(
        "type Code int32\nconst (\n\tHex Code = 0x1F\n\tOct Code = 0o17\n\tLegacy Code = 010\n\tBin Code = 0b101\n\tBig Code = 1_000\n\tChar Code = 'A'\n\tFloaty Code = 2.0e3\n)\n",
        "Code",
    );
    assert_eq!(
        pairs(&a),
        vec![
            (5, "Bin".into()),
            (8, "Legacy".into()),
            (15, "Oct".into()),
            (31, "Hex".into()),
            (65, "Char".into()),
            (1000, "Big".into()),
            (2000, "Floaty".into()),
        ]
    );
}

#[test]
fn test_references_resolve_across_files_in_any_order() {
    let files = package_from_files(&[
        ("a.go", "const (\n\tFirst = Start + iota\n\tSecond\n)\n"),
        ("b.go", "type Seq int\nconst Start Seq = 100\n"),
    ]);
    let index = PackageIndex::new(&files);
    let a = generate_artifact(&index, "Seq", &CollectOptions::default()).unwrap();
    assert_eq!(
        pairs(&a),
        vec![(100, "First".into()), (101, "Second".into())]
    );
}

#[test]
fn test_alias_type_chain() {
    let a = artifact(
        "type Inner uint8\ntype Outer Inner\ntype Alias = Outer\nconst (\n\tX Alias = 255\n\tY Alias = iota - 2\n)\n",
        "Alias",
    );
    // iota - 2 at iota 1 wraps to 255 and collides with X.
    assert_eq!(pairs(&a), vec![(255, "X".into())]);
}

#[test]
fn test_byte_and_rune_underlying() {
    let a = artifact("type B byte\nconst (\n\tLast B = 255\n)\n", "B");
    assert_eq!(a.keys.kind.go_name(), "uint8");
    let r = artifact("type R rune\nconst (\n\tSmile R = '☺'\n)\n", "R");
    assert_eq!(r.keys.values, vec![0x263A]);
}

#[test]
fn test_trim_prefix_option() {
    let options = CollectOptions {
        trim_prefix: Some("Color".into()),
        line_comment: false,
    };
    let out = generate_with_options(
        "type Color int\nconst (\n\tColorRed Color = iota\n\tColorBlue\n)\n",
        "Color",
        &options,
    )
    .unwrap();
    assert!(out.contains("const _Color_name = \"RedBlue\"\n"));
}

#[test]
fn test_line_comment_option() {
    let options = CollectOptions {
        trim_prefix: None,
        line_comment: true,
    };
    let out = generate_with_options(
        "type Pill int\nconst (\n\tPlacebo Pill = iota // placebo pill\n\tAspirin\n)\n",
        "Pill",
        &options,
    )
    .unwrap();
    assert!(out.contains("const _Pill_name = \"placebo pillAspirin\"\n"));
    assert!(out.contains("\t_Pill_name[0:12],\n\t_Pill_name[12:19],\n"));
}

#[test]
fn test_constants_declared_inside_functions() {
    let a = artifact(
        "type Day int\n\nfunc f() {\n\tconst (\n\t\tA Day = iota\n\t\tB\n\t)\n}\n\nconst C Day = 5\n",
        "Day",
    );
    assert_eq!(
        pairs(&a),
        vec![(0, "A".into()), (1, "B".into()), (5, "C".into())]
    );
}

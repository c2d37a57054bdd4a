//! The reference scenarios, checked on the artifact rather than the text.

use enumtab::{generate_artifact, CollectOptions, GeneratedArtifact, PackageIndex};

use crate::common::{package_from_files, package_from_source, DAY_IN, GAP_IN, NUM_IN, OFFSET_IN};

fn artifact(declarations: &str, type_name: &str) -> GeneratedArtifact {
    let files = package_from_source(declarations);
    let index = PackageIndex::new(&files);
    generate_artifact(&index, type_name, &CollectOptions::default()).unwrap()
}

fn ranges(artifact: &GeneratedArtifact) -> Vec<(usize, usize)> {
    artifact.names.iter().map(|r| (r.start, r.end)).collect()
}

#[test]
fn test_contiguous_zero_based() {
    let a = artifact(DAY_IN, "Day");
    assert_eq!(a.blob, "MondayTuesdayWednesdayThursdayFridaySaturdaySunday");
    assert_eq!(a.keys.values, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(
        ranges(&a),
        vec![(0, 6), (6, 13), (13, 22), (22, 30), (30, 36), (36, 44), (44, 50)]
    );
}

#[test]
fn test_offset_with_alias_drops_alias() {
    let a = artifact(OFFSET_IN, "Number");
    assert_eq!(a.keys.values, vec![1, 2, 3]);
    assert_eq!(a.blob, "OneTwoThree");
    assert_eq!(a.value_of("AnotherOne"), None);
    assert_eq!(a.name_of(1), Some("One"));
}

#[test]
fn test_sparse_values_with_late_duplicate() {
    let src = format!("{}const Seven2 Gap = 7\n", GAP_IN);
    let a = artifact(&src, "Gap");
    assert_eq!(a.keys.values, vec![2, 3, 5, 6, 7, 8, 9, 11]);
    assert_eq!(a.name_of(7), Some("Seven"));
}

#[test]
fn test_signed_spanning_zero() {
    let a = artifact(NUM_IN, "Num");
    assert_eq!(a.keys.values, vec![-2, -1, 0, 1, 2]);
    assert_eq!(a.blob, "m_2m_1m0m1m2");
}

#[test]
fn test_unsigned_blocks_sorted_regardless_of_block_order() {
    let files = package_from_files(&[
        ("high.go", "type Unum uint8\nconst (\n\tm_2 Unum = iota + 253\n\tm_1\n)\n"),
        ("low.go", "const (\n\tm0 Unum = iota\n\tm1\n\tm2\n)\n"),
    ]);
    let index = PackageIndex::new(&files);
    let a = generate_artifact(&index, "Unum", &CollectOptions::default()).unwrap();
    assert_eq!(a.keys.values, vec![0, 1, 2, 253, 254]);
    assert_eq!(a.blob, "m0m1m2m_2m_1");
}

#[test]
fn test_order_follows_value_not_name() {
    let a = artifact(
        "type Prime int\nconst (\n\tp37 Prime = 31\n\tp2 Prime = 2\n\tp41 Prime = 41\n)\n",
        "Prime",
    );
    assert_eq!(a.keys.values, vec![2, 31, 41]);
    assert_eq!(a.name_at(1), Some("p37"));
    assert_eq!(ranges(&a), vec![(0, 2), (2, 5), (5, 8)]);
}

#[test]
fn test_unsigned_wrap_sorts_at_top() {
    let a = artifact(
        "type Flag uint16\nconst (\n\tNone Flag = 0\n\tAll Flag = ^Flag(0)\n\tMinus Flag = iota - 3\n)\n",
        "Flag",
    );
    // iota - 3 at iota 2 is -1, which wraps onto All's value and is dropped.
    assert_eq!(a.keys.values, vec![0, 65535]);
    assert_eq!(a.name_of(65535), Some("All"));
}

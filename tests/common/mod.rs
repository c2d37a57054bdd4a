//! Shared test fixtures: the golden inputs and their expected fragments.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

// Re-export canonical test utilities from enumtab::testing
pub use enumtab::testing::{generate_from_source, package_from_files, package_from_source};

/// One golden case: declarations (without package clause), type, expected fragment.
pub struct Golden {
    pub name: &'static str,
    pub type_name: &'static str,
    pub input: &'static str,
    pub output: &'static str,
}

pub const DAY_IN: &str = r#"type Day int
const (
	Monday Day = iota
	Tuesday
	Wednesday
	Thursday
	Friday
	Saturday
	Sunday
)
"#;

pub const DAY_OUT: &str = r#"
const _Day_name = "MondayTuesdayWednesdayThursdayFridaySaturdaySunday"

var _Day_key_slice = []interface{}{
	Day(0),
	Day(1),
	Day(2),
	Day(3),
	Day(4),
	Day(5),
	Day(6),
}

var _Day_val_slice = []string{
	_Day_name[0:6],
	_Day_name[6:13],
	_Day_name[13:22],
	_Day_name[22:30],
	_Day_name[30:36],
	_Day_name[36:44],
	_Day_name[44:50],
}

func (i Day) GetEnumSlices() ([]interface{}, []string) {
	return _Day_key_slice, _Day_val_slice
}
"#;

pub const OFFSET_IN: &str = r#"type Number int
const (
	_ Number = iota
	One
	Two
	Three
	AnotherOne = One  // Duplicate; note that AnotherOne doesn't appear below.
)
"#;

pub const OFFSET_OUT: &str = r#"
const _Number_name = "OneTwoThree"

var _Number_key_slice = []interface{}{
	Number(1),
	Number(2),
	Number(3),
}

var _Number_val_slice = []string{
	_Number_name[0:3],
	_Number_name[3:6],
	_Number_name[6:11],
}

func (i Number) GetEnumSlices() ([]interface{}, []string) {
	return _Number_key_slice, _Number_val_slice
}
"#;

pub const GAP_IN: &str = r#"type Gap int
const (
	Two Gap = 2
	Three Gap = 3
	Five Gap = 5
	Six Gap = 6
	Seven Gap = 7
	Eight Gap = 8
	Nine Gap = 9
	Eleven Gap = 11
)
"#;

pub const GAP_OUT: &str = r#"
const _Gap_name = "TwoThreeFiveSixSevenEightNineEleven"

var _Gap_key_slice = []interface{}{
	Gap(2),
	Gap(3),
	Gap(5),
	Gap(6),
	Gap(7),
	Gap(8),
	Gap(9),
	Gap(11),
}

var _Gap_val_slice = []string{
	_Gap_name[0:3],
	_Gap_name[3:8],
	_Gap_name[8:12],
	_Gap_name[12:15],
	_Gap_name[15:20],
	_Gap_name[20:25],
	_Gap_name[25:29],
	_Gap_name[29:35],
}

func (i Gap) GetEnumSlices() ([]interface{}, []string) {
	return _Gap_key_slice, _Gap_val_slice
}
"#;

pub const NUM_IN: &str = r#"type Num int
const (
	m_2 Num = -2 + iota
	m_1
	m0
	m1
	m2
)
"#;

pub const NUM_OUT: &str = r#"
const _Num_name = "m_2m_1m0m1m2"

var _Num_key_slice = []interface{}{
	Num(-2),
	Num(-1),
	Num(0),
	Num(1),
	Num(2),
}

var _Num_val_slice = []string{
	_Num_name[0:3],
	_Num_name[3:6],
	_Num_name[6:8],
	_Num_name[8:10],
	_Num_name[10:12],
}

func (i Num) GetEnumSlices() ([]interface{}, []string) {
	return _Num_key_slice, _Num_val_slice
}
"#;

pub const UNUM_IN: &str = r#"type Unum uint
const (
	m_2 Unum = iota + 253
	m_1
)

const (
	m0 Unum = iota
	m1
	m2
)
"#;

pub const UNUM_OUT: &str = r#"
const _Unum_name = "m0m1m2m_2m_1"

var _Unum_key_slice = []interface{}{
	Unum(0),
	Unum(1),
	Unum(2),
	Unum(253),
	Unum(254),
}

var _Unum_val_slice = []string{
	_Unum_name[0:2],
	_Unum_name[2:4],
	_Unum_name[4:6],
	_Unum_name[6:9],
	_Unum_name[9:12],
}

func (i Unum) GetEnumSlices() ([]interface{}, []string) {
	return _Unum_key_slice, _Unum_val_slice
}
"#;

pub const PRIME_IN: &str = r#"type Prime int
const (
	p2 Prime = 2
	p3 Prime = 3
	p5 Prime = 5
	p7 Prime = 7
	p77 Prime = 7 // Duplicate; note that p77 doesn't appear below.
	p11 Prime = 11
	p13 Prime = 13
	p17 Prime = 17
	p19 Prime = 19
	p23 Prime = 23
	p29 Prime = 29
	p37 Prime = 31
	p41 Prime = 41
	p43 Prime = 43
)
"#;

pub const PRIME_OUT: &str = r#"
const _Prime_name = "p2p3p5p7p11p13p17p19p23p29p37p41p43"

var _Prime_key_slice = []interface{}{
	Prime(2),
	Prime(3),
	Prime(5),
	Prime(7),
	Prime(11),
	Prime(13),
	Prime(17),
	Prime(19),
	Prime(23),
	Prime(29),
	Prime(31),
	Prime(41),
	Prime(43),
}

var _Prime_val_slice = []string{
	_Prime_name[0:2],
	_Prime_name[2:4],
	_Prime_name[4:6],
	_Prime_name[6:8],
	_Prime_name[8:11],
	_Prime_name[11:14],
	_Prime_name[14:17],
	_Prime_name[17:20],
	_Prime_name[20:23],
	_Prime_name[23:26],
	_Prime_name[26:29],
	_Prime_name[29:32],
	_Prime_name[32:35],
}

func (i Prime) GetEnumSlices() ([]interface{}, []string) {
	return _Prime_key_slice, _Prime_val_slice
}
"#;

pub const GOLDEN: &[Golden] = &[
    Golden {
        name: "day",
        type_name: "Day",
        input: DAY_IN,
        output: DAY_OUT,
    },
    Golden {
        name: "offset",
        type_name: "Number",
        input: OFFSET_IN,
        output: OFFSET_OUT,
    },
    Golden {
        name: "gap",
        type_name: "Gap",
        input: GAP_IN,
        output: GAP_OUT,
    },
    Golden {
        name: "num",
        type_name: "Num",
        input: NUM_IN,
        output: NUM_OUT,
    },
    Golden {
        name: "unum",
        type_name: "Unum",
        input: UNUM_IN,
        output: UNUM_OUT,
    },
    Golden {
        name: "prime",
        type_name: "Prime",
        input: PRIME_IN,
        output: PRIME_OUT,
    },
];

// ============================================================================
// PACKAGE DIRECTORIES
// ============================================================================

/// Write `files` as `(name, content)` into `dir`, returning their paths.
pub fn write_files(dir: &Path, files: &[(&str, &str)]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|(name, content)| {
            let path = dir.join(name);
            fs::write(&path, content).unwrap();
            path
        })
        .collect()
}

/// A one-file package `name` in `dir` holding `declarations`.
pub fn write_package(dir: &Path, package: &str, declarations: &str) -> PathBuf {
    let content = format!("package {}\n\n{}", package, declarations);
    write_files(dir, &[("decls.go", &content)]).remove(0)
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types for the name-table pipeline.
//!
//! Everything here is built fresh for one (target type, invocation) pair and
//! thrown away once the Go fragment is rendered. Nothing is cached between
//! types, so two types can be generated on two threads without talking to
//! each other.
//!
//! Values are carried as `i128`. That is wide enough for every Go integer
//! kind, signed or unsigned, so a value normalized into its kind's domain
//! sorts correctly with plain integer comparison: `uint8(253)` really is
//! bigger than `uint8(2)`, and `int(-2)` really is smaller than `int(0)`.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

// ============================================================================
// INTEGER KINDS
// ============================================================================

/// Underlying integer kind of a Go named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntKind {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
}

impl IntKind {
    /// Map a predeclared Go type name to its kind. `byte` and `rune` are aliases.
    pub fn from_go_name(name: &str) -> Option<Self> {
        Some(match name {
            "int" => IntKind::Int,
            "int8" => IntKind::Int8,
            "int16" => IntKind::Int16,
            "int32" | "rune" => IntKind::Int32,
            "int64" => IntKind::Int64,
            "uint" => IntKind::Uint,
            "uint8" | "byte" => IntKind::Uint8,
            "uint16" => IntKind::Uint16,
            "uint32" => IntKind::Uint32,
            "uint64" => IntKind::Uint64,
            "uintptr" => IntKind::Uintptr,
            _ => return None,
        })
    }

    pub fn go_name(self) -> &'static str {
        match self {
            IntKind::Int => "int",
            IntKind::Int8 => "int8",
            IntKind::Int16 => "int16",
            IntKind::Int32 => "int32",
            IntKind::Int64 => "int64",
            IntKind::Uint => "uint",
            IntKind::Uint8 => "uint8",
            IntKind::Uint16 => "uint16",
            IntKind::Uint32 => "uint32",
            IntKind::Uint64 => "uint64",
            IntKind::Uintptr => "uintptr",
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            IntKind::Int | IntKind::Int8 | IntKind::Int16 | IntKind::Int32 | IntKind::Int64
        )
    }

    /// Width in bits. `int`, `uint` and `uintptr` are treated as 64-bit.
    pub fn bit_width(self) -> u32 {
        match self {
            IntKind::Int8 | IntKind::Uint8 => 8,
            IntKind::Int16 | IntKind::Uint16 => 16,
            IntKind::Int32 | IntKind::Uint32 => 32,
            IntKind::Int | IntKind::Int64 | IntKind::Uint | IntKind::Uint64 | IntKind::Uintptr => {
                64
            }
        }
    }

    pub fn min_value(self) -> i128 {
        if self.is_signed() {
            -(1i128 << (self.bit_width() - 1))
        } else {
            0
        }
    }

    pub fn max_value(self) -> i128 {
        if self.is_signed() {
            (1i128 << (self.bit_width() - 1)) - 1
        } else {
            (1i128 << self.bit_width()) - 1
        }
    }

    /// Bring an exact constant value into this kind's domain.
    ///
    /// Unsigned kinds wrap modulo 2^width. Signed kinds never wrap: a value
    /// outside the range yields `None` and the caller reports it.
    pub fn normalize(self, raw: i128) -> Option<i128> {
        if self.is_signed() {
            (self.min_value()..=self.max_value())
                .contains(&raw)
                .then_some(raw)
        } else {
            Some(raw.rem_euclid(1i128 << self.bit_width()))
        }
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.go_name())
    }
}

/// The named integer type whose constants one pipeline run processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetType {
    pub name: String,
    pub kind: IntKind,
}

impl TargetType {
    pub fn new(name: impl Into<String>, kind: IntKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn signed(&self) -> bool {
        self.kind.is_signed()
    }

    pub fn bit_width(&self) -> u32 {
        self.kind.bit_width()
    }
}

// ============================================================================
// PIPELINE ENTITIES
// ============================================================================

/// One collected constant of the target type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstantEntry {
    /// Text that ends up in the blob (after prefix trimming / line comments).
    pub identifier: String,
    /// Value normalized into the target kind's domain.
    pub value: i128,
    /// Position in source order across all blocks and files.
    pub decl_order: usize,
}

/// All surviving identifiers packed into one string, with a byte range each.
///
/// `ranges` are half-open and contiguous: the first starts at 0, each one
/// starts where the previous ended, the last ends at `blob.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameTable {
    pub blob: String,
    pub ranges: Vec<Range<usize>>,
}

impl NameTable {
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Name at position `i`, or `None` past the end.
    pub fn name(&self, i: usize) -> Option<&str> {
        self.ranges.get(i).and_then(|r| self.blob.get(r.clone()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.ranges.iter().map(move |r| &self.blob[r.clone()])
    }
}

/// Sorted values of one target type. One kind tag covers the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeySequence {
    pub kind: IntKind,
    pub values: Vec<i128>,
}

impl KeySequence {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<i128> {
        self.values.get(i).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = i128> + '_ {
        self.values.iter().copied()
    }

    /// Convert to a concrete Rust integer type, e.g. `keys.to_vec_of::<u8>()`.
    ///
    /// Returns `None` if any value does not fit `T`.
    pub fn to_vec_of<T: TryFrom<i128>>(&self) -> Option<Vec<T>> {
        self.values.iter().map(|&v| T::try_from(v).ok()).collect()
    }
}

/// Final product for one target type: the blob plus two aligned sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub type_name: String,
    pub blob: String,
    pub keys: KeySequence,
    pub names: Vec<Range<usize>>,
}

impl GeneratedArtifact {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The `(key_sequence, val_sequence)` pair, mirroring `GetEnumSlices`.
    pub fn slices(&self) -> (&KeySequence, &[Range<usize>]) {
        (&self.keys, &self.names)
    }

    /// Name stored at position `i`.
    pub fn name_at(&self, i: usize) -> Option<&str> {
        self.names.get(i).and_then(|r| self.blob.get(r.clone()))
    }

    /// Value to name. Keys are sorted, so this is a binary search.
    pub fn name_of(&self, value: i128) -> Option<&str> {
        let i = self.keys.values.binary_search(&value).ok()?;
        self.name_at(i)
    }

    /// Name to value. Linear scan over the ranges.
    pub fn value_of(&self, name: &str) -> Option<i128> {
        self.names
            .iter()
            .position(|r| self.blob.get(r.clone()) == Some(name))
            .and_then(|i| self.keys.get(i))
    }

    /// Iterate `(value, name)` pairs in key order.
    pub fn entries(&self) -> impl Iterator<Item = (i128, &str)> + '_ {
        self.keys
            .values
            .iter()
            .zip(self.names.iter())
            .map(move |(&v, r)| (v, self.blob.get(r.clone()).unwrap_or_default()))
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Table layout: the three stages between collection and emission.
//!
//! ```text
//! ConstantEntry[] ──dedup──► unique by value ──sort──► ascending ──pack──► NameTable
//! (decl order)               (first decl wins)         (stable)            (blob + ranges)
//! ```
//!
//! Each stage takes ownership of its input and hands a new collection to the
//! next one. Nothing is mutated after it leaves a stage.
//!
//! **Invariants** (checked by `verify::contracts` in debug builds):
//! - no two surviving entries share a value
//! - keys strictly ascending
//! - ranges contiguous from 0 to `blob.len()`

mod layout;
mod name_table;

pub use layout::{dedup, sort_by_value};
pub use name_table::build_name_table;

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Packed value/name tables for Go integer constant types.
//!
//! Given `type Day int` and the constants declared for it, enumtab emits a Go
//! fragment holding every name in one string, a key slice of typed values,
//! a value slice of sub-slices into that string, and a `GetEnumSlices`
//! accessor returning the pair.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  source/     │────▶│  collect/    │────▶│  table/      │────▶│  emit/       │
//! │ (lex, parse  │     │ (iota, type  │     │ (dedup, sort,│     │ (Go fragment,│
//! │  Go decls)   │     │  inference)  │     │  pack names) │     │  file header)│
//! └──────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │                    │
//!                             ▼                    ▼                    ▼
//!                      ┌─────────────────────────────────────────────────────┐
//!                      │                     verify/                          │
//!                      │  (debug contracts, WellFormedArtifact)              │
//!                      └─────────────────────────────────────────────────────┘
//! ```
//!
//! `generate` strings the core stages together for one type; `build` wraps
//! that with file discovery, parallel fan-out and write-if-changed.
//!
//! # Usage
//!
//! ```ignore
//! use enumtab::{generate_artifact, parse_file, CollectOptions, PackageIndex};
//!
//! let file = parse_file("day.go", "package week\ntype Day int\nconst (\n\tMonday Day = iota\n\tTuesday\n)\n")?;
//! let files = vec![file];
//! let index = PackageIndex::new(&files);
//! let artifact = generate_artifact(&index, "Day", &CollectOptions::default())?;
//!
//! assert_eq!(artifact.blob, "MondayTuesday");
//! assert_eq!(artifact.name_of(1), Some("Tuesday"));
//! ```

// Module declarations
pub mod build;
pub mod collect;
pub mod emit;
mod error;
mod generate;
pub mod source;
pub mod table;
pub mod testing;
mod types;
pub mod verify;

pub use collect::{resolve_target, CollectOptions, Collector, PackageIndex};
pub use emit::{render_file, render_fragment};
pub use error::GenerateError;
pub use generate::{generate_artifact, generate_fragment};
pub use source::{parse_file, ParseError, SourceFile};
pub use types::{
    ConstantEntry, GeneratedArtifact, IntKind, KeySequence, NameTable, TargetType,
};
pub use verify::{InvariantError, WellFormedArtifact};

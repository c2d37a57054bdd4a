// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: a validating wrapper and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrapper** (`WellFormedArtifact`) that re-checks an artifact
//!    once and then hands out lookups that can't go out of bounds. Use it on
//!    artifacts that came from somewhere you don't control (deserialized,
//!    hand-built in tests).
//!
//! 2. **Runtime contracts** that panic in debug builds when an invariant of
//!    the pipeline is violated. Zero-cost in release, but catch bugs while
//!    the tests run.

mod types;
pub mod contracts;

pub use types::*;

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-type generation failures.
//!
//! Every variant carries the target type name plus enough context to find
//! the offending declaration. A failure stops generation for that one type;
//! sibling types in the same invocation carry on.

use std::fmt;

use crate::types::IntKind;

/// Why generation for one target type failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// No usable integer type declaration with this name.
    TypeNotFound { type_name: String, reason: String },
    /// The type exists but no constant of that type is declared.
    NoConstants { type_name: String },
    /// A value expression could not be evaluated statically.
    UnresolvableExpression {
        type_name: String,
        identifier: String,
        expression: String,
        reason: String,
    },
    /// A signed value does not fit the type, or an exact value overflowed.
    ValueOutOfRange {
        type_name: String,
        identifier: String,
        value: String,
        kind: IntKind,
    },
}

impl GenerateError {
    pub fn type_name(&self) -> &str {
        match self {
            GenerateError::TypeNotFound { type_name, .. }
            | GenerateError::NoConstants { type_name }
            | GenerateError::UnresolvableExpression { type_name, .. }
            | GenerateError::ValueOutOfRange { type_name, .. } => type_name,
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::TypeNotFound { type_name, reason } => {
                write!(f, "type {}: {}", type_name, reason)
            }
            GenerateError::NoConstants { type_name } => {
                write!(f, "type {}: no values defined", type_name)
            }
            GenerateError::UnresolvableExpression {
                type_name,
                identifier,
                expression,
                reason,
            } => {
                write!(
                    f,
                    "type {}: cannot evaluate {} = {}: {}",
                    type_name, identifier, expression, reason
                )
            }
            GenerateError::ValueOutOfRange {
                type_name,
                identifier,
                value,
                kind,
            } => {
                write!(
                    f,
                    "type {}: value {} of {} overflows {}",
                    type_name, value, identifier, kind
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {}

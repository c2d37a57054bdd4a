// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Declaration collector: const blocks in, [`ConstantEntry`] list out.
//!
//! Walks every const block of the package in declaration order, one fresh
//! [`BlockState`] per block, and keeps the lines whose type is the target
//! type. The rules it implements:
//!
//! - `iota` counts every line of the block, whatever its type.
//! - A line without type and expressions repeats the previous template at
//!   its own `iota`.
//! - `_` lines are evaluated (a bad `_` still fails the type) but dropped.
//! - Unsigned targets wrap, signed targets must fit.
//!
//! A line whose type can't be determined because it references something
//! outside the package is skipped: it may or may not belong to the target,
//! and nothing in the package says which. A line that is *known* to be of
//! the target type but can't be evaluated fails the whole type.

mod eval;
mod index;

pub use eval::{parse_int_literal, ConstType, EvalError, Evaluator};
pub use index::{BlockState, ConstSite, Line, PackageIndex};

use crate::error::GenerateError;
use crate::source::{ConstSpec, Expr};
use crate::types::{ConstantEntry, TargetType};

/// How identifiers are turned into table text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectOptions {
    /// Strip this prefix from every identifier.
    pub trim_prefix: Option<String>,
    /// Use the trailing line comment as the name when there is one.
    pub line_comment: bool,
}

impl CollectOptions {
    fn display_name(&self, spec: &ConstSpec, identifier: &str) -> String {
        if self.line_comment {
            if let Some(comment) = spec.line_comment.as_deref().filter(|c| !c.is_empty()) {
                return comment.to_string();
            }
        }
        match self.trim_prefix.as_deref() {
            Some(prefix) => identifier
                .strip_prefix(prefix)
                .unwrap_or(identifier)
                .to_string(),
            None => identifier.to_string(),
        }
    }
}

/// Resolve the target type declaration into a [`TargetType`].
pub fn resolve_target(index: &PackageIndex<'_>, type_name: &str) -> Result<TargetType, GenerateError> {
    if !index.has_type(type_name) {
        return Err(GenerateError::TypeNotFound {
            type_name: type_name.to_string(),
            reason: "no type declaration with this name in the package".to_string(),
        });
    }
    index
        .int_kind(type_name)
        .map(|kind| TargetType::new(type_name, kind))
        .map_err(|reason| GenerateError::TypeNotFound {
            type_name: type_name.to_string(),
            reason,
        })
}

/// Collects the constants of one target type.
pub struct Collector<'i, 'a> {
    index: &'i PackageIndex<'a>,
    target: &'i TargetType,
    options: &'i CollectOptions,
    eval: Evaluator<'i, 'a>,
}

impl<'i, 'a> Collector<'i, 'a> {
    pub fn new(
        index: &'i PackageIndex<'a>,
        target: &'i TargetType,
        options: &'i CollectOptions,
    ) -> Self {
        Self {
            index,
            target,
            options,
            eval: Evaluator::new(index),
        }
    }

    /// Run the collector. Consumes it: the evaluator memo dies with the run.
    pub fn collect(mut self) -> Result<Vec<ConstantEntry>, GenerateError> {
        let mut entries = Vec::new();
        let index = self.index;

        for block in index.blocks() {
            let mut state = BlockState::new();
            for spec in &block.specs {
                let line = state.advance(spec);
                for (position, name) in spec.names.iter().enumerate() {
                    if !self.is_target_line(line, position) {
                        continue;
                    }
                    let value = self
                        .eval
                        .line_value(line, position)
                        .map_err(|err| self.failure(name, line.expr(position), err))?;
                    if name == "_" {
                        continue;
                    }
                    entries.push(ConstantEntry {
                        identifier: self.options.display_name(spec, name),
                        value,
                        decl_order: entries.len(),
                    });
                }
            }
        }

        Ok(entries)
    }

    fn is_target_line(&mut self, line: Line<'_>, position: usize) -> bool {
        matches!(
            self.eval.line_type(line, position),
            Ok(ConstType::Named(ref name)) if *name == self.target.name
        )
    }

    fn failure(&self, identifier: &str, expr: Option<&Expr>, err: EvalError) -> GenerateError {
        let expression = expr.map(|e| e.to_string()).unwrap_or_default();
        match err {
            EvalError::NotRepresentable { value, kind } => GenerateError::ValueOutOfRange {
                type_name: self.target.name.clone(),
                identifier: identifier.to_string(),
                value: value.to_string(),
                kind,
            },
            EvalError::Overflow(what) => GenerateError::ValueOutOfRange {
                type_name: self.target.name.clone(),
                identifier: identifier.to_string(),
                value: what,
                kind: self.target.kind,
            },
            other => GenerateError::UnresolvableExpression {
                type_name: self.target.name.clone(),
                identifier: identifier.to_string(),
                expression,
                reason: other.to_string(),
            },
        }
    }
}

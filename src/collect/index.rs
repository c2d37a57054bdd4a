// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Package-wide lookup tables and the per-block line walker.
//!
//! [`BlockState`] is the one place that knows the implicit-repetition rule:
//! a line without an expression list reuses the nearest preceding list (and
//! its type) at its own `iota`. Both the collector and the by-name resolver
//! walk blocks through it, so the rule can't drift between them.

use std::collections::HashMap;

use crate::source::{ConstBlock, ConstSpec, Expr, SourceFile, TypeDecl, Underlying};
use crate::types::IntKind;

/// Predeclared Go type names that are valid conversion targets.
const PREDECLARED_TYPES: &[&str] = &[
    "bool",
    "string",
    "float32",
    "float64",
    "complex64",
    "complex128",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "byte",
    "rune",
];

/// A specification line as it is evaluated: own ordinal, plus the type and
/// expression list in force (its own, or inherited from the template).
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub iota: usize,
    pub ty: Option<&'a str>,
    pub values: &'a [Expr],
}

impl<'a> Line<'a> {
    pub fn expr(&self, position: usize) -> Option<&'a Expr> {
        self.values.get(position)
    }
}

/// Evaluation state threaded forward through one block: the next ordinal
/// and the last expression template. Start a fresh one for every block.
#[derive(Debug, Default)]
pub struct BlockState<'a> {
    next_iota: usize,
    template: Option<(Option<&'a str>, &'a [Expr])>,
}

impl<'a> BlockState<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step onto `spec`, returning the line to evaluate.
    pub fn advance(&mut self, spec: &'a ConstSpec) -> Line<'a> {
        // INVARIANT: IOTA_COUNTS_EVERY_LINE
        let iota = self.next_iota;
        self.next_iota += 1;

        if !spec.values.is_empty() {
            self.template = Some((spec.ty.as_deref(), &spec.values));
            return Line {
                iota,
                ty: spec.ty.as_deref(),
                values: &spec.values,
            };
        }

        match self.template {
            Some((ty, values)) => Line {
                iota,
                ty: spec.ty.as_deref().or(ty),
                values,
            },
            None => Line {
                iota,
                ty: spec.ty.as_deref(),
                values: &[],
            },
        }
    }
}

/// Where a named constant lives.
#[derive(Debug, Clone, Copy)]
pub struct ConstSite<'a> {
    pub line: Line<'a>,
    pub position: usize,
}

/// Read-only view over every type and constant declared in one package.
///
/// Built once per invocation and shared (immutably) by every target type.
pub struct PackageIndex<'a> {
    files: &'a [SourceFile],
    types: HashMap<&'a str, &'a TypeDecl>,
    consts: HashMap<&'a str, ConstSite<'a>>,
}

impl<'a> PackageIndex<'a> {
    pub fn new(files: &'a [SourceFile]) -> Self {
        let mut types = HashMap::new();
        let mut consts = HashMap::new();

        for file in files {
            for decl in &file.types {
                types.entry(decl.name.as_str()).or_insert(decl);
            }
            for block in &file.const_blocks {
                let mut state = BlockState::new();
                for spec in &block.specs {
                    let line = state.advance(spec);
                    for (position, name) in spec.names.iter().enumerate() {
                        if name == "_" {
                            continue;
                        }
                        consts
                            .entry(name.as_str())
                            .or_insert(ConstSite { line, position });
                    }
                }
            }
        }

        Self {
            files,
            types,
            consts,
        }
    }

    pub fn files(&self) -> &'a [SourceFile] {
        self.files
    }

    /// Every const block in declaration order, across files.
    pub fn blocks(&self) -> impl Iterator<Item = &'a ConstBlock> + 'a {
        let files = self.files;
        files.iter().flat_map(|f| f.const_blocks.iter())
    }

    pub fn const_site(&self, name: &str) -> Option<ConstSite<'a>> {
        self.consts.get(name).copied()
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Whether `name` can appear as the function of a conversion.
    pub fn is_type_name(&self, name: &str) -> bool {
        self.types.contains_key(name) || PREDECLARED_TYPES.contains(&name)
    }

    /// Follow `type A B` chains down to a predeclared integer kind.
    pub fn int_kind(&self, name: &str) -> Result<IntKind, String> {
        let mut current = name;
        // Each hop consumes one declaration, so more hops than declarations is a cycle.
        for _ in 0..=self.types.len() {
            match self.types.get(current) {
                Some(decl) => match &decl.underlying {
                    Underlying::Named(next) => current = next.as_str(),
                    Underlying::Other(what) => {
                        return Err(format!("underlying type is {}, not an integer", what))
                    }
                },
                None if current.contains('.') => {
                    return Err(format!("underlying type {} is declared in another package", current))
                }
                None => {
                    return IntKind::from_go_name(current)
                        .ok_or_else(|| format!("underlying type {} is not an integer", current))
                }
            }
        }
        Err(format!("invalid recursive type {}", name))
    }
}

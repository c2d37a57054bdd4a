// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Constant expression typing and evaluation.
//!
//! Arithmetic is exact over `i128`, like Go's untyped constants but with a
//! ceiling. A value only gets squeezed into a kind at a conversion `T(x)` or
//! when it lands in a typed constant: unsigned kinds wrap, signed kinds must
//! fit.
//!
//! A line of an unsigned kind is evaluated in wrapping mode: where exact
//! arithmetic would leave `i128`, it continues modulo 2^128 instead of
//! failing. Every unsigned kind is at most 64 bits wide, so the final wrap
//! into the kind gives the same result as exact arithmetic would have.
//!
//! Named constants are resolved on demand, wherever in the package they are
//! declared, and memoized. A reference chain that loops back on itself is
//! reported instead of recursing forever.

use std::collections::HashMap;
use std::fmt;

use super::index::{Line, PackageIndex};
use crate::source::{BinaryOp, Expr, UnaryOp};
use crate::types::IntKind;

/// Static type of a constant expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstType {
    UntypedInt,
    UntypedRune,
    UntypedFloat,
    UntypedComplex,
    UntypedString,
    UntypedBool,
    /// A declared or predeclared type name.
    Named(String),
}

impl ConstType {
    fn untyped_rank(&self) -> u8 {
        match self {
            ConstType::UntypedInt => 0,
            ConstType::UntypedRune => 1,
            ConstType::UntypedFloat => 2,
            ConstType::UntypedComplex => 3,
            _ => 4,
        }
    }
}

impl fmt::Display for ConstType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstType::UntypedInt => f.write_str("untyped int"),
            ConstType::UntypedRune => f.write_str("untyped rune"),
            ConstType::UntypedFloat => f.write_str("untyped float"),
            ConstType::UntypedComplex => f.write_str("untyped complex"),
            ConstType::UntypedString => f.write_str("untyped string"),
            ConstType::UntypedBool => f.write_str("untyped bool"),
            ConstType::Named(name) => f.write_str(name),
        }
    }
}

/// Why an expression has no static integer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    Undefined(String),
    NotInteger(String),
    Unsupported(String),
    DivisionByZero,
    NegativeShift,
    /// Exact arithmetic left the 128-bit range.
    Overflow(String),
    /// A signed kind cannot hold the value.
    NotRepresentable { value: i128, kind: IntKind },
    Cycle(String),
    MissingValue,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Undefined(name) => write!(f, "undefined: {}", name),
            EvalError::NotInteger(what) => write!(f, "{} is not an integer constant", what),
            EvalError::Unsupported(what) => write!(f, "{} is not a constant expression", what),
            EvalError::DivisionByZero => f.write_str("division by zero"),
            EvalError::NegativeShift => f.write_str("negative shift count"),
            EvalError::Overflow(what) => write!(f, "constant overflow in {}", what),
            EvalError::NotRepresentable { value, kind } => {
                write!(f, "{} overflows {}", value, kind)
            }
            EvalError::Cycle(name) => write!(f, "initialization cycle through {}", name),
            EvalError::MissingValue => f.write_str("missing init expr for const declaration"),
        }
    }
}

impl std::error::Error for EvalError {}

pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluator for one pipeline run. Owns its memo tables; nothing is shared
/// with runs for other types.
pub struct Evaluator<'i, 'a> {
    index: &'i PackageIndex<'a>,
    type_memo: HashMap<String, ConstType>,
    value_memo: HashMap<String, i128>,
    resolving: Vec<String>,
    /// Set while evaluating a line of an unsigned kind.
    wrapping: bool,
}

impl<'i, 'a> Evaluator<'i, 'a> {
    pub fn new(index: &'i PackageIndex<'a>) -> Self {
        Self {
            index,
            type_memo: HashMap::new(),
            value_memo: HashMap::new(),
            resolving: Vec::new(),
            wrapping: false,
        }
    }

    // ========================================================================
    // LINES
    // ========================================================================

    /// Type of the `position`-th constant on `line`.
    pub fn line_type(&mut self, line: Line<'_>, position: usize) -> EvalResult<ConstType> {
        if let Some(ty) = line.ty {
            return Ok(ConstType::Named(ty.to_string()));
        }
        let expr = line.expr(position).ok_or(EvalError::MissingValue)?;
        self.type_of(expr)
    }

    /// Value of the `position`-th constant on `line`, normalized into its
    /// type's kind when the type is an integer kind.
    pub fn line_value(&mut self, line: Line<'_>, position: usize) -> EvalResult<i128> {
        let expr = line.expr(position).ok_or(EvalError::MissingValue)?;
        let ty = self.line_type(line, position);
        let unsigned = match &ty {
            Ok(ConstType::Named(name)) => self
                .index
                .int_kind(name)
                .map_or(false, |kind| !kind.is_signed()),
            _ => false,
        };

        // Referenced constants run through here too, so restore the caller's mode.
        let outer = std::mem::replace(&mut self.wrapping, unsigned);
        let raw = self.value_of(expr, line.iota);
        self.wrapping = outer;

        let raw = raw?;
        match ty? {
            ConstType::Named(name) => self.convert(raw, &name),
            _ => Ok(raw),
        }
    }

    fn convert(&self, raw: i128, type_name: &str) -> EvalResult<i128> {
        let kind = self
            .index
            .int_kind(type_name)
            .map_err(|_| EvalError::NotInteger(format!("constant of type {}", type_name)))?;
        // INVARIANT: VALUE_IN_KIND_DOMAIN
        kind.normalize(raw)
            .ok_or(EvalError::NotRepresentable { value: raw, kind })
    }

    // ========================================================================
    // NAMED CONSTANTS
    // ========================================================================

    fn enter(&mut self, name: &str) -> EvalResult<()> {
        if self.resolving.iter().any(|n| n == name) {
            return Err(EvalError::Cycle(name.to_string()));
        }
        self.resolving.push(name.to_string());
        Ok(())
    }

    fn const_type(&mut self, name: &str) -> EvalResult<ConstType> {
        if let Some(ty) = self.type_memo.get(name) {
            return Ok(ty.clone());
        }
        let site = self
            .index
            .const_site(name)
            .ok_or_else(|| EvalError::Undefined(name.to_string()))?;
        self.enter(name)?;
        let result = self.line_type(site.line, site.position);
        self.resolving.pop();
        let ty = result?;
        self.type_memo.insert(name.to_string(), ty.clone());
        Ok(ty)
    }

    fn const_value(&mut self, name: &str) -> EvalResult<i128> {
        if let Some(&value) = self.value_memo.get(name) {
            return Ok(value);
        }
        let site = self
            .index
            .const_site(name)
            .ok_or_else(|| EvalError::Undefined(name.to_string()))?;
        self.enter(name)?;
        let result = self.line_value(site.line, site.position);
        self.resolving.pop();
        let value = result?;
        self.value_memo.insert(name.to_string(), value);
        Ok(value)
    }

    // ========================================================================
    // TYPING
    // ========================================================================

    pub fn type_of(&mut self, expr: &Expr) -> EvalResult<ConstType> {
        match expr {
            Expr::Int(_) => Ok(ConstType::UntypedInt),
            Expr::Rune(_) => Ok(ConstType::UntypedRune),
            Expr::Float(_) => Ok(ConstType::UntypedFloat),
            Expr::Imag(_) => Ok(ConstType::UntypedComplex),
            Expr::Str(_) => Ok(ConstType::UntypedString),
            Expr::Ident(name) => {
                if self.index.const_site(name).is_some() {
                    return self.const_type(name);
                }
                match name.as_str() {
                    "iota" => Ok(ConstType::UntypedInt),
                    "true" | "false" => Ok(ConstType::UntypedBool),
                    _ => Err(EvalError::Undefined(name.clone())),
                }
            }
            Expr::Selector(..) => Err(EvalError::Undefined(expr.to_string())),
            Expr::Paren(inner) => self.type_of(inner),
            Expr::Unary(UnaryOp::Not, _) => Ok(ConstType::UntypedBool),
            Expr::Unary(UnaryOp::Plus | UnaryOp::Neg | UnaryOp::Complement, operand) => {
                self.type_of(operand)
            }
            Expr::Unary(..) => Err(EvalError::Unsupported(expr.to_string())),
            Expr::Binary(op, lhs, rhs) => match op {
                BinaryOp::Eq
                | BinaryOp::Ne
                | BinaryOp::Lt
                | BinaryOp::Le
                | BinaryOp::Gt
                | BinaryOp::Ge
                | BinaryOp::LogicalAnd
                | BinaryOp::LogicalOr => Ok(ConstType::UntypedBool),
                BinaryOp::Shl | BinaryOp::Shr => self.type_of(lhs),
                _ => {
                    let left = self.type_of(lhs)?;
                    let right = self.type_of(rhs)?;
                    Ok(combine(left, right))
                }
            },
            Expr::Call(func, args) => match self.conversion_target(func, args) {
                Some(name) => Ok(ConstType::Named(name.to_string())),
                None => Err(EvalError::Unsupported(expr.to_string())),
            },
            Expr::Index(..) => Err(EvalError::Unsupported(expr.to_string())),
        }
    }

    /// `T(x)` with `T` a type name is a conversion; anything else is a call.
    fn conversion_target<'e>(&self, func: &'e Expr, args: &[Expr]) -> Option<&'e str> {
        let mut func = func;
        while let Expr::Paren(inner) = func {
            func = inner;
        }
        match func {
            Expr::Ident(name) if args.len() == 1 && self.index.is_type_name(name) => Some(name),
            _ => None,
        }
    }

    // ========================================================================
    // EVALUATION
    // ========================================================================

    pub fn value_of(&mut self, expr: &Expr, iota: usize) -> EvalResult<i128> {
        match expr {
            Expr::Int(text) => parse_int_literal(text),
            Expr::Rune(value) => Ok(i128::from(*value)),
            Expr::Float(text) => parse_integral_float(text),
            Expr::Imag(text) => Err(EvalError::NotInteger(text.clone())),
            Expr::Str(_) => Err(EvalError::NotInteger(expr.to_string())),
            Expr::Ident(name) => {
                if self.index.const_site(name).is_some() {
                    return self.const_value(name);
                }
                match name.as_str() {
                    "iota" => Ok(iota as i128),
                    "true" | "false" => Err(EvalError::NotInteger(name.clone())),
                    _ => Err(EvalError::Undefined(name.clone())),
                }
            }
            Expr::Selector(..) => Err(EvalError::Undefined(expr.to_string())),
            Expr::Paren(inner) => self.value_of(inner, iota),
            Expr::Unary(op, operand) => self.unary(*op, operand, iota, expr),
            Expr::Binary(op, lhs, rhs) => self.binary(*op, lhs, rhs, iota, expr),
            Expr::Call(func, args) => {
                let target = self
                    .conversion_target(func, args)
                    .ok_or_else(|| EvalError::Unsupported(expr.to_string()))?;
                let raw = self.value_of(&args[0], iota)?;
                self.convert(raw, target)
            }
            Expr::Index(..) => Err(EvalError::Unsupported(expr.to_string())),
        }
    }

    fn unary(&mut self, op: UnaryOp, operand: &Expr, iota: usize, whole: &Expr) -> EvalResult<i128> {
        match op {
            UnaryOp::Plus => self.value_of(operand, iota),
            UnaryOp::Neg => {
                let v = self.value_of(operand, iota)?;
                match v.checked_neg() {
                    Some(negated) => Ok(negated),
                    None if self.wrapping => Ok(v.wrapping_neg()),
                    None => Err(EvalError::Overflow(whole.to_string())),
                }
            }
            UnaryOp::Complement => {
                let v = self.value_of(operand, iota)?;
                // For unsigned typed operands ^x flips only the kind's bits.
                if let ConstType::Named(name) = self.type_of(operand)? {
                    if let Ok(kind) = self.index.int_kind(&name) {
                        if !kind.is_signed() {
                            return Ok(v ^ kind.max_value());
                        }
                    }
                }
                Ok(!v)
            }
            UnaryOp::Not => Err(EvalError::NotInteger(whole.to_string())),
            UnaryOp::Deref | UnaryOp::Addr | UnaryOp::Recv => {
                Err(EvalError::Unsupported(whole.to_string()))
            }
        }
    }

    fn binary(
        &mut self,
        op: BinaryOp,
        lhs: &Expr,
        rhs: &Expr,
        iota: usize,
        whole: &Expr,
    ) -> EvalResult<i128> {
        if op.precedence() <= 3 {
            return Err(EvalError::NotInteger(whole.to_string()));
        }
        let a = self.value_of(lhs, iota)?;
        let b = self.value_of(rhs, iota)?;
        let wrapping = self.wrapping;
        // Exact result, or the modulo 2^128 one in wrapping mode.
        let settle = |exact: Option<i128>, wrapped: i128| match exact {
            Some(value) => Ok(value),
            None if wrapping => Ok(wrapped),
            None => Err(EvalError::Overflow(whole.to_string())),
        };
        match op {
            BinaryOp::Add => settle(a.checked_add(b), a.wrapping_add(b)),
            BinaryOp::Sub => settle(a.checked_sub(b), a.wrapping_sub(b)),
            BinaryOp::Mul => settle(a.checked_mul(b), a.wrapping_mul(b)),
            BinaryOp::Div | BinaryOp::Rem if b == 0 => Err(EvalError::DivisionByZero),
            BinaryOp::Div => settle(a.checked_div(b), a.wrapping_div(b)),
            BinaryOp::Rem => settle(a.checked_rem(b), a.wrapping_rem(b)),
            BinaryOp::Shl => {
                if b < 0 {
                    return Err(EvalError::NegativeShift);
                }
                if a == 0 {
                    return Ok(0);
                }
                if b >= 128 {
                    // Every bit is shifted out.
                    return settle(None, 0);
                }
                let shifted = a << b;
                let exact = (shifted >> b == a).then_some(shifted);
                settle(exact, shifted)
            }
            BinaryOp::Shr => {
                if b < 0 {
                    return Err(EvalError::NegativeShift);
                }
                Ok(if b >= 127 { if a < 0 { -1 } else { 0 } } else { a >> b })
            }
            BinaryOp::And => Ok(a & b),
            BinaryOp::Or => Ok(a | b),
            BinaryOp::Xor => Ok(a ^ b),
            BinaryOp::AndNot => Ok(a & !b),
            _ => Err(EvalError::NotInteger(whole.to_string())),
        }
    }
}

/// Result type of a binary arithmetic expression: typed wins, otherwise the
/// "larger" untyped kind (int < rune < float < complex).
fn combine(left: ConstType, right: ConstType) -> ConstType {
    match (&left, &right) {
        (ConstType::Named(_), _) => left,
        (_, ConstType::Named(_)) => right,
        _ if left.untyped_rank() >= right.untyped_rank() => left,
        _ => right,
    }
}

/// Parse a Go integer literal: decimal, `0x`, `0o`, `0b`, legacy octal, `_` separators.
pub fn parse_int_literal(text: &str) -> EvalResult<i128> {
    let clean: String = text.chars().filter(|&c| c != '_').collect();
    let lower = clean.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (&lower[1..], 8)
    } else {
        (lower.as_str(), 10)
    };
    i128::from_str_radix(digits, radix).map_err(|e| {
        if matches!(
            e.kind(),
            std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow
        ) {
            EvalError::Overflow(text.to_string())
        } else {
            EvalError::NotInteger(text.to_string())
        }
    })
}

/// A float literal is usable as an integer constant only if it is integral.
fn parse_integral_float(text: &str) -> EvalResult<i128> {
    let clean: String = text.chars().filter(|&c| c != '_').collect();
    let value: f64 = clean
        .parse()
        .map_err(|_| EvalError::NotInteger(text.to_string()))?;
    // 2^63 is exactly representable, keep within what f64 carries precisely.
    if value.fract() != 0.0 || !value.is_finite() || value.abs() >= 9.223_372_036_854_775_808e18 {
        return Err(EvalError::NotInteger(format!("{} (truncated)", text)));
    }
    Ok(value as i128)
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Go declaration front end.
//!
//! Just enough Go to find what the generator needs: the package clause,
//! `type` declarations and `const` declarations. Everything else (imports,
//! vars, funcs) is skipped by bracket balancing. The output is a plain
//! record tree, one [`SourceFile`] per file.

mod lexer;
mod parser;

use std::fmt;

pub use lexer::{lex, Comment, LexError, Token, TokenKind};
pub use parser::{parse_file, ParseError};

/// One parsed Go file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceFile {
    pub path: String,
    pub package: String,
    pub types: Vec<TypeDecl>,
    pub const_blocks: Vec<ConstBlock>,
}

/// `type Name Underlying` or `type Name = Underlying`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub name: String,
    pub underlying: Underlying,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Underlying {
    /// A plain or qualified type name, e.g. `int` or `other.Kind`.
    Named(String),
    /// Any other type literal (struct, slice, map, func, ...).
    Other(String),
}

/// One `const` declaration. A parenthesized group is one block; a lone
/// `const X = 1` is a block with a single line. Each block has its own `iota`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstBlock {
    pub specs: Vec<ConstSpec>,
    pub line: usize,
}

/// One specification line inside a const block.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstSpec {
    pub names: Vec<String>,
    pub ty: Option<String>,
    pub values: Vec<Expr>,
    /// Trailing `// ...` comment on the same line, without the slashes.
    pub line_comment: Option<String>,
    pub line: usize,
}

/// Constant expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal, kept as source text until evaluation.
    Int(String),
    Float(String),
    Imag(String),
    Rune(u32),
    Str(String),
    Ident(String),
    /// `pkg.Name`
    Selector(Box<Expr>, String),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Paren(Box<Expr>),
    Call(Box<Expr>, Vec<Expr>),
    Index(Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
    Complement,
    Deref,
    Addr,
    Recv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    And,
    Or,
    Xor,
    AndNot,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    LogicalAnd,
    LogicalOr,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::Complement => "^",
            UnaryOp::Deref => "*",
            UnaryOp::Addr => "&",
            UnaryOp::Recv => "<-",
        }
    }
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::AndNot => "&^",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
        }
    }

    /// Go binary precedence, 5 binds tightest.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Mul
            | BinaryOp::Div
            | BinaryOp::Rem
            | BinaryOp::Shl
            | BinaryOp::Shr
            | BinaryOp::And
            | BinaryOp::AndNot => 5,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Or | BinaryOp::Xor => 4,
            BinaryOp::Eq
            | BinaryOp::Ne
            | BinaryOp::Lt
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Ge => 3,
            BinaryOp::LogicalAnd => 2,
            BinaryOp::LogicalOr => 1,
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Div,
            "%" => BinaryOp::Rem,
            "<<" => BinaryOp::Shl,
            ">>" => BinaryOp::Shr,
            "&" => BinaryOp::And,
            "|" => BinaryOp::Or,
            "^" => BinaryOp::Xor,
            "&^" => BinaryOp::AndNot,
            "==" => BinaryOp::Eq,
            "!=" => BinaryOp::Ne,
            "<" => BinaryOp::Lt,
            "<=" => BinaryOp::Le,
            ">" => BinaryOp::Gt,
            ">=" => BinaryOp::Ge,
            "&&" => BinaryOp::LogicalAnd,
            "||" => BinaryOp::LogicalOr,
            _ => return None,
        })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(text) | Expr::Float(text) | Expr::Imag(text) => f.write_str(text),
            Expr::Rune(c) => match char::from_u32(*c) {
                Some(ch) => write!(f, "{:?}", ch),
                None => write!(f, "'\\U{:08x}'", c),
            },
            Expr::Str(s) => write!(f, "{:?}", s),
            Expr::Ident(name) => f.write_str(name),
            Expr::Selector(base, name) => write!(f, "{}.{}", base, name),
            Expr::Unary(op, operand) => write!(f, "{}{}", op.symbol(), operand),
            Expr::Binary(op, lhs, rhs) => write!(f, "{} {} {}", lhs, op.symbol(), rhs),
            Expr::Paren(inner) => write!(f, "({})", inner),
            Expr::Call(func, args) => {
                write!(f, "{}(", func)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
            Expr::Index(base, index) => write!(f, "{}[{}]", base, index),
        }
    }
}

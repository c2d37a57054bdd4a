// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Declaration-level parser for Go files.
//!
//! Recognizes `package`, `type` and `const` declarations, parses constant
//! expressions with Go precedence, and skips everything else by balancing
//! brackets up to the next top-level semicolon. Function bodies are skipped
//! the same way, except for the const declarations inside them.

use std::fmt;

use super::lexer::{lex, Comment, LexError, Token, TokenKind};
use super::{BinaryOp, ConstBlock, ConstSpec, Expr, SourceFile, TypeDecl, UnaryOp, Underlying};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}: {}", self.file, self.line, self.column, self.message)
    }
}

impl std::error::Error for ParseError {}

type ParseResult<T> = Result<T, ParseError>;

/// Parse one Go source file.
pub fn parse_file(path: &str, source: &str) -> ParseResult<SourceFile> {
    let (tokens, comments) = lex(source).map_err(|e: LexError| ParseError {
        file: path.to_string(),
        line: e.line,
        column: e.column,
        message: e.message,
    })?;
    Parser {
        path,
        tokens,
        comments,
        pos: 0,
    }
    .file()
}

struct Parser<'a> {
    path: &'a str,
    tokens: Vec<Token>,
    comments: Vec<Comment>,
    pos: usize,
}

impl<'a> Parser<'a> {
    // ------------------------------------------------------------------
    // Token helpers
    // ------------------------------------------------------------------

    fn peek(&self) -> &TokenKind {
        &self.current().kind
    }

    fn current(&self) -> &Token {
        // The lexer always terminates the stream with Eof.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let tok = self.current().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    fn previous_line(&self) -> usize {
        self.tokens[self.pos.saturating_sub(1)].line
    }

    fn at_punct(&self, p: &str) -> bool {
        matches!(self.peek(), TokenKind::Punct(q) if *q == p)
    }

    fn at_keyword(&self, kw: &str) -> bool {
        matches!(self.peek(), TokenKind::Ident(name) if name == kw)
    }

    fn eat_punct(&mut self, p: &str) -> bool {
        if self.at_punct(p) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_semi(&mut self) -> bool {
        if matches!(self.peek(), TokenKind::Semi) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error<T>(&self, message: impl Into<String>) -> ParseResult<T> {
        let tok = self.current();
        Err(ParseError {
            file: self.path.to_string(),
            line: tok.line,
            column: tok.column,
            message: message.into(),
        })
    }

    fn expect_punct(&mut self, p: &str) -> ParseResult<()> {
        if self.eat_punct(p) {
            Ok(())
        } else {
            self.error(format!("expected '{}', found {}", p, describe(self.peek())))
        }
    }

    fn ident(&mut self) -> ParseResult<String> {
        match self.peek().clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            other => self.error(format!("expected identifier, found {}", describe(&other))),
        }
    }

    /// End of a declaration or spec: `;`, or a closing paren/brace left for the caller.
    fn end_of_spec(&mut self) -> ParseResult<()> {
        // `}` closes a local declaration that is the last statement of a block.
        if self.eat_semi()
            || self.at_punct(")")
            || self.at_punct("}")
            || matches!(self.peek(), TokenKind::Eof)
        {
            Ok(())
        } else {
            self.error(format!("unexpected {} after declaration", describe(self.peek())))
        }
    }

    /// Skip tokens until a semicolon at bracket depth zero (consumed) or an
    /// unbalanced closer (left in place).
    fn skip_to_semi(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.peek() {
                TokenKind::Eof => return,
                TokenKind::Semi if depth == 0 => {
                    self.advance();
                    return;
                }
                TokenKind::Punct("(" | "[" | "{") => depth += 1,
                TokenKind::Punct(")" | "]" | "}") => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.advance();
        }
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    fn file(mut self) -> ParseResult<SourceFile> {
        while self.eat_semi() {}
        if !self.at_keyword("package") {
            return self.error("expected 'package' clause");
        }
        self.advance();
        let package = self.ident()?;
        self.end_of_spec()?;

        let mut file = SourceFile {
            path: self.path.to_string(),
            package,
            ..SourceFile::default()
        };

        loop {
            match self.peek().clone() {
                TokenKind::Eof => break,
                TokenKind::Semi => {
                    self.advance();
                }
                TokenKind::Ident(kw) if kw == "type" => {
                    self.advance();
                    self.type_decl(&mut file.types)?;
                }
                TokenKind::Ident(kw) if kw == "const" => {
                    self.advance();
                    let block = self.const_decl()?;
                    file.const_blocks.push(block);
                }
                TokenKind::Ident(kw) if kw == "func" => {
                    self.advance();
                    self.func_decl(&mut file.const_blocks)?;
                }
                TokenKind::Ident(kw) if kw == "import" || kw == "var" => {
                    self.advance();
                    self.skip_group_or_spec();
                }
                _ => {
                    self.skip_to_semi();
                    // A stray closer at top level: step over it.
                    if self.at_punct(")") || self.at_punct("]") || self.at_punct("}") {
                        self.advance();
                    }
                }
            }
        }
        Ok(file)
    }

    /// Skip a function declaration, keeping the const declarations in its body.
    fn func_decl(&mut self, blocks: &mut Vec<ConstBlock>) -> ParseResult<()> {
        let mut depth = 0usize;
        loop {
            match self.peek().clone() {
                TokenKind::Eof => return Ok(()),
                TokenKind::Semi if depth == 0 => {
                    self.advance();
                    return Ok(());
                }
                TokenKind::Ident(kw) if depth > 0 && kw == "const" => {
                    self.advance();
                    blocks.push(self.const_decl()?);
                    continue;
                }
                TokenKind::Punct("(" | "[" | "{") => depth += 1,
                TokenKind::Punct(")" | "]" | "}") => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.advance();
        }
    }

    fn skip_group_or_spec(&mut self) {
        if self.eat_punct("(") {
            let mut depth = 1usize;
            while depth > 0 {
                match self.peek() {
                    TokenKind::Eof => return,
                    TokenKind::Punct("(" | "[" | "{") => depth += 1,
                    TokenKind::Punct(")" | "]" | "}") => depth -= 1,
                    _ => {}
                }
                self.advance();
            }
            self.eat_semi();
        } else {
            self.skip_to_semi();
        }
    }

    fn type_decl(&mut self, out: &mut Vec<TypeDecl>) -> ParseResult<()> {
        if self.eat_punct("(") {
            loop {
                while self.eat_semi() {}
                if self.eat_punct(")") {
                    break;
                }
                if matches!(self.peek(), TokenKind::Eof) {
                    return self.error("unterminated type group");
                }
                out.push(self.type_spec()?);
            }
            self.end_of_spec()
        } else {
            out.push(self.type_spec()?);
            Ok(())
        }
    }

    fn type_spec(&mut self) -> ParseResult<TypeDecl> {
        let line = self.current().line;
        let name = self.ident()?;
        self.eat_punct("=");
        let named = match self.peek().clone() {
            TokenKind::Ident(first) if !is_type_keyword(&first) => {
                self.advance();
                if self.eat_punct(".") {
                    Some(format!("{}.{}", first, self.ident()?))
                } else {
                    Some(first)
                }
            }
            _ => None,
        };
        let underlying = match named {
            Some(n) if !self.at_punct("[") => {
                self.end_of_spec()?;
                Underlying::Named(n)
            }
            // Generic instantiation: never an integer kind.
            Some(n) => {
                self.skip_to_semi();
                Underlying::Other(format!("{}[...]", n))
            }
            None => {
                let what = type_literal_kind(self.peek());
                self.skip_to_semi();
                Underlying::Other(what)
            }
        };
        Ok(TypeDecl {
            name,
            underlying,
            line,
        })
    }

    fn const_decl(&mut self) -> ParseResult<ConstBlock> {
        let line = self.previous_line();
        let mut specs = Vec::new();
        if self.eat_punct("(") {
            loop {
                while self.eat_semi() {}
                if self.eat_punct(")") {
                    break;
                }
                if matches!(self.peek(), TokenKind::Eof) {
                    return self.error("unterminated const group");
                }
                specs.push(self.const_spec()?);
            }
            self.end_of_spec()?;
        } else {
            specs.push(self.const_spec()?);
        }
        Ok(ConstBlock { specs, line })
    }

    fn const_spec(&mut self) -> ParseResult<ConstSpec> {
        let line = self.current().line;
        let mut names = vec![self.ident()?];
        while self.eat_punct(",") {
            names.push(self.ident()?);
        }

        let ty = if let TokenKind::Ident(first) = self.peek().clone() {
            self.advance();
            if self.eat_punct(".") {
                let second = self.ident()?;
                Some(format!("{}.{}", first, second))
            } else {
                Some(first)
            }
        } else {
            None
        };

        let mut values = Vec::new();
        if self.eat_punct("=") {
            values.push(self.expr()?);
            while self.eat_punct(",") {
                values.push(self.expr()?);
            }
        }

        let last_line = self.previous_line();
        let line_comment = self
            .comments
            .iter()
            .find(|c| c.is_line && c.line == last_line)
            .map(|c| c.text.clone());

        self.end_of_spec()?;
        Ok(ConstSpec {
            names,
            ty,
            values,
            line_comment,
            line,
        })
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    fn expr(&mut self) -> ParseResult<Expr> {
        self.binary_expr(1)
    }

    fn binary_expr(&mut self, min_prec: u8) -> ParseResult<Expr> {
        let mut lhs = self.unary_expr()?;
        loop {
            let op = match self.peek() {
                TokenKind::Punct(p) => BinaryOp::from_symbol(p),
                _ => None,
            };
            let Some(op) = op else { break };
            if op.precedence() < min_prec {
                break;
            }
            self.advance();
            let rhs = self.binary_expr(op.precedence() + 1)?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn unary_expr(&mut self) -> ParseResult<Expr> {
        let op = match self.peek() {
            TokenKind::Punct("+") => Some(UnaryOp::Plus),
            TokenKind::Punct("-") => Some(UnaryOp::Neg),
            TokenKind::Punct("!") => Some(UnaryOp::Not),
            TokenKind::Punct("^") => Some(UnaryOp::Complement),
            TokenKind::Punct("*") => Some(UnaryOp::Deref),
            TokenKind::Punct("&") => Some(UnaryOp::Addr),
            TokenKind::Punct("<-") => Some(UnaryOp::Recv),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let operand = self.unary_expr()?;
            return Ok(Expr::Unary(op, Box::new(operand)));
        }
        self.primary_expr()
    }

    fn primary_expr(&mut self) -> ParseResult<Expr> {
        let mut expr = self.operand()?;
        loop {
            if self.eat_punct(".") {
                let name = self.ident()?;
                expr = Expr::Selector(Box::new(expr), name);
            } else if self.eat_punct("(") {
                let mut args = Vec::new();
                while !self.at_punct(")") {
                    args.push(self.expr()?);
                    if !self.eat_punct(",") {
                        break;
                    }
                }
                self.expect_punct(")")?;
                expr = Expr::Call(Box::new(expr), args);
            } else if self.eat_punct("[") {
                let index = self.expr()?;
                self.expect_punct("]")?;
                expr = Expr::Index(Box::new(expr), Box::new(index));
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn operand(&mut self) -> ParseResult<Expr> {
        let expr = match self.peek().clone() {
            TokenKind::Int(text) => Expr::Int(text),
            TokenKind::Float(text) => Expr::Float(text),
            TokenKind::Imag(text) => Expr::Imag(text),
            TokenKind::Rune(value) => Expr::Rune(value),
            TokenKind::Str(s) => Expr::Str(s),
            TokenKind::Ident(name) => Expr::Ident(name),
            TokenKind::Punct("(") => {
                self.advance();
                let inner = self.expr()?;
                self.expect_punct(")")?;
                return Ok(Expr::Paren(Box::new(inner)));
            }
            other => {
                return self.error(format!("expected expression, found {}", describe(&other)))
            }
        };
        self.advance();
        Ok(expr)
    }
}

fn type_literal_kind(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Punct("[") => "a slice or array type".to_string(),
        TokenKind::Punct("*") => "a pointer type".to_string(),
        TokenKind::Punct("(") => "a parenthesized type".to_string(),
        TokenKind::Ident(keyword) => format!("a {} type", keyword),
        other => describe(other),
    }
}

fn is_type_keyword(word: &str) -> bool {
    matches!(word, "struct" | "interface" | "map" | "chan" | "func")
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Ident(name) => format!("'{}'", name),
        TokenKind::Int(text) | TokenKind::Float(text) | TokenKind::Imag(text) => {
            format!("literal {}", text)
        }
        TokenKind::Rune(_) => "rune literal".to_string(),
        TokenKind::Str(_) => "string literal".to_string(),
        TokenKind::Punct(p) => format!("'{}'", p),
        TokenKind::Semi => "newline".to_string(),
        TokenKind::Eof => "EOF".to_string(),
    }
}

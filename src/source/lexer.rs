// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Go tokenizer with automatic semicolon insertion.
//!
//! Lexes a whole file up front into a token vector. Comments don't become
//! tokens; they go into a side list so the parser can pick up trailing line
//! comments for `--line-comment`.
//!
//! Semicolons are inserted at a newline when the previous token is an
//! identifier, a literal, `)`, `]`, `}`, `++` or `--`. Keywords are lexed as
//! identifiers, which inserts a few extra semicolons after `break` and
//! friends. Those only occur in function bodies, which the parser skips.

use std::fmt;

/// Longest operators first so the greedy match is correct.
const PUNCTUATION: &[&str] = &[
    "<<=", ">>=", "&^=", "...", "&&", "||", "<-", "++", "--", "==", "!=", "<=", ">=", ":=",
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "&^", "+", "-", "*", "/", "%",
    "&", "|", "^", "<", ">", "=", "!", "(", ")", "[", "]", "{", "}", ",", ".", ":", "~",
];

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Ident(String),
    Int(String),
    Float(String),
    Imag(String),
    Rune(u32),
    Str(String),
    Punct(&'static str),
    /// Explicit `;` or one inserted at a line end.
    Semi,
    Eof,
}

/// A token with its 1-based source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

/// A `//` or `/* */` comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub line: usize,
    pub text: String,
    pub is_line: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for LexError {}

pub type LexResult<T> = Result<T, LexError>;

/// Byte order mark, allowed only as the very first character of a file.
const BOM: char = '\u{feff}';

/// Tokenize `source`. The final token is always `Eof`.
pub fn lex(source: &str) -> LexResult<(Vec<Token>, Vec<Comment>)> {
    let source = source.strip_prefix(BOM).unwrap_or(source);
    let mut lexer = Lexer::new(source);
    lexer.run()?;
    Ok((lexer.tokens, lexer.comments))
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
    comments: Vec<Comment>,
    /// Whether a newline right now would insert a semicolon.
    semi_pending: bool,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
            comments: Vec::new(),
            semi_pending: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn error<T>(&self, message: impl Into<String>) -> LexResult<T> {
        Err(LexError {
            message: message.into(),
            line: self.line,
            column: self.column,
        })
    }

    fn push(&mut self, kind: TokenKind, line: usize, column: usize) {
        self.semi_pending = matches!(
            kind,
            TokenKind::Ident(_)
                | TokenKind::Int(_)
                | TokenKind::Float(_)
                | TokenKind::Imag(_)
                | TokenKind::Rune(_)
                | TokenKind::Str(_)
                | TokenKind::Punct(")" | "]" | "}" | "++" | "--")
        );
        self.tokens.push(Token { kind, line, column });
    }

    fn newline(&mut self) {
        if self.semi_pending {
            self.tokens.push(Token {
                kind: TokenKind::Semi,
                line: self.line,
                column: self.column,
            });
            self.semi_pending = false;
        }
    }

    fn run(&mut self) -> LexResult<()> {
        while let Some(ch) = self.peek() {
            let (line, column) = (self.line, self.column);
            match ch {
                '\n' => {
                    self.newline();
                    self.bump();
                }
                c if c.is_whitespace() => {
                    self.bump();
                }
                '/' if self.peek_at(1) == Some('/') => self.line_comment(),
                '/' if self.peek_at(1) == Some('*') => self.block_comment()?,
                c if c == '_' || c.is_alphabetic() => {
                    let ident = self.take_while(|c| c == '_' || c.is_alphanumeric());
                    self.push(TokenKind::Ident(ident), line, column);
                }
                c if c.is_ascii_digit() => {
                    let kind = self.number()?;
                    self.push(kind, line, column);
                }
                '.' if self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) => {
                    let kind = self.number()?;
                    self.push(kind, line, column);
                }
                '"' => {
                    let s = self.interpreted_string()?;
                    self.push(TokenKind::Str(s), line, column);
                }
                '`' => {
                    let s = self.raw_string()?;
                    self.push(TokenKind::Str(s), line, column);
                }
                '\'' => {
                    let r = self.rune()?;
                    self.push(TokenKind::Rune(r), line, column);
                }
                ';' => {
                    self.bump();
                    self.tokens.push(Token {
                        kind: TokenKind::Semi,
                        line,
                        column,
                    });
                    self.semi_pending = false;
                }
                _ => {
                    let punct = self.punctuation()?;
                    self.push(TokenKind::Punct(punct), line, column);
                }
            }
        }
        self.newline();
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            line: self.line,
            column: self.column,
        });
        Ok(())
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            out.push(c);
            self.bump();
        }
        out
    }

    fn line_comment(&mut self) {
        let line = self.line;
        self.bump();
        self.bump();
        let text = self.take_while(|c| c != '\n');
        self.comments.push(Comment {
            line,
            text: text.trim().to_string(),
            is_line: true,
        });
    }

    fn block_comment(&mut self) -> LexResult<()> {
        let line = self.line;
        self.bump();
        self.bump();
        let mut text = String::new();
        loop {
            match self.peek() {
                None => return self.error("comment not terminated"),
                Some('*') if self.peek_at(1) == Some('/') => {
                    self.bump();
                    self.bump();
                    break;
                }
                Some(c) => {
                    text.push(c);
                    self.bump();
                }
            }
        }
        // A block comment spanning lines acts like a newline.
        if text.contains('\n') {
            self.newline();
        }
        self.comments.push(Comment {
            line,
            text: text.trim().to_string(),
            is_line: false,
        });
        Ok(())
    }

    fn number(&mut self) -> LexResult<TokenKind> {
        let mut text = String::new();
        let mut is_float = false;

        let prefixed = self.peek() == Some('0')
            && matches!(self.peek_at(1), Some('x' | 'X' | 'b' | 'B' | 'o' | 'O'));
        if prefixed {
            let hex = matches!(self.peek_at(1), Some('x' | 'X'));
            text.push(self.bump().unwrap_or('0'));
            text.push(self.bump().unwrap_or('x'));
            text.push_str(&self.take_while(|c| c == '_' || c.is_ascii_hexdigit()));
            if hex {
                if self.peek() == Some('.') {
                    is_float = true;
                    self.bump();
                    text.push('.');
                    text.push_str(&self.take_while(|c| c == '_' || c.is_ascii_hexdigit()));
                }
                if matches!(self.peek(), Some('p' | 'P')) {
                    is_float = true;
                    self.exponent(&mut text);
                }
            }
        } else {
            text.push_str(&self.take_while(|c| c == '_' || c.is_ascii_digit()));
            if self.peek() == Some('.') {
                is_float = true;
                self.bump();
                text.push('.');
                text.push_str(&self.take_while(|c| c == '_' || c.is_ascii_digit()));
            }
            if matches!(self.peek(), Some('e' | 'E')) {
                is_float = true;
                self.exponent(&mut text);
            }
        }

        if self.peek() == Some('i') {
            self.bump();
            text.push('i');
            return Ok(TokenKind::Imag(text));
        }
        if self.peek().is_some_and(|c| c.is_alphanumeric()) {
            return self.error(format!("invalid digit in numeric literal {}", text));
        }
        Ok(if is_float {
            TokenKind::Float(text)
        } else {
            TokenKind::Int(text)
        })
    }

    fn exponent(&mut self, text: &mut String) {
        if let Some(e) = self.bump() {
            text.push(e);
        }
        if let Some(sign @ ('+' | '-')) = self.peek() {
            self.bump();
            text.push(sign);
        }
        text.push_str(&self.take_while(|c| c == '_' || c.is_ascii_digit()));
    }

    fn interpreted_string(&mut self) -> LexResult<String> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.peek() {
                None | Some('\n') => return self.error("string literal not terminated"),
                Some('"') => {
                    self.bump();
                    return Ok(out);
                }
                Some('\\') => {
                    let code = self.escape('"')?;
                    out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
                Some(c) => {
                    out.push(c);
                    self.bump();
                }
            }
        }
    }

    fn raw_string(&mut self) -> LexResult<String> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return self.error("raw string literal not terminated"),
                Some('`') => return Ok(out),
                Some('\r') => {}
                Some(c) => out.push(c),
            }
        }
    }

    fn rune(&mut self) -> LexResult<u32> {
        self.bump();
        let value = match self.peek() {
            None | Some('\n') | Some('\'') => return self.error("empty rune literal or unescaped ' in rune literal"),
            Some('\\') => self.escape('\'')?,
            Some(c) => {
                self.bump();
                c as u32
            }
        };
        if self.peek() != Some('\'') {
            return self.error("rune literal not terminated");
        }
        self.bump();
        Ok(value)
    }

    /// Decode one escape sequence starting at the backslash.
    fn escape(&mut self, quote: char) -> LexResult<u32> {
        self.bump();
        let Some(c) = self.bump() else {
            return self.error("escape sequence not terminated");
        };
        let simple = match c {
            'a' => Some(0x07),
            'b' => Some(0x08),
            'f' => Some(0x0c),
            'n' => Some(0x0a),
            'r' => Some(0x0d),
            't' => Some(0x09),
            'v' => Some(0x0b),
            '\\' => Some(0x5c),
            c if c == quote => Some(c as u32),
            _ => None,
        };
        if let Some(code) = simple {
            return Ok(code);
        }
        let (digits, radix) = match c {
            'x' => (2, 16),
            'u' => (4, 16),
            'U' => (8, 16),
            '0'..='7' => (2, 8),
            _ => return self.error(format!("unknown escape sequence \\{}", c)),
        };
        let mut value = if radix == 8 { c.to_digit(8).unwrap_or(0) } else { 0 };
        for _ in 0..digits {
            match self.peek().and_then(|d| d.to_digit(radix)) {
                Some(d) => {
                    self.bump();
                    value = value * radix + d;
                }
                None => return self.error("invalid escape sequence"),
            }
        }
        Ok(value)
    }

    fn punctuation(&mut self) -> LexResult<&'static str> {
        for &p in PUNCTUATION {
            let matches = p
                .chars()
                .enumerate()
                .all(|(i, c)| self.peek_at(i) == Some(c));
            if matches {
                for _ in 0..p.chars().count() {
                    self.bump();
                }
                return Ok(p);
            }
        }
        let c = self.peek().unwrap_or('\0');
        self.error(format!("invalid character {:?}", c))
    }
}

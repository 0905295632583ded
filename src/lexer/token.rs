/*
 * ==========================================================================
 * KOALCODE - Code that Clings!
 * ==========================================================================
 *
 * License:
 * This file is part of the KoalCode programming language project.
 *
 * KoalCode is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fmt;

use crate::span::Span;

/// The category of a lexical token.
///
/// KoalCode keywords (`if`, `while`, `fuktion`, ...) are not a separate
/// category: the parser matches them as identifiers by lexeme. This keeps
/// the token model down to the five kinds the grammar actually needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A numeric literal: `42`, `3.14`, `.5`
    Number,

    /// A double-quoted string literal (no escapes).
    String,

    /// A name: variables, functions, keywords, dotted builtin names
    /// such as `http.get` (periods are legal inside identifiers).
    Identifier,

    /// An operator or punctuation symbol, one or more characters.
    Symbol,

    /// End-of-input marker, always the final token.
    Eof,
}

/// A single classified unit of source code.
///
/// Tokens are immutable once produced. `num` is meaningful only for
/// `TokenKind::Number`; for every other kind the lexeme carries the
/// token's identity.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,

    /// The exact source text that produced this token. For string
    /// literals this is the contents between the quotes.
    pub lexeme: String,

    /// Parsed numeric value, valid only when `kind == Number`.
    pub num: f64,

    /// Where the token started in the source.
    pub span: Span,
}

impl Token {
    pub fn eof(span: Span) -> Self {
        Self {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            num: 0.0,
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Error messages show what the user wrote, not the internal
    /// structure. The EOF token displays as `<EOF>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Eof {
            write!(f, "<EOF>")
        } else {
            write!(f, "{}", self.lexeme)
        }
    }
}

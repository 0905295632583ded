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

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Multi-character operator and assignment symbols, longest first so a
/// single left-to-right probe implements longest-match (`<<=` must win
/// over `<<`, which must win over `<`).
const MULTI_SYMBOLS: &[&str] = &[
    "<<=", ">>=", "**=",
    "==", "!=", "~=", "<=", ">=", "&&", "||",
    "<<", ">>", "**",
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
];

/// Every character accepted as a single-character symbol.
const SINGLE_SYMBOLS: &str = "(){}[];=+-*/%.,<>!&|^~";

/// Converts KoalCode source text into a flat token stream.
///
/// The scan is a single forward pass with no backtracking. Whitespace and
/// `--` line comments are skipped between tokens. An unrecognized
/// character is the language's only recoverable error: it is diagnosed on
/// stderr, skipped, and scanning continues.
///
/// The returned stream always ends with exactly one `TokenKind::Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens();
    lexer.tokens
}

struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    line_start: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input,
    /// then appends the terminating EOF token.
    fn scan_tokens(&mut self) {
        loop {
            self.skip_ws_and_comments();
            if self.is_at_end() {
                break;
            }
            self.scan_token();
        }

        let span = self.here();
        self.tokens.push(Token::eof(span));
    }

    /// Skips whitespace and `--` comments, which run to end of line.
    fn skip_ws_and_comments(&mut self) {
        loop {
            while !self.is_at_end() && self.peek().is_whitespace() {
                self.advance();
            }
            if self.peek() == '-' && self.peek_next() == '-' {
                while !self.is_at_end() && self.peek() != '\n' {
                    self.advance();
                }
                continue;
            }
            break;
        }
    }

    /// Scans and emits a single token.
    ///
    /// Classification order matches the grammar: identifiers, numbers
    /// (including a leading `.` when a digit follows), strings, the
    /// longest-match multi-character symbol table, single-character
    /// symbols, and finally the recoverable unrecognized-character
    /// diagnostic.
    fn scan_token(&mut self) {
        let span = self.here();
        let ch = self.peek();

        if ch.is_ascii_alphabetic() || ch == '_' {
            self.identifier(span);
            return;
        }

        if ch.is_ascii_digit() || (ch == '.' && self.peek_next().is_ascii_digit()) {
            self.number(span);
            return;
        }

        if ch == '"' {
            self.string(span);
            return;
        }

        for sym in MULTI_SYMBOLS {
            if self.match_str(sym) {
                self.tokens.push(Token {
                    kind: TokenKind::Symbol,
                    lexeme: (*sym).to_string(),
                    num: 0.0,
                    span,
                });
                return;
            }
        }

        if SINGLE_SYMBOLS.contains(ch) {
            self.advance();
            self.tokens.push(Token {
                kind: TokenKind::Symbol,
                lexeme: ch.to_string(),
                num: 0.0,
                span,
            });
            return;
        }

        // Recoverable: diagnose, skip, keep scanning.
        eprintln!("lexical error near '{}' at line {}", ch, self.line);
        self.advance();
    }

    /// Identifiers start with a letter or underscore and continue over
    /// alphanumerics, underscores, and periods. Periods are what make
    /// dotted builtin names like `network.ping` single tokens.
    fn identifier(&mut self, span: Span) {
        let start = self.current;

        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' || self.peek() == '.' {
            self.advance();
        }

        let text: String = self.chars[start..self.current].iter().collect();

        self.tokens.push(Token {
            kind: TokenKind::Identifier,
            lexeme: text,
            num: 0.0,
            span,
        });
    }

    /// Numbers are digits with one optional fractional part. No exponent
    /// and no sign: a leading `-` or `+` is a unary operator. A bare `.5`
    /// is accepted when the dot is immediately followed by a digit.
    fn number(&mut self, span: Span) {
        let start = self.current;

        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text: String = self.chars[start..self.current].iter().collect();
        let num = text.parse::<f64>().unwrap_or(0.0);

        self.tokens.push(Token {
            kind: TokenKind::Number,
            lexeme: text,
            num,
            span,
        });
    }

    /// Double-quoted string with no escape sequences. An unterminated
    /// string runs to end of input rather than erroring.
    fn string(&mut self, span: Span) {
        self.advance(); // opening quote
        let start = self.current;

        while !self.is_at_end() && self.peek() != '"' {
            self.advance();
        }

        let value: String = self.chars[start..self.current].iter().collect();

        if !self.is_at_end() {
            self.advance(); // closing quote
        }

        self.tokens.push(Token {
            kind: TokenKind::String,
            lexeme: value,
            num: 0.0,
            span,
        });
    }

    /// Consumes `s` if the upcoming characters match it exactly.
    fn match_str(&mut self, s: &str) -> bool {
        for (i, expected) in s.chars().enumerate() {
            match self.chars.get(self.current + i) {
                Some(c) if *c == expected => {}
                _ => return false,
            }
        }
        self.current += s.chars().count();
        true
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        if ch == '\n' {
            self.line += 1;
            self.line_start = self.current;
        }
        ch
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn here(&self) -> Span {
        Span::new(self.line, self.current - self.line_start)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

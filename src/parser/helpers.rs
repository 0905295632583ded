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

use crate::error::KoalError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// Returns the current token without consuming it. The stream always
    /// ends with an EOF token, so the cursor never runs off the end.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    /// Returns the token after the current one without advancing.
    /// Clamps to the final EOF token.
    pub fn peek_next(&self) -> &Token {
        let idx = (self.current + 1).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Advances one token forward and returns the consumed token.
    /// Advancing at EOF keeps returning the EOF token.
    pub fn advance(&mut self) -> Token {
        let t = self.peek().clone();
        if self.current < self.tokens.len() - 1 {
            self.current += 1;
        }
        t
    }

    /// Returns true if the parser is at EOF.
    pub fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Checks if the current token is the given symbol.
    pub fn check_symbol(&self, sym: &str) -> bool {
        let t = self.peek();
        t.kind == TokenKind::Symbol && t.lexeme == sym
    }

    /// Matches a symbol and consumes it if present.
    pub fn match_symbol(&mut self, sym: &str) -> bool {
        if self.check_symbol(sym) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Checks for a specific identifier (keywords are identifiers with a
    /// reserved lexeme) without consuming it.
    pub fn check_identifier(&self, word: &str) -> bool {
        let t = self.peek();
        t.kind == TokenKind::Identifier && t.lexeme == word
    }

    /// Matches a specific identifier and consumes it if present.
    pub fn match_identifier(&mut self, word: &str) -> bool {
        if self.check_identifier(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a required symbol, or fails with a fatal syntax error
    /// describing the surrounding grammar.
    pub fn consume_symbol(&mut self, sym: &str, context: &str) -> Result<(), KoalError> {
        if self.match_symbol(sym) {
            Ok(())
        } else {
            Err(self.error_here(format!("Expected '{}' {}", sym, context)))
        }
    }

    /// Consumes and returns a required identifier token.
    pub fn consume_identifier(&mut self, context: &str) -> Result<Token, KoalError> {
        if self.peek().kind == TokenKind::Identifier {
            Ok(self.advance())
        } else {
            Err(self.error_here(format!("Expected {}", context)))
        }
    }

    /// Skips any run of `;` separators.
    pub fn skip_separators(&mut self) {
        while self.match_symbol(";") {}
    }

    /// Builds a fatal syntax error anchored at the current token.
    pub fn error_here(&self, message: impl Into<String>) -> KoalError {
        KoalError::syntax_error(message, self.peek().span)
    }
}

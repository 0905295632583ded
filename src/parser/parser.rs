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

use crate::ast::Stmt;
use crate::error::KoalError;
use crate::lexer::token::Token;

/// The KoalCode recursive-descent parser.
///
/// Maintains the full token stream produced by the lexer and a single
/// forward cursor into it. There is no backtracking: every grammar
/// decision is made on at most one token of lookahead. Missing required
/// tokens are fatal.
///
/// The actual grammar logic is implemented through extension modules
/// (`statements`, `expressions`, `helpers`) via additional `impl Parser`
/// blocks.
pub struct Parser {
    /// Complete list of tokens to be parsed.
    pub tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub current: usize,
}

/// Public entry point for the parsing phase.
///
/// Produces the ordered list of top-level statements, or the first fatal
/// syntax error encountered.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, KoalError> {
    let mut parser = Parser { tokens, current: 0 };
    parser.parse()
}

impl Parser {
    /// Parses the entire token stream into a list of top-level
    /// statements. Statement separators (`;`) between top-level
    /// statements are optional and skipped.
    pub fn parse(&mut self) -> Result<Vec<Stmt>, KoalError> {
        let mut stmts = Vec::new();

        while !self.is_at_end() {
            self.skip_separators();
            if self.is_at_end() {
                break;
            }
            stmts.push(self.statement()?);
            self.skip_separators();
        }

        Ok(stmts)
    }
}

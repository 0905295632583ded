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

use crate::ast::{BinOp, Expr, Stmt};
use crate::error::KoalError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// Parses a single statement.
    ///
    /// This is the main dispatcher for all statement grammar forms. A
    /// leading identifier parses as an assignment only when the token
    /// immediately after it is `=` or a compound-assignment symbol;
    /// everything else falls through to expression parsing, so a bare
    /// call is an expression statement, never a failed assignment.
    pub fn statement(&mut self) -> Result<Stmt, KoalError> {
        self.skip_separators();

        if self.check_symbol("{") {
            return self.block();
        }

        if self.check_identifier("class") {
            return self.class_declaration();
        }

        if self.check_identifier("while") {
            return self.while_statement();
        }

        if self.check_identifier("if") {
            return self.if_statement();
        }

        if self.check_identifier("fuktion") {
            return self.function_declaration();
        }

        if self.check_identifier("return") {
            return self.return_statement();
        }

        if self.peek().kind == TokenKind::Identifier {
            let next = self.peek_next();
            if next.kind == TokenKind::Symbol && BinOp::is_assign_symbol(&next.lexeme) {
                return self.assignment();
            }
        }

        Ok(Stmt::Expression(self.expression()?))
    }

    /// block → "{" statement* "}"
    ///
    /// Statements inside a block are separated by optional `;`. Hitting
    /// EOF before the closing brace is fatal.
    pub fn block(&mut self) -> Result<Stmt, KoalError> {
        Ok(Stmt::Block(self.block_statements()?))
    }

    fn block_statements(&mut self) -> Result<Vec<Stmt>, KoalError> {
        self.consume_symbol("{", "to start a block")?;

        let mut stmts = Vec::new();

        while !self.check_symbol("}") {
            if self.is_at_end() {
                return Err(self.error_here("Unexpected EOF inside block"));
            }
            self.skip_separators();
            if self.check_symbol("}") {
                break;
            }

            stmts.push(self.statement()?);
            self.skip_separators();
        }
        self.advance(); // '}'

        Ok(stmts)
    }

    /// while → "while" ( "(" expression ")" | expression ) body
    ///
    /// The condition's parentheses are optional; the body is a block or
    /// a single statement.
    fn while_statement(&mut self) -> Result<Stmt, KoalError> {
        self.advance(); // 'while'

        let condition = if self.match_symbol("(") {
            let cond = self.expression()?;
            self.consume_symbol(")", "after while condition")?;
            cond
        } else {
            self.expression()?
        };

        let body = if self.check_symbol("{") {
            self.block()?
        } else {
            self.statement()?
        };

        Ok(Stmt::While {
            condition,
            body: Box::new(body),
        })
    }

    /// if → "if" condition body ( "else" ( if | body ) )?
    ///
    /// `else if` chains nest through the else branch.
    fn if_statement(&mut self) -> Result<Stmt, KoalError> {
        self.advance(); // 'if'

        let has_parens = self.match_symbol("(");
        let condition = self.expression()?;
        if has_parens {
            self.consume_symbol(")", "after if condition")?;
        }

        let then_branch = if self.check_symbol("{") {
            self.block()?
        } else {
            self.statement()?
        };

        let else_branch = if self.match_identifier("else") {
            let branch = if self.check_symbol("{") {
                self.block()?
            } else if self.check_identifier("if") {
                self.if_statement()?
            } else {
                self.statement()?
            };
            Some(Box::new(branch))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch,
        })
    }

    /// funcDecl → "fuktion" IDENT "(" ( IDENT ( "," IDENT )* )? ")" block
    fn function_declaration(&mut self) -> Result<Stmt, KoalError> {
        self.advance(); // 'fuktion'

        let name = self
            .consume_identifier("function name after 'fuktion'")?
            .lexeme;

        self.consume_symbol("(", "after function name")?;

        let mut params = Vec::new();
        if !self.check_symbol(")") {
            loop {
                let param = self
                    .consume_identifier("parameter name in function declaration")?
                    .lexeme;
                params.push(param);

                if self.match_symbol(",") {
                    continue;
                }
                break;
            }
        }

        self.consume_symbol(")", "after parameter list")?;

        if !self.check_symbol("{") {
            return Err(self.error_here("Expected '{' for function body"));
        }
        let body = self.block_statements()?;

        Ok(Stmt::FuncDecl { name, params, body })
    }

    /// return → "return" expression?
    ///
    /// The expression is omitted when the next token already closes the
    /// statement (`;` or `}`).
    fn return_statement(&mut self) -> Result<Stmt, KoalError> {
        self.advance(); // 'return'

        let expr = if self.check_symbol(";") || self.check_symbol("}") {
            None
        } else {
            Some(self.expression()?)
        };

        Ok(Stmt::Return(expr))
    }

    /// classDecl → "class" IDENT "{" ... "}"
    ///
    /// The body is consumed with brace balancing and discarded. Class
    /// declarations are recognized but inert at run time.
    fn class_declaration(&mut self) -> Result<Stmt, KoalError> {
        self.advance(); // 'class'

        let name = self.consume_identifier("class name after 'class'")?.lexeme;

        self.consume_symbol("{", "after class name")?;

        let mut depth = 1usize;
        while depth > 0 {
            if self.is_at_end() {
                return Err(self.error_here("Unexpected EOF inside class body"));
            }
            let t = self.advance();
            if t.kind == TokenKind::Symbol {
                match t.lexeme.as_str() {
                    "{" => depth += 1,
                    "}" => depth -= 1,
                    _ => {}
                }
            }
        }

        Ok(Stmt::ClassDecl { name })
    }

    /// assign → IDENT ( "=" | compound-assign ) expression
    ///
    /// Compound forms desugar at parse time to `name = name OP expr`, so
    /// the evaluator only ever sees plain assignment.
    fn assignment(&mut self) -> Result<Stmt, KoalError> {
        let name = self.advance().lexeme; // identifier, checked by caller
        let op_tok = self.advance();
        let value = self.expression()?;

        let target = Expr::Var(name.clone());

        let expr = if op_tok.lexeme == "=" {
            Expr::Binary {
                op: BinOp::Assign,
                left: Box::new(target),
                right: Box::new(value),
            }
        } else {
            let op = BinOp::from_compound(&op_tok.lexeme).ok_or_else(|| {
                KoalError::syntax_error(
                    format!("Unknown assignment operator \"{}\"", op_tok.lexeme),
                    op_tok.span,
                )
            })?;

            Expr::Binary {
                op: BinOp::Assign,
                left: Box::new(target),
                right: Box::new(Expr::Binary {
                    op,
                    left: Box::new(Expr::Var(name)),
                    right: Box::new(value),
                }),
            }
        };

        Ok(Stmt::Expression(expr))
    }
}

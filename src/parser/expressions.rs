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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * The entire KoalCode expression grammar, loosest to tightest binding:
 *
 *   logical-or → logical-and → bitwise-or → bitwise-xor → bitwise-and
 *     → equality → relational → shift → additive → multiplicative
 *     → exponent (right-assoc) → unary → primary
 *
 * The keywords `and`, `or` and `not` are accepted as synonyms for `&&`,
 * `||` and `!`. Assignment is not part of this ladder: it exists only at
 * statement level.
 *
 * ==========================================================================
 */

use crate::ast::{BinOp, Expr, UnOp};
use crate::error::KoalError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// expression → logical_or
    pub fn expression(&mut self) -> Result<Expr, KoalError> {
        self.logical_or()
    }

    /// logical_or → logical_and ( ( "||" | "or" ) logical_and )*
    fn logical_or(&mut self) -> Result<Expr, KoalError> {
        let mut expr = self.logical_and()?;

        while self.match_symbol("||") || self.match_identifier("or") {
            let right = self.logical_and()?;
            expr = binary(BinOp::LogicalOr, expr, right);
        }

        Ok(expr)
    }

    /// logical_and → bitwise_or ( ( "&&" | "and" ) bitwise_or )*
    fn logical_and(&mut self) -> Result<Expr, KoalError> {
        let mut expr = self.bitwise_or()?;

        while self.match_symbol("&&") || self.match_identifier("and") {
            let right = self.bitwise_or()?;
            expr = binary(BinOp::LogicalAnd, expr, right);
        }

        Ok(expr)
    }

    /// bitwise_or → bitwise_xor ( "|" bitwise_xor )*
    fn bitwise_or(&mut self) -> Result<Expr, KoalError> {
        let mut expr = self.bitwise_xor()?;

        while self.match_symbol("|") {
            let right = self.bitwise_xor()?;
            expr = binary(BinOp::BitOr, expr, right);
        }

        Ok(expr)
    }

    /// bitwise_xor → bitwise_and ( "^" bitwise_and )*
    fn bitwise_xor(&mut self) -> Result<Expr, KoalError> {
        let mut expr = self.bitwise_and()?;

        while self.match_symbol("^") {
            let right = self.bitwise_and()?;
            expr = binary(BinOp::BitXor, expr, right);
        }

        Ok(expr)
    }

    /// bitwise_and → equality ( "&" equality )*
    fn bitwise_and(&mut self) -> Result<Expr, KoalError> {
        let mut expr = self.equality()?;

        while self.match_symbol("&") {
            let right = self.equality()?;
            expr = binary(BinOp::BitAnd, expr, right);
        }

        Ok(expr)
    }

    /// equality → relational ( ( "==" | "!=" | "~=" ) relational )*
    ///
    /// `~=` is an accepted synonym for `!=`.
    fn equality(&mut self) -> Result<Expr, KoalError> {
        let mut expr = self.relational()?;

        loop {
            let op = if self.match_symbol("==") {
                BinOp::Eq
            } else if self.match_symbol("!=") || self.match_symbol("~=") {
                BinOp::Ne
            } else {
                break;
            };

            let right = self.relational()?;
            expr = binary(op, expr, right);
        }

        Ok(expr)
    }

    /// relational → shift ( ( "<" | "<=" | ">" | ">=" ) shift )*
    fn relational(&mut self) -> Result<Expr, KoalError> {
        let mut expr = self.shift()?;

        loop {
            let op = if self.match_symbol("<=") {
                BinOp::Le
            } else if self.match_symbol(">=") {
                BinOp::Ge
            } else if self.match_symbol("<") {
                BinOp::Lt
            } else if self.match_symbol(">") {
                BinOp::Gt
            } else {
                break;
            };

            let right = self.shift()?;
            expr = binary(op, expr, right);
        }

        Ok(expr)
    }

    /// shift → additive ( ( "<<" | ">>" ) additive )*
    fn shift(&mut self) -> Result<Expr, KoalError> {
        let mut expr = self.additive()?;

        loop {
            let op = if self.match_symbol("<<") {
                BinOp::Shl
            } else if self.match_symbol(">>") {
                BinOp::Shr
            } else {
                break;
            };

            let right = self.additive()?;
            expr = binary(op, expr, right);
        }

        Ok(expr)
    }

    /// additive → multiplicative ( ( "+" | "-" ) multiplicative )*
    fn additive(&mut self) -> Result<Expr, KoalError> {
        let mut expr = self.multiplicative()?;

        loop {
            let op = if self.match_symbol("+") {
                BinOp::Add
            } else if self.match_symbol("-") {
                BinOp::Sub
            } else {
                break;
            };

            let right = self.multiplicative()?;
            expr = binary(op, expr, right);
        }

        Ok(expr)
    }

    /// multiplicative → exponent ( ( "*" | "/" | "%" ) exponent )*
    fn multiplicative(&mut self) -> Result<Expr, KoalError> {
        let mut expr = self.exponent()?;

        loop {
            let op = if self.match_symbol("*") {
                BinOp::Mul
            } else if self.match_symbol("/") {
                BinOp::Div
            } else if self.match_symbol("%") {
                BinOp::Mod
            } else {
                break;
            };

            let right = self.exponent()?;
            expr = binary(op, expr, right);
        }

        Ok(expr)
    }

    /// exponent → unary ( "**" exponent )?
    ///
    /// Right-associative: `2 ** 3 ** 2` parses as `2 ** (3 ** 2)`.
    /// Unary binds tighter, so `-2 ** 2` is `(-2) ** 2`.
    fn exponent(&mut self) -> Result<Expr, KoalError> {
        let expr = self.unary()?;

        if self.match_symbol("**") {
            let right = self.exponent()?;
            return Ok(binary(BinOp::Pow, expr, right));
        }

        Ok(expr)
    }

    /// unary → ( "!" | "~" | "-" | "+" | "not" ) unary | primary
    ///
    /// Unary `+` maps to negation, same as unary `-`. This mirrors the
    /// language's exercised behavior and is deliberate.
    fn unary(&mut self) -> Result<Expr, KoalError> {
        let op = if self.match_symbol("!") {
            Some(UnOp::Not)
        } else if self.match_symbol("~") {
            Some(UnOp::BitNot)
        } else if self.match_symbol("-") || self.match_symbol("+") {
            Some(UnOp::Neg)
        } else if self.match_identifier("not") {
            Some(UnOp::Not)
        } else {
            None
        };

        if let Some(op) = op {
            let operand = self.unary()?;
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
            });
        }

        self.primary()
    }

    /// primary → NUMBER | STRING | "(" expression ")" | IDENT
    ///         | IDENT "(" ( expression ( "," expression )* )? ")"
    ///
    /// An identifier immediately followed by `(` is a call; any other
    /// identifier is a variable reference.
    fn primary(&mut self) -> Result<Expr, KoalError> {
        match self.peek().kind {
            TokenKind::Number => {
                let t = self.advance();
                Ok(Expr::Number(t.num))
            }

            TokenKind::String => {
                let t = self.advance();
                Ok(Expr::Str(t.lexeme))
            }

            TokenKind::Identifier => {
                let id = self.advance();

                if self.match_symbol("(") {
                    let mut args = Vec::new();

                    if !self.check_symbol(")") {
                        loop {
                            args.push(self.expression()?);
                            if self.match_symbol(",") {
                                continue;
                            }
                            break;
                        }
                    }

                    self.consume_symbol(")", "after argument list")?;

                    return Ok(Expr::Call {
                        name: id.lexeme,
                        args,
                    });
                }

                Ok(Expr::Var(id.lexeme))
            }

            TokenKind::Symbol if self.check_symbol("(") => {
                self.advance();
                let inner = self.expression()?;
                self.consume_symbol(")", "after expression")?;
                Ok(inner)
            }

            _ => Err(self.error_here(format!("Parse error (unexpected token \"{}\")", self.peek()))),
        }
    }
}

fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

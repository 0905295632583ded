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

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::Stmt;
use crate::error::KoalError;
use crate::interpreter::environment::Frame;
use crate::interpreter::Interpreter;

/// Internal control flow signal used by the interpreter.
///
/// A `Return` halts every enclosing block, loop and branch until the
/// nearest call boundary consumes the value. Top-level code treats a
/// `Return` as end of program.
#[derive(Debug, Clone, Copy)]
pub enum ExecSignal {
    /// Normal fall-through execution.
    None,

    /// Early return carrying the function's result.
    Return(f64),
}

impl Interpreter {
    /// Executes a single statement inside the given frame.
    ///
    /// Blocks do not open frames; only calls do. `while` re-evaluates its
    /// condition against the current frame on every iteration, and a
    /// `return` inside the body stops the loop without another condition
    /// check.
    pub fn exec_stmt(
        &mut self,
        stmt: &Stmt,
        frame: &Rc<RefCell<Frame>>,
    ) -> Result<ExecSignal, KoalError> {
        match stmt {
            Stmt::Expression(expr) => {
                self.eval_expr(expr, frame)?;
                Ok(ExecSignal::None)
            }

            Stmt::Block(stmts) => {
                for s in stmts {
                    match self.exec_stmt(s, frame)? {
                        ExecSignal::None => {}
                        other => return Ok(other),
                    }
                }
                Ok(ExecSignal::None)
            }

            Stmt::While { condition, body } => {
                loop {
                    if self.eval_expr(condition, frame)? == 0.0 {
                        break;
                    }
                    match self.exec_stmt(body, frame)? {
                        ExecSignal::None => {}
                        other => return Ok(other),
                    }
                }
                Ok(ExecSignal::None)
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(condition, frame)? != 0.0 {
                    self.exec_stmt(then_branch, frame)
                } else if let Some(else_branch) = else_branch {
                    self.exec_stmt(else_branch, frame)
                } else {
                    Ok(ExecSignal::None)
                }
            }

            Stmt::FuncDecl { name, params, body } => {
                // A declaration reached mid-execution registers
                // immediately, replacing any previous entry.
                self.functions.register(name, params.clone(), body.clone());
                Ok(ExecSignal::None)
            }

            Stmt::Return(expr) => {
                let value = match expr {
                    Some(expr) => self.eval_expr(expr, frame)?,
                    None => 0.0,
                };
                Ok(ExecSignal::Return(value))
            }

            // Parsed for brace balance, inert at run time.
            Stmt::ClassDecl { .. } => Ok(ExecSignal::None),
        }
    }
}

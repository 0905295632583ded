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

use crate::ast::{BinOp, Expr, UnOp};
use crate::error::KoalError;
use crate::interpreter::environment::Frame;
use crate::interpreter::Interpreter;

impl Interpreter {
    /// Evaluates an expression to its single numeric value.
    ///
    /// Arithmetic, comparison and logical operators act on 64-bit
    /// floats; bitwise and shift operators truncate both operands to
    /// 64-bit signed integers, compute, and convert back. Comparisons
    /// and logical operators yield exactly 1.0 or 0.0, and logical
    /// operators always evaluate both operands.
    pub fn eval_expr(
        &mut self,
        expr: &Expr,
        frame: &Rc<RefCell<Frame>>,
    ) -> Result<f64, KoalError> {
        match expr {
            Expr::Number(n) => Ok(*n),

            Expr::Str(_) => Err(KoalError::runtime_error(
                "string literals are only supported as builtin call arguments",
            )),

            Expr::Var(name) => frame.borrow().get(name).ok_or_else(|| {
                KoalError::reference_error(format!("undefined variable '{}'", name))
            }),

            Expr::Unary { op, operand } => {
                let v = self.eval_expr(operand, frame)?;
                Ok(match op {
                    UnOp::Neg => -v,
                    UnOp::Not => {
                        if v == 0.0 {
                            1.0
                        } else {
                            0.0
                        }
                    }
                    UnOp::BitNot => !(v as i64) as f64,
                })
            }

            Expr::Binary { op, left, right } => {
                if *op == BinOp::Assign {
                    return self.eval_assignment(left, right, frame);
                }

                let l = self.eval_expr(left, frame)?;
                let r = self.eval_expr(right, frame)?;
                Ok(apply_binary(*op, l, r))
            }

            Expr::Call { name, args } => self.call_function(name, args, frame),
        }
    }

    /// `name = expr` — evaluates the right side, then binds in the
    /// current frame only. Yields the assigned value.
    fn eval_assignment(
        &mut self,
        left: &Expr,
        right: &Expr,
        frame: &Rc<RefCell<Frame>>,
    ) -> Result<f64, KoalError> {
        let Expr::Var(name) = left else {
            return Err(KoalError::runtime_error(
                "left side of '=' must be a variable",
            ));
        };

        let value = self.eval_expr(right, frame)?;
        frame.borrow_mut().set(name, value);
        Ok(value)
    }
}

fn apply_binary(op: BinOp, l: f64, r: f64) -> f64 {
    match op {
        BinOp::Add => l + r,
        BinOp::Sub => l - r,
        BinOp::Mul => l * r,
        BinOp::Div => l / r,
        BinOp::Mod => l % r,
        BinOp::Pow => l.powf(r),

        BinOp::Lt => bool_num(l < r),
        BinOp::Le => bool_num(l <= r),
        BinOp::Gt => bool_num(l > r),
        BinOp::Ge => bool_num(l >= r),
        BinOp::Eq => bool_num(l == r),
        BinOp::Ne => bool_num(l != r),

        BinOp::BitAnd => ((l as i64) & (r as i64)) as f64,
        BinOp::BitOr => ((l as i64) | (r as i64)) as f64,
        BinOp::BitXor => ((l as i64) ^ (r as i64)) as f64,
        BinOp::Shl => (l as i64).wrapping_shl(r as i64 as u32) as f64,
        BinOp::Shr => (l as i64).wrapping_shr(r as i64 as u32) as f64,

        BinOp::LogicalAnd => bool_num(l != 0.0 && r != 0.0),
        BinOp::LogicalOr => bool_num(l != 0.0 || r != 0.0),

        // Handled before operand evaluation.
        BinOp::Assign => 0.0,
    }
}

fn bool_num(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

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

use crate::ast::op::{BinOp, UnOp};

/// Expression nodes.
///
/// Every node exclusively owns its children; the tree is acyclic and
/// dropped exactly once after top-level execution.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),

    /// A string literal. Only meaningful as a raw argument to a builtin
    /// call; evaluating one anywhere else is a fatal runtime error.
    Str(String),

    /// A variable reference.
    Var(String),

    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    Unary {
        op: UnOp,
        operand: Box<Expr>,
    },

    /// A call by name. Builtins are matched before the function table,
    /// so user functions can never shadow a builtin.
    Call {
        name: String,
        args: Vec<Expr>,
    },
}

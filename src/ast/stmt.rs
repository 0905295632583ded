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

use crate::ast::expr::Expr;

/// Statement nodes.
///
/// `if` and `while` bodies are a single statement, which may itself be a
/// block. Assignments appear as expression statements carrying a
/// `BinOp::Assign` node; compound forms are desugared at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A bare expression; its value is computed and discarded.
    Expression(Expr),

    /// `{ stmt* }` — blocks do not open a new frame. Only calls do.
    Block(Vec<Stmt>),

    While {
        condition: Expr,
        body: Box<Stmt>,
    },

    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// `fuktion NAME(params) { body }` — registered in the function
    /// table when executed; top-level declarations are pre-registered
    /// before any other top-level statement runs.
    FuncDecl {
        name: String,
        params: Vec<String>,
        body: Vec<Stmt>,
    },

    Return(Option<Expr>),

    /// `class NAME { ... }` — the body is consumed for brace balance and
    /// discarded. Recognized, inert at run time.
    ClassDecl { name: String },
}

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

/// Binary operator codes.
///
/// The parser resolves symbol text to this enum exactly once; the
/// evaluator never re-inspects operator text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,

    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,

    LogicalAnd,
    LogicalOr,

    /// `=` — only ever produced at statement level with a variable on
    /// the left-hand side.
    Assign,
}

/// Unary operator codes. Both `-` and `+` resolve to `Neg`; the unary
/// plus mapping to negation is exercised, documented behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
    Not,
    BitNot,
}

impl BinOp {
    /// Resolves a compound-assignment symbol (`+=`, `<<=`, ...) to the
    /// underlying binary operator it desugars to.
    pub fn from_compound(lexeme: &str) -> Option<BinOp> {
        match lexeme {
            "+=" => Some(BinOp::Add),
            "-=" => Some(BinOp::Sub),
            "*=" => Some(BinOp::Mul),
            "/=" => Some(BinOp::Div),
            "%=" => Some(BinOp::Mod),
            "&=" => Some(BinOp::BitAnd),
            "|=" => Some(BinOp::BitOr),
            "^=" => Some(BinOp::BitXor),
            "<<=" => Some(BinOp::Shl),
            ">>=" => Some(BinOp::Shr),
            "**=" => Some(BinOp::Pow),
            _ => None,
        }
    }

    /// True for `=` and every compound-assignment symbol. Used by the
    /// statement parser's assignment tie-break.
    pub fn is_assign_symbol(lexeme: &str) -> bool {
        lexeme == "=" || BinOp::from_compound(lexeme).is_some()
    }
}

/*
 * ==========================================================================
 * KOALCODE - Code that Clings!
 * ==========================================================================
 *
 * KoalCode is a small dynamically-interpreted scripting language whose
 * only value domain is the 64-bit float. The crate implements the full
 * front-to-back pipeline:
 *
 *   Source → Lexer → Tokens → Parser → AST → Interpreter
 *
 * with call-scoped frame chaining, a name-keyed function table, and a
 * per-function memory-budget policy enforced after each call.
 *
 * --------------------------------------------------------------------------
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

pub mod ast;
pub mod builtins;
pub mod diagnostics;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod span;

pub use error::KoalError;
pub use interpreter::Interpreter;

/// Runs a full program from source text through the whole pipeline.
///
/// Any fatal condition — parse error, unresolved name, unknown function,
/// budget-retry exhaustion — surfaces as the returned error; the host
/// translates it into exit code 1.
pub fn run_source(source: &str) -> Result<(), KoalError> {
    let tokens = lexer::tokenize(source);
    let program = parser::parse(tokens)?;

    let mut interpreter = Interpreter::new();
    interpreter.run(&program)?;

    Ok(())
}

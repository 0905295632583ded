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

/// Token data types produced by the lexer.
pub mod token;

/// The single-pass scanner itself.
pub mod lexer;

/// Re-export the public lexing entry point so callers can use:
/// `crate::lexer::tokenize(...)`
pub use lexer::tokenize;
pub use token::{Token, TokenKind};

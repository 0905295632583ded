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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `parse(tokens)` entry point
pub mod parser;

/// Statement-level parsing:
/// - blocks, if / while / return
/// - `fuktion` declarations, inert `class` declarations
/// - statement-level assignment with compound desugaring
pub mod statements;

/// Expression-level parsing:
/// - the precedence ladder from logical-or down to primary
pub mod expressions;

/// Shared parser helpers:
/// - token matching and lookahead
/// - required-token consumption (fatal on mismatch)
pub mod helpers;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse(...)`
pub use parser::parse;

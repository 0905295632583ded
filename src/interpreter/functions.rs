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

use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::{Expr, Stmt};

/// Name of the memory-budget directive recognized inside function bodies.
/// The directive is stripped at registration, so it is never dispatched
/// as a call at run time.
const MEMLIMIT_DIRECTIVE: &str = "memlimit";

/// What to do when a call's local frame ends up over budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryMode {
    /// Clear every local binding and re-run the body, up to 3 restarts.
    Reset,

    /// Remove oldest-inserted bindings (FIFO) until at or under budget.
    Evict,
}

/// A function's memory budget, computed once at registration and
/// immutable until the function is redeclared.
#[derive(Debug, Clone, Copy)]
pub struct MemoryPolicy {
    /// Budget in bytes.
    pub limit: usize,

    pub mode: MemoryMode,
}

/// A registered user function.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub policy: Option<MemoryPolicy>,
}

/// The name-keyed registry of user functions. Single writer: `register`.
/// Re-declaring a name replaces the previous entry entirely, including
/// its computed policy.
#[derive(Debug, Default)]
pub struct FunctionTable {
    entries: HashMap<String, Rc<FunctionDef>>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers a function, extracting and stripping its memory-budget
    /// directive from the body first.
    pub fn register(&mut self, name: &str, params: Vec<String>, mut body: Vec<Stmt>) {
        let policy = extract_policy(&mut body);

        self.entries.insert(
            name.to_string(),
            Rc::new(FunctionDef {
                params,
                body,
                policy,
            }),
        );
    }

    pub fn get(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.entries.get(name).cloned()
    }
}

/// Scans a function body for its memory-budget directive and, when one
/// is found, strips every such directive call from the scanned scope.
///
/// The scan covers the body's direct statement list and recurses into
/// nested blocks only — never into `if`/`while` branches. The first
/// valid occurrence wins. A directive whose byte count or mode flag is
/// not a number literal records no policy and is left in place, where it
/// later fails as an unknown function if executed.
pub fn extract_policy(body: &mut Vec<Stmt>) -> Option<MemoryPolicy> {
    let policy = scan_policy(body)?;
    strip_directives(body);
    Some(policy)
}

fn scan_policy(stmts: &[Stmt]) -> Option<MemoryPolicy> {
    for stmt in stmts {
        match stmt {
            Stmt::Expression(Expr::Call { name, args }) if name == MEMLIMIT_DIRECTIVE => {
                if let Some(policy) = policy_from_args(args) {
                    return Some(policy);
                }
            }

            Stmt::Block(inner) => {
                if let Some(policy) = scan_policy(inner) {
                    return Some(policy);
                }
            }

            _ => {}
        }
    }

    None
}

/// memlimit(bytes, unit?, mode)
///
/// arg 0: byte count, number literal, must be non-negative
/// arg 1: optional unit string ("kb" / "mb" / "gb", case-insensitive)
/// arg 2: mode flag, number literal — 0 evicts, nonzero resets
fn policy_from_args(args: &[Expr]) -> Option<MemoryPolicy> {
    let bytes = match args.first() {
        Some(Expr::Number(n)) if *n >= 0.0 => *n as usize,
        _ => return None,
    };

    let multiplier = match args.get(1) {
        Some(Expr::Str(unit)) => unit_multiplier(unit),
        _ => 1,
    };

    let mode = match args.get(2) {
        Some(Expr::Number(flag)) => {
            if *flag != 0.0 {
                MemoryMode::Reset
            } else {
                MemoryMode::Evict
            }
        }
        _ => return None,
    };

    Some(MemoryPolicy {
        limit: bytes * multiplier,
        mode,
    })
}

fn unit_multiplier(unit: &str) -> usize {
    if unit.eq_ignore_ascii_case("kb") {
        1024
    } else if unit.eq_ignore_ascii_case("mb") {
        1024 * 1024
    } else if unit.eq_ignore_ascii_case("gb") {
        1024 * 1024 * 1024
    } else {
        1
    }
}

/// Removes every memlimit directive call from the same scope the scan
/// covers: direct statements and nested blocks.
fn strip_directives(stmts: &mut Vec<Stmt>) {
    stmts.retain(|stmt| {
        !matches!(
            stmt,
            Stmt::Expression(Expr::Call { name, .. }) if name == MEMLIMIT_DIRECTIVE
        )
    });

    for stmt in stmts {
        if let Stmt::Block(inner) = stmt {
            strip_directives(inner);
        }
    }
}

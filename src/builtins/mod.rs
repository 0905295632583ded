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

/// Network collaborators: HTTP requests, TCP sockets, ping.
pub mod network;

/// Background-thread demo collaborator.
pub mod threads;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use crate::ast::Expr;
use crate::error::KoalError;
use crate::interpreter::display::format_number;
use crate::interpreter::environment::Frame;
use crate::interpreter::Interpreter;

/// A host operation. Handlers receive the raw, unevaluated argument
/// expressions and the caller's active frame, evaluate arguments at
/// their own discretion, and return one numeric status that becomes the
/// call's value. From the evaluator's perspective a builtin call is a
/// single atomic, blocking step.
pub type BuiltinHandler =
    Arc<dyn Fn(&mut Interpreter, &[Expr], &Rc<RefCell<Frame>>) -> Result<f64, KoalError>>;

/// Name-keyed registry of host operations, consulted by exact match
/// before the user function table.
#[derive(Default)]
pub struct BuiltinRegistry {
    handlers: HashMap<String, BuiltinHandler>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers a handler, replacing any previous one of the same name.
    pub fn define_builtin(&mut self, name: impl Into<String>, handler: BuiltinHandler) {
        self.handlers.insert(name.into(), handler);
    }

    pub fn lookup(&self, name: &str) -> Option<BuiltinHandler> {
        self.handlers.get(name).cloned()
    }
}

/// Installs the default builtins: `print` plus the network and thread
/// collaborators.
pub fn install_defaults(registry: &mut BuiltinRegistry) {
    // ------------------------------------------------------------------
    // Built-in: print(...)
    // ------------------------------------------------------------------
    // String-literal arguments print verbatim; every other argument is
    // evaluated and formatted. Each argument is followed by one space,
    // then a single newline ends the line. Program output goes to
    // stdout; diagnostics never do.
    registry.define_builtin(
        "print",
        Arc::new(|interp, args, frame| {
            for arg in args {
                match arg {
                    Expr::Str(text) => print!("{} ", text),
                    other => {
                        let value = interp.eval_expr(other, frame)?;
                        print!("{} ", format_number(value));
                    }
                }
            }
            println!();
            Ok(0.0)
        }),
    );

    network::install(registry);
    threads::install(registry);
}

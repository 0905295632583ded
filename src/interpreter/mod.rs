/*
 * ==========================================================================
 * KOALCODE - Code that Clings!
 * ==========================================================================
 *
 * Interpreter Entry & Runtime Bootstrap
 * -------------------------------------
 * This module is the primary runtime entrypoint for KoalCode. It is
 * responsible for:
 *
 *  - Owning the function table, builtin registry and collaborator state
 *  - Driving the two-pass top-level execution flow
 *  - Draining detached demo threads once execution finishes
 *
 * All actual evaluation logic is delegated to the following submodules:
 *
 *  - environment.rs → frame chain (scoping model)
 *  - functions.rs   → function table & memory-budget policies
 *  - statements.rs  → statement execution (exec_stmt)
 *  - expressions.rs → expression evaluation (eval_expr)
 *  - calls.rs       → call dispatch & budget enforcement
 *  - display.rs     → number formatting for program output
 *
 * --------------------------------------------------------------------------
 * License:
 * This file is part of the KoalCode programming language project.
 *
 * KoalCode is dual-licensed under the terms of:
 *   - The MIT License
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

pub mod calls;
pub mod display;
pub mod environment;
pub mod expressions;
pub mod functions;
pub mod statements;

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::Stmt;
use crate::builtins::network::NetworkRuntime;
use crate::builtins::threads::ThreadRuntime;
use crate::builtins::BuiltinRegistry;
use crate::error::KoalError;

pub use environment::Frame;
pub use functions::{FunctionTable, MemoryMode, MemoryPolicy};
pub use statements::ExecSignal;

/// The tree-walking evaluator and everything it owns: the function
/// table, the builtin registry, and the collaborator runtimes builtins
/// dispatch into.
///
/// Evaluation is single-threaded and purely synchronous; a builtin call
/// is one atomic blocking step regardless of what background activity
/// the collaborator starts internally.
pub struct Interpreter {
    pub(crate) functions: FunctionTable,
    pub(crate) builtins: BuiltinRegistry,
    pub(crate) network: NetworkRuntime,
    pub(crate) threads: ThreadRuntime,
}

impl Interpreter {
    /// Creates an interpreter with the default builtins installed
    /// (`print` and the network / thread collaborators).
    pub fn new() -> Self {
        let mut builtins = BuiltinRegistry::new();
        crate::builtins::install_defaults(&mut builtins);

        Self {
            functions: FunctionTable::new(),
            builtins,
            network: NetworkRuntime::new(),
            threads: ThreadRuntime::new(),
        }
    }

    /// Registers a host operation under `name`, replacing any previous
    /// handler. Builtins are matched before the user function table, so
    /// scripts can never shadow them.
    pub fn define_builtin(&mut self, name: impl Into<String>, handler: crate::builtins::BuiltinHandler) {
        self.builtins.define_builtin(name, handler);
    }

    /// Executes a full program: creates the global frame, runs the
    /// two-pass top-level flow, then waits for any detached demo threads
    /// so their output is not lost. Returns the global frame.
    pub fn run(&mut self, program: &[Stmt]) -> Result<Rc<RefCell<Frame>>, KoalError> {
        let globals = Frame::root();
        self.run_in(program, &globals)?;
        self.threads.join_all();
        Ok(globals)
    }

    /// Executes a program against an existing frame.
    ///
    /// Pass one registers every top-level function declaration so a call
    /// may precede its declaration textually. Pass two runs the
    /// remaining statements in order against the single global frame; a
    /// top-level `return` ends the program.
    pub fn run_in(
        &mut self,
        program: &[Stmt],
        frame: &Rc<RefCell<Frame>>,
    ) -> Result<(), KoalError> {
        for stmt in program {
            if let Stmt::FuncDecl { name, params, body } = stmt {
                self.functions.register(name, params.clone(), body.clone());
            }
        }

        for stmt in program {
            if matches!(stmt, Stmt::FuncDecl { .. }) {
                continue;
            }
            if let ExecSignal::Return(_) = self.exec_stmt(stmt, frame)? {
                break;
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

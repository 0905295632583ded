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

use crate::ast::Expr;
use crate::error::KoalError;
use crate::interpreter::environment::Frame;
use crate::interpreter::functions::{MemoryMode, MemoryPolicy};
use crate::interpreter::statements::ExecSignal;
use crate::interpreter::Interpreter;

/// How many times a reset-mode function may restart before the run is
/// aborted. The initial execution does not count as a restart.
const MAX_RESTARTS: u32 = 3;

impl Interpreter {
    /// Dispatches a call by name.
    ///
    /// Builtins are matched first, so user functions can never shadow
    /// them. Builtin handlers receive the raw argument expressions and
    /// evaluate them at their own discretion. An unknown name is fatal.
    pub fn call_function(
        &mut self,
        name: &str,
        args: &[Expr],
        frame: &Rc<RefCell<Frame>>,
    ) -> Result<f64, KoalError> {
        if let Some(handler) = self.builtins.lookup(name) {
            return handler(self, args, frame);
        }

        let Some(func) = self.functions.get(name) else {
            return Err(KoalError::runtime_error(format!(
                "unknown function '{}'",
                name
            )));
        };

        // Arguments are evaluated in the caller's frame, one per
        // declared parameter. Missing arguments are zero-filled; excess
        // arguments are never evaluated.
        let mut arg_values = vec![0.0; func.params.len()];
        for (i, slot) in arg_values.iter_mut().enumerate() {
            if let Some(arg) = args.get(i) {
                *slot = self.eval_expr(arg, frame)?;
            }
        }

        // The call frame chains to the caller's currently active frame
        // and starts empty, seeded only with the bound parameters.
        let local = Frame::child(frame.clone());
        for (param, value) in func.params.iter().zip(&arg_values) {
            local.borrow_mut().set(param, *value);
        }

        let mut restarts = 0u32;

        loop {
            let mut result = 0.0;

            for stmt in &func.body {
                if let ExecSignal::Return(value) = self.exec_stmt(stmt, &local)? {
                    result = value;
                    break;
                }
            }

            // Budget enforcement runs once the body has finished and the
            // return value for this call is already fixed.
            if let Some(policy) = func.policy {
                if local.borrow().approx_size() > policy.limit {
                    match policy.mode {
                        MemoryMode::Reset => {
                            restarts += 1;
                            if restarts > MAX_RESTARTS {
                                return Err(KoalError::runtime_error(format!(
                                    "memory limit exceeded after {} restarts in function '{}'",
                                    MAX_RESTARTS, name
                                )));
                            }
                            local.borrow_mut().clear();
                            continue;
                        }
                        MemoryMode::Evict => {
                            evict_to_budget(&local, policy);
                        }
                    }
                }
            }

            return Ok(result);
        }
    }
}

/// Removes oldest-inserted bindings until the frame fits its budget.
/// Only shrinks the frame about to be discarded; the call's result is
/// already fixed.
fn evict_to_budget(frame: &Rc<RefCell<Frame>>, policy: MemoryPolicy) {
    let mut frame = frame.borrow_mut();
    while frame.approx_size() > policy.limit {
        if !frame.evict_oldest() {
            break;
        }
    }
}

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

use std::sync::Arc;
use std::thread::JoinHandle;

use crate::ast::Expr;
use crate::builtins::BuiltinRegistry;

/// Tracks demo threads spawned by scripts so the interpreter can wait
/// for them after top-level execution, keeping their output from being
/// cut off when the process exits.
///
/// The threads run detached from the evaluator's point of view: the
/// `thread.start` call returns immediately and evaluation continues on
/// the single interpreter thread.
pub struct ThreadRuntime {
    handles: Vec<JoinHandle<()>>,
}

impl ThreadRuntime {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// Waits for every demo thread spawned so far.
    pub fn join_all(&mut self) {
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}

impl Default for ThreadRuntime {
    fn default() -> Self {
        Self::new()
    }
}

pub fn install(registry: &mut BuiltinRegistry) {
    // ------------------------------------------------------------------
    // thread.start(name)
    // ------------------------------------------------------------------
    // Demo helper: spawns a named background thread that prints three
    // counter lines and exits.
    registry.define_builtin(
        "thread.start",
        Arc::new(|interp, args, _frame| {
            let name = match args.first() {
                Some(Expr::Str(s)) => s.clone(),
                _ => {
                    eprintln!("thread.start: name must be a string");
                    return Ok(0.0);
                }
            };

            let handle = std::thread::spawn(move || {
                println!("Thread {} started", name);
                for i in 0..3 {
                    println!("Thread {}: counter {}", name, i);
                }
                println!("Thread {} finished", name);
            });

            interp.threads.handles.push(handle);
            Ok(1.0)
        }),
    );
}

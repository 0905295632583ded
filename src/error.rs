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

use thiserror::Error;

use crate::span::Span;

/// The single fatal-error channel of the interpreter.
///
/// KoalCode has exactly two error severities: recoverable lexical
/// diagnostics (printed to stderr, lexing continues) and fatal errors.
/// Every fatal condition — parse error, unresolved variable, unknown
/// function, budget-retry exhaustion — is a `KoalError` propagated up to
/// the host, which translates it into exit code 1. There is no catch or
/// recover construct in the language.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct KoalError {
    /// Stable error code (E_SYNTAX, E_REFERENCE, ...)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl KoalError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// Syntax error (during parsing)
    pub fn syntax_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_SYNTAX", message, span)
    }

    /// Runtime error (during evaluation)
    pub fn runtime_error(message: impl Into<String>) -> Self {
        Self::new("E_RUNTIME", message, Span::default())
    }

    /// Reference error (undefined variable)
    pub fn reference_error(message: impl Into<String>) -> Self {
        Self::new("E_REFERENCE", message, Span::default())
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

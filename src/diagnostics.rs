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

use crate::error::KoalError;
use crate::span::Span;

/// Renders human-friendly, compiler-style diagnostics for fatal errors.
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified for KoalCode and designed to remain readable without color.
/// Diagnostics always go to stderr; stdout is reserved for program
/// output.
pub struct DiagnosticPrinter {
    /// Full source code of the file being interpreted.
    source: String,

    /// Name of the source file (e.g. `main.kc`), display only.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    ///
    /// Errors carrying a known source span are rendered with the offending
    /// line and a caret:
    ///
    /// ```text
    /// error[E_SYNTAX]: Expected ')' after argument list
    ///   --> demo.kc:3:12
    ///    |
    ///  3 | print(1, 2
    ///    |            ^
    /// ```
    ///
    /// Runtime errors with no surviving source position print the header
    /// only.
    pub fn print(&self, error: &KoalError) {
        if !error.span.is_known() {
            eprintln!("error[{}]: {}", error.code, error.message);
            if let Some(help) = &error.help {
                eprintln!("help: {}", help);
            }
            return;
        }

        let Span { line, column } = error.span;

        let lines: Vec<&str> = self.source.lines().collect();
        let src_line = lines.get(line.saturating_sub(1)).unwrap_or(&"");

        eprintln!(
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code,
            error.message,
            self.file_name,
            line,
            column + 1
        );

        eprintln!("   |");
        eprintln!("{:>3} | {}", line, src_line);

        let mut underline = String::new();
        for _ in 0..column {
            underline.push(' ');
        }
        underline.push('^');

        eprintln!("   | {}", underline);

        if let Some(help) = &error.help {
            eprintln!("\nhelp: {}", help);
        }
    }
}

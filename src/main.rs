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

use std::env;
use std::fs;
use std::process;

use koalcode::diagnostics::DiagnosticPrinter;

fn main() {
    let mut args = env::args().skip(1);

    let path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: koalcode <script.kc>");
            process::exit(1);
        }
    };

    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error reading '{}': {}", path, err);
            process::exit(1);
        }
    };

    if let Err(error) = koalcode::run_source(&source) {
        DiagnosticPrinter::new(&path, &source).print(&error);
        process::exit(1);
    }
}

//! Process-boundary coverage: exit codes, the stdout/stderr channel
//! split, and `print` output formatting, driven through the real binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Writes a script into a temp dir and returns its path.
fn script(dir: &TempDir, source: &str) -> PathBuf {
    let path = dir.path().join("script.kc");
    fs::write(&path, source).expect("write script");
    path
}

fn koalcode() -> Command {
    Command::cargo_bin("koalcode").expect("binary should build")
}

#[test]
fn prints_to_stdout_and_exits_zero() {
    let dir = TempDir::new().expect("tempdir");
    let path = script(&dir, "print(\"sum:\", 2 + 3 * 4)");

    koalcode()
        .arg(&path)
        .assert()
        .success()
        .stdout("sum: 14 \n")
        .stderr("");
}

#[test]
fn print_interleaves_strings_and_values() {
    let dir = TempDir::new().expect("tempdir");
    let path = script(&dir, "x = 512 print(\"x\", \"is\", x, \"now\")");

    koalcode()
        .arg(&path)
        .assert()
        .success()
        .stdout("x is 512 now \n");
}

#[test]
fn print_formats_numbers_compactly() {
    let dir = TempDir::new().expect("tempdir");
    let path = script(&dir, "print(1 / 3) print(0.5) print(2 ** 64)");

    koalcode()
        .arg(&path)
        .assert()
        .success()
        .stdout("0.333333 \n0.5 \n1.84467e+19 \n");
}

#[test]
fn print_with_no_arguments_emits_a_blank_line() {
    let dir = TempDir::new().expect("tempdir");
    let path = script(&dir, "print()");

    koalcode().arg(&path).assert().success().stdout("\n");
}

#[test]
fn parse_error_exits_one_with_diagnostic_on_stderr() {
    let dir = TempDir::new().expect("tempdir");
    let path = script(&dir, "print(1, 2");

    koalcode()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("error[E_SYNTAX]"));
}

#[test]
fn undefined_variable_exits_one() {
    let dir = TempDir::new().expect("tempdir");
    let path = script(&dir, "x = missing + 1");

    koalcode()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("undefined variable 'missing'"));
}

#[test]
fn unknown_function_exits_one() {
    let dir = TempDir::new().expect("tempdir");
    let path = script(&dir, "nothing_here()");

    koalcode()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown function 'nothing_here'"));
}

#[test]
fn budget_retry_exhaustion_exits_one() {
    let dir = TempDir::new().expect("tempdir");
    let path = script(
        &dir,
        "fuktion hog() {
             memlimit(10, \"b\", 1)
             a = 1
             b = 2
         }
         hog()",
    );

    koalcode()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "after 3 restarts in function 'hog'",
        ));
}

#[test]
fn lexical_diagnostics_are_recoverable() {
    // The stray `@` is diagnosed on stderr but the program still runs
    // to completion and exits 0.
    let dir = TempDir::new().expect("tempdir");
    let path = script(&dir, "x = 1 @ print(x)");

    koalcode()
        .arg(&path)
        .assert()
        .success()
        .stdout("1 \n")
        .stderr(predicate::str::contains("lexical error near '@'"));
}

#[test]
fn missing_file_argument_shows_usage() {
    koalcode()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unreadable_file_exits_one() {
    koalcode()
        .arg("definitely/not/a/real/file.kc")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error reading"));
}

//! Memory-budget policy coverage: directive extraction and stripping,
//! evict-mode FIFO behavior, the reset-mode restart ceiling, and policy
//! replacement on redeclaration.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use koalcode::interpreter::Frame;
use koalcode::lexer::tokenize;
use koalcode::parser::parse;
use koalcode::{Interpreter, KoalError};

fn run_program(source: &str) -> Rc<RefCell<Frame>> {
    let program = parse(tokenize(source)).expect("program should parse");
    let mut interpreter = Interpreter::new();
    interpreter.run(&program).expect("program should run")
}

fn run_err(source: &str) -> KoalError {
    let program = parse(tokenize(source)).expect("program should parse");
    let mut interpreter = Interpreter::new();
    interpreter
        .run(&program)
        .expect_err("program should fail fatally")
}

fn global(frame: &Rc<RefCell<Frame>>, name: &str) -> f64 {
    frame
        .borrow()
        .get(name)
        .unwrap_or_else(|| panic!("expected global binding '{}'", name))
}

#[test]
fn evict_mode_never_changes_the_calls_result() {
    // Three bindings of 11 bytes each (name "a1" + NUL + 8-byte value)
    // total 33, over the 30-byte budget, so the oldest is evicted after
    // the return value is fixed. The result is unaffected.
    let globals = run_program(
        "fuktion build() {
             memlimit(30, \"b\", 0)
             a1 = 1
             a2 = 2
             a3 = 3
             return a1 + a2 + a3
         }
         r = build()",
    );
    assert_eq!(global(&globals, "r"), 6.0);
}

#[test]
fn eviction_history_never_carries_across_calls() {
    // Each call starts from an empty frame seeded only with parameters,
    // so a second call behaves identically to the first.
    let globals = run_program(
        "fuktion build() {
             memlimit(30, \"b\", 0)
             a1 = 1
             a2 = 2
             a3 = 3
             return a1 + a2 + a3
         }
         first = build()
         second = build()",
    );
    assert_eq!(global(&globals, "first"), 6.0);
    assert_eq!(global(&globals, "second"), 6.0);
}

#[test]
fn reset_mode_fails_after_exactly_three_restarts() {
    // The body deterministically lands over the 10-byte budget, so
    // reset mode clears and re-runs it three times, then aborts naming
    // the function.
    let err = run_err(
        "fuktion hog() {
             memlimit(10, \"b\", 1)
             a = 1
             b = 2
         }
         hog()",
    );
    assert_eq!(err.code, "E_RUNTIME");
    assert!(
        err.message
            .contains("after 3 restarts in function 'hog'"),
        "unexpected message: {}",
        err.message
    );
}

#[test]
fn reset_mode_under_budget_completes_normally() {
    let globals = run_program(
        "fuktion tidy() {
             memlimit(1, \"kb\", 1)
             a = 1
             b = 2
             return a + b
         }
         r = tidy()",
    );
    assert_eq!(global(&globals, "r"), 3.0);
}

#[test]
fn unit_strings_scale_the_budget() {
    // 1kb = 1024 bytes easily holds ten short bindings; with a raw
    // 10-byte budget the same body evicts. Both calls still return the
    // correctly computed value.
    let globals = run_program(
        "fuktion roomy() {
             memlimit(1, \"kb\", 0)
             i = 0
             total = 0
             while (i < 10) {
                 i += 1
                 total += i
             }
             return total
         }
         fuktion tight() {
             memlimit(10, \"b\", 0)
             i = 0
             total = 0
             while (i < 10) {
                 i += 1
                 total += i
             }
             return total
         }
         a = roomy()
         b = tight()",
    );
    assert_eq!(global(&globals, "a"), 55.0);
    assert_eq!(global(&globals, "b"), 55.0);
}

#[test]
fn directive_is_stripped_from_the_executed_body() {
    // If the directive survived registration it would fail at run time
    // as an unknown function; a clean run proves it was stripped.
    let globals = run_program(
        "fuktion f() {
             memlimit(1, \"kb\", 0)
             return 1
         }
         r = f()",
    );
    assert_eq!(global(&globals, "r"), 1.0);
}

#[test]
fn directive_in_a_nested_block_is_found_and_stripped() {
    let err = run_err(
        "fuktion hog() {
             { memlimit(10, \"b\", 1) }
             a = 1
             b = 2
         }
         hog()",
    );
    assert!(err.message.contains("after 3 restarts in function 'hog'"));
}

#[test]
fn directive_without_a_mode_flag_records_no_policy() {
    // An incomplete directive is not recognized and not stripped, so
    // executing the body hits it as an unknown function.
    let err = run_err(
        "fuktion bad() {
             memlimit(10)
             return 1
         }
         bad()",
    );
    assert_eq!(err.code, "E_RUNTIME");
    assert!(err.message.contains("unknown function 'memlimit'"));
}

#[test]
fn first_directive_occurrence_wins() {
    // The second directive would reset; the first (evict) governs, so
    // the over-budget body completes instead of aborting.
    let globals = run_program(
        "fuktion build() {
             memlimit(10, \"b\", 0)
             memlimit(10, \"b\", 1)
             a1 = 1
             a2 = 2
             return a1 + a2
         }
         r = build()",
    );
    assert_eq!(global(&globals, "r"), 3.0);
}

#[test]
fn redeclaration_replaces_the_policy() {
    // The first declaration would abort in reset mode. The redeclared
    // body carries no directive, so the call completes.
    let globals = run_program(
        "fuktion hog() {
             memlimit(10, \"b\", 1)
             a = 1
             b = 2
         }
         if (1) {
             fuktion hog() {
                 a = 1
                 b = 2
                 return 5
             }
         }
         r = hog()",
    );
    assert_eq!(global(&globals, "r"), 5.0);
}

#[test]
fn unit_comparison_is_case_insensitive() {
    let globals = run_program(
        "fuktion f() {
             memlimit(1, \"KB\", 1)
             a = 1
             b = 2
             return a + b
         }
         r = f()",
    );
    assert_eq!(global(&globals, "r"), 3.0);
}

#[test]
fn parameters_count_toward_the_frame_size() {
    // Parameter `padding_name` alone is 12 + 1 + 8 = 21 bytes, over the
    // 15-byte budget, so evict mode trims it after the value returns.
    let globals = run_program(
        "fuktion f(padding_name) {
             memlimit(15, \"b\", 0)
             return padding_name
         }
         r = f(9)",
    );
    assert_eq!(global(&globals, "r"), 9.0);
}

//! Parser coverage: precedence and associativity, the statement-level
//! assignment tie-break, compound-assignment desugaring, control-flow
//! forms, and fatal syntax errors.

use pretty_assertions::assert_eq;

use koalcode::ast::{BinOp, Expr, Stmt, UnOp};
use koalcode::lexer::tokenize;
use koalcode::parser::parse;

fn parse_source(source: &str) -> Vec<Stmt> {
    parse(tokenize(source)).expect("program should parse")
}

/// Parses a source expected to be a single expression statement.
fn parse_expr(source: &str) -> Expr {
    let mut stmts = parse_source(source);
    assert_eq!(stmts.len(), 1, "expected one statement");
    match stmts.remove(0) {
        Stmt::Expression(expr) => expr,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

fn n(value: f64) -> Expr {
    Expr::Number(value)
}

fn var(name: &str) -> Expr {
    Expr::Var(name.to_string())
}

fn bin(op: BinOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn un(op: UnOp, operand: Expr) -> Expr {
    Expr::Unary {
        op,
        operand: Box::new(operand),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse_expr("2 + 3 * 4"),
        bin(BinOp::Add, n(2.0), bin(BinOp::Mul, n(3.0), n(4.0)))
    );
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(
        parse_expr("(2 + 3) * 4"),
        bin(BinOp::Mul, bin(BinOp::Add, n(2.0), n(3.0)), n(4.0))
    );
}

#[test]
fn exponent_is_right_associative() {
    assert_eq!(
        parse_expr("2 ** 3 ** 2"),
        bin(BinOp::Pow, n(2.0), bin(BinOp::Pow, n(3.0), n(2.0)))
    );
}

#[test]
fn unary_binds_tighter_than_exponent() {
    assert_eq!(
        parse_expr("-2 ** 2"),
        bin(BinOp::Pow, un(UnOp::Neg, n(2.0)), n(2.0))
    );
}

#[test]
fn unary_plus_resolves_to_negation() {
    assert_eq!(parse_expr("+5"), un(UnOp::Neg, n(5.0)));
}

#[test]
fn keyword_operators_are_symbol_synonyms() {
    assert_eq!(
        parse_expr("1 and 0"),
        bin(BinOp::LogicalAnd, n(1.0), n(0.0))
    );
    assert_eq!(parse_expr("1 or 0"), bin(BinOp::LogicalOr, n(1.0), n(0.0)));
    assert_eq!(parse_expr("not 1"), un(UnOp::Not, n(1.0)));
    assert_eq!(parse_expr("1 ~= 2"), bin(BinOp::Ne, n(1.0), n(2.0)));
}

#[test]
fn logical_binds_looser_than_comparison() {
    assert_eq!(
        parse_expr("1 < 2 && 3 > 2"),
        bin(
            BinOp::LogicalAnd,
            bin(BinOp::Lt, n(1.0), n(2.0)),
            bin(BinOp::Gt, n(3.0), n(2.0))
        )
    );
}

#[test]
fn shift_sits_between_comparison_and_additive() {
    assert_eq!(
        parse_expr("1 << 2 + 3"),
        bin(BinOp::Shl, n(1.0), bin(BinOp::Add, n(2.0), n(3.0)))
    );
    assert_eq!(
        parse_expr("1 < 2 << 3"),
        bin(BinOp::Lt, n(1.0), bin(BinOp::Shl, n(2.0), n(3.0)))
    );
}

#[test]
fn assignment_parses_at_statement_level() {
    assert_eq!(
        parse_expr("x = 1"),
        bin(BinOp::Assign, var("x"), n(1.0))
    );
}

#[test]
fn compound_assignment_desugars_at_parse_time() {
    assert_eq!(
        parse_expr("x += 2"),
        bin(
            BinOp::Assign,
            var("x"),
            bin(BinOp::Add, var("x"), n(2.0))
        )
    );
    assert_eq!(
        parse_expr("x <<= 1"),
        bin(
            BinOp::Assign,
            var("x"),
            bin(BinOp::Shl, var("x"), n(1.0))
        )
    );
    assert_eq!(
        parse_expr("x **= 2"),
        bin(
            BinOp::Assign,
            var("x"),
            bin(BinOp::Pow, var("x"), n(2.0))
        )
    );
}

#[test]
fn leading_identifier_without_assign_symbol_is_an_expression() {
    // `x == 1` must not be mistaken for an assignment.
    assert_eq!(parse_expr("x == 1"), bin(BinOp::Eq, var("x"), n(1.0)));

    // A bare call is an expression statement, never a failed assignment.
    assert_eq!(
        parse_expr("foo(1, 2)"),
        Expr::Call {
            name: "foo".to_string(),
            args: vec![n(1.0), n(2.0)],
        }
    );
}

#[test]
fn call_with_no_arguments() {
    assert_eq!(
        parse_expr("ready()"),
        Expr::Call {
            name: "ready".to_string(),
            args: vec![],
        }
    );
}

#[test]
fn function_declaration_collects_parameters() {
    let stmts = parse_source("fuktion add(a, b) { return a + b }");
    assert_eq!(
        stmts,
        vec![Stmt::FuncDecl {
            name: "add".to_string(),
            params: vec!["a".to_string(), "b".to_string()],
            body: vec![Stmt::Return(Some(bin(BinOp::Add, var("a"), var("b"))))],
        }]
    );
}

#[test]
fn return_without_value() {
    let stmts = parse_source("fuktion f() { return }");
    assert_eq!(
        stmts,
        vec![Stmt::FuncDecl {
            name: "f".to_string(),
            params: vec![],
            body: vec![Stmt::Return(None)],
        }]
    );
}

#[test]
fn while_condition_parens_are_optional() {
    let with_parens = parse_source("while (x) { }");
    let without = parse_source("while x { }");
    assert_eq!(with_parens, without);
}

#[test]
fn while_accepts_a_single_statement_body() {
    let stmts = parse_source("while x x = 0");
    assert_eq!(
        stmts,
        vec![Stmt::While {
            condition: var("x"),
            body: Box::new(Stmt::Expression(bin(BinOp::Assign, var("x"), n(0.0)))),
        }]
    );
}

#[test]
fn else_if_chains_nest_through_the_else_branch() {
    let stmts = parse_source("if (a) { } else if (b) { } else { }");
    assert_eq!(
        stmts,
        vec![Stmt::If {
            condition: var("a"),
            then_branch: Box::new(Stmt::Block(vec![])),
            else_branch: Some(Box::new(Stmt::If {
                condition: var("b"),
                then_branch: Box::new(Stmt::Block(vec![])),
                else_branch: Some(Box::new(Stmt::Block(vec![]))),
            })),
        }]
    );
}

#[test]
fn class_body_is_consumed_with_brace_balance_and_discarded() {
    let stmts = parse_source("class Zoo { fuktion noise() { } } x = 1");
    assert_eq!(stmts.len(), 2);
    assert_eq!(
        stmts[0],
        Stmt::ClassDecl {
            name: "Zoo".to_string()
        }
    );
}

#[test]
fn statement_separators_are_optional() {
    let with_semis = parse_source("x = 1; y = 2;");
    let without = parse_source("x = 1 y = 2");
    assert_eq!(with_semis, without);
}

#[test]
fn missing_closing_paren_is_fatal() {
    let err = parse(tokenize("(1 + 2")).expect_err("should fail");
    assert_eq!(err.code, "E_SYNTAX");
}

#[test]
fn missing_argument_paren_is_fatal() {
    let err = parse(tokenize("foo(1, 2")).expect_err("should fail");
    assert_eq!(err.code, "E_SYNTAX");
}

#[test]
fn unclosed_block_is_fatal() {
    let err = parse(tokenize("{ x = 1")).expect_err("should fail");
    assert_eq!(err.code, "E_SYNTAX");
}

#[test]
fn function_declaration_requires_a_block_body() {
    let err = parse(tokenize("fuktion f() return 1")).expect_err("should fail");
    assert_eq!(err.code, "E_SYNTAX");
}

#[test]
fn syntax_errors_carry_source_positions() {
    let err = parse(tokenize("x = ")).expect_err("should fail");
    assert!(err.span.is_known());
}

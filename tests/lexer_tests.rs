//! Lexer coverage: token classification, dotted identifiers, comments,
//! longest-match operator symbols, and the recoverable
//! unrecognized-character path.

use pretty_assertions::assert_eq;

use koalcode::lexer::{tokenize, TokenKind};

/// Token kinds excluding the trailing EOF.
fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| *k != TokenKind::Eof)
        .collect()
}

/// Token lexemes excluding the trailing EOF.
fn lexemes(source: &str) -> Vec<String> {
    tokenize(source)
        .into_iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| t.lexeme)
        .collect()
}

#[test]
fn classifies_basic_tokens() {
    assert_eq!(
        kinds("x = 1 + 2.5"),
        vec![
            TokenKind::Identifier,
            TokenKind::Symbol,
            TokenKind::Number,
            TokenKind::Symbol,
            TokenKind::Number,
        ]
    );
}

#[test]
fn stream_always_ends_with_one_eof() {
    let tokens = tokenize("1 + 2");
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
        1
    );

    let empty = tokenize("");
    assert_eq!(empty.len(), 1);
    assert_eq!(empty[0].kind, TokenKind::Eof);
}

#[test]
fn number_values_are_parsed() {
    let tokens = tokenize("42 3.14 .5 7.");
    let nums: Vec<f64> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Number)
        .map(|t| t.num)
        .collect();
    assert_eq!(nums, vec![42.0, 3.14, 0.5, 7.0]);
}

#[test]
fn dotted_names_are_single_identifiers() {
    assert_eq!(
        lexemes("network.ping(\"localhost\")"),
        vec!["network.ping", "(", "localhost", ")"]
    );
}

#[test]
fn line_comments_run_to_end_of_line() {
    assert_eq!(lexemes("1 -- ignored to eol\n2"), vec!["1", "2"]);
}

#[test]
fn double_dash_after_expression_starts_a_comment() {
    // `5--3` is `5` followed by a comment, not subtraction of a negative.
    assert_eq!(lexemes("5--3"), vec!["5"]);
}

#[test]
fn multi_character_symbols_use_longest_match() {
    assert_eq!(lexemes("a <<= 1"), vec!["a", "<<=", "1"]);
    assert_eq!(lexemes("a >>= 1"), vec!["a", ">>=", "1"]);
    assert_eq!(lexemes("a **= 2"), vec!["a", "**=", "2"]);
    assert_eq!(lexemes("a << 1"), vec!["a", "<<", "1"]);
    assert_eq!(lexemes("a ** 2"), vec!["a", "**", "2"]);
    assert_eq!(lexemes("a <= b"), vec!["a", "<=", "b"]);
    assert_eq!(lexemes("a < b"), vec!["a", "<", "b"]);
    assert_eq!(lexemes("a ~= b"), vec!["a", "~=", "b"]);
}

#[test]
fn string_literals_capture_contents_without_quotes() {
    let tokens = tokenize("\"hello there\"");
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "hello there");
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    let tokens = tokenize("\"no closing quote");
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "no closing quote");
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn unrecognized_character_is_skipped_and_lexing_continues() {
    // `@` is not part of the language; it is diagnosed and dropped.
    assert_eq!(lexemes("1 @ 2"), vec!["1", "2"]);
}

#[test]
fn identifiers_start_with_letter_or_underscore() {
    assert_eq!(
        kinds("_private value9"),
        vec![TokenKind::Identifier, TokenKind::Identifier]
    );
}

#[test]
fn tokens_carry_line_numbers() {
    let tokens = tokenize("1\n2\n3");
    let lines: Vec<usize> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Number)
        .map(|t| t.span.line)
        .collect();
    assert_eq!(lines, vec![1, 2, 3]);
}

//! Integration tests for the full validate-then-tokenize pipeline.
//!
//! These tests drive the crate the way a front-end would: raw statement
//! text in, either a token table or a single structured error out.

use lexcheck::lexer::lexer::{tokenize_strict, GrammarTable};
use lexcheck::lexer::tokens::TokenKind;
use lexcheck::{analyze, tokenize, validate};

#[test]
fn test_analyze_multi_line_program() {
    let source = "x := 3.14 + (y - 2);\nresult := x * 2e10;";
    let tokens = analyze(source).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Float,
            TokenKind::Add,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::Sub,
            TokenKind::Float,
            TokenKind::RParen,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::Mul,
            TokenKind::Float,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_analyze_stops_on_validation_error() {
    let error = analyze("x := 1..5;").unwrap_err();

    assert_eq!(error.matched_text, "..");
    assert_eq!(error.description, "two dots in a number");
}

#[test]
fn test_analyze_empty_parentheses() {
    let error = analyze("y := (   );").unwrap_err();

    assert_eq!(error.matched_text, "(   )");
    assert_eq!(error.description, "empty parentheses");
}

#[test]
fn test_analyze_missing_semicolon() {
    let error = analyze("a := 5\n").unwrap_err();

    assert_eq!(error.description, "missing semicolon");
}

#[test]
fn test_analyze_discards_comment() {
    let tokens = analyze("x := 1; #done").unwrap();

    assert_eq!(tokens.len(), 4);
    assert!(tokens.iter().all(|t| !t.kind.is_trivia()));
}

#[test]
fn test_validated_text_yields_no_trivia_tokens() {
    let source = "a := 5 + 3;\t#note";
    assert!(validate(source).is_ok());

    let tokens = tokenize(source);
    assert!(tokens.iter().all(|t| !t.kind.is_trivia()));
}

#[test]
fn test_pipeline_is_deterministic() {
    let source = "x := 3.14 + (y - 2);";
    assert_eq!(analyze(source).unwrap(), analyze(source).unwrap());
}

#[test]
fn test_strict_lexing_agrees_with_default_on_valid_input() {
    let source = "x := 3.14 + (y - 2);";
    let grammar = GrammarTable::new();

    assert_eq!(tokenize_strict(source, &grammar).unwrap(), tokenize(source));
}

#[test]
fn test_strict_lexing_reports_stray_symbol() {
    let grammar = GrammarTable::new();
    let error = tokenize_strict("a := 5 @ 3;", &grammar).unwrap_err();

    assert_eq!(error.character, '@');
    assert_eq!(error.position, 7);
}

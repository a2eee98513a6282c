#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use calc_lexer::tokenize;
use pretty_assertions::assert_eq;

use super::*;

fn sexpr(source: &str) -> String {
    build_ast(tokenize(source).unwrap(), &ReduceConfig::default())
        .unwrap()
        .to_string()
}

#[test]
fn test_display_leaf() {
    assert_eq!(sexpr("42"), "42");
}

#[test]
fn test_display_nested() {
    assert_eq!(sexpr("(1 + 2) * 2"), "(* (+ 1 2) 2)");
}

#[test]
fn test_display_negated_literal_is_signed() {
    assert_eq!(sexpr("2 * -3"), "(* 2 -3)");
}

#[test]
fn test_display_sign_on_composite_is_dropped() {
    assert_eq!(sexpr("-(1 + 2)"), "(+ 1 2)");
}

#[test]
fn test_display_long_chain() {
    let line = vec!["1"; 20_000].join(" * ");
    let text = sexpr(&line);
    assert!(text.starts_with("(* (* (* "));
    assert!(text.ends_with(" 1) 1) 1)"));
    assert_eq!(text.matches('(').count(), 19_999);
}

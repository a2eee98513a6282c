#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use calc_ir::{Span, TokenKind};
use calc_lexer::tokenize;
use calc_parse::{build_ast, ReduceConfig};
use pretty_assertions::assert_eq;

use super::*;

fn ast(source: &str) -> Ast {
    build_ast(tokenize(source).unwrap(), &ReduceConfig::default()).unwrap()
}

fn eval(source: &str) -> Result<u64, EvalError> {
    evaluate(&ast(source))
}

#[test]
fn test_basic_operators() {
    assert_eq!(eval("1 + 1"), Ok(2));
    assert_eq!(eval("1 - 1"), Ok(0));
    assert_eq!(eval("2 * 2"), Ok(4));
    assert_eq!(eval("4 / 2"), Ok(2));
    assert_eq!(eval("4 % 2"), Ok(0));
    assert_eq!(eval("1 < 16"), Ok(65536));
    assert_eq!(eval("128 > 1"), Ok(64));
    assert_eq!(eval("2 ^ 8"), Ok(256));
}

#[test]
fn test_grouping() {
    assert_eq!(eval("(1 + 2) * 2"), Ok(6));
    assert_eq!(eval("(1 + 2) - 3"), Ok(0));
}

#[test]
fn test_wraparound_and_signed_view() {
    let value = eval("0 - 5").unwrap();
    assert_eq!(value, u64::MAX - 4);
    assert_eq!(as_signed(value), -5);
}

#[test]
fn test_sign_on_composite_is_dropped() {
    assert_eq!(eval("-(1 + 2)"), Ok(3));
    assert_eq!(eval("-2 + 3"), Ok(5));
    assert_eq!(eval("-1 * 1"), Ok(1));
    assert_eq!(eval("1 - -1 + 1").map(as_signed), Ok(-1));
    assert_eq!(eval("- (4 * 2)"), Ok(8));
}

#[test]
fn test_negated_leaf() {
    assert_eq!(eval("2 * -3").map(as_signed), Ok(-6));
    assert_eq!(eval("1 - -2"), Ok(3));
}

#[test]
fn test_division_by_zero_points_at_divisor() {
    assert_eq!(
        eval("4 / (2 - 2)"),
        Err(EvalError::DivisionByZero {
            span: Span::new(4, 11),
        })
    );
    assert!(matches!(eval("4 % 0"), Err(EvalError::ModuloByZero { .. })));
}

#[test]
fn test_shift_out_of_range() {
    assert!(matches!(
        eval("1 < 64"),
        Err(EvalError::ShiftOutOfRange { amount: 64, .. })
    ));
}

#[test]
fn test_diagnostic_codes() {
    use calc_diagnostic::ErrorCode;

    assert_eq!(eval("1 / 0").unwrap_err().to_diagnostic().code, ErrorCode::E6001);
    assert_eq!(eval("1 % 0").unwrap_err().to_diagnostic().code, ErrorCode::E6002);
    assert_eq!(eval("1 > 99").unwrap_err().to_diagnostic().code, ErrorCode::E6003);
}

#[test]
fn test_malformed_tree_is_internal() {
    let mut tree = ast("1 + 2");
    tree.arena.get_mut(tree.root).kind = TokenKind::ParenClose;
    let diag = evaluate(&tree).unwrap_err().to_diagnostic();
    assert!(diag.is_internal());

    let mut tree = ast("1 + 2");
    tree.arena.get_mut(tree.root).right = None;
    assert_eq!(
        evaluate(&tree),
        Err(EvalError::MissingOperand {
            kind: TokenKind::Add,
            span: Span::new(0, 5),
        })
    );
}

#[test]
fn test_idempotent() {
    let tree = ast("(3 + 4) * 5 - 6");
    assert_eq!(evaluate(&tree), evaluate(&tree));
}

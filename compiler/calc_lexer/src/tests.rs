#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use calc_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .iter()
        .map(|(_, token)| token.kind)
        .collect()
}

#[test]
fn test_operators_map_one_to_one() {
    assert_eq!(
        kinds("+ - * / < > ^ % ( )"),
        vec![
            TokenKind::Add,
            TokenKind::Sub,
            TokenKind::Mul,
            TokenKind::Div,
            TokenKind::ShiftLeft,
            TokenKind::ShiftRight,
            TokenKind::Power,
            TokenKind::Mod,
            TokenKind::ParenOpen,
            TokenKind::ParenClose,
        ]
    );
}

#[test]
fn test_digit_run_is_one_value() {
    let arena = tokenize("1234+5").unwrap();
    let tokens: Vec<_> = arena.iter().map(|(_, t)| (t.kind, t.value, t.span)).collect();
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Value, 1234, Span::new(0, 4)),
            (TokenKind::Add, 0, Span::new(4, 5)),
            (TokenKind::Value, 5, Span::new(5, 6)),
        ]
    );
}

#[test]
fn test_spaces_are_skipped() {
    assert_eq!(
        kinds("  1   +  2 "),
        vec![TokenKind::Value, TokenKind::Add, TokenKind::Value]
    );
}

#[test]
fn test_tab_between_tokens_is_unsupported() {
    assert_eq!(
        tokenize("1\t+ 1").unwrap_err(),
        LexError::UnsupportedToken {
            ch: '\t',
            span: Span::new(1, 2),
        }
    );
    assert!(matches!(
        tokenize("1 +\r\n1"),
        Err(LexError::UnsupportedToken { ch: '\r', .. })
    ));
}

#[test]
fn test_empty_line_gives_empty_arena() {
    assert!(tokenize("").unwrap().head().is_none());
    assert!(tokenize("   ").unwrap().is_empty());
}

#[test]
fn test_unsupported_token_reports_char_and_span() {
    let err = tokenize("1 + 1 & 2").unwrap_err();
    assert_eq!(
        err,
        LexError::UnsupportedToken {
            ch: '&',
            span: Span::new(6, 7),
        }
    );
    assert_eq!(err.to_string(), "unsupported token `&`");
}

#[test]
fn test_leading_unsupported_char_is_skipped() {
    assert_eq!(
        kinds("&1 + 1"),
        vec![TokenKind::Value, TokenKind::Add, TokenKind::Value]
    );
}

#[test]
fn test_only_offset_zero_is_exempt() {
    // After a leading space the same character is rejected.
    assert!(matches!(
        tokenize(" &1"),
        Err(LexError::UnsupportedToken { ch: '&', .. })
    ));
}

#[test]
fn test_max_literal() {
    let arena = tokenize("18446744073709551615").unwrap();
    let (_, token) = arena.iter().next().unwrap();
    assert_eq!(token.value, u64::MAX);
}

#[test]
fn test_number_overflow() {
    let err = tokenize("1 + 18446744073709551616").unwrap_err();
    assert_eq!(
        err,
        LexError::NumberOverflow {
            literal: "18446744073709551616".to_owned(),
            span: Span::new(4, 24),
        }
    );
    assert_eq!(err.to_diagnostic().code, ErrorCode::E0003);
}

#[test]
fn test_unsupported_token_diagnostic() {
    let diag = tokenize("2 $ 2").unwrap_err().to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0002);
    assert_eq!(diag.primary_span(), Some(Span::new(2, 3)));
    assert_eq!(diag.message, "unsupported token `$`");
}

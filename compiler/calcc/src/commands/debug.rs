//! Debug commands: `lex` and `parse` for inspecting engine internals.

use std::io::Write;

use calc_ir::TokenKind;
use calc_lexer::tokenize;
use calc_parse::ReduceConfig;

use super::report;
use crate::{parse_line, CalcError};

/// Tokenize an expression and display the token sequence.
pub fn lex_expr(expr: &str, out: &mut impl Write, err: &mut impl Write) -> bool {
    let line = expr.trim();
    let tokens = match tokenize(line) {
        Ok(tokens) => tokens,
        Err(e) => {
            report(err, line, &CalcError::from(e));
            return false;
        }
    };

    let _ = writeln!(out, "Tokens ({}):", tokens.live_len());
    for (_, token) in tokens.iter() {
        if token.kind == TokenKind::Value {
            let _ = writeln!(out, "  Value({}) @ {}", token.value, token.span);
        } else {
            let _ = writeln!(out, "  {:?} @ {}", token.kind, token.span);
        }
    }
    true
}

/// Reduce an expression and display the tree as an S-expression.
pub fn parse_expr(
    expr: &str,
    config: &ReduceConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> bool {
    let line = expr.trim();
    match parse_line(line, config) {
        Ok(ast) => {
            let _ = writeln!(out, "{ast}");
            let _ = writeln!(out, "  passes: {}", ast.passes);
            true
        }
        Err(e) => {
            report(err, line, &e);
            false
        }
    }
}

//! Tree evaluator for calc.
//!
//! Walks a reduced [`Ast`] in post-order and computes a `u64`. Leaves yield
//! their stored value; composites apply their operator to the results of
//! both children and ignore their own `value`.

mod error;
mod operators;

use calc_ir::{TokenArena, TokenId, TokenKind};
use calc_parse::{ensure_sufficient_stack, Ast};
use tracing::debug;

pub use error::EvalError;
pub use operators::{apply_binary, float_pow_truncated};

/// Evaluate a fully reduced expression.
#[tracing::instrument(level = "debug", skip_all, fields(root = ?ast.root))]
pub fn evaluate(ast: &Ast) -> Result<u64, EvalError> {
    let value = eval_node(&ast.arena, ast.root)?;
    debug!(value, "evaluated");
    Ok(value)
}

fn eval_node(arena: &TokenArena, id: TokenId) -> Result<u64, EvalError> {
    ensure_sufficient_stack(|| {
        let token = arena.get(id);
        match (token.left, token.right) {
            (None, None) if token.kind == TokenKind::Value => Ok(token.value),
            (Some(left), Some(right)) => {
                let a = eval_node(arena, left)?;
                let b = eval_node(arena, right)?;
                let rhs = arena.get(right).span;
                apply_binary(token.kind, a, b, token.span, rhs)
            }
            _ => Err(EvalError::MissingOperand {
                kind: token.kind,
                span: token.span,
            }),
        }
    })
}

/// Reinterpret the result's bits as a signed integer.
///
/// Evaluation never leaves `u64`; this is the only place a sign appears.
#[expect(
    clippy::cast_possible_wrap,
    reason = "two's-complement reinterpretation is the point"
)]
pub fn as_signed(value: u64) -> i64 {
    value as i64
}

#[cfg(test)]
mod tests;

//! Binary operator implementations.
//!
//! All arithmetic is on `u64` with two's-complement wraparound, so
//! `0 - 5` produces the bit pattern of `-5`.

use calc_ir::{Span, TokenKind};

use crate::EvalError;

/// Apply `op` to two evaluated operands.
///
/// `node` is the composite's span, `rhs` the right operand's span; the
/// latter is what zero-divisor and shift errors point at.
pub fn apply_binary(op: TokenKind, a: u64, b: u64, node: Span, rhs: Span) -> Result<u64, EvalError> {
    match op {
        TokenKind::Add => Ok(a.wrapping_add(b)),
        TokenKind::Sub => Ok(a.wrapping_sub(b)),
        TokenKind::Mul => Ok(a.wrapping_mul(b)),
        TokenKind::Div => a
            .checked_div(b)
            .ok_or(EvalError::DivisionByZero { span: rhs }),
        TokenKind::Mod => a
            .checked_rem(b)
            .ok_or(EvalError::ModuloByZero { span: rhs }),
        TokenKind::ShiftLeft => shift_amount(b, rhs).map(|s| a << s),
        TokenKind::ShiftRight => shift_amount(b, rhs).map(|s| a >> s),
        TokenKind::Power => Ok(float_pow_truncated(a, b)),
        TokenKind::Value | TokenKind::ParenOpen | TokenKind::ParenClose => {
            Err(EvalError::InvalidOperator {
                kind: op,
                span: node,
            })
        }
    }
}

fn shift_amount(b: u64, span: Span) -> Result<u32, EvalError> {
    u32::try_from(b)
        .ok()
        .filter(|s| *s < u64::BITS)
        .ok_or(EvalError::ShiftOutOfRange { amount: b, span })
}

/// `base ^ exponent` computed in `f64` and truncated back to `u64`.
///
/// Precision is lost once the result passes 2^53, and results beyond
/// `u64::MAX` saturate.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "power is defined through floating point"
)]
pub fn float_pow_truncated(base: u64, exponent: u64) -> u64 {
    (base as f64).powf(exponent as f64) as u64
}

//! Evaluation errors.

use calc_diagnostic::{Diagnostic, ErrorCode};
use calc_ir::{Span, TokenKind};

/// Error produced while evaluating a reduced tree.
///
/// Arithmetic variants point at the offending right operand. The internal
/// variants mean the reducer built a tree it should never build.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero { span: Span },

    #[error("modulo by zero")]
    ModuloByZero { span: Span },

    #[error("shift amount {amount} out of range (0-63)")]
    ShiftOutOfRange { amount: u64, span: Span },

    #[error("`{kind}` is not a binary operator")]
    InvalidOperator { kind: TokenKind, span: Span },

    #[error("`{kind}` node is missing an operand")]
    MissingOperand { kind: TokenKind, span: Span },
}

impl EvalError {
    /// Convert to a diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let message = self.to_string();
        match self {
            EvalError::DivisionByZero { span } => Diagnostic::error(ErrorCode::E6001)
                .with_message(message)
                .with_label(*span, "divisor evaluates to zero"),
            EvalError::ModuloByZero { span } => Diagnostic::error(ErrorCode::E6002)
                .with_message(message)
                .with_label(*span, "modulus evaluates to zero"),
            EvalError::ShiftOutOfRange { span, .. } => Diagnostic::error(ErrorCode::E6003)
                .with_message(message)
                .with_label(*span, "shift amount")
                .with_note("values are 64 bits wide"),
            EvalError::InvalidOperator { span, .. } | EvalError::MissingOperand { span, .. } => {
                Diagnostic::error(ErrorCode::E9001)
                    .with_message(message)
                    .with_label(*span, "malformed node")
                    .with_note("this is a bug in calc, not in the expression")
            }
        }
    }
}

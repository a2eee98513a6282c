//! Reduction error types.

use calc_diagnostic::{Diagnostic, ErrorCode};
use calc_ir::{Span, TokenKind};

/// Error produced while reducing a token sequence to a single tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line contained no tokens.
    #[error("empty expression")]
    Empty,

    /// A full pass over every tier collapsed nothing.
    #[error("expression cannot be reduced further ({remaining} tokens left after pass {pass})")]
    Stalled {
        pass: usize,
        remaining: usize,
        span: Span,
    },

    /// Reduction finished on a single token that carries no value.
    #[error("expected a value, found `{found}`")]
    NotAValue { found: TokenKind, span: Span },

    /// The configured pass limit ran out before one token remained.
    #[error("expression did not reduce within {limit} passes")]
    PassLimit { limit: usize, span: Span },
}

impl ParseError {
    /// Convert to a diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let message = self.to_string();
        match self {
            ParseError::Empty => Diagnostic::error(ErrorCode::E1002)
                .with_message(message)
                .with_suggestion("enter a number or an expression such as `1 + 1`"),
            ParseError::Stalled { span, .. } => Diagnostic::error(ErrorCode::E1001)
                .with_message(message)
                .with_label(*span, "no rule applies here")
                .with_note("check for adjacent operators or unbalanced parentheses"),
            ParseError::NotAValue { span, .. } => Diagnostic::error(ErrorCode::E1002)
                .with_message(message)
                .with_label(*span, "expected a value"),
            ParseError::PassLimit { limit, span } => Diagnostic::error(ErrorCode::E1003)
                .with_message(message)
                .with_label(*span, "still unreduced")
                .with_suggestion(format!(
                    "raise CALC_MAX_PASSES above {limit} or unset it"
                )),
        }
    }
}

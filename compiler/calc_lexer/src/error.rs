//! Tokenizer errors.

use calc_diagnostic::{Diagnostic, ErrorCode};
use calc_ir::Span;

/// Error produced while scanning an expression line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unsupported token `{ch}`")]
    UnsupportedToken { ch: char, span: Span },

    #[error("number literal `{literal}` does not fit in 64 bits")]
    NumberOverflow { literal: String, span: Span },
}

impl LexError {
    /// Convert to a diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::UnsupportedToken { span, .. } => Diagnostic::error(ErrorCode::E0002)
                .with_message(self.to_string())
                .with_label(*span, "not a supported operator")
                .with_note("supported operators are + - * / < > ^ % ( )"),
            LexError::NumberOverflow { span, .. } => Diagnostic::error(ErrorCode::E0003)
                .with_message(self.to_string())
                .with_label(*span, "literal too large")
                .with_note(format!("the largest literal is {}", u64::MAX)),
        }
    }
}

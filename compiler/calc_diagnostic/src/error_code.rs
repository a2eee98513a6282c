//! Error codes for all engine diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E0002`) with the first digit
//! indicating the phase. Used for `calc explain` lookups and documentation.

use std::fmt;

/// Error codes for all engine diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Tokenizer errors
/// - E1xxx: Reduction (structure) errors
/// - E6xxx: Arithmetic errors
/// - E9xxx: Internal engine errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Tokenizer Errors (E0xxx)
    /// Unsupported character in expression
    E0002,
    /// Number literal does not fit in 64 bits
    E0003,

    // Reduction Errors (E1xxx)
    /// Expression cannot be reduced further
    E1001,
    /// Expected an expression / a value
    E1002,
    /// Reduction pass limit exceeded
    E1003,

    // Arithmetic Errors (E6xxx)
    /// Division by zero
    E6001,
    /// Modulo by zero
    E6002,
    /// Shift amount out of range
    E6003,

    // Internal Errors (E9xxx)
    /// Internal engine error (invariant violation)
    E9001,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E9001,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Check if this is a tokenizer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0002 | ErrorCode::E0003)
    }

    /// Check if this is a reduction error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003)
    }

    /// Check if this is an arithmetic error (E6xxx range).
    pub fn is_eval_error(&self) -> bool {
        matches!(self, ErrorCode::E6001 | ErrorCode::E6002 | ErrorCode::E6003)
    }

    /// Check if this is an internal engine error (E9xxx range).
    ///
    /// Internal errors point at a bug in the engine, never at bad input.
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0002"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;

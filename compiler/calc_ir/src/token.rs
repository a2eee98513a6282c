//! Token kinds and the token node.
//!
//! A `Token` starts life as a lexer leaf and may later be reused by the
//! reducer as the head of a composite node (an operator with two children).

use std::fmt;

use crate::{Span, TokenId};

/// Kind of a token.
///
/// Operators keep their kind after reduction; the `reduced` flag on the
/// token is what makes them behave as values for matching.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Unsigned decimal literal.
    Value,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `<` (left bit-shift)
    ShiftLeft,
    /// `>` (right bit-shift)
    ShiftRight,
    /// `^`
    Power,
    /// `%`
    Mod,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
}

impl TokenKind {
    /// Source spelling of the kind (`"value"` for literals).
    pub const fn symbol(self) -> &'static str {
        match self {
            TokenKind::Value => "value",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::ShiftLeft => "<",
            TokenKind::ShiftRight => ">",
            TokenKind::Power => "^",
            TokenKind::Mod => "%",
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
        }
    }

    /// Check if this kind is a binary operator.
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::ShiftLeft
                | TokenKind::ShiftRight
                | TokenKind::Power
                | TokenKind::Mod
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A token in the arena.
///
/// Leaves have `left` and `right` unset. Composites are operator tokens the
/// reducer folded together with their two operands; their `value` is never
/// read.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal value; only meaningful for `Value` leaves.
    pub value: u64,
    pub span: Span,
    /// Following token in the flat sequence.
    pub next: Option<TokenId>,
    pub left: Option<TokenId>,
    pub right: Option<TokenId>,
    /// Already folded into a value position; matches as `Value`.
    pub reduced: bool,
}

impl Token {
    /// Create an unlinked leaf of the given kind.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            value: 0,
            span,
            next: None,
            left: None,
            right: None,
            reduced: false,
        }
    }

    /// Create an unlinked `Value` leaf.
    pub fn literal(value: u64, span: Span) -> Self {
        Token {
            value,
            ..Token::new(TokenKind::Value, span)
        }
    }

    /// Check if neither child is set.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The kind used by template matching: reduced tokens are values.
    #[inline]
    pub fn matched_kind(&self) -> TokenKind {
        if self.reduced {
            TokenKind::Value
        } else {
            self.kind
        }
    }

    /// Check if the token stands for a scalar (literal or reduced subtree).
    #[inline]
    pub fn is_value_like(&self) -> bool {
        self.matched_kind() == TokenKind::Value
    }
}

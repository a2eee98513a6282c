//! Positional template matching over the flat token sequence.
//!
//! A template is a short slice of [`Slot`]s. It matches at a token when the
//! next `template.len()` tokens each satisfy the slot at the same position.
//! The end of the slice terminates the template.

use calc_ir::{Token, TokenArena, TokenId, TokenKind};

/// One position in a template.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Slot {
    /// Matches a token whose matched kind is exactly this kind.
    Kind(TokenKind),
    /// Matches any operator allowed in prefix position.
    UnaryFunction,
}

/// Operators that may appear as a prefix sign.
pub const PREFIX_WHITELIST: [TokenKind; 2] = [TokenKind::Add, TokenKind::Sub];

impl Slot {
    /// Check whether `token` satisfies this slot.
    ///
    /// Reduced tokens match as `Value` whatever their stored kind, so a
    /// folded `1 + 2` never looks like a prefix `+`.
    #[inline]
    pub fn accepts(self, token: &Token) -> bool {
        let kind = token.matched_kind();
        match self {
            Slot::Kind(expected) => kind == expected,
            Slot::UnaryFunction => PREFIX_WHITELIST.contains(&kind),
        }
    }
}

/// Built-in templates, one per reduction rule.
pub mod templates {
    use super::Slot;
    use calc_ir::TokenKind;

    const VALUE: Slot = Slot::Kind(TokenKind::Value);

    pub const ADD: &[Slot] = &[VALUE, Slot::Kind(TokenKind::Add), VALUE];
    pub const SUB: &[Slot] = &[VALUE, Slot::Kind(TokenKind::Sub), VALUE];
    pub const MUL: &[Slot] = &[VALUE, Slot::Kind(TokenKind::Mul), VALUE];
    pub const DIV: &[Slot] = &[VALUE, Slot::Kind(TokenKind::Div), VALUE];
    pub const SHIFT_LEFT: &[Slot] = &[VALUE, Slot::Kind(TokenKind::ShiftLeft), VALUE];
    pub const SHIFT_RIGHT: &[Slot] = &[VALUE, Slot::Kind(TokenKind::ShiftRight), VALUE];
    pub const POWER: &[Slot] = &[VALUE, Slot::Kind(TokenKind::Power), VALUE];
    pub const MOD: &[Slot] = &[VALUE, Slot::Kind(TokenKind::Mod), VALUE];

    /// `( X )`
    pub const PAREN: &[Slot] = &[
        Slot::Kind(TokenKind::ParenOpen),
        VALUE,
        Slot::Kind(TokenKind::ParenClose),
    ];

    /// Prefix sign applied to a value.
    pub const UNARY: &[Slot] = &[Slot::UnaryFunction, VALUE];
}

/// Check whether the tokens starting at `start` match `template`.
///
/// Matching never looks past the template: trailing tokens are ignored.
/// Running out of tokens before the template ends is a mismatch.
pub fn matches_template(arena: &TokenArena, start: Option<TokenId>, template: &[Slot]) -> bool {
    let mut cursor = start;
    for slot in template {
        let Some(id) = cursor else {
            return false;
        };
        let token = arena.get(id);
        if !slot.accepts(token) {
            return false;
        }
        cursor = token.next;
    }
    true
}

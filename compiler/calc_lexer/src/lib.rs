//! Tokenizer for calc expressions using logos.
//!
//! Scans one expression line and appends typed tokens to a fresh
//! [`TokenArena`]:
//! - Maximal digit runs become one `Value` leaf (unsigned decimal)
//! - `+ - * / < > ^ % ( )` map one-to-one onto [`TokenKind`]
//! - Spaces between tokens are skipped; any other whitespace is unsupported
//!
//! An unsupported character at byte offset 0 is skipped rather than
//! rejected, so `&1 + 1` tokenizes as `1 + 1`. Anywhere else it aborts
//! the scan with [`LexError::UnsupportedToken`].

mod error;

use calc_ir::{Span, TokenArena, TokenKind};
use logos::Logos;
use tracing::debug;

pub use error::LexError;

/// Raw token from logos (before conversion to `TokenKind`).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r" +")]
enum RawToken {
    // === Literals ===
    /// `None` from the callback (u64 overflow) surfaces as a lexer error
    /// whose slice is all digits.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    Int(u64),

    // === Operators ===
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("^")]
    Caret,
    #[token("%")]
    Percent,

    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl RawToken {
    fn kind(self) -> TokenKind {
        match self {
            RawToken::Int(_) => TokenKind::Value,
            RawToken::Plus => TokenKind::Add,
            RawToken::Minus => TokenKind::Sub,
            RawToken::Star => TokenKind::Mul,
            RawToken::Slash => TokenKind::Div,
            RawToken::Lt => TokenKind::ShiftLeft,
            RawToken::Gt => TokenKind::ShiftRight,
            RawToken::Caret => TokenKind::Power,
            RawToken::Percent => TokenKind::Mod,
            RawToken::LParen => TokenKind::ParenOpen,
            RawToken::RParen => TokenKind::ParenClose,
        }
    }
}

/// Tokenize an expression line into a fresh arena.
///
/// The returned arena holds the flat token sequence in source order,
/// linked from its head. An empty or all-space line yields an empty
/// arena; rejecting that is left to the reducer.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<TokenArena, LexError> {
    let mut arena = TokenArena::with_capacity(source.len());
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::Int(value)) => {
                arena.push_value(value, span);
            }
            Ok(raw) => {
                arena.push(raw.kind(), span);
            }
            Err(()) if is_digit_run(slice) => {
                return Err(LexError::NumberOverflow {
                    literal: slice.to_owned(),
                    span,
                });
            }
            Err(()) => {
                let ch = slice.chars().next().unwrap_or('\u{FFFD}');
                if span.start == 0 {
                    debug!(%ch, "skipping unsupported leading character");
                    continue;
                }
                return Err(LexError::UnsupportedToken { ch, span });
            }
        }
    }

    debug!(tokens = arena.len(), "tokenized");
    Ok(arena)
}

fn is_digit_run(slice: &str) -> bool {
    !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests;

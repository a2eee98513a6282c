//! Calc IR - token model for the expression engine.
//!
//! This crate contains the core data structures shared by every phase:
//! - Spans for source locations
//! - `TokenKind` and `Token`, the single node type of the engine
//! - `TokenArena`, the per-expression owner of all tokens
//!
//! # Design Philosophy
//!
//! - **One arena per expression**: tokens never outlive the evaluation
//!   that created them, so nothing accumulates between lines.
//! - **Flatten Everything**: no `Box<Token>`, links are `TokenId(u32)`
//!   indices into the arena.
//! - **Splice by relinking**: reduction rewrites `next` indices; consumed
//!   tokens stay in the arena and remain reachable through `left`/`right`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod span;
mod token;
mod token_id;

pub use arena::{Link, TokenArena};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use token_id::TokenId;

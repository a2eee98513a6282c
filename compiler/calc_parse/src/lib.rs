//! Template-driven AST reduction for calc.
//!
//! Turns the flat token sequence produced by `calc_lexer` into a single
//! tree by repeatedly collapsing runs that match a template. The tree is
//! threaded through the same [`TokenArena`]: operator tokens become
//! composites whose `left`/`right` point at their operands.

mod error;
pub mod matcher;
mod reduce;
mod stack;

use std::fmt;

use calc_ir::{TokenArena, TokenId};

pub use error::ParseError;
pub use matcher::{matches_template, Slot, PREFIX_WHITELIST};
pub use reduce::{build_ast, ReduceConfig};
pub use stack::ensure_sufficient_stack;

/// A fully reduced expression.
///
/// `root` is the only token left in the flat sequence. It is either a
/// `Value` leaf or a composite with exactly two children.
#[derive(Clone, Debug)]
pub struct Ast {
    pub arena: TokenArena,
    pub root: TokenId,
    /// Number of reduction passes it took.
    pub passes: usize,
}

impl Ast {
    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: TokenId) -> fmt::Result {
        ensure_sufficient_stack(|| {
            let token = self.arena.get(id);
            let (Some(left), Some(right)) = (token.left, token.right) else {
                return write!(f, "{}", signed_literal(token.value));
            };

            write!(f, "({} ", token.kind)?;
            self.write_node(f, left)?;
            f.write_str(" ")?;
            self.write_node(f, right)?;
            f.write_str(")")
        })
    }
}

/// S-expression form of the tree, e.g. `(* (+ 1 2) 2)`.
///
/// Leaves are shown as signed so a negated literal reads `-5`.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.root)
    }
}

#[expect(
    clippy::cast_possible_wrap,
    reason = "two's-complement view of the stored bits"
)]
fn signed_literal(value: u64) -> i64 {
    value as i64
}

#[cfg(test)]
mod tests;

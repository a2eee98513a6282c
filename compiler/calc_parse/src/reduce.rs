//! Tiered AST reduction.
//!
//! Every pass walks the flat sequence once per tier, in a fixed order:
//!
//! 1. parenthesized groups
//! 2. `*` `/`
//! 3. `+` `-`
//! 4. `<` `>`
//! 5. `^` `%`
//! 6. prefix signs
//!
//! This is not conventional precedence: `2 ^ 3 * 2` is `2 ^ 6`, and a
//! leading `-` only takes effect on a literal. By the time the prefix tier
//! runs, `-2 + 3` has become `- (2 + 3)` and the sign is dropped, giving `5`.
//!
//! Within a tier the scan is left to right. A match collapses immediately
//! and scanning resumes at the same predecessor, so chains like `1 - 2 - 3`
//! fold left-associatively within one tier. Passes repeat until a single
//! token remains; a pass that collapses nothing is an error.

use calc_ir::{Link, Span, TokenArena, TokenKind};
use tracing::{debug, trace};

use crate::matcher::{matches_template, templates, Slot};
use crate::{Ast, ParseError};

/// How a tier rewrites a matched run.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Collapse {
    Group,
    Binary,
    Unary,
}

/// One rung of the reduction ladder.
struct Tier {
    name: &'static str,
    templates: &'static [&'static [Slot]],
    collapse: Collapse,
}

const TIERS: &[Tier] = &[
    Tier {
        name: "group",
        templates: &[templates::PAREN],
        collapse: Collapse::Group,
    },
    Tier {
        name: "multiplicative",
        templates: &[templates::MUL, templates::DIV],
        collapse: Collapse::Binary,
    },
    Tier {
        name: "additive",
        templates: &[templates::ADD, templates::SUB],
        collapse: Collapse::Binary,
    },
    Tier {
        name: "shift",
        templates: &[templates::SHIFT_LEFT, templates::SHIFT_RIGHT],
        collapse: Collapse::Binary,
    },
    Tier {
        name: "power",
        templates: &[templates::POWER, templates::MOD],
        collapse: Collapse::Binary,
    },
    Tier {
        name: "unary",
        templates: &[templates::UNARY],
        collapse: Collapse::Unary,
    },
];

/// Whether a step made progress (collapsed at least one run).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Progress {
    Made,
    None,
}

impl Progress {
    fn made(self) -> bool {
        matches!(self, Progress::Made)
    }

    #[must_use]
    fn or(self, other: Progress) -> Progress {
        if self.made() || other.made() {
            Progress::Made
        } else {
            Progress::None
        }
    }
}

/// Tunables for [`build_ast`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReduceConfig {
    /// Fail with [`ParseError::PassLimit`] after this many passes.
    ///
    /// `None` relies on the progress check alone.
    pub max_passes: Option<usize>,
}

impl ReduceConfig {
    /// No limit beyond the progress check.
    pub const fn unbounded() -> Self {
        ReduceConfig { max_passes: None }
    }

    /// Cap the number of passes.
    #[must_use]
    pub const fn with_max_passes(mut self, limit: usize) -> Self {
        self.max_passes = Some(limit);
        self
    }
}

/// Reduce a tokenized expression to a single tree.
///
/// Consumes the arena and hands it back inside the [`Ast`] together with
/// the root token and the number of passes taken.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = arena.len()))]
pub fn build_ast(mut arena: TokenArena, config: &ReduceConfig) -> Result<Ast, ParseError> {
    let Some(mut root) = arena.head() else {
        return Err(ParseError::Empty);
    };

    let mut passes = 0;
    while arena.get(root).next.is_some() {
        if let Some(limit) = config.max_passes {
            if passes >= limit {
                return Err(ParseError::PassLimit {
                    limit,
                    span: live_span(&arena),
                });
            }
        }
        passes += 1;

        let mut progress = Progress::None;
        for tier in TIERS {
            progress = progress.or(run_tier(&mut arena, tier));
        }

        let remaining = arena.live_len();
        debug!(pass = passes, remaining, "reduction pass");
        if !progress.made() {
            return Err(ParseError::Stalled {
                pass: passes,
                remaining,
                span: stuck_span(&arena),
            });
        }

        root = arena.head().ok_or(ParseError::Empty)?;
    }

    let token = arena.get(root);
    if !token.is_value_like() {
        return Err(ParseError::NotAValue {
            found: token.kind,
            span: token.span,
        });
    }

    Ok(Ast {
        arena,
        root,
        passes,
    })
}

/// Scan the whole sequence once, collapsing every run the tier matches.
fn run_tier(arena: &mut TokenArena, tier: &Tier) -> Progress {
    let mut progress = Progress::None;
    let mut prev = Link::Head;

    while let Some(start) = arena.next_of(prev) {
        let matched = tier
            .templates
            .iter()
            .any(|template| matches_template(arena, Some(start), template));

        if matched && collapse_allowed(arena, tier.collapse, prev) {
            let collapsed = match tier.collapse {
                Collapse::Group => arena.unwrap_group(prev),
                Collapse::Binary => arena.collapse_binary(prev),
                Collapse::Unary => arena.unwrap_unary(prev),
            };
            if let Some(id) = collapsed {
                trace!(tier = tier.name, ?id, "collapsed");
                progress = Progress::Made;
                // Rescan from the same predecessor.
                continue;
            }
        }

        prev = Link::After(start);
    }

    progress
}

/// A prefix sign only applies where an operand cannot precede it: at the
/// start of the sequence, after an unreduced operator, or after `(`.
///
/// Without this, `(1 + 2) - 3` would fold `- 3` into a signed value next to
/// the still-open group and never reduce.
fn collapse_allowed(arena: &TokenArena, collapse: Collapse, prev: Link) -> bool {
    if collapse != Collapse::Unary {
        return true;
    }
    match prev {
        Link::Head => true,
        Link::After(id) => {
            let token = arena.get(id);
            !token.reduced && (token.kind.is_operator() || token.kind == TokenKind::ParenOpen)
        }
    }
}

fn live_span(arena: &TokenArena) -> Span {
    arena
        .iter()
        .map(|(_, token)| token.span)
        .reduce(Span::merge)
        .unwrap_or(Span::DUMMY)
}

/// First token that is not a value, else the whole remaining sequence.
fn stuck_span(arena: &TokenArena) -> Span {
    arena
        .iter()
        .find(|(_, token)| !token.is_value_like())
        .map_or_else(|| live_span(arena), |(_, token)| token.span)
}

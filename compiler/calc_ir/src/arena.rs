//! Arena allocation for the token sequence.
//!
//! - Contiguous storage for every token of one expression
//! - The flat sequence is a singly linked list threaded through `next`
//! - Reduction splices by relinking; nothing is freed until the arena drops

use tracing::trace;

use crate::{Span, Token, TokenId, TokenKind};

/// A position in the flat sequence: the head sentinel or the `next` slot
/// of a live token.
///
/// Collapse operations take the link *before* the run they rewrite, so the
/// predecessor can be relinked to the collapsed token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Link {
    /// Non-data head of the sequence.
    Head,
    /// The `next` slot of the given token.
    After(TokenId),
}

/// Contiguous storage for all tokens of a single expression.
///
/// # Design
/// - All tokens stored in a flat `Vec`, addressed by `TokenId`
/// - `head` plays the role of the sentinel whose `next` is the first token
/// - `tail` keeps appends O(1) during tokenization
#[derive(Clone, Default, Debug)]
pub struct TokenArena {
    tokens: Vec<Token>,
    head: Option<TokenId>,
    tail: Option<TokenId>,
}

impl TokenArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on source size.
    /// Heuristic: ~1 token per 2 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        TokenArena {
            tokens: Vec::with_capacity(source_len / 2 + 1),
            head: None,
            tail: None,
        }
    }

    // ===== Allocation =====

    /// Append a token of the given kind to the end of the sequence.
    pub fn push(&mut self, kind: TokenKind, span: Span) -> TokenId {
        self.append(Token::new(kind, span))
    }

    /// Append a `Value` leaf to the end of the sequence.
    pub fn push_value(&mut self, value: u64, span: Span) -> TokenId {
        self.append(Token::literal(value, span))
    }

    fn append(&mut self, token: Token) -> TokenId {
        let id = TokenId::new(u32::try_from(self.tokens.len()).unwrap_or(u32::MAX));
        self.tokens.push(token);
        match self.tail {
            Some(tail) => self.tokens[tail.index()].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    // ===== Access =====

    /// Get token by ID.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this arena.
    #[inline]
    #[track_caller]
    pub fn get(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    /// Get mutable token by ID.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this arena.
    #[inline]
    #[track_caller]
    pub fn get_mut(&mut self, id: TokenId) -> &mut Token {
        &mut self.tokens[id.index()]
    }

    /// Number of tokens ever allocated (live or consumed).
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if nothing was ever allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First token of the flat sequence.
    #[inline]
    pub fn head(&self) -> Option<TokenId> {
        self.head
    }

    /// Token a link points at.
    #[inline]
    pub fn next_of(&self, link: Link) -> Option<TokenId> {
        match link {
            Link::Head => self.head,
            Link::After(id) => self.get(id).next,
        }
    }

    fn set_link(&mut self, link: Link, target: Option<TokenId>) {
        match link {
            Link::Head => self.head = target,
            Link::After(id) => self.get_mut(id).next = target,
        }
    }

    /// Walk the live flat sequence from the head.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &Token)> + '_ {
        std::iter::successors(self.head, |id| self.get(*id).next).map(|id| (id, self.get(id)))
    }

    /// Number of tokens still in the flat sequence.
    pub fn live_len(&self) -> usize {
        self.iter().count()
    }

    /// IDs of the `N` tokens following `prev`, if the sequence is long enough.
    fn run<const N: usize>(&self, prev: Link) -> Option<[TokenId; N]> {
        let mut ids = [TokenId::new(0); N];
        let mut cursor = self.next_of(prev);
        for slot in &mut ids {
            let id = cursor?;
            *slot = id;
            cursor = self.get(id).next;
        }
        Some(ids)
    }

    // ===== Collapse =====

    /// Fold `[operand, operator, operand]` after `prev` into the operator.
    ///
    /// The operator token becomes the composite: it is marked reduced, its
    /// children are the two operands and it takes the run's place in the
    /// sequence. Returns the composite, or `None` if fewer than three tokens
    /// follow `prev`.
    pub fn collapse_binary(&mut self, prev: Link) -> Option<TokenId> {
        let [left, op, right] = self.run::<3>(prev)?;
        let after = self.get(right).next;
        let span = self.get(left).span.merge(self.get(right).span);

        let node = self.get_mut(op);
        node.reduced = true;
        node.left = Some(left);
        node.right = Some(right);
        node.next = after;
        node.span = span;

        self.set_link(prev, Some(op));
        if after.is_none() {
            self.tail = Some(op);
        }
        trace!(?op, kind = %self.get(op).kind, "collapsed binary run");
        Some(op)
    }

    /// Unwrap `( X )` after `prev` into `X` itself.
    ///
    /// No composite is created: `X` keeps its children (if any) and is
    /// marked reduced so outer tiers see it as an opaque value.
    pub fn unwrap_group(&mut self, prev: Link) -> Option<TokenId> {
        let [open, inner, close] = self.run::<3>(prev)?;
        let after = self.get(close).next;
        let span = self.get(open).span.merge(self.get(close).span);

        let node = self.get_mut(inner);
        node.reduced = true;
        node.next = after;
        node.span = span;

        self.set_link(prev, Some(inner));
        if after.is_none() {
            self.tail = Some(inner);
        }
        trace!(?inner, "unwrapped group");
        Some(inner)
    }

    /// Apply the prefix operator after `prev` to the operand that follows it.
    ///
    /// `-` rewrites the operand's `value` with two's-complement wraparound;
    /// `+` leaves it untouched. The operator token is spliced out either way.
    ///
    /// A composite's `value` is never evaluated, so `-` in front of a
    /// reduced subtree has no effect on the result: `-(1 + 2)` is `3`.
    pub fn unwrap_unary(&mut self, prev: Link) -> Option<TokenId> {
        let [op, operand] = self.run::<2>(prev)?;
        let op_kind = self.get(op).kind;
        let op_span = self.get(op).span;

        let node = self.get_mut(operand);
        if op_kind == TokenKind::Sub {
            node.value = node.value.wrapping_neg();
        }
        node.reduced = true;
        node.span = op_span.merge(node.span);

        self.set_link(prev, Some(operand));
        trace!(?operand, op = %op_kind, "applied prefix operator");
        Some(operand)
    }
}

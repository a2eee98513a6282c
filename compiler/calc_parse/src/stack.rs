//! Stack growth for the recursive tree walks.
//!
//! Reduction is iterative, but evaluation and the S-expression dump recurse
//! once per tree level. A left-deep chain like `1 + 1 + ... + 1` is as deep
//! as it has terms, so a long line can outrun the main thread's stack.

/// Grow once less than this much stack is left.
const MIN_REMAINING: usize = 32 * 1024;

/// Size of each freshly allocated stack segment.
///
/// One walk frame is a few hundred bytes, so a segment covers several
/// hundred tree levels.
const SEGMENT_SIZE: usize = 256 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted. Wrap the body of every recursive tree walk in this.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(MIN_REMAINING, SEGMENT_SIZE, f)
}

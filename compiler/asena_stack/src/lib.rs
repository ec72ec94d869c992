//! Stack growth for deeply nested syntax.
//!
//! The parser recurses once per nesting level of expressions, blocks and
//! patterns, and so do the tree view builder and the formatter. Source like
//! `((((((...))))))` or a long chain of lambdas can nest far deeper than
//! the default thread stack allows, so every recursive entry point in those
//! walks goes through [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand with `stacker`. On
//! `wasm32` the closure is called directly.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if fewer than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
///     ensure_sufficient_stack(|| self.parse_expr_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `wasm32` has no segmented stacks; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

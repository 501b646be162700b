//! Native stack growth for deeply recursive evaluation
//!
//! One interpreted call nests several evaluator frames, so deep user-level
//! recursion can exhaust a small thread stack long before
//! [`EvalContext::max_call_depth`](crate::EvalContext) is reached. Recursive
//! entry points run through [`ensure_sufficient_stack`], which moves onto a
//! freshly allocated segment when the remaining stack gets low.

/// Grow the stack when less than this remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

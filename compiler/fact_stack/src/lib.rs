//! Stack safety for deep recursion.
//!
//! The Fact parser and evaluator are both recursive over expression trees.
//! The evaluator enforces a checked recursion-depth limit, but a legal
//! program can still nest expressions deeply enough to exhaust the host
//! stack before that limit trips. Wrapping the recursive calls in
//! [`ensure_sufficient_stack`] grows the stack on demand instead.

/// Minimum stack space to keep available (64KB red zone).
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_GROWTH: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, additional stack
/// space is allocated before calling `f`.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, f)
}

//! Stack growth guard for the recursive matcher.
//!
//! Matching walks a pattern and its subject in lock-step, one native call per
//! nesting level. Subjects nested tens of thousands of levels deep (long
//! linked lists encoded as `[head, tail]` pairs, deeply nested maps) would
//! overflow a default thread stack, so every recursive step goes through
//! [`ensure_sufficient_stack`].
//!
//! - **Native targets**: the `stacker` crate allocates a fresh segment when the
//!   remaining stack drops below [`RED_ZONE`].
//! - **WASM targets**: plain passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

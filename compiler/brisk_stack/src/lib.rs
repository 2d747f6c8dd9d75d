//! Native stack growth for recursive block execution.
//!
//! A block can run another block (`~`, `*` fold, `%` map), and a block may
//! push and execute itself through a variable. Each nesting level costs a
//! few frames of the native call stack, so the evaluator wraps every block
//! execution in [`ensure_sufficient_stack`].
//!
//! - **Native targets**: the `stacker` crate grows the stack on demand.
//! - **WASM targets**: plain passthrough.

/// Grow the stack when less than this remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the native stack if the red zone is reached.
///
/// ```text
/// fn execute_block(&mut self, ...) -> EvalResult {
///     ensure_sufficient_stack(|| {
///         for token in tokens { self.dispatch(stack, env, token)?; }
///         Ok(())
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

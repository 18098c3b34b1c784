//! Per-thread parameter counter for variable-arity functions.
//!
//! Commas inside a call are only applied when the call's closing parenthesis
//! unwinds the operator stack, immediately before the function itself runs.
//! The counter therefore only ever describes the innermost call being
//! closed. It lives in a thread local because the comma and the function are
//! independent operator behaviors that share no other state.

use std::cell::Cell;

thread_local! {
    /// `None` means no separator has been applied since the last clear.
    static PARAM_COUNT: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Record one parameter separator: the first sets the count to 2, each
/// further one adds 1.
pub fn increment() {
    PARAM_COUNT.with(|count| count.set(Some(count.get().map_or(2, |n| n + 1))));
}

/// Number of parameters seen by the call being closed (1 if no separator).
pub fn current() -> usize {
    PARAM_COUNT.with(|count| count.get().unwrap_or(1))
}

/// Forget any recorded separators on this thread.
pub fn clear() {
    PARAM_COUNT.with(|count| count.set(None));
}

/// Clears the counter when dropped, on success and error paths alike.
///
/// Every function behavior holds one for the duration of its call.
#[must_use = "the counter is cleared when the guard is dropped"]
pub struct ArityGuard {
    _private: (),
}

impl ArityGuard {
    /// Start guarding the current function call.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for ArityGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ArityGuard {
    fn drop(&mut self) {
        clear();
    }
}

//! Run-on-exit scope guards.
//!
//! `finally` runs a closure when the guard goes out of scope, including
//! during unwinding. `guard` does the same but owns a value the closure gets
//! to touch last; the guard derefs to that value in the meantime.

use std::ops::{Deref, DerefMut};

/// Runs its closure on drop unless dismissed.
#[must_use = "the closure runs when the guard is dropped"]
pub struct FinalAction<F: FnOnce()> {
    cleanup: Option<F>,
}

impl<F: FnOnce()> FinalAction<F> {
    /// Cancel the pending closure.
    pub fn dismiss(&mut self) {
        self.cleanup = None;
    }

    pub fn is_armed(&self) -> bool {
        self.cleanup.is_some()
    }
}

impl<F: FnOnce()> Drop for FinalAction<F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

/// Run `f` when the returned guard is dropped.
pub fn finally<F: FnOnce()>(f: F) -> FinalAction<F> {
    FinalAction { cleanup: Some(f) }
}

/// Owns a value and hands it to `on_exit` when dropped.
#[must_use = "the exit closure runs when the guard is dropped"]
pub struct ScopeGuard<T, F: FnOnce(&mut T)> {
    value: T,
    on_exit: Option<F>,
}

impl<T, F: FnOnce(&mut T)> ScopeGuard<T, F> {
    /// Cancel the exit closure; the value is still dropped normally.
    pub fn dismiss(&mut self) {
        self.on_exit = None;
    }
}

impl<T, F: FnOnce(&mut T)> Deref for ScopeGuard<T, F> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, F: FnOnce(&mut T)> DerefMut for ScopeGuard<T, F> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T, F: FnOnce(&mut T)> Drop for ScopeGuard<T, F> {
    fn drop(&mut self) {
        if let Some(on_exit) = self.on_exit.take() {
            on_exit(&mut self.value);
        }
    }
}

/// Wrap `value` so that `on_exit` sees it once more when the guard drops.
pub fn guard<T, F: FnOnce(&mut T)>(value: T, on_exit: F) -> ScopeGuard<T, F> {
    ScopeGuard {
        value,
        on_exit: Some(on_exit),
    }
}

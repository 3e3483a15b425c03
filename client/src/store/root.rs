//! Root slice: cross-cutting loading and error flags.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

/// Process-wide UI flags shared by every action.
///
/// `loading` is a single flag: overlapping actions race on it and the last
/// writer wins. It brackets activity for a global spinner, it is not a
/// single-flight semaphore.
#[derive(Debug, Default)]
pub(crate) struct RootSlice {
    loading: AtomicBool,
    error: Mutex<Option<String>>,
}

impl RootSlice {
    /// Mark an action as in flight.
    pub(crate) fn begin(&self) {
        self.loading.store(true, Ordering::Relaxed);
    }

    /// Release the loading flag. Called on every exit path.
    pub(crate) fn finish(&self) {
        self.loading.store(false, Ordering::Relaxed);
    }

    /// Record a user-facing failure message.
    pub(crate) fn record_error(&self, message: String) {
        *self.error.lock() = Some(message);
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Relaxed)
    }

    pub(crate) fn error(&self) -> Option<String> {
        self.error.lock().clone()
    }

    pub(crate) fn clear_error(&self) {
        *self.error.lock() = None;
    }
}

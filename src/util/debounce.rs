//! Cancellable delayed-task primitive for coalescing bursts of input changes.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

/// Generation-ticket debouncer.
///
/// Each call to [`Debouncer::debounce`] takes a fresh ticket, superseding any
/// ticket still waiting. After the window elapses, only the holder of the
/// latest ticket resolves `true`; everyone superseded resolves `false` and
/// runs nothing. Cloning shares the generation counter, so clones supersede
/// each other.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits out the window, then reports whether this call is still the
    /// latest. `true` means "run the deferred work with the current inputs".
    pub async fn debounce(&self, window: Duration) -> bool {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(window).await;
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Invalidates every pending ticket without issuing a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

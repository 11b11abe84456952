//! Shared, mutex-guarded window store.

use numwin_domain::constants::WINDOW_CAPACITY;
use parking_lot::Mutex;
use tracing::trace;

use super::buffer::Window;

/// States observed around one atomic merge.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowTransition {
    /// Contents before the merge.
    pub previous: Vec<i64>,
    /// Contents after the merge.
    pub current: Vec<i64>,
    /// Mean of `current`.
    pub average: f64,
}

/// Thread-safe owner of the service's number window.
///
/// Every operation takes the lock for its whole duration and never awaits
/// while holding it, so merges are applied one at a time in lock order.
#[derive(Debug)]
pub struct WindowStore {
    inner: Mutex<Window>,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowStore {
    /// Empty store with the default capacity of ten values.
    pub fn new() -> Self {
        Self::with_capacity(WINDOW_CAPACITY)
    }

    /// Empty store holding at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: Mutex::new(Window::new(capacity)) }
    }

    /// Merge a batch into the window. See [`Window::merge`].
    pub fn merge(&self, values: &[i64]) {
        self.inner.lock().merge(values);
    }

    /// Copy of the current contents, independent of later merges.
    pub fn snapshot(&self) -> Vec<i64> {
        self.inner.lock().to_vec()
    }

    /// Mean of the current contents, `0.0` when empty.
    pub fn average(&self) -> f64 {
        self.inner.lock().average()
    }

    /// Snapshot, merge, snapshot again and average under a single lock
    /// acquisition.
    ///
    /// Concurrent callers each see a `previous`/`current` pair that matches
    /// one sequential ordering of their merges.
    pub fn apply(&self, values: &[i64]) -> WindowTransition {
        let mut window = self.inner.lock();
        let previous = window.to_vec();
        window.merge(values);
        let current = window.to_vec();
        let average = window.average();
        drop(window);

        trace!(
            incoming = values.len(),
            before = previous.len(),
            after = current.len(),
            "window merged"
        );

        WindowTransition { previous, current, average }
    }

    /// Number of values currently held.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// `true` when the window holds no values.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Maximum number of values kept.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }
}

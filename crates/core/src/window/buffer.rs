//! A fixed-capacity, deduplicated FIFO sequence of integers.
//!
//! Values are kept oldest-first. [`Window::merge`] appends unseen values in
//! the order given and then drops from the front until the length fits the
//! capacity, so eviction always removes the oldest survivors.

use std::collections::{HashSet, VecDeque};

/// Bounded sequence of distinct integers in insertion order.
///
/// # Examples
///
/// ```rust
/// use numwin_core::Window;
///
/// let mut window = Window::new(3);
/// window.merge(&[1, 2, 2, 3]);
/// window.merge(&[3, 4]);
///
/// assert_eq!(window.to_vec(), vec![2, 3, 4]);
/// assert_eq!(window.average(), 3.0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    values: VecDeque<i64>,
    capacity: usize,
}

impl Window {
    /// Creates an empty window.
    ///
    /// A capacity of zero is clamped to `1`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { values: VecDeque::new(), capacity: capacity.max(1) }
    }

    /// Appends every value of `incoming` not already present, then trims
    /// the oldest entries down to the capacity.
    ///
    /// Duplicates inside `incoming` are appended once, at their first
    /// position. An empty batch leaves the window untouched.
    pub fn merge(&mut self, incoming: &[i64]) {
        if incoming.is_empty() {
            return;
        }

        let mut seen: HashSet<i64> = self.values.iter().copied().collect();
        for &value in incoming {
            if seen.insert(value) {
                self.values.push_back(value);
            }
        }

        let overflow = self.values.len().saturating_sub(self.capacity);
        self.values.drain(..overflow);
    }

    /// Arithmetic mean of the current values, `0.0` when empty.
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }

        // i128 keeps the sum exact for any window of i64 values.
        let sum: i128 = self.values.iter().map(|&value| i128::from(value)).sum();
        sum as f64 / self.values.len() as f64
    }

    /// Copy of the contents, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<i64> {
        self.values.iter().copied().collect()
    }

    /// Number of values currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when no value has been merged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Maximum number of values kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

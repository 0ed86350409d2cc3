//! Implicit prefix sums: the raw values and nothing else.
//!
//! Updates are $O(1)$ and every query scans, $O(n)$. This is the baseline the
//! Fenwick tree is measured against, and the oracle its tests compare to.

/// The values themselves, 1-based, with slot 0 as a sentinel.
#[derive(Clone, Debug, Default)]
pub struct NaivePrefixSums {
    values: Vec<i64>,
}

impl NaivePrefixSums {
    /// Create from `values`, where `values[0]` is ignored.
    pub fn from_values(values: &[i64]) -> Self {
        let mut values = values.to_vec();
        if let Some(sentinel) = values.first_mut() {
            *sentinel = 0;
        }
        Self { values }
    }

    /// Number of slots, including the sentinel.
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Add `delta` at `idx`. Returns false (and does nothing) for an index
    /// outside `[1, capacity)`.
    pub fn update(&mut self, idx: usize, delta: i64) -> bool {
        if idx == 0 || idx >= self.values.len() {
            return false;
        }
        self.values[idx] += delta;
        true
    }

    /// Linear-time prefix sum: O(N). 0 past the end.
    pub fn prefix_sum(&self, idx: usize) -> i64 {
        if idx >= self.values.len() {
            return 0;
        }
        self.values[1..=idx].iter().sum()
    }

    /// Linear-time range sum over `start..=end`, clamped to valid positions.
    pub fn range_sum(&self, start: usize, end: usize) -> i64 {
        let start = start.max(1);
        let end = end.min(self.values.len().saturating_sub(1));
        if start > end {
            return 0;
        }
        self.values[start..=end].iter().sum()
    }

    /// Value at `idx`, or 0 outside `[1, capacity)`.
    pub fn point_value(&self, idx: usize) -> i64 {
        if idx == 0 {
            return 0;
        }
        self.values.get(idx).copied().unwrap_or(0)
    }
}

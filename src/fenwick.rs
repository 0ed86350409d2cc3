//! Binary Indexed (Fenwick) tree over `i64`.
//!
//! Positions are 1-based. Slot 0 of the node array is a sentinel that is
//! never read, so a tree of capacity `c` addresses the logical positions
//! `1..c`.
//!
//! # Theory
//!
//! Node `i` stores the sum of the original values over `(i - lsb(i), i]`
//! (see [`crate::bits`]). A prefix `[1, i]` is the disjoint union of the
//! blocks met while stripping low bits from `i`, and position `i` belongs to
//! exactly the blocks met while adding low bits to `i`. Both walks touch at
//! most $\lceil \log_2 c \rceil$ nodes.
//!
//! Range sums and point values are derived without a shadow array: the two
//! query paths of `end` and `start - 1` meet at a common ancestor, and only
//! the nodes above that ancestor contribute to the difference.
//!
//! # Index policy
//!
//! - [`FenwickTree::update`] refuses an invalid index with
//!   [`Error::IndexOutOfBounds`] and leaves the tree untouched.
//! - Queries never fail. An index past the end (or 0) denotes an empty
//!   prefix and yields 0, and range bounds are clamped to the valid
//!   positions.
//!
//! An uninitialized tree is a tree of capacity 0: every index is invalid and
//! every query returns 0.

use std::fmt;

use crate::bits::{covered_range, predecessor, successor};
use crate::error::{Error, Result};

/// Fixed-capacity Fenwick tree supporting point update and prefix, range and
/// point queries in $O(\log n)$.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FenwickTree {
    /// Partial sums; `nodes[0]` is the unused sentinel.
    nodes: Vec<i64>,
}

impl fmt::Debug for FenwickTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FenwickTree")
            .field("capacity", &self.capacity())
            .field("total", &self.total())
            .finish()
    }
}

impl FenwickTree {
    /// Create an uninitialized (capacity 0) tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a zero-filled tree with `capacity` slots (`capacity - 1`
    /// usable positions).
    pub fn with_capacity(capacity: usize) -> Self {
        let mut tree = Self::new();
        tree.init(capacity);
        tree
    }

    /// Create a tree holding `values`, where `values[0]` is an ignored
    /// sentinel.
    pub fn from_values(values: &[i64]) -> Self {
        let mut tree = Self::new();
        tree.build(values);
        tree
    }

    /// Reset to `capacity` zeroed slots.
    ///
    /// A capacity of 0 is rejected and leaves the tree as it was.
    /// Allocation failure is logged and likewise leaves the tree unchanged;
    /// use [`FenwickTree::try_init`] to observe it.
    pub fn init(&mut self, capacity: usize) {
        if let Err(err) = self.try_init(capacity) {
            log::debug!("init: {err}");
        }
    }

    /// Reset to `capacity` zeroed slots, reporting a capacity that cannot be
    /// allocated instead of aborting.
    ///
    /// A capacity of 0 is rejected as in [`FenwickTree::init`] and is not an
    /// error.
    pub fn try_init(&mut self, capacity: usize) -> Result<()> {
        if capacity == 0 {
            log::debug!("init: rejecting zero capacity");
            return Ok(());
        }
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(capacity)
            .map_err(|_| Error::CapacityOverflow(capacity))?;
        nodes.resize(capacity, 0);
        self.nodes = nodes;
        Ok(())
    }

    /// Load `values` (with `values[0]` as the sentinel) by applying one
    /// update per position, in increasing order, to a zeroed tree.
    pub fn build(&mut self, values: &[i64]) {
        log::trace!("build: loading {} positions", values.len().saturating_sub(1));
        self.nodes.clear();
        self.nodes.resize(values.len(), 0);
        for (idx, &value) in values.iter().enumerate().skip(1) {
            self.add(idx, value);
        }
    }

    /// Number of slots, including the sentinel. 0 when uninitialized.
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Number of addressable positions (`capacity - 1`).
    pub fn len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Return true if no position is addressable.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw partial sums, sentinel included.
    pub fn nodes(&self) -> &[i64] {
        &self.nodes
    }

    /// Return true iff `1 <= idx < capacity`.
    pub fn is_valid_index(&self, idx: usize) -> bool {
        idx >= 1 && idx < self.nodes.len()
    }

    /// Add `delta` to the value at `idx`.
    pub fn update(&mut self, idx: usize, delta: i64) -> Result<()> {
        if !self.is_valid_index(idx) {
            log::debug!(
                "update: index {idx} outside [1, {})",
                self.nodes.len()
            );
            return Err(Error::IndexOutOfBounds(idx));
        }
        self.add(idx, delta);
        Ok(())
    }

    fn add(&mut self, mut idx: usize, delta: i64) {
        while idx < self.nodes.len() {
            self.nodes[idx] += delta;
            idx = successor(idx);
        }
    }

    /// Sum of the values at positions `1..=idx`.
    ///
    /// Returns 0 for `idx == 0` and for `idx >= capacity`.
    pub fn prefix_sum(&self, idx: usize) -> i64 {
        if idx >= self.nodes.len() {
            return 0;
        }
        let mut sum = 0;
        let mut i = idx;
        while i > 0 {
            sum += self.nodes[i];
            i = predecessor(i);
        }
        sum
    }

    /// Sum of the values at positions `start..=end`.
    ///
    /// Returns 0 when `start > end`. Bounds are clamped to `[1, len]`.
    pub fn range_sum(&self, start: usize, end: usize) -> i64 {
        if start > end {
            return 0;
        }
        let start = start.max(1);
        let end = end.min(self.len());
        if start > end {
            return 0;
        }

        // Climb from `end` until the path drops below `start`. What is left
        // over is the common ancestor of `end` and `start - 1`.
        let mut sum = 0;
        let mut ancestor = end;
        loop {
            sum += self.nodes[ancestor];
            ancestor = predecessor(ancestor);
            if ancestor < start {
                break;
            }
        }

        let mut i = start - 1;
        while i > ancestor {
            sum -= self.nodes[i];
            i = predecessor(i);
        }
        sum
    }

    /// Original value at `idx`, or 0 if `idx` is not a valid position.
    pub fn point_value(&self, idx: usize) -> i64 {
        if !self.is_valid_index(idx) {
            return 0;
        }
        let mut value = self.nodes[idx];
        let ancestor = predecessor(idx);
        let mut i = idx - 1;
        while i > ancestor {
            value -= self.nodes[i];
            i = predecessor(i);
        }
        value
    }

    /// Sum of every position.
    pub fn total(&self) -> i64 {
        self.prefix_sum(self.len())
    }

    /// Recover the original values, with a 0 sentinel at index 0.
    ///
    /// `FenwickTree::from_values(&tree.values())` reproduces `tree`.
    pub fn values(&self) -> Vec<i64> {
        (0..self.nodes.len()).map(|i| self.point_value(i)).collect()
    }
}

impl fmt::Display for FenwickTree {
    /// Dump the original values followed by each node and the positions it
    /// sums.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "********** ORIGINAL TREE *********")?;
        for idx in 1..self.nodes.len() {
            writeln!(f, "    ARR[{idx:>2}]: {:>4}", self.point_value(idx))?;
        }
        writeln!(f, "********** FENWICK TREE **********")?;
        for idx in 1..self.nodes.len() {
            write!(f, "    BIT[{idx:>2}]: {:>4}    //", self.nodes[idx])?;
            for covered in covered_range(idx) {
                write!(f, " + {covered}")?;
            }
            writeln!(f)?;
        }
        write!(f, "**********************************")
    }
}

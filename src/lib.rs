//! # Fenwick Trees
//!
//! *Prefix sums that survive point updates.*
//!
//! ## Intuition First
//!
//! Keep a running total of an array and every query is one lookup, but a
//! single change to an early element forces you to rewrite every total after
//! it. Keep the raw array instead and updates are free, but every query has
//! to walk the whole prefix.
//!
//! A Fenwick tree sits in between. Each slot remembers the sum of a block
//! whose length is a power of two, chosen by the binary representation of
//! the slot's index. Any prefix is a handful of such blocks, and any element
//! sits inside only a handful of them.
//!
//! ## Historical Context
//!
//! ```text
//! 1989  Ryabko      Fast on-line code, the same structure for frequency counts
//! 1994  Fenwick     "A new data structure for cumulative frequency tables"
//! 2000s             Standard tool in arithmetic coding and competitive programming
//! ```
//!
//! ## Mathematical Formulation
//!
//! With `lsb(i) = i & -i`, slot `i` stores
//! $T[i] = \sum_{j = i - \mathrm{lsb}(i) + 1}^{i} A[j]$.
//!
//! - `prefix_sum(i)`: add $T[i]$, clear the lowest bit of $i$, repeat until 0.
//! - `update(i, d)`: add $d$ to $T[i]$, add the lowest bit to $i$, repeat
//!   while in range.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(\log n)$ for update, prefix sum, range sum and point value.
//! - **Space**: exactly $n + 1$ integers, with no auxiliary index.
//!
//! ## What Could Go Wrong
//!
//! 1. **Off-by-one**: positions are 1-based. Slot 0 is a sentinel and index 0
//!    is never valid.
//! 2. **Fixed size**: capacity is set at initialization. Growing the array
//!    means rebuilding.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`FenwickTree`**: the tree over `i64`.
//! - **`NaivePrefixSums`**: the linear-scan baseline.
//! - **`shell`**: a console-free command interpreter over a tree.
//!
//! ## References
//!
//! - Fenwick, P. M. (1994). "A new data structure for cumulative frequency tables."
//! - Ryabko, B. Ya. (1989). "A fast on-line code."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod error;
pub mod fenwick;
pub mod implicit;
pub mod shell;

pub use error::Error;
pub use fenwick::FenwickTree;
pub use implicit::NaivePrefixSums;

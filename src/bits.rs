//! Index arithmetic for the implicit tree.
//!
//! Every position `i > 0` of a Fenwick tree owns the block of positions
//! `(i - lsb(i), i]`, where `lsb(i)` is the value of the lowest set bit of
//! `i`. Two implicit trees fall out of that:
//!
//! - the *query* tree, where the parent of `i` is `i - lsb(i)` (strip the
//!   lowest set bit). Walking it from `i` to 0 visits disjoint blocks that
//!   tile `[1, i]`.
//! - the *update* tree, where the parent of `i` is `i + lsb(i)`. Walking it
//!   from `i` visits every block that contains `i`.

use std::ops::RangeInclusive;

/// Value of the least-significant set bit of `idx` (`idx & -idx`).
///
/// Only meaningful for `idx > 0`.
#[inline]
pub fn lowest_set_bit(idx: usize) -> usize {
    debug_assert!(idx > 0, "lowest_set_bit(0) is undefined");
    idx & idx.wrapping_neg()
}

/// Parent of `idx` in the query tree: `idx` with its lowest set bit cleared.
#[inline]
pub fn predecessor(idx: usize) -> usize {
    idx - lowest_set_bit(idx)
}

/// Parent of `idx` in the update tree.
#[inline]
pub fn successor(idx: usize) -> usize {
    idx + lowest_set_bit(idx)
}

/// Positions whose values node `idx` sums, as an inclusive range.
#[inline]
pub fn covered_range(idx: usize) -> RangeInclusive<usize> {
    predecessor(idx) + 1..=idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_set_bit() {
        assert_eq!(lowest_set_bit(1), 1);
        assert_eq!(lowest_set_bit(6), 2);
        assert_eq!(lowest_set_bit(8), 8);
        assert_eq!(lowest_set_bit(12), 4);
        assert_eq!(lowest_set_bit(usize::MAX), 1);
        assert_eq!(lowest_set_bit(1 << 63), 1 << 63);
    }

    #[test]
    fn test_walks() {
        assert_eq!(predecessor(7), 6);
        assert_eq!(predecessor(6), 4);
        assert_eq!(predecessor(4), 0);
        assert_eq!(successor(3), 4);
        assert_eq!(successor(5), 6);
        assert_eq!(successor(6), 8);
    }

    #[test]
    fn test_covered_range() {
        assert_eq!(covered_range(1), 1..=1);
        assert_eq!(covered_range(4), 1..=4);
        assert_eq!(covered_range(6), 5..=6);
        assert_eq!(covered_range(7), 7..=7);
    }
}

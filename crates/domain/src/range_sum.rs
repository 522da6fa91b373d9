// crates/domain/src/range_sum.rs
//! Counting subranges whose sum lies in an inclusive bound.
//!
//! The prefix array is merge-sorted in place. Before two sorted halves are
//! merged, every left-half prefix index is smaller than every right-half one,
//! so the pairs `(i, j)` with `i` on the left and `j` on the right are exactly
//! the subranges crossing the split. Both halves are sorted at that point,
//! which lets two forward-only pointers count the matches in linear time.

use log::debug;
use range_sums_shared_kernel::{DomainResult, SubrangeCount};

use crate::bound::RangeBound;
use crate::prefix::prefix_sums;

/// Counts the contiguous subranges of `values` whose sum lies in
/// `[lower, upper]`.
///
/// An inverted bound (`lower > upper`) matches nothing and yields zero. Use
/// [`count_range_sums_checked`] to reject it instead.
///
/// Runs in `O(n log n)` time and `O(n)` extra space.
pub fn count_range_sums(values: &[i64], lower: i64, upper: i64) -> SubrangeCount {
    count_range_sums_in(values, RangeBound::new(lower, upper))
}

/// Same as [`count_range_sums`] but refuses an inverted bound.
///
/// # Errors
/// Returns [`range_sums_shared_kernel::DomainError::InvalidBound`] when
/// `lower > upper`.
pub fn count_range_sums_checked(values: &[i64], lower: i64, upper: i64) -> DomainResult<SubrangeCount> {
    let bound = RangeBound::try_new(lower, upper)?;
    Ok(count_range_sums_in(values, bound))
}

/// Counts the subranges of `values` whose sum lies in an already-built `bound`.
pub fn count_range_sums_in(values: &[i64], bound: RangeBound) -> SubrangeCount {
    if values.is_empty() || bound.is_empty() {
        return SubrangeCount::ZERO;
    }

    let mut prefix = prefix_sums(values);
    let last = prefix.len() - 1;
    let total = sort_and_count(
        &mut prefix,
        0,
        last,
        i128::from(bound.lower()),
        i128::from(bound.upper()),
    );

    debug!(
        "count_range_sums: n={} bound=[{}, {}] -> {total}",
        values.len(),
        bound.lower(),
        bound.upper()
    );
    into_count(total)
}

/// Saturates where `usize` is narrower than the `u64` tally.
fn into_count(total: u64) -> SubrangeCount {
    usize::try_from(total).map_or(SubrangeCount::new(usize::MAX), SubrangeCount::new)
}

/// Quadratic reference: checks every pair of prefix indices directly.
pub fn count_range_sums_brute_force(values: &[i64], lower: i64, upper: i64) -> SubrangeCount {
    let bound = RangeBound::new(lower, upper);
    let prefix = prefix_sums(values);

    prefix
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            prefix[i + 1..]
                .iter()
                .filter(|&&end| bound.contains(end - start))
                .count()
        })
        .sum()
}

/// Sorts `prefix[left..=right]` and returns the number of pairs `i < j` in
/// that range with `lower <= prefix[j] - prefix[i] <= upper`.
fn sort_and_count(prefix: &mut [i128], left: usize, right: usize, lower: i128, upper: i128) -> u64 {
    if left >= right {
        return 0;
    }

    let mid = left + (right - left) / 2;
    let within = sort_and_count(prefix, left, mid, lower, upper)
        + sort_and_count(prefix, mid + 1, right, lower, upper);
    let crossing = count_crossing(prefix, left, mid, right, lower, upper);

    merge(prefix, left, mid, right);
    within + crossing
}

/// Requires `prefix[left..=mid]` and `prefix[mid + 1..=right]` to be sorted.
fn count_crossing(prefix: &[i128], left: usize, mid: usize, right: usize, lower: i128, upper: i128) -> u64 {
    // lo: first left index with prefix[lo] >= sum - upper
    // hi: first left index with prefix[hi] >  sum - lower
    let mut lo = left;
    let mut hi = left;
    let mut count = 0u64;

    for &sum in &prefix[mid + 1..=right] {
        while lo <= mid && prefix[lo] < sum - upper {
            lo += 1;
        }
        while hi <= mid && prefix[hi] <= sum - lower {
            hi += 1;
        }
        // hi < lo only for an inverted bound
        count += hi.saturating_sub(lo) as u64;
    }

    count
}

fn merge(prefix: &mut [i128], left: usize, mid: usize, right: usize) {
    let mut merged = Vec::with_capacity(right - left + 1);
    let (mut i, mut j) = (left, mid + 1);

    while i <= mid && j <= right {
        if prefix[i] <= prefix[j] {
            merged.push(prefix[i]);
            i += 1;
        } else {
            merged.push(prefix[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&prefix[i..=mid]);
    merged.extend_from_slice(&prefix[j..=right]);

    prefix[left..=right].copy_from_slice(&merged);
}

#[cfg(test)]
mod tests {
    use super::*;
    use range_sums_shared_kernel::DomainError;

    #[test]
    fn mixed_signs() {
        assert_eq!(count_range_sums(&[-2, 5, -1], -2, 2), 3usize);
    }

    #[test]
    fn single_zero() {
        assert_eq!(count_range_sums(&[0], 0, 0), 1usize);
    }

    #[test]
    fn zero_sum_subranges() {
        assert_eq!(count_range_sums(&[0, -1, 1], 0, 0), 3usize);
    }

    #[test]
    fn all_positive() {
        assert_eq!(count_range_sums(&[1, 2, 3], 3, 6), 4usize);
    }

    #[test]
    fn empty_input() {
        assert_eq!(count_range_sums(&[], 0, 0), SubrangeCount::ZERO);
        assert_eq!(count_range_sums(&[], i64::MIN, i64::MAX), SubrangeCount::ZERO);
    }

    #[test]
    fn sums_wider_than_32_bits() {
        let values = [1_000_000_000, 1_000_000_000, 1_000_000_000];
        assert_eq!(count_range_sums(&values, 0, 3_000_000_000), 6usize);
    }

    #[test]
    fn sums_wider_than_64_bits() {
        let values = [i64::MAX, i64::MAX, i64::MIN];
        // [MAX], [MAX], [MAX, MAX, MIN] = MAX - 1 are in range; [MAX, MAX] overflows i64
        assert_eq!(count_range_sums(&values, 1, i64::MAX), 3usize);
        assert_eq!(count_range_sums_brute_force(&values, 1, i64::MAX), 3usize);
    }

    #[test]
    fn duplicate_prefix_values() {
        let values = [0, 0, 0, 0];
        // every one of the 10 subranges sums to zero
        assert_eq!(count_range_sums(&values, 0, 0), 10usize);
    }

    #[test]
    fn inverted_bound_counts_nothing() {
        assert_eq!(count_range_sums(&[-2, 5, -1, 3, 0], 2, -2), SubrangeCount::ZERO);
    }

    #[test]
    fn checked_variant_rejects_inverted_bound() {
        assert_eq!(
            count_range_sums_checked(&[1, 2], 3, 1),
            Err(DomainError::InvalidBound { lower: 3, upper: 1 })
        );
        assert_eq!(count_range_sums_checked(&[1, 2, 3], 3, 6), Ok(SubrangeCount::new(4)));
    }

    #[test]
    fn matches_brute_force_on_fixed_case() {
        let values = [3, -7, 2, 2, -1, 8, -4, 0, 5, -6, 1];
        for (lower, upper) in [(-5, 5), (0, 0), (-20, 20), (1, 3), (-3, -1)] {
            assert_eq!(
                count_range_sums(&values, lower, upper),
                count_range_sums_brute_force(&values, lower, upper),
                "bound [{lower}, {upper}]"
            );
        }
    }

    #[test]
    fn inverted_bound_skips_the_sort() {
        let bound = RangeBound::new(1, -1);
        assert!(bound.is_empty());
        assert_eq!(count_range_sums_in(&[0, 0, 0], bound), SubrangeCount::ZERO);
        assert_eq!(count_range_sums_in(&[0, 0, 0], RangeBound::exactly(0)), 6usize);
    }

    #[test]
    fn tally_is_wider_than_32_bits() {
        let over_u32 = u64::from(u32::MAX) + 1;
        let expected = usize::try_from(over_u32).unwrap_or(usize::MAX);
        assert_eq!(into_count(over_u32), expected);
        assert_eq!(into_count(u64::MAX), usize::MAX);
    }

    #[test]
    fn crossing_count_is_u64() {
        let prefix: Vec<i128> = vec![0, 0, 0, 0];
        let crossing: u64 = count_crossing(&prefix, 0, 1, 3, 0, 0);
        assert_eq!(crossing, 4);
    }

    #[test]
    fn merge_leaves_range_sorted() {
        let mut prefix: Vec<i128> = vec![1, 4, 9, 2, 3, 10];
        merge(&mut prefix, 0, 2, 5);
        assert_eq!(prefix, vec![1, 2, 3, 4, 9, 10]);
    }

    #[test]
    fn sort_and_count_sorts_as_byproduct() {
        let mut prefix = prefix_sums(&[5, -3, 8, -10, 2]);
        let last = prefix.len() - 1;
        sort_and_count(&mut prefix, 0, last, 0, 0);
        assert!(prefix.windows(2).all(|w| w[0] <= w[1]));
    }
}

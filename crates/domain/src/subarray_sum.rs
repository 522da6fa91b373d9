// crates/domain/src/subarray_sum.rs
use hashbrown::HashMap;
use log::debug;
use range_sums_shared_kernel::SubrangeCount;

/// Counts the non-empty contiguous subranges of `values` summing to exactly
/// `k`, in a single pass.
///
/// A subrange ending at the current element sums to `k` whenever an earlier
/// prefix equals `running - k`, so the frequency of every prefix seen so far
/// is kept in a map seeded with the empty prefix.
pub fn count_subarrays_with_sum(values: &[i64], k: i64) -> SubrangeCount {
    let target = i128::from(k);
    let mut seen: HashMap<i128, usize> = HashMap::with_capacity(values.len() + 1);
    seen.insert(0, 1);

    let mut running = 0i128;
    let mut count = SubrangeCount::ZERO;
    for &value in values {
        running += i128::from(value);
        if let Some(&matches) = seen.get(&(running - target)) {
            count += matches;
        }
        *seen.entry(running).or_insert(0) += 1;
    }

    debug!("count_subarrays_with_sum: n={} k={k} -> {count}", values.len());
    count
}

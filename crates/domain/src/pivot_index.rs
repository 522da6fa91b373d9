// crates/domain/src/pivot_index.rs
use log::debug;

/// Leftmost index whose strict left sum equals its strict right sum.
///
/// Sums past either edge are zero, so index 0 is a pivot when the rest of
/// the sequence sums to zero. Returns `None` when no index balances,
/// including for an empty sequence.
pub fn pivot_index(values: &[i64]) -> Option<usize> {
    let total: i128 = values.iter().copied().map(i128::from).sum();

    let mut left = 0i128;
    let mut pivot = None;
    for (index, &value) in values.iter().enumerate() {
        let value = i128::from(value);
        if left == total - left - value {
            pivot = Some(index);
            break;
        }
        left += value;
    }

    debug!("pivot_index: n={} -> {pivot:?}", values.len());
    pivot
}

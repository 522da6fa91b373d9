// crates/domain/src/prefix.rs

/// Prefix sums of `values` with a leading zero: `out[i]` is the sum of
/// `values[..i]`, so `out.len() == values.len() + 1`.
///
/// Sums are widened to `i128`; no sequence of `i64` that fits in memory can
/// overflow them.
pub fn prefix_sums(values: &[i64]) -> Vec<i128> {
    let mut prefix = Vec::with_capacity(values.len() + 1);
    let mut running = 0i128;
    prefix.push(running);
    for &value in values {
        running += i128::from(value);
        prefix.push(running);
    }
    prefix
}

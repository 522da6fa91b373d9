// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod bound;
pub mod pivot_index;
pub mod prefix;
pub mod range_sum;
pub mod subarray_sum;

pub use bound::RangeBound;
pub use pivot_index::pivot_index;
pub use prefix::prefix_sums;
pub use range_sum::{count_range_sums, count_range_sums_brute_force, count_range_sums_checked, count_range_sums_in};
pub use subarray_sum::count_subarrays_with_sum;

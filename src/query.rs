// src/query.rs
use range_sums_domain::{count_range_sums, count_range_sums_checked, count_subarrays_with_sum, pivot_index};
use range_sums_shared_kernel::{DomainResult, SubrangeCount};
use serde::{Deserialize, Serialize};

/// A single problem instance, as given on the command line or in a batch file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    RangeSum { values: Vec<i64>, lower: i64, upper: i64 },
    SubarraySum { values: Vec<i64>, k: i64 },
    PivotIndex { values: Vec<i64> },
}

/// Serializes as a bare number, or `null` for a missing pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Count(SubrangeCount),
    Pivot(Option<usize>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    #[serde(flatten)]
    pub query: Query,
    pub answer: Answer,
}

impl Query {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RangeSum { .. } => "range_sum",
            Self::SubarraySum { .. } => "subarray_sum",
            Self::PivotIndex { .. } => "pivot_index",
        }
    }

    /// Runs the query. With `strict`, an inverted range-sum bound is an error
    /// instead of an empty match.
    ///
    /// # Errors
    /// Returns [`range_sums_shared_kernel::DomainError::InvalidBound`] in strict
    /// mode when `lower > upper`.
    pub fn evaluate(&self, strict: bool) -> DomainResult<Answer> {
        let answer = match self {
            Self::RangeSum { values, lower, upper } if strict => {
                Answer::Count(count_range_sums_checked(values, *lower, *upper)?)
            }
            Self::RangeSum { values, lower, upper } => Answer::Count(count_range_sums(values, *lower, *upper)),
            Self::SubarraySum { values, k } => Answer::Count(count_subarrays_with_sum(values, *k)),
            Self::PivotIndex { values } => Answer::Pivot(pivot_index(values)),
        };
        Ok(answer)
    }

    /// # Errors
    /// See [`Query::evaluate`].
    pub fn into_outcome(self, strict: bool) -> DomainResult<Outcome> {
        let answer = self.evaluate(strict)?;
        Ok(Outcome { query: self, answer })
    }
}

mod display {
    use std::fmt;

    use super::Answer;

    impl fmt::Display for Answer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Count(count) => write!(f, "{count}"),
                Self::Pivot(Some(index)) => write!(f, "{index}"),
                Self::Pivot(None) => f.write_str("-1"),
            }
        }
    }
}

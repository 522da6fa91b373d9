// crates/domain/src/bound.rs
use range_sums_shared_kernel::{DomainError, DomainResult};

/// Inclusive `[lower, upper]` bound on a subrange sum.
///
/// `new` accepts `lower > upper` and yields an empty bound that matches
/// nothing. Use [`RangeBound::try_new`] to reject that case instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeBound {
    lower: i64,
    upper: i64,
}

impl RangeBound {
    #[inline]
    pub const fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    /// # Errors
    /// Returns [`DomainError::InvalidBound`] when `lower > upper`.
    pub fn try_new(lower: i64, upper: i64) -> DomainResult<Self> {
        if lower > upper {
            return Err(DomainError::InvalidBound { lower, upper });
        }
        Ok(Self::new(lower, upper))
    }

    /// Bound matching only sums equal to `target`.
    #[inline]
    pub const fn exactly(target: i64) -> Self {
        Self::new(target, target)
    }

    #[inline]
    pub const fn lower(self) -> i64 {
        self.lower
    }

    #[inline]
    pub const fn upper(self) -> i64 {
        self.upper
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.lower > self.upper
    }

    #[inline]
    pub fn contains(self, sum: i128) -> bool {
        i128::from(self.lower) <= sum && sum <= i128::from(self.upper)
    }
}

// crates/shared-kernel/src/value_objects/counts.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Number of contiguous subranges matching a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubrangeCount(usize);

impl SubrangeCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for SubrangeCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for SubrangeCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<usize> for SubrangeCount {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign for SubrangeCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl AddAssign<usize> for SubrangeCount {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl From<usize> for SubrangeCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<SubrangeCount> for usize {
    fn from(value: SubrangeCount) -> Self {
        value.0
    }
}

impl PartialEq<usize> for SubrangeCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<SubrangeCount> for usize {
    fn eq(&self, other: &SubrangeCount) -> bool {
        *self == other.0
    }
}

impl Sum for SubrangeCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, count| acc + count)
    }
}

impl<'a> Sum<&'a SubrangeCount> for SubrangeCount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Sum<usize> for SubrangeCount {
    fn sum<I: Iterator<Item = usize>>(iter: I) -> Self {
        Self(iter.sum())
    }
}

mod display {
    use std::fmt;

    use super::SubrangeCount;

    impl fmt::Display for SubrangeCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}

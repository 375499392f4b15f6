//! A single inclusive integer interval.

use std::fmt;

use num_traits::PrimInt;

/// An inclusive integer interval `[low, high]` with `low <= high`.
///
/// Equality is structural. Spans order by `low`, then by `high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span<T = i64> {
    low: T,
    high: T,
}

impl<T: PrimInt> Span<T> {
    /// Creates the span covering both endpoints, in whichever order they are given.
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Creates the span containing only `value`.
    pub fn single(value: T) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    pub fn low(&self) -> T {
        self.low
    }

    pub fn high(&self) -> T {
        self.high
    }

    /// Number of integers covered, `high - low + 1`, or `None` if that does
    /// not fit in `T`.
    pub fn size(&self) -> Option<T> {
        self.high
            .checked_sub(&self.low)
            .and_then(|width| width.checked_add(&T::one()))
    }

    pub fn contains(&self, value: T) -> bool {
        self.low <= value && value <= self.high
    }

    /// True if the two spans share at least one integer.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    /// True if the union of the two spans is itself a single span.
    pub fn touches(&self, other: &Self) -> bool {
        let (first, second) = if self.low <= other.low {
            (self, other)
        } else {
            (other, self)
        };
        reaches(first.high, second.low)
    }

    /// The integers present in both spans, if any.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        self.overlaps(other).then(|| Self {
            low: self.low.max(other.low),
            high: self.high.min(other.high),
        })
    }

    /// The integers in `self` that are not in `other`.
    ///
    /// Yields nothing when `other` covers `self`, one span when they are
    /// disjoint or `other` clips an end, and two spans when `other` lies
    /// strictly inside `self`. Pieces come out in ascending order.
    pub fn subtract(&self, other: &Self) -> impl Iterator<Item = Self> + use<T> {
        let pieces = if !self.overlaps(other) {
            [Some(*self), None]
        } else {
            let below = (self.low < other.low).then(|| Self {
                low: self.low,
                high: other.low - T::one(),
            });
            let above = (other.high < self.high).then(|| Self {
                low: other.high + T::one(),
                high: self.high,
            });
            [below, above]
        };
        pieces.into_iter().flatten()
    }
}

/// True if `low <= high + 1`, without overflowing at `T::max_value()`.
pub(super) fn reaches<T: PrimInt>(high: T, low: T) -> bool {
    high.checked_add(&T::one()).is_none_or(|next| low <= next)
}

impl<T: PrimInt> From<(T, T)> for Span<T> {
    fn from((a, b): (T, T)) -> Self {
        Self::new(a, b)
    }
}

impl<T: PrimInt + fmt::Display> fmt::Display for Span<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

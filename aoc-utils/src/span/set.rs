//! Canonical sets of spans.

use std::fmt;

use num_traits::PrimInt;

use super::range::{Span, reaches};

/// Collapses any collection of spans into canonical form.
///
/// The result is sorted by `low`, pairwise disjoint and non-adjacent, and
/// covers exactly the integers covered by the input.
///
/// ```rust
/// use aoc_utils::span::{Span, simplify};
///
/// let merged = simplify([Span::new(2, 4), Span::new(1, 3), Span::new(9, 9), Span::new(10, 10)]);
/// assert_eq!(merged, vec![Span::new(1, 4), Span::new(9, 10)]);
/// ```
pub fn simplify<T, I>(spans: I) -> Vec<Span<T>>
where
    T: PrimInt,
    I: IntoIterator<Item = Span<T>>,
{
    let mut sorted: Vec<Span<T>> = spans.into_iter().collect();
    sorted.sort_unstable();

    let mut merged: Vec<Span<T>> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match merged.last_mut() {
            Some(current) if reaches(current.high(), span.low()) => {
                if span.high() > current.high() {
                    *current = Span::new(current.low(), span.high());
                }
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// A set of integers stored as sorted, disjoint, non-adjacent spans.
///
/// # Example
///
/// ```rust
/// use aoc_utils::span::SpanSet;
///
/// let all = SpanSet::from_pairs([(1, 7)]);
/// let holes = SpanSet::from_pairs([(1, 1), (3, 5)]);
/// assert_eq!(all.subtract(&holes), SpanSet::from_pairs([(2, 2), (6, 7)]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpanSet<T = i64> {
    spans: Vec<Span<T>>,
}

impl<T> Default for SpanSet<T> {
    fn default() -> Self {
        Self { spans: Vec::new() }
    }
}

impl<T: PrimInt> SpanSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from possibly overlapping spans.
    pub fn from_spans<I: IntoIterator<Item = Span<T>>>(spans: I) -> Self {
        Self {
            spans: simplify(spans),
        }
    }

    /// Creates a set from `(a, b)` endpoint pairs given in either order.
    pub fn from_pairs<I: IntoIterator<Item = (T, T)>>(pairs: I) -> Self {
        Self::from_spans(pairs.into_iter().map(Span::from))
    }

    /// Adds every integer of `span` to the set.
    pub fn add(&mut self, span: Span<T>) {
        // spans[start..end] are the ones that overlap or touch `span`
        let start = self
            .spans
            .partition_point(|s| !reaches(s.high(), span.low()));
        let end = self
            .spans
            .partition_point(|s| reaches(span.high(), s.low()));

        let merged = if start < end {
            Span::new(
                span.low().min(self.spans[start].low()),
                span.high().max(self.spans[end - 1].high()),
            )
        } else {
            span
        };
        self.spans.splice(start..end, std::iter::once(merged));
    }

    /// Returns the integers in `self` that are not in `other`.
    pub fn subtract(&self, other: &Self) -> Self {
        let remaining = self.spans.iter().flat_map(|minuend| {
            other.spans.iter().fold(vec![*minuend], |pieces, subtrahend| {
                pieces
                    .iter()
                    .flat_map(|piece| piece.subtract(subtrahend))
                    .collect()
            })
        });
        Self::from_spans(remaining)
    }

    /// Returns the integers in either set.
    pub fn union(&self, other: &Self) -> Self {
        Self::from_spans(self.spans.iter().chain(other.spans.iter()).copied())
    }

    /// Returns the integers in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut spans = Vec::new();
        let (mut i, mut j) = (0, 0);
        while let (Some(a), Some(b)) = (self.spans.get(i), other.spans.get(j)) {
            if let Some(common) = a.intersection(b) {
                spans.push(common);
            }
            if a.high() < b.high() {
                i += 1;
            } else {
                j += 1;
            }
        }
        // pieces of canonical inputs are already sorted and separated
        Self { spans }
    }

    /// True if some span encloses `value`.
    pub fn contains(&self, value: T) -> bool {
        let idx = self.spans.partition_point(|s| s.high() < value);
        self.spans.get(idx).is_some_and(|s| s.low() <= value)
    }

    /// Number of integers in the set, or `None` if the count does not fit in `T`.
    pub fn total(&self) -> Option<T> {
        self.spans.iter().try_fold(T::zero(), |total, span| {
            span.size().and_then(|size| total.checked_add(&size))
        })
    }

    /// Number of spans in canonical form.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Spans in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, Span<T>> {
        self.spans.iter()
    }

    pub fn as_slice(&self) -> &[Span<T>] {
        &self.spans
    }
}

impl<T: PrimInt> FromIterator<Span<T>> for SpanSet<T> {
    fn from_iter<I: IntoIterator<Item = Span<T>>>(iter: I) -> Self {
        Self::from_spans(iter)
    }
}

impl<T: PrimInt> Extend<Span<T>> for SpanSet<T> {
    fn extend<I: IntoIterator<Item = Span<T>>>(&mut self, iter: I) {
        let existing = std::mem::take(&mut self.spans);
        self.spans = simplify(existing.into_iter().chain(iter));
    }
}

impl<T> IntoIterator for SpanSet<T> {
    type Item = Span<T>;
    type IntoIter = std::vec::IntoIter<Span<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SpanSet<T> {
    type Item = &'a Span<T>;
    type IntoIter = std::slice::Iter<'a, Span<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

impl<T: PrimInt + fmt::Display> fmt::Display for SpanSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, span) in self.spans.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{span}")?;
        }
        Ok(())
    }
}

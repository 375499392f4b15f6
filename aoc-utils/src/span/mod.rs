//! Span Algebra over Closed Integer Intervals
//!
//! This module provides [`Span`], an inclusive integer interval `[low, high]`,
//! and [`SpanSet`], a sorted set of spans kept in canonical form.
//!
//! # Canonical Form
//!
//! A span set is canonical when its spans are pairwise disjoint **and**
//! non-adjacent: for consecutive spans `a` and `b`, `a.high + 1 < b.low`.
//! `[1, 3]` and `[4, 6]` are therefore merged into `[1, 6]`. Every
//! `SpanSet` operation returns a canonical set, so two sets covering the same
//! integers always compare equal.
//!
//! # Endpoint Types
//!
//! Endpoints are generic over [`num_traits::PrimInt`] and default to `i64`.
//! Arithmetic on endpoints never steps past `T::min_value()` or
//! `T::max_value()`. Counts ([`Span::size`], [`SpanSet::total`]) are checked
//! and return `None` when they do not fit in `T`, e.g. for a set covering
//! most of `i64`.
//!
//! # Example
//!
//! ```rust
//! use aoc_utils::span::{Span, SpanSet};
//!
//! let mut fresh = SpanSet::from_pairs([(3, 5), (10, 14), (16, 20), (12, 18)]);
//! assert_eq!(fresh.to_string(), "3-5, 10-20");
//!
//! fresh.add(Span::new(6, 6));
//! assert_eq!(fresh.to_string(), "3-6, 10-20");
//!
//! let spoiled = SpanSet::from_pairs([(4, 4), (11, 19)]);
//! let left = fresh.subtract(&spoiled);
//! assert_eq!(left.to_string(), "3, 5-6, 10, 20");
//! assert_eq!(left.total(), Some(5));
//! assert!(left.contains(10));
//! assert!(!left.contains(11));
//! ```

mod range;
mod set;

pub use range::Span;
pub use set::{SpanSet, simplify};

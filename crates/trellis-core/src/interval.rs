//! Closed integer intervals.
//!
//! Used for token spans of parse-tree nodes and as the building block of
//! symbol sets on automaton edges.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed interval `[a, b]`. An interval with `b < a` is empty.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Interval {
    pub a: i32,
    pub b: i32,
}

impl Interval {
    /// Sentinel for a span that has not been established yet.
    pub const INVALID: Self = Self { a: -1, b: -2 };

    #[inline]
    pub const fn of(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Whether this is anything other than the `INVALID` sentinel.
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }

    /// Number of integers covered. Zero for empty intervals.
    #[inline]
    pub fn length(&self) -> usize {
        if self.b < self.a {
            0
        } else {
            (self.b as i64 - self.a as i64 + 1) as usize
        }
    }

    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.a <= value && value <= self.b
    }

    /// No gap between the two intervals and no overlap either.
    pub fn adjacent(&self, other: &Self) -> bool {
        self.a as i64 == other.b as i64 + 1 || self.b as i64 == other.a as i64 - 1
    }

    pub fn disjoint(&self, other: &Self) -> bool {
        self.a > other.b || other.a > self.b
    }

    /// Smallest interval covering both.
    pub fn union(&self, other: &Self) -> Self {
        Self::of(self.a.min(other.a), self.b.max(other.b))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.a, self.b)
    }
}

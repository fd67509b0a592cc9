//! Symbol sets labelling automaton edges.
//!
//! Stored as sorted, disjoint, non-adjacent closed intervals, so membership
//! is a binary search and two sets with the same members compare equal.

use std::cmp::Ordering;
use std::fmt;

use trellis_core::{Interval, Token, utils::join};

/// Render a symbol code, naming the reserved negative ones.
pub fn symbol_name(symbol: i32) -> String {
    match symbol {
        Token::EOF => "<EOF>".to_string(),
        Token::EPSILON => "<EPSILON>".to_string(),
        _ => symbol.to_string(),
    }
}

/// Set of symbol codes.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set holding a single symbol.
    pub fn of(symbol: i32) -> Self {
        Self::of_range(symbol, symbol)
    }

    /// Set holding `[from, to]`. Empty when `to < from`.
    pub fn of_range(from: i32, to: i32) -> Self {
        let mut set = Self::new();
        set.add_range(from, to);
        set
    }

    pub fn add(&mut self, symbol: i32) {
        self.add_range(symbol, symbol);
    }

    /// Add `[from, to]`, merging with every interval it overlaps or touches.
    pub fn add_range(&mut self, from: i32, to: i32) {
        if to < from {
            return;
        }

        let mut merged = Interval::of(from, to);
        let mut after = Vec::new();
        let old = std::mem::take(&mut self.intervals);
        self.intervals.reserve(old.len() + 1);

        for iv in old {
            if (iv.b as i64) + 1 < merged.a as i64 {
                self.intervals.push(iv);
            } else if (merged.b as i64) + 1 < iv.a as i64 {
                after.push(iv);
            } else {
                merged = merged.union(&iv);
            }
        }

        self.intervals.push(merged);
        self.intervals.extend(after);
    }

    pub fn add_all(&mut self, other: &IntervalSet) {
        for iv in &other.intervals {
            self.add_range(iv.a, iv.b);
        }
    }

    pub fn contains(&self, symbol: i32) -> bool {
        self.intervals
            .binary_search_by(|iv| {
                if iv.b < symbol {
                    Ordering::Less
                } else if iv.a > symbol {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Number of symbols in the set.
    pub fn size(&self) -> usize {
        self.intervals.iter().map(Interval::length).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn min_element(&self) -> Option<i32> {
        self.intervals.first().map(|iv| iv.a)
    }

    pub fn max_element(&self) -> Option<i32> {
        self.intervals.last().map(|iv| iv.b)
    }

    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Symbols of `[min, max]` that are not in this set.
    pub fn complement(&self, min: i32, max: i32) -> IntervalSet {
        let mut result = IntervalSet::new();
        if max < min {
            return result;
        }

        let mut next = min as i64;
        for iv in &self.intervals {
            if (iv.b as i64) < next {
                continue;
            }
            if iv.a > max {
                break;
            }
            if (iv.a as i64) > next {
                result.add_range(next as i32, iv.a - 1);
            }
            next = iv.b as i64 + 1;
        }
        if next <= max as i64 {
            result.add_range(next as i32, max);
        }
        result
    }
}

impl FromIterator<i32> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut set = IntervalSet::new();
        for symbol in iter {
            set.add(symbol);
        }
        set
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intervals.is_empty() {
            return f.write_str("{}");
        }

        let body = join(
            self.intervals.iter().map(|iv| {
                if iv.a == iv.b {
                    symbol_name(iv.a)
                } else {
                    format!("{}..{}", symbol_name(iv.a), symbol_name(iv.b))
                }
            }),
            ", ",
        );

        if self.size() > 1 {
            write!(f, "{{{body}}}")
        } else {
            f.write_str(&body)
        }
    }
}

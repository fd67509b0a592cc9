use trellis_core::{Interval, Token};

use super::*;

#[test]
fn add_merges_overlapping_and_adjacent() {
    let mut set = IntervalSet::new();
    set.add_range(10, 12);
    set.add_range(1, 3);
    set.add(4);
    set.add_range(11, 20);

    assert_eq!(set.intervals(), &[Interval::of(1, 4), Interval::of(10, 20)]);
    assert_eq!(set.size(), 15);
}

#[test]
fn add_bridges_several_intervals() {
    let mut set: IntervalSet = [1, 3, 5, 7].into_iter().collect();
    set.add_range(2, 6);

    assert_eq!(set.intervals(), &[Interval::of(1, 7)]);
}

#[test]
fn empty_range_is_ignored() {
    let set = IntervalSet::of_range(5, 4);
    assert!(set.is_empty());
    assert_eq!(set.size(), 0);
    assert_eq!(set.min_element(), None);
}

#[test]
fn contains_uses_interval_bounds() {
    let set: IntervalSet = [2, 3, 4, 9].into_iter().collect();

    assert!(set.contains(2));
    assert!(set.contains(4));
    assert!(set.contains(9));
    assert!(!set.contains(5));
    assert!(!set.contains(1));
    assert!(!set.contains(10));
}

#[test]
fn min_max_elements() {
    let set: IntervalSet = [7, -1, 3].into_iter().collect();
    assert_eq!(set.min_element(), Some(-1));
    assert_eq!(set.max_element(), Some(7));
}

#[test]
fn complement_within_vocabulary() {
    let set: IntervalSet = [2, 3, 7].into_iter().collect();
    let comp = set.complement(1, 8);

    assert_eq!(
        comp.intervals(),
        &[Interval::of(1, 1), Interval::of(4, 6), Interval::of(8, 8)]
    );
}

#[test]
fn complement_ignores_members_outside_vocabulary() {
    let set: IntervalSet = [Token::EOF, 50].into_iter().collect();
    let comp = set.complement(1, 10);

    assert_eq!(comp.intervals(), &[Interval::of(1, 10)]);
    assert!(IntervalSet::of(3).complement(5, 4).is_empty());
}

#[test]
fn add_all_unions() {
    let mut a = IntervalSet::of_range(1, 2);
    a.add_all(&IntervalSet::of_range(3, 5));
    assert_eq!(a, IntervalSet::of_range(1, 5));
}

#[test]
fn display() {
    assert_eq!(IntervalSet::new().to_string(), "{}");
    assert_eq!(IntervalSet::of(3).to_string(), "3");
    assert_eq!(IntervalSet::of(Token::EOF).to_string(), "<EOF>");

    let set: IntervalSet = [1, 3, 4, 5].into_iter().collect();
    assert_eq!(set.to_string(), "{1, 3..5}");
}

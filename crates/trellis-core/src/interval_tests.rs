use crate::Interval;

#[test]
fn invalid_sentinel() {
    assert!(!Interval::INVALID.is_valid());
    assert!(Interval::of(0, 0).is_valid());
    assert_eq!(Interval::INVALID.length(), 0);
}

#[test]
fn length_of_closed_interval() {
    assert_eq!(Interval::of(3, 5).length(), 3);
    assert_eq!(Interval::of(4, 4).length(), 1);
    assert_eq!(Interval::of(5, 4).length(), 0);
}

#[test]
fn contains_bounds() {
    let iv = Interval::of(10, 12);
    assert!(iv.contains(10));
    assert!(iv.contains(12));
    assert!(!iv.contains(9));
    assert!(!iv.contains(13));
}

#[test]
fn adjacency_and_disjointness() {
    let a = Interval::of(1, 3);
    let b = Interval::of(4, 6);
    let c = Interval::of(3, 8);

    assert!(a.adjacent(&b));
    assert!(b.adjacent(&a));
    assert!(a.disjoint(&b));
    assert!(!a.disjoint(&c));
    assert!(!a.adjacent(&c));
    assert_eq!(a.union(&c), Interval::of(1, 8));
}

#[test]
fn adjacency_at_integer_limits() {
    let top = Interval::of(i32::MAX, i32::MAX);
    let bottom = Interval::of(i32::MIN, i32::MIN);
    assert!(!top.adjacent(&bottom));
}

#[test]
fn display() {
    assert_eq!(Interval::of(2, 7).to_string(), "2..7");
}

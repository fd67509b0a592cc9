use trellis_core::Token;

use super::*;
use crate::{PrecedencePredicate, Predicate};

fn one_of_each() -> Vec<Transition> {
    vec![
        Transition::epsilon(1),
        Transition::range(2, 10, 20),
        Transition::rule(3, 4, 0, 30),
        Transition::predicate(4, 1, 0, false),
        Transition::atom(5, 7),
        Transition::action(6, 1, Some(2), false),
        Transition::set(7, [3, 4, 9].into_iter().collect()),
        Transition::not_set(8, [3, 4].into_iter().collect()),
        Transition::wildcard(9),
        Transition::precedence(10, 2),
    ]
}

#[test]
fn kind_codes_are_fixed() {
    let codes: Vec<_> = one_of_each()
        .iter()
        .map(|t| (t.kind().name(), t.serialization_type()))
        .collect();

    assert_eq!(
        codes,
        vec![
            ("EPSILON", 1),
            ("RANGE", 2),
            ("RULE", 3),
            ("PREDICATE", 4),
            ("ATOM", 5),
            ("ACTION", 6),
            ("SET", 7),
            ("NOT_SET", 8),
            ("WILDCARD", 9),
            ("PRECEDENCE", 10),
        ]
    );
}

#[test]
fn kind_from_code() {
    for kind in TransitionKind::ALL {
        assert_eq!(TransitionKind::from_code(kind.code()), Some(kind));
    }
    assert_eq!(TransitionKind::from_code(0), None);
    assert_eq!(TransitionKind::from_code(11), None);
}

#[test]
fn is_epsilon_exactly_for_non_consuming_kinds() {
    let epsilon: Vec<_> = one_of_each()
        .into_iter()
        .filter(Transition::is_epsilon)
        .map(|t| t.kind())
        .collect();

    assert_eq!(
        epsilon,
        vec![
            TransitionKind::Epsilon,
            TransitionKind::Rule,
            TransitionKind::Predicate,
            TransitionKind::Action,
        ]
    );
}

#[test]
fn non_consuming_edges_never_match() {
    let edges = [
        Transition::epsilon(1),
        Transition::rule(1, 0, 0, 2),
        Transition::predicate(1, 0, 0, true),
        Transition::action(1, 0, None, false),
        Transition::precedence(1, 0),
    ];
    let bounds = [(1, 10), (0, 0), (-1, 100), (5, 3)];

    for edge in &edges {
        for symbol in -2..=12 {
            for (min, max) in bounds {
                assert!(!edge.matches(symbol, min, max), "{edge} matched {symbol}");
            }
        }
    }
}

#[test]
fn atom_matches_label_only() {
    let edge = Transition::atom(0, 7);
    assert!(edge.matches(7, 1, 10));
    assert!(!edge.matches(6, 1, 10));
    assert!(Transition::atom(0, Token::EOF).matches(Token::EOF, 1, 10));
}

#[test]
fn range_matches_inclusive_bounds() {
    let edge = Transition::range(0, 10, 20);
    assert!(edge.matches(10, 1, 100));
    assert!(edge.matches(20, 1, 100));
    assert!(!edge.matches(9, 1, 100));
    assert!(!edge.matches(21, 1, 100));
}

#[test]
fn set_matches_members() {
    let edge = Transition::set(0, [3, 4, 9].into_iter().collect());
    assert!(edge.matches(4, 1, 10));
    assert!(edge.matches(9, 1, 10));
    assert!(!edge.matches(5, 1, 10));
}

#[test]
fn not_set_is_bounded_by_vocabulary() {
    let edge = Transition::not_set(0, [3, 4].into_iter().collect());

    assert!(edge.matches(1, 1, 10));
    assert!(edge.matches(10, 1, 10));
    assert!(!edge.matches(3, 1, 10));
    assert!(!edge.matches(0, 1, 10));
    assert!(!edge.matches(11, 1, 10));
    assert!(!edge.matches(Token::EOF, 1, 10));
}

#[test]
fn wildcard_is_bounded_by_vocabulary() {
    let edge = Transition::wildcard(0);
    assert!(edge.matches(1, 1, 10));
    assert!(edge.matches(10, 1, 10));
    assert!(!edge.matches(Token::EOF, 1, 10));
    assert!(!edge.matches(11, 1, 10));
}

#[test]
fn targets_and_follow_state() {
    let targets: Vec<_> = one_of_each().iter().map(Transition::target).collect();
    assert_eq!(targets, (1..=10).collect::<Vec<_>>());

    assert_eq!(Transition::rule(3, 4, 0, 30).follow_state(), Some(30));
    assert_eq!(Transition::epsilon(3).follow_state(), None);
}

#[test]
fn labels() {
    assert_eq!(Transition::atom(0, 5).label(), Some(IntervalSet::of(5)));
    assert_eq!(
        Transition::range(0, 1, 3).label(),
        Some(IntervalSet::of_range(1, 3))
    );
    assert_eq!(
        Transition::not_set(0, IntervalSet::of(4)).label(),
        Some(IntervalSet::of(4))
    );
    assert_eq!(Transition::wildcard(0).label(), None);
    assert_eq!(Transition::epsilon(0).label(), None);
}

#[test]
fn semantic_contexts() {
    assert_eq!(
        Transition::predicate(0, 2, 1, true).semantic_context(),
        SemanticContext::Predicate(Predicate::new(2, 1, true))
    );
    assert_eq!(
        Transition::precedence(0, 3).semantic_context(),
        SemanticContext::Precedence(PrecedencePredicate::new(3))
    );
    assert!(Transition::atom(0, 1).semantic_context().is_none());
}

#[test]
fn display() {
    let rendered: Vec<_> = one_of_each().iter().map(|t| t.to_string()).collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    epsilon
    10..20
    rule_4
    pred_1:0
    7
    action_1:2
    {3..4, 9}
    ~{3..4}
    .
    2 >= _p
    ");
}

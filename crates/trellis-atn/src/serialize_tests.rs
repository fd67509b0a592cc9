use trellis_core::Token;

use super::*;

fn record(kind: u32, target: StateId, arg1: u32, arg2: u32, arg3: u32) -> SerializedEdge {
    SerializedEdge {
        kind,
        target,
        arg1,
        arg2,
        arg3,
    }
}

#[test]
fn decode_each_kind() {
    let sets = vec![IntervalSet::of_range(1, 3), IntervalSet::of(8)];

    let decoded: Vec<_> = [
        record(1, 10, 0, 0, 0),
        record(2, 11, 97, 122, 0),
        record(3, 40, 12, 2, 0),
        record(4, 13, 2, 0, 1),
        record(5, 14, 6, 0, 0),
        record(6, 15, 1, ACTION_INDEX_NONE, 0),
        record(7, 16, 1, 0, 0),
        record(8, 17, 0, 0, 0),
        record(9, 18, 0, 0, 0),
        record(10, 19, 3, 0, 0),
    ]
    .iter()
    .map(|r| Transition::from_serialized(r, &sets).unwrap())
    .collect();

    assert_eq!(
        decoded,
        vec![
            Transition::epsilon(10),
            Transition::range(11, 97, 122),
            Transition::rule(12, 2, 0, 40),
            Transition::predicate(13, 2, 0, true),
            Transition::atom(14, 6),
            Transition::action(15, 1, None, false),
            Transition::set(16, IntervalSet::of(8)),
            Transition::not_set(17, IntervalSet::of_range(1, 3)),
            Transition::wildcard(18),
            Transition::precedence(19, 3),
        ]
    );
}

#[test]
fn decode_eof_flags() {
    let atom = Transition::from_serialized(&record(5, 1, 0, 0, 1), &[]).unwrap();
    assert_eq!(atom, Transition::atom(1, Token::EOF));

    let range = Transition::from_serialized(&record(2, 1, 0, 5, 1), &[]).unwrap();
    assert_eq!(range, Transition::range(1, Token::EOF, 5));
}

#[test]
fn rule_record_swaps_target_and_follow_state() {
    let edge = Transition::rule(12, 2, 0, 40);
    let rec = edge.to_serialized(|_| 0).unwrap();

    assert_eq!(rec.target, 40);
    assert_eq!(rec.arg1, 12);
    assert_eq!(edge.target(), 12);
    assert_eq!(edge.follow_state(), Some(40));
}

#[test]
fn encode_then_decode_with_set_table() {
    let mut table: Vec<IntervalSet> = Vec::new();
    let edges = [
        Transition::set(3, [1, 2, 3].into_iter().collect()),
        Transition::atom(4, Token::EOF),
        Transition::action(5, 0, Some(4), true),
        Transition::range(6, Token::EOF, 9),
    ];

    for edge in &edges {
        let rec = edge
            .to_serialized(|set| {
                table.push(set.clone());
                (table.len() - 1) as u32
            })
            .unwrap();
        assert_eq!(rec.kind, edge.serialization_type() as u32);
        assert_eq!(&Transition::from_serialized(&rec, &table).unwrap(), edge);
    }
}

#[test]
fn unknown_kind_is_an_error() {
    let err = Transition::from_serialized(&record(0, 1, 0, 0, 0), &[]).unwrap_err();
    assert_eq!(err, AtnError::UnknownTransitionKind(0));

    let err = Transition::from_serialized(&record(300, 1, 0, 0, 0), &[]).unwrap_err();
    assert_eq!(err.to_string(), "unknown transition kind code 300");
}

#[test]
fn set_index_out_of_range() {
    let err = Transition::from_serialized(&record(7, 1, 2, 0, 0), &[IntervalSet::of(1)])
        .unwrap_err();
    assert_eq!(err, AtnError::SetIndexOutOfRange { index: 2, len: 1 });
}

#[test]
fn negative_symbols_cannot_be_encoded() {
    let err = Transition::atom(0, Token::EPSILON)
        .to_serialized(|_| 0)
        .unwrap_err();
    assert_eq!(err, AtnError::UnencodableSymbol(Token::EPSILON));
}

#[test]
fn action_index_colliding_with_marker_is_rejected() {
    let err = Transition::action(3, 1, Some(ACTION_INDEX_NONE), false)
        .to_serialized(|_| 0)
        .unwrap_err();
    assert_eq!(err, AtnError::ActionIndexOutOfRange(ACTION_INDEX_NONE));

    let err = Transition::action(3, 1, Some(u32::MAX), false)
        .to_serialized(|_| 0)
        .unwrap_err();
    assert_eq!(err, AtnError::ActionIndexOutOfRange(u32::MAX));

    let rec = Transition::action(3, 1, Some(ACTION_INDEX_NONE - 1), false)
        .to_serialized(|_| 0)
        .unwrap();
    assert_eq!(
        Transition::from_serialized(&rec, &[]).unwrap(),
        Transition::action(3, 1, Some(ACTION_INDEX_NONE - 1), false)
    );
}

#[test]
fn oversized_arguments_are_rejected_on_decode() {
    let too_big = i32::MAX as u32 + 1;
    let cases = [
        record(2, 1, too_big, 5, 0),
        record(2, 1, 0, too_big, 0),
        record(3, 1, 12, 2, too_big),
        record(5, 1, too_big, 0, 0),
        record(10, 1, u32::MAX, 0, 0),
    ];

    let errors: Vec<_> = cases
        .iter()
        .map(|r| Transition::from_serialized(r, &[]).unwrap_err())
        .collect();

    assert_eq!(
        errors,
        vec![
            AtnError::SymbolOutOfRange(too_big),
            AtnError::SymbolOutOfRange(too_big),
            AtnError::SymbolOutOfRange(too_big),
            AtnError::SymbolOutOfRange(too_big),
            AtnError::SymbolOutOfRange(u32::MAX),
        ]
    );

    let atom = Transition::from_serialized(&record(5, 1, i32::MAX as u32, 0, 0), &[]).unwrap();
    assert_eq!(atom, Transition::atom(1, i32::MAX));
}

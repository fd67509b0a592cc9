//! Edge records of the persisted automaton format.
//!
//! The grammar compiler writes each edge as `(kind, target, arg1, arg2,
//! arg3)` next to a shared table of symbol sets. The meaning of the three
//! arguments depends on the kind:
//!
//! | kind       | arg1            | arg2         | arg3                 |
//! |------------|-----------------|--------------|----------------------|
//! | Range      | from            | to           | 1 = from is EOF      |
//! | Rule       | rule start      | rule index   | precedence           |
//! | Predicate  | rule index      | pred index   | 1 = ctx dependent    |
//! | Atom       | label           | -            | 1 = label is EOF     |
//! | Action     | rule index      | action index | 1 = ctx dependent    |
//! | Set/NotSet | set table index | -            | -                    |
//! | Precedence | precedence      | -            | -                    |
//!
//! For rule calls the record's `target` is the follow state, while the
//! decoded edge targets the rule start state.

use trellis_core::Token;

use crate::{ActionIndex, AtnError, AtnResult, IntervalSet, StateId, Transition, TransitionKind};

/// `arg2` value of an action edge without an action index. Real action
/// indices must stay below it.
pub const ACTION_INDEX_NONE: u32 = 0xFFFF;

/// One edge as stored in the persisted automaton.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SerializedEdge {
    pub kind: u32,
    pub target: StateId,
    pub arg1: u32,
    pub arg2: u32,
    pub arg3: u32,
}

impl SerializedEdge {
    pub fn new(kind: TransitionKind, target: StateId, arg1: u32, arg2: u32, arg3: u32) -> Self {
        Self {
            kind: kind.code() as u32,
            target,
            arg1,
            arg2,
            arg3,
        }
    }
}

fn encode_symbol(symbol: i32) -> AtnResult<u32> {
    u32::try_from(symbol).map_err(|_| AtnError::UnencodableSymbol(symbol))
}

fn decode_symbol(arg: u32) -> AtnResult<i32> {
    i32::try_from(arg).map_err(|_| AtnError::SymbolOutOfRange(arg))
}

fn encode_action_index(index: Option<ActionIndex>) -> AtnResult<u32> {
    match index {
        None => Ok(ACTION_INDEX_NONE),
        Some(i) if i >= ACTION_INDEX_NONE => Err(AtnError::ActionIndexOutOfRange(i)),
        Some(i) => Ok(i),
    }
}

fn lookup_set(sets: &[IntervalSet], index: u32) -> AtnResult<IntervalSet> {
    sets.get(index as usize)
        .cloned()
        .ok_or(AtnError::SetIndexOutOfRange {
            index,
            len: sets.len(),
        })
}

impl Transition {
    /// Rebuild an edge from its persisted record.
    pub fn from_serialized(edge: &SerializedEdge, sets: &[IntervalSet]) -> AtnResult<Self> {
        let kind = u8::try_from(edge.kind)
            .ok()
            .and_then(TransitionKind::from_code)
            .ok_or(AtnError::UnknownTransitionKind(edge.kind))?;
        let SerializedEdge {
            target,
            arg1,
            arg2,
            arg3,
            ..
        } = *edge;

        let transition = match kind {
            TransitionKind::Epsilon => Transition::epsilon(target),
            TransitionKind::Range => {
                let from = if arg3 != 0 {
                    Token::EOF
                } else {
                    decode_symbol(arg1)?
                };
                Transition::range(target, from, decode_symbol(arg2)?)
            }
            TransitionKind::Rule => Transition::rule(arg1, arg2, decode_symbol(arg3)?, target),
            TransitionKind::Predicate => Transition::predicate(target, arg1, arg2, arg3 != 0),
            TransitionKind::Atom => {
                let label = if arg3 != 0 {
                    Token::EOF
                } else {
                    decode_symbol(arg1)?
                };
                Transition::atom(target, label)
            }
            TransitionKind::Action => {
                let action_index = (arg2 != ACTION_INDEX_NONE).then_some(arg2);
                Transition::action(target, arg1, action_index, arg3 != 0)
            }
            TransitionKind::Set => Transition::set(target, lookup_set(sets, arg1)?),
            TransitionKind::NotSet => Transition::not_set(target, lookup_set(sets, arg1)?),
            TransitionKind::Wildcard => Transition::wildcard(target),
            TransitionKind::Precedence => Transition::precedence(target, decode_symbol(arg1)?),
        };
        Ok(transition)
    }

    /// Produce the persisted record for this edge.
    ///
    /// `set_index` maps a set label to its position in the automaton's set
    /// table.
    pub fn to_serialized(
        &self,
        mut set_index: impl FnMut(&IntervalSet) -> u32,
    ) -> AtnResult<SerializedEdge> {
        let kind = self.kind();
        let record = match self {
            Transition::Epsilon { target, .. } | Transition::Wildcard { target } => {
                SerializedEdge::new(kind, *target, 0, 0, 0)
            }
            Transition::Range { target, from, to } => {
                let to = encode_symbol(*to)?;
                if *from == Token::EOF {
                    SerializedEdge::new(kind, *target, 0, to, 1)
                } else {
                    SerializedEdge::new(kind, *target, encode_symbol(*from)?, to, 0)
                }
            }
            Transition::Rule {
                target,
                rule_index,
                precedence,
                follow_state,
            } => SerializedEdge::new(
                kind,
                *follow_state,
                *target,
                *rule_index,
                encode_symbol(*precedence)?,
            ),
            Transition::Predicate(p) => SerializedEdge::new(
                kind,
                p.target,
                p.rule_index,
                p.pred_index,
                p.is_ctx_dependent as u32,
            ),
            Transition::Atom { target, label } => {
                if *label == Token::EOF {
                    SerializedEdge::new(kind, *target, 0, 0, 1)
                } else {
                    SerializedEdge::new(kind, *target, encode_symbol(*label)?, 0, 0)
                }
            }
            Transition::Action {
                target,
                rule_index,
                action_index,
                is_ctx_dependent,
            } => SerializedEdge::new(
                kind,
                *target,
                *rule_index,
                encode_action_index(*action_index)?,
                *is_ctx_dependent as u32,
            ),
            Transition::Set { target, set } | Transition::NotSet { target, set } => {
                SerializedEdge::new(kind, *target, set_index(set), 0, 0)
            }
            Transition::Precedence(p) => {
                SerializedEdge::new(kind, p.target, encode_symbol(p.precedence)?, 0, 0)
            }
        };
        Ok(record)
    }
}

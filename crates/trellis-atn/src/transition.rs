//! Transition taxonomy - the edges of the recognizer automaton.
//!
//! Edges are owned by the loaded automaton and immutable once built. Each
//! kind answers two questions for the recognizer: does it consume a symbol
//! (`is_epsilon`), and if so, which ones (`matches`).

use std::fmt;

use crate::interval_set::symbol_name;
use crate::{
    ActionIndex, IntervalSet, PrecedencePredicateTransition, PredIndex, PredicateTransition,
    RuleIndex, SemanticContext, StateId,
};

/// Discriminant for transition variants.
///
/// The numeric values are the kind codes of the persisted automaton format
/// and must not change.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum TransitionKind {
    Epsilon = 1,
    Range = 2,
    Rule = 3,
    Predicate = 4,
    Atom = 5,
    Action = 6,
    Set = 7,
    NotSet = 8,
    Wildcard = 9,
    Precedence = 10,
}

impl TransitionKind {
    pub const ALL: [TransitionKind; 10] = [
        Self::Epsilon,
        Self::Range,
        Self::Rule,
        Self::Predicate,
        Self::Atom,
        Self::Action,
        Self::Set,
        Self::NotSet,
        Self::Wildcard,
        Self::Precedence,
    ];

    /// Decode a persisted kind code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Epsilon),
            2 => Some(Self::Range),
            3 => Some(Self::Rule),
            4 => Some(Self::Predicate),
            5 => Some(Self::Atom),
            6 => Some(Self::Action),
            7 => Some(Self::Set),
            8 => Some(Self::NotSet),
            9 => Some(Self::Wildcard),
            10 => Some(Self::Precedence),
            _ => None,
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Upper-case name used in automaton dumps.
    pub fn name(self) -> &'static str {
        match self {
            Self::Epsilon => "EPSILON",
            Self::Range => "RANGE",
            Self::Rule => "RULE",
            Self::Predicate => "PREDICATE",
            Self::Atom => "ATOM",
            Self::Action => "ACTION",
            Self::Set => "SET",
            Self::NotSet => "NOT_SET",
            Self::Wildcard => "WILDCARD",
            Self::Precedence => "PRECEDENCE",
        }
    }
}

/// A directed edge to `target`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Transition {
    /// Moves without consuming input.
    Epsilon {
        target: StateId,
        /// Set on the edge that leaves a left-recursive rule's outermost
        /// precedence loop: the index of that rule.
        outermost_precedence_return: Option<RuleIndex>,
    },

    /// Matches one symbol in `[from, to]`.
    Range { target: StateId, from: i32, to: i32 },

    /// Calls a rule. `target` is the rule's start state; the recognizer
    /// continues at `follow_state` once the rule returns.
    Rule {
        target: StateId,
        rule_index: RuleIndex,
        precedence: i32,
        follow_state: StateId,
    },

    Predicate(PredicateTransition),

    /// Matches exactly `label`.
    Atom { target: StateId, label: i32 },

    /// Runs an embedded action. `action_index` is unset for actions the
    /// generated recognizer handles inline.
    Action {
        target: StateId,
        rule_index: RuleIndex,
        action_index: Option<ActionIndex>,
        is_ctx_dependent: bool,
    },

    Set { target: StateId, set: IntervalSet },

    /// Matches any in-vocabulary symbol outside `set`.
    NotSet { target: StateId, set: IntervalSet },

    /// Matches any in-vocabulary symbol.
    Wildcard { target: StateId },

    Precedence(PrecedencePredicateTransition),
}

impl Transition {
    pub fn epsilon(target: StateId) -> Self {
        Self::Epsilon {
            target,
            outermost_precedence_return: None,
        }
    }

    pub fn atom(target: StateId, label: i32) -> Self {
        Self::Atom { target, label }
    }

    pub fn range(target: StateId, from: i32, to: i32) -> Self {
        Self::Range { target, from, to }
    }

    pub fn set(target: StateId, set: IntervalSet) -> Self {
        Self::Set { target, set }
    }

    pub fn not_set(target: StateId, set: IntervalSet) -> Self {
        Self::NotSet { target, set }
    }

    pub fn wildcard(target: StateId) -> Self {
        Self::Wildcard { target }
    }

    pub fn rule(
        rule_start: StateId,
        rule_index: RuleIndex,
        precedence: i32,
        follow_state: StateId,
    ) -> Self {
        Self::Rule {
            target: rule_start,
            rule_index,
            precedence,
            follow_state,
        }
    }

    pub fn predicate(
        target: StateId,
        rule_index: RuleIndex,
        pred_index: PredIndex,
        is_ctx_dependent: bool,
    ) -> Self {
        Self::Predicate(PredicateTransition::new(
            target,
            rule_index,
            pred_index,
            is_ctx_dependent,
        ))
    }

    pub fn action(
        target: StateId,
        rule_index: RuleIndex,
        action_index: Option<ActionIndex>,
        is_ctx_dependent: bool,
    ) -> Self {
        Self::Action {
            target,
            rule_index,
            action_index,
            is_ctx_dependent,
        }
    }

    pub fn precedence(target: StateId, precedence: i32) -> Self {
        Self::Precedence(PrecedencePredicateTransition::new(target, precedence))
    }

    #[inline]
    pub fn kind(&self) -> TransitionKind {
        match self {
            Self::Epsilon { .. } => TransitionKind::Epsilon,
            Self::Range { .. } => TransitionKind::Range,
            Self::Rule { .. } => TransitionKind::Rule,
            Self::Predicate(_) => TransitionKind::Predicate,
            Self::Atom { .. } => TransitionKind::Atom,
            Self::Action { .. } => TransitionKind::Action,
            Self::Set { .. } => TransitionKind::Set,
            Self::NotSet { .. } => TransitionKind::NotSet,
            Self::Wildcard { .. } => TransitionKind::Wildcard,
            Self::Precedence(_) => TransitionKind::Precedence,
        }
    }

    /// Kind code of the persisted automaton format.
    #[inline]
    pub fn serialization_type(&self) -> u8 {
        self.kind().code()
    }

    #[inline]
    pub fn target(&self) -> StateId {
        match self {
            Self::Epsilon { target, .. }
            | Self::Range { target, .. }
            | Self::Rule { target, .. }
            | Self::Atom { target, .. }
            | Self::Action { target, .. }
            | Self::Set { target, .. }
            | Self::NotSet { target, .. }
            | Self::Wildcard { target } => *target,
            Self::Predicate(p) => p.target,
            Self::Precedence(p) => p.target,
        }
    }

    /// Return state of a rule call, `None` for every other kind.
    #[inline]
    pub fn follow_state(&self) -> Option<StateId> {
        match self {
            Self::Rule { follow_state, .. } => Some(*follow_state),
            _ => None,
        }
    }

    /// True for edges that never consume a symbol: epsilon, rule call,
    /// predicate and action edges.
    ///
    /// Check this before calling `matches`.
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        matches!(
            self,
            Self::Epsilon { .. } | Self::Rule { .. } | Self::Predicate(_) | Self::Action { .. }
        )
    }

    /// Whether the edge consumes `symbol`, given the vocabulary bounds
    /// `[min_vocab_symbol, max_vocab_symbol]`.
    ///
    /// Negated sets and wildcards only match inside the vocabulary.
    /// Non-consuming kinds never match.
    pub fn matches(&self, symbol: i32, min_vocab_symbol: i32, max_vocab_symbol: i32) -> bool {
        let in_vocab = min_vocab_symbol <= symbol && symbol <= max_vocab_symbol;
        match self {
            Self::Atom { label, .. } => symbol == *label,
            Self::Range { from, to, .. } => *from <= symbol && symbol <= *to,
            Self::Set { set, .. } => set.contains(symbol),
            Self::NotSet { set, .. } => in_vocab && !set.contains(symbol),
            Self::Wildcard { .. } => in_vocab,
            Self::Epsilon { .. }
            | Self::Rule { .. }
            | Self::Predicate(_)
            | Self::Action { .. }
            | Self::Precedence(_) => false,
        }
    }

    /// Symbols labelling a consuming edge. For negated sets this is the
    /// excluded set. Wildcards and non-consuming edges have no label.
    pub fn label(&self) -> Option<IntervalSet> {
        match self {
            Self::Atom { label, .. } => Some(IntervalSet::of(*label)),
            Self::Range { from, to, .. } => Some(IntervalSet::of_range(*from, *to)),
            Self::Set { set, .. } | Self::NotSet { set, .. } => Some(set.clone()),
            _ => None,
        }
    }

    /// Semantic condition guarding the edge. `SemanticContext::None` for
    /// unguarded kinds.
    pub fn semantic_context(&self) -> SemanticContext {
        match self {
            Self::Predicate(p) => p.predicate().into(),
            Self::Precedence(p) => p.predicate().into(),
            _ => SemanticContext::None,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epsilon { .. } => f.write_str("epsilon"),
            Self::Range { from, to, .. } => {
                write!(f, "{}..{}", symbol_name(*from), symbol_name(*to))
            }
            Self::Rule { rule_index, .. } => write!(f, "rule_{rule_index}"),
            Self::Predicate(p) => fmt::Display::fmt(p, f),
            Self::Atom { label, .. } => f.write_str(&symbol_name(*label)),
            Self::Action {
                rule_index,
                action_index,
                ..
            } => match action_index {
                Some(a) => write!(f, "action_{rule_index}:{a}"),
                None => write!(f, "action_{rule_index}:-1"),
            },
            Self::Set { set, .. } => fmt::Display::fmt(set, f),
            Self::NotSet { set, .. } => write!(f, "~{set}"),
            Self::Wildcard { .. } => f.write_str("."),
            Self::Precedence(p) => fmt::Display::fmt(p, f),
        }
    }
}

//! Index types shared with the loaded automaton.
//!
//! Plain aliases: the automaton owns the states and rules, this crate only
//! refers to them.

/// Index of an automaton state.
pub type StateId = u32;

/// Index of a grammar rule, in declaration order.
pub type RuleIndex = u32;

/// Index of a semantic predicate within its rule.
pub type PredIndex = u32;

/// Index of an embedded action within its rule.
pub type ActionIndex = u32;

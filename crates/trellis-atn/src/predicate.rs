//! Predicate edges.
//!
//! A predicate edge only describes the check; `predicate()` hands out a
//! fresh descriptor on every call and the edge keeps no evaluation state.

use std::fmt;

use crate::{PrecedencePredicate, PredIndex, Predicate, RuleIndex, StateId};

/// Edge guarded by a `{...}?` predicate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PredicateTransition {
    pub target: StateId,
    pub rule_index: RuleIndex,
    pub pred_index: PredIndex,
    pub is_ctx_dependent: bool,
}

impl PredicateTransition {
    pub fn new(
        target: StateId,
        rule_index: RuleIndex,
        pred_index: PredIndex,
        is_ctx_dependent: bool,
    ) -> Self {
        Self {
            target,
            rule_index,
            pred_index,
            is_ctx_dependent,
        }
    }

    #[inline]
    pub fn predicate(&self) -> Predicate {
        Predicate::new(self.rule_index, self.pred_index, self.is_ctx_dependent)
    }
}

impl fmt::Display for PredicateTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pred_{}:{}", self.rule_index, self.pred_index)
    }
}

/// Edge guarded by the precedence level of a left-recursive rule.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PrecedencePredicateTransition {
    pub target: StateId,
    pub precedence: i32,
}

impl PrecedencePredicateTransition {
    pub fn new(target: StateId, precedence: i32) -> Self {
        Self { target, precedence }
    }

    #[inline]
    pub fn predicate(&self) -> PrecedencePredicate {
        PrecedencePredicate::new(self.precedence)
    }
}

impl fmt::Display for PrecedencePredicateTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} >= _p", self.precedence)
    }
}

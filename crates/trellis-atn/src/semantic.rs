//! Semantic-predicate descriptors.
//!
//! Predicate edges manufacture these values for the prediction engine,
//! which owns evaluation (including looking up the live rule-context stack
//! for context-dependent predicates). The descriptors are plain `Copy`
//! values with field-wise equality.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{PredIndex, RuleIndex};

/// A `{...}?` predicate embedded in a rule.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Predicate {
    pub rule_index: RuleIndex,
    pub pred_index: PredIndex,
    /// Evaluation needs the rule context the predicate appears in.
    pub is_ctx_dependent: bool,
}

impl Predicate {
    /// Always-true placeholder: no rule, no predicate index.
    pub const NONE: Self = Self {
        rule_index: RuleIndex::MAX,
        pred_index: PredIndex::MAX,
        is_ctx_dependent: false,
    };

    pub fn new(rule_index: RuleIndex, pred_index: PredIndex, is_ctx_dependent: bool) -> Self {
        Self {
            rule_index,
            pred_index,
            is_ctx_dependent,
        }
    }

    /// True for the `NONE` placeholder.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.rule_index == RuleIndex::MAX && self.pred_index == PredIndex::MAX
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("{true}?");
        }
        write!(f, "{{{}:{}}}?", self.rule_index, self.pred_index)
    }
}

/// Precedence check of a left-recursive rule: `precedence >= _p`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct PrecedencePredicate {
    pub precedence: i32,
}

impl PrecedencePredicate {
    pub fn new(precedence: i32) -> Self {
        Self { precedence }
    }
}

impl fmt::Display for PrecedencePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}>=prec}}?", self.precedence)
    }
}

/// Any semantic condition guarding an automaton path.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum SemanticContext {
    /// No condition; the path is always viable.
    #[default]
    None,
    Predicate(Predicate),
    Precedence(PrecedencePredicate),
}

impl SemanticContext {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Whether evaluation needs the live rule context.
    ///
    /// Precedence checks always read the current precedence level.
    pub fn is_ctx_dependent(&self) -> bool {
        match self {
            Self::None => false,
            Self::Predicate(p) => p.is_ctx_dependent,
            Self::Precedence(_) => true,
        }
    }
}

impl From<Predicate> for SemanticContext {
    fn from(p: Predicate) -> Self {
        Self::Predicate(p)
    }
}

impl From<PrecedencePredicate> for SemanticContext {
    fn from(p: PrecedencePredicate) -> Self {
        Self::Precedence(p)
    }
}

impl fmt::Display for SemanticContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("{true}?"),
            Self::Predicate(p) => fmt::Display::fmt(p, f),
            Self::Precedence(p) => fmt::Display::fmt(p, f),
        }
    }
}

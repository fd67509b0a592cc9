#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Automaton edges for trellis recognizers.
//!
//! This crate contains:
//! - The closed transition taxonomy (`Transition`, `TransitionKind`)
//! - Symbol sets labelling set edges (`IntervalSet`)
//! - Semantic-predicate descriptors produced by predicate edges
//! - The edge record codec of the persisted automaton format
//!
//! Evaluating predicates and choosing between edges is the prediction
//! engine's job; nothing here inspects a live parse.

mod error;
mod ids;
mod interval_set;
mod predicate;
mod semantic;
mod serialize;
mod transition;

#[cfg(test)]
mod interval_set_tests;
#[cfg(test)]
mod semantic_tests;
#[cfg(test)]
mod serialize_tests;
#[cfg(test)]
mod transition_tests;

pub use error::{AtnError, AtnResult};
pub use ids::{ActionIndex, PredIndex, RuleIndex, StateId};
pub use interval_set::{IntervalSet, symbol_name};
pub use predicate::{PrecedencePredicateTransition, PredicateTransition};
pub use semantic::{PrecedencePredicate, Predicate, SemanticContext};
pub use serialize::{ACTION_INDEX_NONE, SerializedEdge};
pub use transition::{Transition, TransitionKind};

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Parse-tree construction for trellis recognizers.
//!
//! The recognizer (prediction engine plus generated rule functions) walks
//! the automaton and reports what it did: rule entered, token matched,
//! token rejected, speculative match undone, rule left. This crate turns
//! those reports into a concrete syntax tree that survives malformed input.
//!
//! - `tree`: the node arena, queries, listeners and renderings
//! - `builder`: the rule-context stack the recognizer drives
//! - `trace`: zero-cost construction tracing
//! - `config`: knobs shared by the builder and the tracer

pub mod builder;
pub mod config;
pub mod trace;
pub mod tree;


pub use builder::TreeBuilder;
pub use config::Config;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use tree::{
    Node, NodeDump, NodeId, NodeKind, ParseTree, ParseTreeListener, ParseTreeWalker, RuleContext,
    RuleNames, TerminalNode,
};

pub use trellis_atn::{RuleIndex, StateId};
pub use trellis_core::{Interval, Token, TokenType};

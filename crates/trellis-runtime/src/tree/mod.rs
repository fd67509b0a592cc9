//! Rule-context trees.
//!
//! Nodes live in an append-only arena (`ParseTree`) and are addressed by
//! `NodeId`. Children are owned through their parent's child list; the
//! parent link is a plain index and never keeps anything alive, so dropping
//! the arena releases the whole tree at once.

mod arena;
mod invariants;
mod listener;
mod names;
mod node;
mod render;


pub use arena::ParseTree;
pub use listener::{ParseTreeListener, ParseTreeWalker};
pub use names::RuleNames;
pub use node::{Node, NodeId, NodeKind, RuleContext, TerminalNode};
pub use render::NodeDump;

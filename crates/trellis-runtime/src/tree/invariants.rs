//! Invariant checks excluded from coverage reports.
//!
//! Mutations trust the recognizer to pass rule contexts of this tree.
//! Anything else is a caller bug and panics here.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Node, NodeId, ParseTree, RuleContext};

impl ParseTree {
    pub(crate) fn ensure_node_mut(&mut self, id: NodeId) -> &mut Node {
        let len = self.nodes.len();
        self.nodes.get_mut(id.index()).unwrap_or_else(|| {
            panic!("ParseTree: node {id:?} not found (tree has {len} nodes)")
        })
    }

    pub(crate) fn ensure_rule(&self, ctx: NodeId) -> &RuleContext {
        match self.nodes.get(ctx.index()) {
            Some(Node::Rule(rc)) => rc,
            Some(other) => panic!(
                "ParseTree: node {ctx:?} is a {:?} node, expected a rule context",
                other.kind()
            ),
            None => panic!("ParseTree: node {ctx:?} not found"),
        }
    }

    pub(crate) fn ensure_rule_mut(&mut self, ctx: NodeId) -> &mut RuleContext {
        match self.nodes.get_mut(ctx.index()) {
            Some(Node::Rule(rc)) => rc,
            Some(other) => panic!(
                "ParseTree: node {ctx:?} is a {:?} node, expected a rule context",
                other.kind()
            ),
            None => panic!("ParseTree: node {ctx:?} not found"),
        }
    }

    /// `child` must not be `ctx` or one of its ancestors.
    pub(crate) fn ensure_acyclic(&self, ctx: NodeId, child: NodeId) {
        let mut current = Some(ctx);
        while let Some(id) = current {
            if id == child {
                panic!("ParseTree: adding node {child:?} under {ctx:?} would create a cycle");
            }
            current = self.parent(id);
        }
    }
}

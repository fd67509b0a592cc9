//! Listener callbacks and the depth-first walker that drives them.

use trellis_atn::RuleIndex;

use super::{Node, NodeId, ParseTree};

/// Callbacks fired while walking a finished tree. All default to no-ops.
///
/// `enter_rule`/`exit_rule` carry the rule index so a grammar-specific
/// listener can dispatch to per-rule handlers; they only fire for contexts
/// that belong to a rule.
#[allow(unused_variables)]
pub trait ParseTreeListener {
    fn visit_terminal(&mut self, tree: &ParseTree, node: NodeId) {}

    fn visit_error_node(&mut self, tree: &ParseTree, node: NodeId) {}

    fn enter_every_rule(&mut self, tree: &ParseTree, ctx: NodeId) {}

    fn exit_every_rule(&mut self, tree: &ParseTree, ctx: NodeId) {}

    fn enter_rule(&mut self, tree: &ParseTree, ctx: NodeId, rule_index: RuleIndex) {}

    fn exit_rule(&mut self, tree: &ParseTree, ctx: NodeId, rule_index: RuleIndex) {}
}

/// Depth-first walker.
///
/// Rule contexts get `enter_every_rule` then `enter_rule` before their
/// children, and `exit_rule` then `exit_every_rule` after them.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseTreeWalker;

enum Step {
    Visit(NodeId),
    Exit(NodeId),
}

impl ParseTreeWalker {
    pub const DEFAULT: Self = Self;

    pub fn walk<L: ParseTreeListener + ?Sized>(&self, listener: &mut L, tree: &ParseTree, root: NodeId) {
        // Explicit stack: deeply nested input must not overflow the call stack.
        let mut stack = vec![Step::Visit(root)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Visit(id) => match tree.node(id) {
                    Some(Node::Terminal(_)) => listener.visit_terminal(tree, id),
                    Some(Node::Error(_)) => listener.visit_error_node(tree, id),
                    Some(Node::Rule(rc)) => {
                        listener.enter_every_rule(tree, id);
                        tree.enter_rule(id, listener);
                        stack.push(Step::Exit(id));
                        stack.extend(rc.children().iter().rev().map(|&c| Step::Visit(c)));
                    }
                    None => {}
                },
                Step::Exit(id) => {
                    tree.exit_rule(id, listener);
                    listener.exit_every_rule(tree, id);
                }
            }
        }
    }
}

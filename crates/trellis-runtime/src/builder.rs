//! The rule-context stack a recognizer drives while it parses.
//!
//! Generated rule functions call `enter_rule` on entry, `enter_alt` once
//! the predicted alternative is known, `consume` per matched token and
//! `exit_rule` on the way out. Recovery code reports skipped input with
//! `recover`, backtracking undoes speculative matches with `retract`.
//!
//! The current context is the top of the stack; popping follows the
//! parent link, so the arena itself is the stack.

use trellis_atn::{RuleIndex, StateId};
use trellis_core::{ScopeGuard, Token, guard};

use crate::Config;
use crate::trace::{NoopTracer, Tracer};
use crate::tree::{NodeId, ParseTree};

/// Builds one parse tree from construction events.
pub struct TreeBuilder<T: Tracer = NoopTracer> {
    tree: ParseTree,
    current: Option<NodeId>,
    root: Option<NodeId>,
    /// Tokens consumed so far, newest last. The newest becomes the stop
    /// token of every rule exited after it.
    consumed: Vec<Token>,
    build_parse_trees: bool,
    tracer: T,
}

impl TreeBuilder<NoopTracer> {
    pub fn new(config: &Config) -> Self {
        Self::with_tracer(config, NoopTracer)
    }
}

impl<T: Tracer> TreeBuilder<T> {
    pub fn with_tracer(config: &Config, tracer: T) -> Self {
        Self {
            tree: ParseTree::new(),
            current: None,
            root: None,
            consumed: Vec::new(),
            build_parse_trees: config.build_parse_trees,
            tracer,
        }
    }

    /// Open an activation of `rule_index` starting at `start`.
    ///
    /// The first activation becomes the root. Later ones are parented to
    /// the current context and, when building trees, appended to it.
    pub fn enter_rule(
        &mut self,
        rule_index: RuleIndex,
        invoking_state: Option<StateId>,
        start: Token,
    ) -> NodeId {
        self.tracer.trace_enter_rule(rule_index, &start);

        let ctx = self
            .tree
            .create_rule(self.current, invoking_state, rule_index);
        self.tree.set_start(ctx, start);

        match self.current {
            Some(parent) if self.build_parse_trees => {
                self.tree.add_child(parent, ctx);
            }
            Some(_) => {}
            None => {
                if self.root.is_none() {
                    self.root = Some(ctx);
                }
            }
        }

        self.current = Some(ctx);
        ctx
    }

    /// `enter_rule`, with `exit_rule` run when the returned guard drops.
    ///
    /// The guard derefs to the builder, so the rule body keeps driving
    /// construction through it. An early return or a panic unwinding out of
    /// the body still closes the activation.
    pub fn rule_scope<'a>(
        &'a mut self,
        rule_index: RuleIndex,
        invoking_state: Option<StateId>,
        start: Token,
    ) -> ScopeGuard<&'a mut Self, impl FnOnce(&mut &'a mut Self)> {
        self.enter_rule(rule_index, invoking_state, start);
        guard(self, |builder: &mut &'a mut Self| {
            builder.exit_rule();
        })
    }

    /// Close the current activation and return to its parent.
    ///
    /// Stop is the last token consumed so far, which precedes the start of
    /// a rule that matched nothing.
    pub fn exit_rule(&mut self) -> Option<NodeId> {
        let ctx = self.current?;
        let stop = self.consumed.last();
        if let Some(stop) = stop {
            self.tree.set_stop(ctx, stop.clone());
        }
        self.tracer.trace_exit_rule(stop);

        self.current = self.tree.parent(ctx);
        Some(ctx)
    }

    /// Relabel the current activation as alternative `alt_number`.
    ///
    /// A fresh context of the same rule takes over parent, invoking state
    /// and span, and replaces the old one in the parent's child list.
    /// Call before the alternative appends anything; children of the
    /// replaced context do not carry over.
    pub fn enter_alt(&mut self, alt_number: u32) -> Option<NodeId> {
        let generic = self.current?;

        let labeled = match self.tree.rule_index(generic) {
            Some(rule_index) => self.tree.create_rule(None, None, rule_index),
            None => self.tree.create(None, None),
        };
        self.tree.copy_from(labeled, generic);
        self.tree.set_alt_number(labeled, alt_number);

        if let Some(parent) = self.tree.parent(generic) {
            if self.tree.children(parent).last() == Some(&generic) {
                self.tree.remove_last_child(parent);
                self.tree.add_child(parent, labeled);
            }
        }
        if self.root == Some(generic) {
            self.root = Some(labeled);
        }

        self.tracer.trace_enter_alt(alt_number);
        self.current = Some(labeled);
        Some(labeled)
    }

    /// Record a matched token. Returns its terminal node when trees are
    /// built.
    pub fn consume(&mut self, token: Token) -> Option<NodeId> {
        self.tracer.trace_consume(&token);
        self.consumed.push(token.clone());

        let ctx = self.current.filter(|_| self.build_parse_trees)?;
        Some(self.tree.add_token(ctx, token))
    }

    /// Record a token skipped by error recovery as an error node.
    pub fn recover(&mut self, token: Token) -> Option<NodeId> {
        self.tracer.trace_error_node(&token);
        self.consumed.push(token.clone());

        let ctx = self.current.filter(|_| self.build_parse_trees)?;
        Some(self.tree.add_error_node(ctx, token))
    }

    /// Undo the most recent append to the current context.
    ///
    /// Retracting a terminal or error node also un-consumes its token, so
    /// the stop of the enclosing rule falls back to the token before it.
    pub fn retract(&mut self) -> Option<NodeId> {
        let ctx = self.current?;
        self.tracer.trace_retract();

        let node = self.tree.remove_last_child(ctx)?;
        if let Some(token) = self.tree.symbol(node) {
            if self.consumed.last() == Some(token) {
                self.consumed.pop();
            }
        }
        Some(node)
    }

    #[inline]
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    #[inline]
    pub fn tree(&self) -> &ParseTree {
        &self.tree
    }

    #[inline]
    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn into_tree(self) -> ParseTree {
        self.tree
    }

    /// The finished tree and its root.
    pub fn finish(self) -> (ParseTree, Option<NodeId>) {
        (self.tree, self.root)
    }
}

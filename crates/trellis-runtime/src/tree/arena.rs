//! The parse-tree arena and the rule-context operations.
//!
//! Construction is append-only: nodes are pushed and never deallocated while
//! the tree lives. Retracting a child only drops it from its parent's child
//! list, the node itself stays in the arena unreferenced.
//!
//! Every read is total. Out-of-range indices, terminal nodes asked for
//! children and unset spans come back as `None`, empty, or
//! `Interval::INVALID`.

use trellis_atn::{RuleIndex, StateId};
use trellis_core::{Interval, Token, TokenType};

use super::{Node, NodeId, NodeKind, ParseTreeListener, RuleContext, TerminalNode};

/// Arena holding the nodes of one or more parse trees.
#[derive(Debug, Clone, Default)]
pub struct ParseTree {
    pub(crate) nodes: Vec<Node>,
}

impl ParseTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes ever created, including retracted ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Begin a generic rule activation. `parent = None` marks a root.
    ///
    /// The parent is recorded but the new context is not appended to its
    /// children; use `add_child` for that.
    pub fn create(&mut self, parent: Option<NodeId>, invoking_state: Option<StateId>) -> NodeId {
        self.push(Node::Rule(RuleContext {
            parent,
            invoking_state,
            ..RuleContext::default()
        }))
    }

    /// Begin an activation of rule `rule_index`.
    pub fn create_rule(
        &mut self,
        parent: Option<NodeId>,
        invoking_state: Option<StateId>,
        rule_index: RuleIndex,
    ) -> NodeId {
        let ctx = self.create(parent, invoking_state);
        self.ensure_rule_mut(ctx).rule_index = Some(rule_index);
        ctx
    }

    /// Copy parent, invoking state, start and stop from `src` into `dst`.
    ///
    /// Rule index, alternative label and children of `dst` are left alone,
    /// so a labeled-alternative context can take over a generic one.
    pub fn copy_from(&mut self, dst: NodeId, src: NodeId) {
        let from = self.ensure_rule(src);
        let (parent, invoking_state) = (from.parent, from.invoking_state);
        let (start, stop) = (from.start.clone(), from.stop.clone());

        let to = self.ensure_rule_mut(dst);
        to.parent = parent;
        to.invoking_state = invoking_state;
        to.start = start;
        to.stop = stop;
    }

    /// Wrap `token` in a terminal node appended to `ctx`.
    pub fn add_token(&mut self, ctx: NodeId, token: Token) -> NodeId {
        let node = self.push(Node::Terminal(TerminalNode {
            token,
            parent: Some(ctx),
        }));
        self.ensure_rule_mut(ctx).children.push(node);
        node
    }

    /// Append an existing node (usually a nested rule context) to `ctx` and
    /// make `ctx` its parent.
    ///
    /// Panics if `child` is `ctx` itself or one of its ancestors.
    pub fn add_child(&mut self, ctx: NodeId, child: NodeId) -> NodeId {
        self.ensure_acyclic(ctx, child);
        self.ensure_node_mut(child).set_parent(Some(ctx));
        self.ensure_rule_mut(ctx).children.push(child);
        child
    }

    /// Wrap a rejected `token` in an error node appended to `ctx`.
    pub fn add_error_node(&mut self, ctx: NodeId, token: Token) -> NodeId {
        let node = self.push(Node::Error(TerminalNode {
            token,
            parent: Some(ctx),
        }));
        self.ensure_rule_mut(ctx).children.push(node);
        node
    }

    /// Undo the most recent append to `ctx`. No-op without children.
    ///
    /// Returns the detached node. Its parent link is left as it was, so a
    /// context retracted for relabeling still knows where it came from.
    pub fn remove_last_child(&mut self, ctx: NodeId) -> Option<NodeId> {
        self.ensure_rule_mut(ctx).children.pop()
    }

    pub fn set_start(&mut self, ctx: NodeId, token: Token) {
        self.ensure_rule_mut(ctx).start = Some(token);
    }

    pub fn set_stop(&mut self, ctx: NodeId, token: Token) {
        self.ensure_rule_mut(ctx).stop = Some(token);
    }

    pub fn set_alt_number(&mut self, ctx: NodeId, alt_number: u32) {
        self.ensure_rule_mut(ctx).alt_number = Some(alt_number);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.node(id).map(Node::kind)
    }

    /// The rule context behind `id`, if it is one.
    #[inline]
    pub fn context(&self, id: NodeId) -> Option<&RuleContext> {
        self.node(id).and_then(Node::as_rule)
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    /// Token of a terminal or error node.
    #[inline]
    pub fn symbol(&self, id: NodeId) -> Option<&Token> {
        self.node(id).and_then(Node::symbol)
    }

    /// Children in derivation order. Empty for terminals.
    #[inline]
    pub fn children(&self, ctx: NodeId) -> &[NodeId] {
        match self.context(ctx) {
            Some(rc) => &rc.children,
            None => &[],
        }
    }

    #[inline]
    pub fn child(&self, ctx: NodeId, i: usize) -> Option<NodeId> {
        self.children(ctx).get(i).copied()
    }

    #[inline]
    pub fn child_count(&self, ctx: NodeId) -> usize {
        self.children(ctx).len()
    }

    /// Direct terminal children (error nodes included) carrying `token_type`.
    fn tokens_of_type(&self, ctx: NodeId, token_type: TokenType) -> impl Iterator<Item = NodeId> {
        self.children(ctx).iter().copied().filter(move |&child| {
            self.symbol(child)
                .is_some_and(|tok| tok.token_type == token_type)
        })
    }

    /// The `i`-th direct terminal child of type `token_type`.
    ///
    /// Nested rule contexts are not searched.
    pub fn token(&self, ctx: NodeId, token_type: TokenType, i: usize) -> Option<NodeId> {
        self.tokens_of_type(ctx, token_type).nth(i)
    }

    /// All direct terminal children of type `token_type`, in order.
    pub fn tokens(&self, ctx: NodeId, token_type: TokenType) -> Vec<NodeId> {
        self.tokens_of_type(ctx, token_type).collect()
    }

    fn contexts_of_rule(&self, ctx: NodeId, rule_index: RuleIndex) -> impl Iterator<Item = NodeId> {
        self.children(ctx).iter().copied().filter(move |&child| {
            self.context(child)
                .is_some_and(|rc| rc.rule_index == Some(rule_index))
        })
    }

    /// The `i`-th direct child context of rule `rule_index`.
    pub fn rule_context(&self, ctx: NodeId, rule_index: RuleIndex, i: usize) -> Option<NodeId> {
        self.contexts_of_rule(ctx, rule_index).nth(i)
    }

    /// All direct child contexts of rule `rule_index`, in order.
    pub fn rule_contexts(&self, ctx: NodeId, rule_index: RuleIndex) -> Vec<NodeId> {
        self.contexts_of_rule(ctx, rule_index).collect()
    }

    pub fn start(&self, ctx: NodeId) -> Option<&Token> {
        self.context(ctx).and_then(RuleContext::start)
    }

    pub fn stop(&self, ctx: NodeId) -> Option<&Token> {
        self.context(ctx).and_then(RuleContext::stop)
    }

    pub fn invoking_state(&self, ctx: NodeId) -> Option<StateId> {
        self.context(ctx).and_then(RuleContext::invoking_state)
    }

    pub fn rule_index(&self, ctx: NodeId) -> Option<RuleIndex> {
        self.context(ctx).and_then(RuleContext::rule_index)
    }

    pub fn alt_number(&self, ctx: NodeId) -> Option<u32> {
        self.context(ctx).and_then(RuleContext::alt_number)
    }

    /// A context with no invoking state: a root, or one that was never
    /// entered through a rule call.
    pub fn is_empty_context(&self, ctx: NodeId) -> bool {
        self.context(ctx).is_some_and(|rc| rc.invoking_state.is_none())
    }

    /// Number of ancestors, following parent links.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(p) = current {
            depth += 1;
            current = self.parent(p);
        }
        depth
    }

    /// Token span of a node.
    ///
    /// Terminals span their own token. Rule contexts span `[start, stop]`
    /// and yield `Interval::INVALID` until both are set.
    pub fn source_interval(&self, id: NodeId) -> Interval {
        match self.node(id) {
            Some(Node::Terminal(t)) | Some(Node::Error(t)) => {
                Interval::of(t.token.index, t.token.index)
            }
            Some(Node::Rule(rc)) => match (&rc.start, &rc.stop) {
                (Some(start), Some(stop)) => Interval::of(start.index, stop.index),
                _ => Interval::INVALID,
            },
            None => Interval::INVALID,
        }
    }

    /// Concatenated text of all terminals below `id`.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            match self.node(current) {
                Some(Node::Terminal(t)) | Some(Node::Error(t)) => {
                    out.push_str(&t.token.display_text())
                }
                Some(Node::Rule(rc)) => stack.extend(rc.children.iter().rev()),
                None => {}
            }
        }
        out
    }

    // ------------------------------------------------------------------
    // Listener dispatch
    // ------------------------------------------------------------------

    /// Notify `listener` that the rule behind `ctx` is being entered.
    ///
    /// Generic contexts (no rule index) have nothing to report.
    pub fn enter_rule<L: ParseTreeListener + ?Sized>(&self, ctx: NodeId, listener: &mut L) {
        if let Some(rule_index) = self.rule_index(ctx) {
            listener.enter_rule(self, ctx, rule_index);
        }
    }

    /// Counterpart of `enter_rule`.
    pub fn exit_rule<L: ParseTreeListener + ?Sized>(&self, ctx: NodeId, listener: &mut L) {
        if let Some(rule_index) = self.rule_index(ctx) {
            listener.exit_rule(self, ctx, rule_index);
        }
    }
}

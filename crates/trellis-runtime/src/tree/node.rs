//! Node types stored in the parse-tree arena.

use trellis_atn::{RuleIndex, StateId};
use trellis_core::Token;

/// Handle to a node of a `ParseTree`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position in the arena, in creation order.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Discriminant for node variants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NodeKind {
    Terminal,
    Error,
    Rule,
}

/// A matched (or rejected) token in the tree.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TerminalNode {
    pub(crate) token: Token,
    pub(crate) parent: Option<NodeId>,
}

impl TerminalNode {
    #[inline]
    pub fn symbol(&self) -> &Token {
        &self.token
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// One rule activation.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RuleContext {
    pub(crate) parent: Option<NodeId>,
    /// State whose rule-call edge started this activation. `None` for roots.
    pub(crate) invoking_state: Option<StateId>,
    /// `None` for generic contexts that no rule has claimed.
    pub(crate) rule_index: Option<RuleIndex>,
    /// Labeled alternative this activation was relabeled to.
    pub(crate) alt_number: Option<u32>,
    pub(crate) start: Option<Token>,
    pub(crate) stop: Option<Token>,
    pub(crate) children: Vec<NodeId>,
}

impl RuleContext {
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn invoking_state(&self) -> Option<StateId> {
        self.invoking_state
    }

    #[inline]
    pub fn rule_index(&self) -> Option<RuleIndex> {
        self.rule_index
    }

    #[inline]
    pub fn alt_number(&self) -> Option<u32> {
        self.alt_number
    }

    #[inline]
    pub fn start(&self) -> Option<&Token> {
        self.start.as_ref()
    }

    #[inline]
    pub fn stop(&self) -> Option<&Token> {
        self.stop.as_ref()
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A parse-tree node.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Node {
    Terminal(TerminalNode),
    /// A token that did not fit the grammar, kept so the tree still records
    /// what was consumed.
    Error(TerminalNode),
    Rule(RuleContext),
}

impl Node {
    #[inline]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Terminal(_) => NodeKind::Terminal,
            Node::Error(_) => NodeKind::Error,
            Node::Rule(_) => NodeKind::Rule,
        }
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Node::Terminal(t) | Node::Error(t) => t.parent,
            Node::Rule(ctx) => ctx.parent,
        }
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        match self {
            Node::Terminal(t) | Node::Error(t) => t.parent = parent,
            Node::Rule(ctx) => ctx.parent = parent,
        }
    }

    /// Token wrapped by terminal and error nodes.
    #[inline]
    pub fn symbol(&self) -> Option<&Token> {
        match self {
            Node::Terminal(t) | Node::Error(t) => Some(&t.token),
            Node::Rule(_) => None,
        }
    }

    #[inline]
    pub fn as_rule(&self) -> Option<&RuleContext> {
        match self {
            Node::Rule(ctx) => Some(ctx),
            _ => None,
        }
    }
}

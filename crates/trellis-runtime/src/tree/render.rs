//! Debug renderings of rule contexts and trees.

use serde::Serialize;
use trellis_core::utils::{array_to_string, escape_whitespace};
use trellis_core::{Interval, Token};

use super::{Node, NodeId, ParseTree, RuleNames};

/// Placeholder for contexts whose rule name cannot be resolved.
const UNKNOWN_RULE: &str = "n/a";

/// Serializable snapshot of a subtree, for tooling that wants plain data.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeDump {
    Rule {
        rule: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        alt: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        span: Option<Interval>,
        children: Vec<NodeDump>,
    },
    Terminal {
        token: Token,
    },
    Error {
        token: Token,
    },
}

impl ParseTree {
    fn rule_name<'n, R: RuleNames + ?Sized>(&self, ctx: NodeId, names: &'n R) -> &'n str {
        self.rule_index(ctx)
            .and_then(|r| names.rule_name(r))
            .unwrap_or(UNKNOWN_RULE)
    }

    /// Rule names from `ctx` up to its root, innermost first.
    pub fn rule_invocation_stack<R: RuleNames + ?Sized>(&self, ctx: NodeId, names: &R) -> Vec<String> {
        let mut stack = Vec::new();
        let mut current = Some(ctx);
        while let Some(id) = current {
            if self.context(id).is_none() {
                break;
            }
            stack.push(self.rule_name(id, names).to_string());
            current = self.parent(id);
        }
        stack
    }

    /// `RuleContext[outer, ..., inner]{start=i, stop=j}`.
    ///
    /// Unset span ends render as `none`.
    pub fn to_info_string<R: RuleNames + ?Sized>(&self, ctx: NodeId, names: &R) -> String {
        let mut rules = self.rule_invocation_stack(ctx, names);
        rules.reverse();

        let index = |tok: Option<&Token>| tok.map_or("none".to_string(), |t| t.index.to_string());
        format!(
            "RuleContext{}{{start={}, stop={}}}",
            array_to_string(rules),
            index(self.start(ctx)),
            index(self.stop(ctx))
        )
    }

    /// Label of a single node: rule name (with `:alt` when relabeled) or
    /// token text.
    pub fn node_text<R: RuleNames + ?Sized>(&self, id: NodeId, names: &R) -> String {
        match self.node(id) {
            Some(Node::Rule(rc)) => {
                let name = self.rule_name(id, names);
                match rc.alt_number {
                    Some(alt) => format!("{name}:{alt}"),
                    None => name.to_string(),
                }
            }
            Some(Node::Terminal(t)) | Some(Node::Error(t)) => t.token.display_text(),
            None => String::new(),
        }
    }

    /// LISP-style rendering: `(rule child child ...)`, leaves bare.
    pub fn to_string_tree<R: RuleNames + ?Sized>(&self, id: NodeId, names: &R) -> String {
        let mut out = String::new();
        self.write_string_tree(id, names, &mut out);
        out
    }

    fn write_string_tree<R: RuleNames + ?Sized>(&self, id: NodeId, names: &R, out: &mut String) {
        let text = escape_whitespace(&self.node_text(id, names), false);
        let children = self.children(id);
        if children.is_empty() {
            out.push_str(&text);
            return;
        }

        out.push('(');
        out.push_str(&text);
        for &child in children {
            out.push(' ');
            self.write_string_tree(child, names, out);
        }
        out.push(')');
    }

    /// Snapshot the subtree rooted at `id`. `None` for foreign ids.
    pub fn dump<R: RuleNames + ?Sized>(&self, id: NodeId, names: &R) -> Option<NodeDump> {
        let dump = match self.node(id)? {
            Node::Terminal(t) => NodeDump::Terminal {
                token: t.token.clone(),
            },
            Node::Error(t) => NodeDump::Error {
                token: t.token.clone(),
            },
            Node::Rule(rc) => {
                let span = self.source_interval(id);
                NodeDump::Rule {
                    rule: self.rule_name(id, names).to_string(),
                    alt: rc.alt_number,
                    span: span.is_valid().then_some(span),
                    children: rc
                        .children
                        .iter()
                        .filter_map(|&child| self.dump(child, names))
                        .collect(),
                }
            }
        };
        Some(dump)
    }
}

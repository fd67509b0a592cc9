//! Tracing for tree construction.
//!
//! `TreeBuilder` is generic over a `Tracer`. With `NoopTracer` every hook is
//! an empty `#[inline(always)]` function and the calls compile away.
//!
//! Display-only state (the stack of open rule names) lives in the tracer,
//! not in the builder. `trace_enter_rule` pushes, `trace_exit_rule` pops.

use trellis_atn::RuleIndex;
use trellis_core::utils::escape_whitespace;
use trellis_core::{Colors, Token};

use crate::Config;
use crate::tree::RuleNames;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Rule entry/exit, relabels, error nodes and retractions. Tokens by type.
    #[default]
    Default,
    /// Adds a line per matched token and shows token text.
    Verbose,
    /// Tokens rendered in full, with index and position.
    VeryVerbose,
}

/// Hooks fired by `TreeBuilder`, one per construction event.
pub trait Tracer {
    /// A rule activation began at `start`.
    fn trace_enter_rule(&mut self, rule_index: RuleIndex, start: &Token);

    /// The innermost activation ended. `stop` is the last consumed token.
    fn trace_exit_rule(&mut self, stop: Option<&Token>);

    /// The innermost activation was relabeled to a labeled alternative.
    fn trace_enter_alt(&mut self, alt_number: u32);

    /// A token was matched.
    fn trace_consume(&mut self, token: &Token);

    /// A token was rejected and kept as an error node.
    fn trace_error_node(&mut self, token: &Token);

    /// The most recent append was undone.
    fn trace_retract(&mut self);
}

/// Tracer that does nothing and costs nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter_rule(&mut self, _rule_index: RuleIndex, _start: &Token) {}

    #[inline(always)]
    fn trace_exit_rule(&mut self, _stop: Option<&Token>) {}

    #[inline(always)]
    fn trace_enter_alt(&mut self, _alt_number: u32) {}

    #[inline(always)]
    fn trace_consume(&mut self, _token: &Token) {}

    #[inline(always)]
    fn trace_error_node(&mut self, _token: &Token) {}

    #[inline(always)]
    fn trace_retract(&mut self) {}
}

const INDENT: &str = "  ";

/// Tracer that collects an indented construction log.
pub struct PrintTracer<'n> {
    names: &'n dyn RuleNames,
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
    /// Names of the open activations, innermost last.
    open_rules: Vec<String>,
}

impl<'n> PrintTracer<'n> {
    pub fn new(names: &'n dyn RuleNames, config: &Config) -> Self {
        Self {
            names,
            verbosity: config.verbosity,
            colors: config.colors,
            lines: Vec::new(),
            open_rules: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn push_line(&mut self, body: String) {
        let indent = INDENT.repeat(self.open_rules.len());
        self.lines.push(format!("{indent}{body}"));
    }

    fn format_token(&self, token: &Token) -> String {
        let c = &self.colors;
        match self.verbosity {
            Verbosity::Default => format!("<{}>", token.token_type),
            Verbosity::Verbose => format!(
                "<{}> {}",
                token.token_type,
                c.token(&escape_whitespace(&token.display_text(), false))
            ),
            Verbosity::VeryVerbose => c.token(&token.to_string()),
        }
    }

    /// ` @i` when the verbosity shows token positions.
    fn format_position(&self, token: Option<&Token>) -> String {
        match (self.verbosity, token) {
            (Verbosity::Default, _) | (_, None) => String::new(),
            (_, Some(token)) => {
                let c = &self.colors;
                format!(" {}", c.dim(&format!("@{}", token.index)))
            }
        }
    }

    fn current_rule(&self) -> &str {
        self.open_rules.last().map_or("?", |s| s.as_str())
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_enter_rule(&mut self, rule_index: RuleIndex, start: &Token) {
        let c = self.colors;
        let name = self
            .names
            .rule_name(rule_index)
            .map_or_else(|| format!("rule_{rule_index}"), str::to_string);
        let line = format!(
            "enter {}{}",
            c.rule(&name),
            self.format_position(Some(start))
        );
        self.push_line(line);
        self.open_rules.push(name);
    }

    fn trace_exit_rule(&mut self, stop: Option<&Token>) {
        let c = self.colors;
        let name = self.open_rules.pop().unwrap_or_else(|| "?".to_string());
        let line = format!(
            "exit {}{}",
            c.rule(&name),
            self.format_position(stop)
        );
        self.push_line(line);
    }

    fn trace_enter_alt(&mut self, alt_number: u32) {
        let c = self.colors;
        let label = format!("{}:{alt_number}", self.current_rule());
        let line = format!("alt {}", c.rule(&label));
        self.push_line(line);
    }

    fn trace_consume(&mut self, token: &Token) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        let line = format!("match {}", self.format_token(token));
        self.push_line(line);
    }

    fn trace_error_node(&mut self, token: &Token) {
        let c = self.colors;
        let line = format!(
            "{} {}",
            c.error("error"),
            self.format_token(token)
        );
        self.push_line(line);
    }

    fn trace_retract(&mut self) {
        let c = self.colors;
        let line = c.dim("retract");
        self.push_line(line);
    }
}

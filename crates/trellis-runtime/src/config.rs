//! Settings shared by the tree builder and the tracer.

use trellis_core::Colors;

use crate::trace::Verbosity;

/// Construction settings.
#[derive(Clone, Debug)]
pub struct Config {
    /// Link contexts and tokens into a tree. When off, contexts are still
    /// created and their spans recorded, but no child lists are filled.
    pub(crate) build_parse_trees: bool,
    /// Detail level for `PrintTracer`.
    pub(crate) verbosity: Verbosity,
    /// Color configuration for trace output.
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_parse_trees: true,
            verbosity: Verbosity::default(),
            colors: Colors::OFF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether contexts and tokens are linked into a tree.
    pub fn build_parse_trees(mut self, value: bool) -> Self {
        self.build_parse_trees = value;
        self
    }

    /// Set the trace verbosity.
    pub fn verbosity(mut self, value: Verbosity) -> Self {
        self.verbosity = value;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn builds_parse_trees(&self) -> bool {
        self.build_parse_trees
    }
}

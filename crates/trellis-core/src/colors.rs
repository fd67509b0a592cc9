//! Highlighting for trace output.

const RULE: &str = "\x1b[34m";
const TOKEN: &str = "\x1b[32m";
const ERROR: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Wraps rendered fragments in ANSI escapes when enabled.
///
/// Each fragment kind has a fixed color: rule names blue, token text green,
/// error markers red, positions and markers dim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub const ON: Self = Self { enabled: true };
    pub const OFF: Self = Self { enabled: false };

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn wrap(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn rule(&self, text: &str) -> String {
        self.wrap(RULE, text)
    }

    pub fn token(&self, text: &str) -> String {
        self.wrap(TOKEN, text)
    }

    pub fn error(&self, text: &str) -> String {
        self.wrap(ERROR, text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.wrap(DIM, text)
    }
}

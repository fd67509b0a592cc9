//! Tokens as handed over by the lexing layer.
//!
//! The runtime only relies on the stable stream index and the token type;
//! text and position are carried along for rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::escape_whitespace;

/// Token type code. Negative values are reserved for special symbols.
pub type TokenType = i32;

/// A matched input symbol.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Position in the token stream, `-1` when not taken from a stream.
    pub index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

impl Token {
    /// End-of-input symbol.
    pub const EOF: TokenType = -1;
    /// Symbol used by analysis for "nothing consumed".
    pub const EPSILON: TokenType = -2;
    pub const INVALID_TYPE: TokenType = 0;
    pub const MIN_USER_TOKEN_TYPE: TokenType = 1;

    pub fn new(token_type: TokenType, index: i32) -> Self {
        Self {
            token_type,
            index,
            text: None,
            line: 0,
            column: 0,
        }
    }

    pub fn eof(index: i32) -> Self {
        Self::new(Self::EOF, index)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.token_type == Self::EOF
    }

    /// Text as shown in trees: the token text, `<EOF>`, or the type code.
    pub fn display_text(&self) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None if self.is_eof() => "<EOF>".to_string(),
            None => format!("<{}>", self.token_type),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[@{},'{}',<{}>,{}:{}]",
            self.index,
            escape_whitespace(&self.display_text(), false),
            self.token_type,
            self.line,
            self.column
        )
    }
}

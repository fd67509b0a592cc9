//! Errors raised while decoding or encoding persisted automaton edges.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AtnError {
    /// The edge record names a kind code outside the transition table.
    #[error("unknown transition kind code {0}")]
    UnknownTransitionKind(u32),

    /// A set or not-set edge points past the end of the set table.
    #[error("set index {index} out of range (automaton has {len} sets)")]
    SetIndexOutOfRange { index: u32, len: usize },

    /// A symbol that the edge record cannot carry (negative, other than EOF).
    #[error("symbol {0} cannot be encoded in an edge record")]
    UnencodableSymbol(i32),

    /// An edge record argument too large for a symbol or precedence.
    #[error("edge argument {0} does not fit a signed symbol")]
    SymbolOutOfRange(u32),

    /// An action index that collides with the "no index" marker.
    #[error("action index {0} out of range (must be below 0xFFFF)")]
    ActionIndexOutOfRange(u32),
}

pub type AtnResult<T> = std::result::Result<T, AtnError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrindError {
    /// Malformed hex input (selector or CLI argument).
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Selector decoded to the wrong number of bytes.
    #[error("selector must be 4 bytes, got {0}")]
    SelectorLength(usize),

    /// A 32-byte word was expected.
    #[error("word must be 32 bytes, got {0}")]
    WordLength(usize),

    /// Word does not fit in a u64.
    #[error("word overflows u64: leading 24 bytes are not zero")]
    WordOverflow,

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Search stopped at its attempt limit without a match.
    #[error("no match after {attempts} attempts")]
    NotFound { attempts: u64 },

    /// Report serialisation failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

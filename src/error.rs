//! Error types for marktree

use thiserror::Error;

/// Result type alias for marktree operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Errors from loading token-set configuration
///
/// Only the configuration edge can fail. The rewrite path itself is
/// infallible: a token whose pattern does not compile contributes no
/// matches and everything else proceeds.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("invalid value for field: {0}")]
    InvalidField(String),
}

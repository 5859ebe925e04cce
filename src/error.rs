//! Error handling module for calctui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Arithmetic failures are not errors at this level; the engine shows them
//! on the display instead.

use thiserror::Error;

/// Main error type for calctui
#[derive(Error, Debug)]
pub enum CalcTuiError {
    /// IO errors (terminal, log and config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A key script contained something that does not map to a key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for calctui operations
pub type Result<T> = std::result::Result<T, CalcTuiError>;

impl CalcTuiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid key error
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        Self::InvalidKey(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

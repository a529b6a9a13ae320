//! Error types for blocklight
//!
//! Highlighting itself is total: malformed input produces empty span
//! lists, never errors. Only configuration loading can fail.

use thiserror::Error;

/// Result type alias for blocklight operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting configuration errors
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("theme parse error: {0}")]
    ThemeParse(#[from] toml::de::Error),

    #[error("bad color literal: {0}")]
    BadColor(String),

    #[error("unknown token type in theme: {0}")]
    UnknownToken(String),
}

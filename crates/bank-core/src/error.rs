//! Core error type.
//!
//! Sub-crates define their own error enums; `bank-sim` wraps them all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `bank-core`.
pub type CoreResult<T> = Result<T, CoreError>;

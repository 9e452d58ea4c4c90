//! Shared error type for parsing core values.
//!
//! Sub-crates define their own error enums and wrap `TwinError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TwinError {
    #[error("unknown work order status {0:?}")]
    UnknownStatus(String),

    #[error("unknown resource kind {0:?}")]
    UnknownResourceKind(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sy-core`.
pub type TwinResult<T> = Result<T, TwinError>;

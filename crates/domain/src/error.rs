//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A market is not a two-letter country code.
    #[error("invalid market code: {0}")]
    InvalidMarket(String),

    /// A catalog identifier is invalid or empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// A page size of zero was requested.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

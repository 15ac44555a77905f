//! Token store port

use async_trait::async_trait;

/// Errors raised by a token store backend.
#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Single slot holding the last access token obtained.
///
/// `set` overwrites unconditionally; there is no history and no expiry
/// bookkeeping.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the stored token, or `None` if nothing was ever stored.
    async fn get(&self) -> Result<Option<String>, TokenStoreError>;

    /// Replaces the stored token.
    async fn set(&self, token: &str) -> Result<(), TokenStoreError>;
}

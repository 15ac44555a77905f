//! In-memory token store.
//!
//! Holds the single current access token behind a `tokio` lock. Used for
//! ephemeral sessions and as the store double in tests, where the write
//! counter lets a test assert how many exchanges actually stored a token.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{TokenStore, TokenStoreError};

/// Thread-safe in-memory token slot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    slot: Arc<RwLock<Option<String>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `token`.
    ///
    /// The seed does not count as a write.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(token.into()))),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `set` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get(&self) -> Result<Option<String>, TokenStoreError> {
        let slot = self.slot.read().await;
        Ok(slot.clone())
    }

    async fn set(&self, token: &str) -> Result<(), TokenStoreError> {
        let mut slot = self.slot.write().await;
        *slot = Some(token.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_starts_empty() {
        let store = InMemoryTokenStore::new();
        assert_eq!(store.get().await.unwrap(), None);
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let store = InMemoryTokenStore::new();

        store.set("A").await.unwrap();
        store.set("B").await.unwrap();

        assert_eq!(store.get().await.unwrap().as_deref(), Some("B"));
        assert_eq!(store.write_count(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let store = InMemoryTokenStore::with_token("seed");
        let other = store.clone();

        other.set("fresh").await.unwrap();

        assert_eq!(store.get().await.unwrap().as_deref(), Some("fresh"));
        assert_eq!(store.write_count(), 1);
    }
}

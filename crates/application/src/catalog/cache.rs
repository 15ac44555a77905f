//! In-memory staleness window for catalog reads

use std::time::Duration;

use moka::future::Cache;

/// Keeps successful responses for a fixed time-to-live.
///
/// A zero TTL disables caching entirely. Only successes are inserted by
/// callers, so a failed fetch is retried on the next call.
#[derive(Clone)]
pub struct StaleCache<V: Clone + Send + Sync + 'static> {
    inner: Option<Cache<String, V>>,
}

impl<V: Clone + Send + Sync + 'static> StaleCache<V> {
    /// Creates a cache whose entries go stale after `ttl`.
    #[must_use]
    pub fn new(ttl: Duration, capacity: u64) -> Self {
        let inner = (!ttl.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build()
        });
        Self { inner }
    }

    /// Returns a fresh entry for `key`.
    pub async fn get(&self, key: &str) -> Option<V> {
        match &self.inner {
            Some(cache) => cache.get(key).await,
            None => None,
        }
    }

    /// Stores `value` under `key`.
    pub async fn insert(&self, key: String, value: V) {
        if let Some(cache) = &self.inner {
            cache.insert(key, value).await;
        }
    }

    /// Drops every entry.
    pub fn clear(&self) {
        if let Some(cache) = &self.inner {
            cache.invalidate_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_hit_within_window() {
        let cache = StaleCache::new(Duration::from_secs(60), 16);
        cache.insert("k".to_string(), 7_u32).await;
        assert_eq!(cache.get("k").await, Some(7));
    }

    #[tokio::test]
    async fn test_zero_ttl_never_caches() {
        let cache = StaleCache::new(Duration::ZERO, 16);
        cache.insert("k".to_string(), 7_u32).await;
        assert_eq!(cache.get("k").await, None);
    }

    #[tokio::test]
    async fn test_clear_drops_entries() {
        let cache = StaleCache::new(Duration::from_secs(60), 16);
        cache.insert("k".to_string(), 1_u32).await;
        cache.clear();
        assert_eq!(cache.get("k").await, None);
    }
}

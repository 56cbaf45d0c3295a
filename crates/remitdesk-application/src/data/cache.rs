use remitdesk_core::ApiResult;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// How long a successful fetch is served without going back to the source.
pub const STALE_TIME: Duration = Duration::from_secs(5 * 60);

struct CachedValue<T> {
    value: T,
    fetched_at: Instant,
}

/// Keyed read-through cache for query results.
///
/// A value is fresh for [`STALE_TIME`] after it was fetched. Failed fetches
/// are never stored, so the next read retries. Concurrent misses on the same
/// key each fetch; the last one to finish wins.
pub struct QueryCache<T> {
    entries: Arc<RwLock<HashMap<String, CachedValue<T>>>>,
    stale_time: Duration,
}

impl<T: Clone> QueryCache<T> {
    pub fn new() -> Self {
        Self::with_stale_time(STALE_TIME)
    }

    pub fn with_stale_time(stale_time: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            stale_time,
        }
    }

    /// Returns the fresh cached value for `key`, or runs `fetch` and caches
    /// its result when it succeeds.
    ///
    /// # Arguments
    ///
    /// * `key` - Cache key (the entity name for list queries)
    /// * `fetch` - Produces the value on a miss
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> ApiResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        if let Some(value) = self.get_fresh(key).await {
            tracing::debug!(key, "Query cache hit");
            return Ok(value);
        }

        tracing::debug!(key, "Query cache miss");
        let value = fetch().await?;

        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            CachedValue {
                value: value.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(value)
    }

    /// The cached value for `key` if it is still fresh.
    pub async fn get_fresh(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|cached| cached.fetched_at.elapsed() < self.stale_time)
            .map(|cached| cached.value.clone())
    }

    /// Marks `key` stale so the next read refetches.
    pub async fn invalidate(&self, key: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(key);
    }

    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }
}

impl<T: Clone> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

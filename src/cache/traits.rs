//! Cache trait and entry type

use chrono::{DateTime, Utc};
use std::time::Duration;

/// A cached document with its storage and expiry timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub content: String,
    pub stored_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Creates an entry stored at `now` that lives for `ttl`
    pub fn new(content: String, now: DateTime<Utc>, ttl: Duration) -> Self {
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            content,
            stored_at: now,
            expires_at,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Trait for crawl result caches
///
/// Implementations must be safe to share between concurrent requests.
pub trait ContentCache: Send + Sync {
    /// Returns the live entry for `key`, if any
    fn get(&self, key: &str) -> Option<CacheEntry>;

    /// Stores `content` under `key` for `ttl`
    ///
    /// A zero `ttl` stores nothing.
    fn put(&self, key: &str, content: String, ttl: Duration);
}

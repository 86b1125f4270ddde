//! In-memory TTL cache

use crate::cache::traits::{CacheEntry, ContentCache};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Process-local cache; entries are evicted lazily when read after expiry
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included until they are read
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ContentCache for MemoryCache {
    fn get(&self, key: &str) -> Option<CacheEntry> {
        let mut entries = self.entries.lock().ok()?;

        let entry = entries.get(key)?;
        if entry.is_expired_at(Utc::now()) {
            tracing::debug!("Cache entry expired: {}", key);
            entries.remove(key);
            return None;
        }

        Some(entry.clone())
    }

    fn put(&self, key: &str, content: String, ttl: Duration) {
        if ttl.is_zero() {
            return;
        }

        let entry = CacheEntry::new(content, Utc::now(), ttl);
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), entry);
        }
    }
}

//! Time-bounded cache for fetched post collections.
//!
//! Uses `moka::sync::Cache` with a single TTL for every entry. Keys are the
//! source's request key, values the full decoded collection (truncation
//! happens after lookup). Tracks hits and misses.

use moka::sync::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::domains::posts::models::PostRecord;

/// Default window during which a fetched collection is reused.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600); // 1 hour

/// One entry per distinct source URL is all this app ever needs.
const MAX_ENTRIES: u64 = 64;

pub struct PostCache {
    cache: Cache<String, Arc<[PostRecord]>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PostCache {
    pub fn new(ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(MAX_ENTRIES)
            .time_to_live(ttl)
            .build();
        Self {
            cache,
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &str) -> Option<Arc<[PostRecord]>> {
        match self.cache.get(key) {
            Some(v) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(v)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, key: impl Into<String>, posts: Vec<PostRecord>) -> Arc<[PostRecord]> {
        let posts: Arc<[PostRecord]> = posts.into();
        self.cache.insert(key.into(), posts.clone());
        posts
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl Default for PostCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

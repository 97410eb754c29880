//! In-memory feed cache
//!
//! A map from cache key to (articles, capture instant). Staleness is checked
//! lazily on read; stale entries stay in the map until a later write to the
//! same key replaces them. Growth is bounded only by the distinct
//! (user, preference-set) pairs the process ever serves.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::cache::FeedCache;
use crate::domain::news::Article;

#[derive(Debug, Clone)]
struct CacheEntry {
    articles: Vec<Article>,
    stored_at: Instant,
}

/// Process-lifetime feed cache guarded by an async RwLock.
///
/// Single-key operations are atomic: a read observes either the previous or
/// the new complete entry, never a partial write. Two concurrent misses for
/// the same key may both fetch and both write; the later write wins, which
/// is tolerated since entries are idempotent snapshots of the same query.
#[derive(Debug)]
pub struct InMemoryFeedCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl InMemoryFeedCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }
}

#[async_trait]
impl FeedCache for InMemoryFeedCache {
    async fn get(&self, key: &str) -> Option<Vec<Article>> {
        let entries = self.entries.read().await;

        entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.articles.clone())
    }

    async fn put(&self, key: &str, articles: Vec<Article>) {
        let entry = CacheEntry {
            articles,
            stored_at: Instant::now(),
        };

        self.entries.write().await.insert(key.to_string(), entry);
    }
}

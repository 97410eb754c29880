//! Feed cache trait

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::news::Article;

/// Time-expiring lookup table for cached feed responses.
///
/// Reads return a miss for entries older than the store's TTL as well as for
/// entries never written; callers cannot distinguish the two and do not need
/// to. Writes unconditionally overwrite with a fresh timestamp. There is no
/// delete and no eviction; the store lives and dies with the process.
#[async_trait]
pub trait FeedCache: Send + Sync + Debug {
    /// Look up a cached article list, missing on absence or staleness
    async fn get(&self, key: &str) -> Option<Vec<Article>>;

    /// Insert or overwrite an entry, stamped with the current time
    async fn put(&self, key: &str, articles: Vec<Article>);
}

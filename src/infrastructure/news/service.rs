//! News feed orchestration
//!
//! Resolves the authenticated identity to a user record, normalizes stored
//! preferences, and serves the feed through the cache: hit short-circuits,
//! miss queries the upstream provider and caches the result. Upstream
//! failures degrade to an empty feed instead of surfacing an error.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::cache::{feed_cache_key, FeedCache};
use crate::domain::news::{normalize_preferences, Article, NewsProvider};
use crate::domain::user::UserRepository;
use crate::domain::DomainError;

/// Query used when a user has no stored preferences
const DEFAULT_QUERY: &str = "news";
/// Fixed language filter for upstream searches
const LANGUAGE: &str = "en";
/// Most-recent-first sort order
const SORT_BY: &str = "publishedAt";

/// How a feed response was produced.
///
/// The wire shape is the same for all three, but keeping them distinct lets
/// tests tell a genuinely empty result from a swallowed upstream failure.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedOutcome {
    /// Served from a fresh upstream call (and written to the cache)
    Fresh(Vec<Article>),
    /// Served from the cache without touching upstream
    Cached(Vec<Article>),
    /// Upstream failed; fail-open to an empty feed, nothing cached
    Degraded,
}

impl FeedOutcome {
    /// The article list to put on the wire
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            Self::Fresh(articles) | Self::Cached(articles) => articles,
            Self::Degraded => Vec::new(),
        }
    }
}

/// Orchestrates identity resolution, cache lookup, and upstream fetch
#[derive(Debug)]
pub struct NewsFeedService {
    repository: Arc<dyn UserRepository>,
    provider: Arc<dyn NewsProvider>,
    cache: Arc<dyn FeedCache>,
}

impl NewsFeedService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        provider: Arc<dyn NewsProvider>,
        cache: Arc<dyn FeedCache>,
    ) -> Self {
        Self {
            repository,
            provider,
            cache,
        }
    }

    /// Fetch the feed for an authenticated email identity.
    ///
    /// Errors only for an unknown user or a failing store; upstream trouble
    /// is absorbed into `FeedOutcome::Degraded`.
    pub async fn fetch_feed(&self, email: &str) -> Result<FeedOutcome, DomainError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", email)))?;

        let preferences = normalize_preferences(user.preferences());
        let cache_key = feed_cache_key(user.id(), &preferences);

        if let Some(articles) = self.cache.get(&cache_key).await {
            debug!(key = %cache_key, articles = articles.len(), "Feed cache hit");
            return Ok(FeedOutcome::Cached(articles));
        }

        debug!(key = %cache_key, "Feed cache miss");

        let query = if preferences.is_empty() {
            DEFAULT_QUERY.to_string()
        } else {
            preferences.join(" OR ")
        };

        match self.provider.search(&query, LANGUAGE, SORT_BY).await {
            Ok(articles) => {
                self.cache.put(&cache_key, articles.clone()).await;
                debug!(key = %cache_key, articles = articles.len(), "Feed cached");
                Ok(FeedOutcome::Fresh(articles))
            }
            Err(err) => {
                warn!(error = %err, query = %query, "News fetch failed; serving empty feed");
                Ok(FeedOutcome::Degraded)
            }
        }
    }
}

//! News search provider trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::Article;
use crate::domain::DomainError;

/// Upstream full-text news search.
///
/// Implementations authenticate with their own credentials and surface any
/// transport or HTTP failure as a provider error; the fail-open policy lives
/// with the caller, not here.
#[async_trait]
pub trait NewsProvider: Send + Sync + Debug {
    /// Search for articles matching `query`, filtered to `language` and
    /// ordered by `sort_by` (provider-specific field name).
    async fn search(
        &self,
        query: &str,
        language: &str,
        sort_by: &str,
    ) -> Result<Vec<Article>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock provider for orchestrator tests. Records call count and the last
    /// query so tests can assert on short-circuiting and query construction.
    #[derive(Debug, Default)]
    pub struct MockNewsProvider {
        articles: Mutex<Vec<Article>>,
        error: Mutex<Option<String>>,
        calls: AtomicUsize,
        last_query: Mutex<Option<String>>,
    }

    impl MockNewsProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_articles(self, articles: Vec<Article>) -> Self {
            *self.articles.lock().unwrap() = articles;
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            *self.error.lock().unwrap() = Some(error.into());
            self
        }

        pub fn clear_error(&self) {
            *self.error.lock().unwrap() = None;
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_query(&self) -> Option<String> {
            self.last_query.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NewsProvider for MockNewsProvider {
        async fn search(
            &self,
            query: &str,
            _language: &str,
            _sort_by: &str,
        ) -> Result<Vec<Article>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().unwrap() = Some(query.to_string());

            if let Some(error) = self.error.lock().unwrap().clone() {
                return Err(DomainError::provider("mock", error));
            }

            Ok(self.articles.lock().unwrap().clone())
        }
    }
}

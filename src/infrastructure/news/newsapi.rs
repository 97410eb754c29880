//! NewsAPI client
//!
//! Calls the NewsAPI "everything" endpoint
//! (https://newsapi.org/docs/endpoints/everything) and forwards the article
//! array untouched.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::news::{Article, NewsProvider};
use crate::domain::DomainError;

const PROVIDER_NAME: &str = "newsapi";

/// HTTP client for the NewsAPI search endpoint.
///
/// Without an API key every search fails with a provider error; combined
/// with the orchestrator's fail-open policy this makes a missing key yield
/// empty feeds rather than a startup failure.
#[derive(Debug)]
pub struct NewsApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl NewsApiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/everything", self.base_url)
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn search(
        &self,
        query: &str,
        language: &str,
        sort_by: &str,
    ) -> Result<Vec<Article>, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::provider(PROVIDER_NAME, "no API key configured"))?;

        let response = self
            .http
            .get(self.search_url())
            .query(&[
                ("q", query),
                ("language", language),
                ("sortBy", sort_by),
                ("apiKey", api_key),
            ])
            .send()
            .await
            .map_err(|e| DomainError::provider(PROVIDER_NAME, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::provider(
                PROVIDER_NAME,
                format!("search returned status {}", response.status()),
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DomainError::provider(PROVIDER_NAME, format!("invalid body: {}", e)))?;

        // Missing or non-array articles field is treated as an empty result,
        // not an error.
        let articles = body
            .get("articles")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(articles)
    }
}

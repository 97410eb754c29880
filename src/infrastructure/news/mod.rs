//! News infrastructure
//!
//! NewsAPI HTTP client and the feed orchestration service.

mod newsapi;
mod service;

pub use newsapi::NewsApiClient;
pub use service::{FeedOutcome, NewsFeedService};

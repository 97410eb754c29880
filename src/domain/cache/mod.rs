//! Feed cache domain
//!
//! A single-purpose, process-lifetime cache in front of the upstream news
//! call: keyed by identity plus normalized preference set, time-expiring on
//! read, never evicted.

mod key;
mod store;

pub use key::feed_cache_key;
pub use store::FeedCache;

//! News domain
//!
//! Articles are opaque pass-through payloads from the upstream search API;
//! no internal structure is imposed on them.

mod preferences;
mod provider;

pub use preferences::normalize_preferences;
pub use provider::NewsProvider;

#[cfg(test)]
pub use provider::mock::MockNewsProvider;

/// An article as returned by the upstream API, forwarded verbatim
pub type Article = serde_json::Value;

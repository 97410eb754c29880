//! Feed cache key construction

use crate::domain::user::UserId;

const NAMESPACE: &str = "news";

/// Build the cache key for a user's feed:
/// `news:<user_id>:<sorted_prefs.join("|")>`.
///
/// Preferences are sorted lexicographically here so that two requests for
/// the same user and the same preference set collide to the same key
/// regardless of stored order or legacy formatting.
pub fn feed_cache_key(user_id: &UserId, preferences: &[String]) -> String {
    let mut sorted: Vec<&str> = preferences.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    format!("{}:{}:{}", NAMESPACE, user_id, sorted.join("|"))
}

//! Preference normalization
//!
//! User records carry news preferences in one of two shapes: a proper list
//! of category strings, or a legacy single-element list whose one element is
//! a comma-joined string ("tech, sports"). Normalization reconciles both
//! into a flat list of trimmed, non-empty categories.

/// Canonicalize a stored preference list.
///
/// A single element containing a comma is split and trimmed (legacy storage
/// format); anything else passes through trimmed. Empty pieces are dropped.
/// Output order follows input order; sorting happens at cache-key
/// construction, not here.
pub fn normalize_preferences(preferences: &[String]) -> Vec<String> {
    let pieces: Vec<&str> = match preferences {
        [single] if single.contains(',') => single.split(',').collect(),
        other => other.iter().map(String::as_str).collect(),
    };

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_preferences(&[]).is_empty());
    }

    #[test]
    fn test_plain_list_passes_through() {
        let input = prefs(&["tech", "sports"]);
        assert_eq!(normalize_preferences(&input), ["tech", "sports"]);
    }

    #[test]
    fn test_legacy_comma_joined_is_split_and_trimmed() {
        let input = prefs(&["tech, sports"]);
        assert_eq!(normalize_preferences(&input), ["tech", "sports"]);
    }

    #[test]
    fn test_legacy_split_preserves_order() {
        let input = prefs(&["sports,tech , finance"]);
        assert_eq!(normalize_preferences(&input), ["sports", "tech", "finance"]);
    }

    #[test]
    fn test_single_element_without_comma_untouched() {
        let input = prefs(&["technology"]);
        assert_eq!(normalize_preferences(&input), ["technology"]);
    }

    #[test]
    fn test_multi_element_with_commas_not_split() {
        // Only the one-element form is legacy; a proper list is kept as-is.
        let input = prefs(&["tech, sports", "finance"]);
        assert_eq!(
            normalize_preferences(&input),
            ["tech, sports", "finance"]
        );
    }

    #[test]
    fn test_empty_pieces_dropped() {
        let input = prefs(&["tech,, sports,"]);
        assert_eq!(normalize_preferences(&input), ["tech", "sports"]);
    }

    #[test]
    fn test_idempotent() {
        let input = prefs(&["tech, sports"]);
        let once = normalize_preferences(&input);
        let twice = normalize_preferences(&once);
        assert_eq!(once, twice);
    }
}

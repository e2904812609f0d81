use super::distance::{distance, threshold_for, within_length_bound};

/// Decides whether `text` should be considered a hit for `query`.
///
/// Layers, cheapest first:
/// - substring of the lowercased text
/// - substring after dropping all whitespace on both sides ("reacthooks" vs "React Hooks")
/// - every query word has some text word within its edit threshold
pub fn matches(query: &str, text: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    if text.is_empty() {
        return false;
    }

    let query = query.to_lowercase();
    let text = text.to_lowercase();

    if text.contains(&query) {
        return true;
    }

    let query_words = words(&query);
    let text_words = words(&text);

    if query_words.is_empty() {
        return true;
    }

    if text_words.concat().contains(&query_words.concat()) {
        return true;
    }

    query_words.iter().all(|qw| {
        let threshold = threshold_for(qw);
        text_words
            .iter()
            .any(|tw| within_length_bound(qw, tw, threshold) && distance(qw, tw) <= threshold)
    })
}

/// Like [`matches`], for fields that may be absent. A missing field is never
/// a hit for a non-empty query.
pub fn matches_opt(query: &str, text: Option<&str>) -> bool {
    matches(query, text.unwrap_or_default())
}

pub(crate) fn words(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

//! Decode OpenAlex abstract inverted index to plaintext
//!
//! OpenAlex ships abstracts as inverted indexes:
//! ```json
//! {"Despite": [0], "growing": [1], "interest": [2, 50], ...}
//! ```
//!
//! Words are put back in position order and joined with single spaces.

use serde_json::{Map, Value};

use bibliodash_analytics::view::NO_ABSTRACT;

const ELLIPSIS: &str = "...";

/// Decode an inverted index to space-separated words in position order.
///
/// # Example
/// ```
/// use serde_json::json;
/// use bibliodash_openalex::abstract_decode::decode_inverted_index;
///
/// let index = json!({"world": [1], "Hello": [0]});
/// assert_eq!(decode_inverted_index(index.as_object().unwrap()), "Hello world");
/// ```
pub fn decode_inverted_index(index: &Map<String, Value>) -> String {
    let mut pairs: Vec<(u64, &str)> = index
        .iter()
        .filter_map(|(word, positions)| Some((word, positions.as_array()?)))
        .flat_map(|(word, positions)| {
            positions
                .iter()
                .filter_map(Value::as_u64)
                .map(move |p| (p, word.as_str()))
        })
        .collect();

    pairs.sort_by_key(|(pos, _)| *pos);
    pairs
        .into_iter()
        .map(|(_, w)| w)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cut `text` to at most `max_chars` characters, ending in `...` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Abstract text for an article card.
///
/// Missing, null or empty indexes give the "No abstract available." placeholder.
pub fn abstract_text(index: Option<&Map<String, Value>>, max_chars: usize) -> String {
    let text = index.map(decode_inverted_index).unwrap_or_default();
    if text.is_empty() {
        return NO_ABSTRACT.to_string();
    }
    truncate_chars(&text, max_chars)
}

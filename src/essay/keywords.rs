#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Keyword parsing and presence search.

use serde::{Deserialize, Serialize};

/// Keywords found in an essay, in the order they were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatches {
    /// Requested keywords present in the text, spelled as requested.
    pub matched:   Vec<String>,
    /// `matched.len()`.
    pub count:     usize,
    /// How many keywords were searched for.
    pub requested: usize,
}

/// Splits comma-separated free text into keywords, trimming each entry and
/// dropping empty ones.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

/// Returns the keywords that occur anywhere in `text`, ignoring case.
///
/// Matching is plain substring containment, so `"art"` is found inside
/// `"participação"`.
pub fn find_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> KeywordMatches {
    let text = text.to_lowercase();
    let matched: Vec<String> = keywords
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|k| text.contains(&k.to_lowercase()))
        .map(String::from)
        .collect();

    KeywordMatches {
        count: matched.len(),
        requested: keywords.len(),
        matched,
    }
}

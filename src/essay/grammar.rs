#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Grammar-error estimate driven by an automatic corrector.

use serde::{Deserialize, Serialize};
use similar::{Algorithm, DiffTag, TextDiff};

/// Anything that can rewrite a text into a corrected version of itself.
pub trait Corrector {
    /// Returns the corrected text.
    fn correct(&self, text: &str) -> String;
}

impl<F> Corrector for F
where
    F: Fn(&str) -> String,
{
    fn correct(&self, text: &str) -> String {
        self(text)
    }
}

/// A span of the essay the corrector wanted to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// Text as written.
    pub original:   String,
    /// Text proposed by the corrector.
    pub suggestion: String,
}

/// Number of words the corrector added to the text, never negative.
///
/// The corrected text is counted by whitespace-separated chunks, the original
/// by chunks holding at least one letter or digit. This is a rough measure of
/// how much the corrector wanted to change, not a grammar check.
pub fn estimate_grammar_errors<C: Corrector + ?Sized>(text: &str, corrector: &C) -> usize {
    let corrected = corrector.correct(text);
    let original_words = text
        .split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .count();

    corrected
        .split_whitespace()
        .count()
        .saturating_sub(original_words)
}

/// Word-level differences between `text` and its corrected version.
///
/// Changes separated only by whitespace are reported as one span, so a word
/// split in two comes back as a single correction.
pub fn suggest_corrections<C: Corrector + ?Sized>(text: &str, corrector: &C) -> Vec<Correction> {
    let corrected = corrector.correct(text);
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_unicode_words(text, corrected.as_str());

    let mut corrections = Vec::new();
    let mut pending: Option<(String, String)> = None;

    for op in diff.ops() {
        let (tag, old, new) = op.as_tag_tuple();
        let original = diff.old_slices()[old].concat();
        let suggestion = diff.new_slices()[new].concat();

        if tag == DiffTag::Equal {
            if !original.trim().is_empty() {
                corrections.extend(pending.take().and_then(finish));
            } else if let Some((o, s)) = pending.as_mut() {
                o.push_str(&original);
                s.push_str(&original);
            }
            continue;
        }

        let (o, s) = pending.get_or_insert_with(Default::default);
        o.push_str(&original);
        s.push_str(&suggestion);
    }
    corrections.extend(pending.and_then(finish));

    corrections
}

/// Trims a pending span into a correction, dropping whitespace-only changes.
fn finish((original, suggestion): (String, String)) -> Option<Correction> {
    let original = original.trim();
    let suggestion = suggestion.trim();
    if original == suggestion {
        return None;
    }

    Some(Correction {
        original:   original.to_string(),
        suggestion: suggestion.to_string(),
    })
}

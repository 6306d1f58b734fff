#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Dictionary-backed spelling correction.

use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};

use super::grammar::Corrector;
use crate::constants::{
    DEFAULT_DICTIONARY, EDIT_ALPHABET, MAX_DISTANT_EDIT_LEN, MAX_EDIT_DISTANCE, MIN_SPLIT_PART_LEN,
};

/// Errors raised while loading a word list.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DictionaryError {
    /// A line carried a count that is not a non-negative integer.
    #[error("Invalid word count `{value}` on line {line} of the dictionary.")]
    InvalidCount {
        /// 1-based line number.
        line:  usize,
        /// The offending text.
        value: String,
    },
    /// The word list contained no words.
    #[error("The dictionary does not contain any words.")]
    Empty,
}

/// Lowercase words with their relative frequencies.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// word -> frequency
    words: HashMap<String, u64>,
}

impl Dictionary {
    /// Parses a word list made of `word count` lines.
    ///
    /// * blank lines and lines starting with `#` are skipped
    /// * a missing count means 1
    /// * repeated words add up, saturating at `u64::MAX`
    pub fn parse(source: &str) -> Result<Self, DictionaryError> {
        let mut words = HashMap::new();

        for (idx, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else {
                continue;
            };
            let count = match parts.next() {
                Some(value) => value
                    .parse::<u64>()
                    .map_err(|_| DictionaryError::InvalidCount {
                        line:  idx + 1,
                        value: value.to_string(),
                    })?,
                None => 1,
            };

            let entry = words.entry(word.to_lowercase()).or_insert(0u64);
            *entry = entry.saturating_add(count);
        }

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words })
    }

    /// The Portuguese word list compiled into the binary.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::parse(DEFAULT_DICTIONARY)
    }

    /// Reads and parses a word list from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read dictionary {}", path.display()))?;
        Self::parse(&source)
            .with_context(|| format!("Could not parse dictionary {}", path.display()))
    }

    /// Frequency of `word`, 0 when unknown. `word` must be lowercase.
    pub fn frequency(&self, word: &str) -> u64 {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Iterates over every word with its frequency, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = (&str, u64)> {
        self.words.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Whether `word` (lowercase) is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Replaces unknown words with the most frequent close match from a
/// [`Dictionary`].
///
/// For each unknown word the candidates are tried in order: words one edit
/// away, a split into two known words, words two edits away (tokens up to
/// [`MAX_DISTANT_EDIT_LEN`] letters only). If nothing matches the word is
/// left alone.
#[derive(Debug, Clone)]
pub struct SpellCorrector {
    /// Known words.
    dictionary: Dictionary,
}

impl SpellCorrector {
    /// Wraps a dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// A corrector over the embedded Portuguese word list.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Dictionary::embedded().map(Self::new)
    }

    /// The dictionary this corrector consults.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Corrects a single token, keeping a leading capital.
    pub fn correct_word(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if lower.chars().any(|c| c.is_numeric()) || self.dictionary.contains(&lower) {
            return word.to_string();
        }

        let suggestion = self
            .best(edits1(&lower))
            .or_else(|| self.best_split(&lower))
            .or_else(|| {
                if lower.chars().count() <= MAX_DISTANT_EDIT_LEN {
                    self.best(self.within_two_edits(&lower))
                } else {
                    None
                }
            });

        match suggestion {
            Some(s) => restore_case(word, &s),
            None => word.to_string(),
        }
    }

    /// Most frequent known word among `candidates`; ties go to the
    /// alphabetically smaller word.
    fn best(&self, candidates: impl IntoIterator<Item = String>) -> Option<String> {
        candidates
            .into_iter()
            .filter(|c| self.dictionary.contains(c))
            .max_by(|a, b| {
                self.dictionary
                    .frequency(a)
                    .cmp(&self.dictionary.frequency(b))
                    .then_with(|| b.cmp(a))
            })
    }

    /// Known words at most two edits away from `word`.
    fn within_two_edits(&self, word: &str) -> Vec<String> {
        let len = word.chars().count();

        self.dictionary
            .words()
            .filter(|(known, _)| known.chars().count().abs_diff(len) <= MAX_EDIT_DISTANCE)
            .filter(|(known, _)| strsim::osa_distance(word, known) <= MAX_EDIT_DISTANCE)
            .map(|(known, _)| known.to_string())
            .collect()
    }

    /// Best way to cut `word` into two known words, joined by a space. One of
    /// the halves must be at least [`MIN_SPLIT_PART_LEN`] letters long.
    fn best_split(&self, word: &str) -> Option<String> {
        let chars: Vec<char> = word.chars().collect();

        (1..chars.len())
            .filter(|&i| i.max(chars.len() - i) >= MIN_SPLIT_PART_LEN)
            .filter_map(|i| {
                let left: String = chars[..i].iter().collect();
                let right: String = chars[i..].iter().collect();
                let score = self
                    .dictionary
                    .frequency(&left)
                    .saturating_mul(self.dictionary.frequency(&right));
                (score > 0).then(|| (score, format!("{left} {right}")))
            })
            .max_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.cmp(&a.1)))
            .map(|(_, split)| split)
    }
}

impl Corrector for SpellCorrector {
    fn correct(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut seen: HashMap<String, String> = HashMap::new();
        let mut word = String::new();

        let mut flush = |word: &mut String, out: &mut String| {
            if word.is_empty() {
                return;
            }
            let fixed = seen
                .entry(word.clone())
                .or_insert_with(|| self.correct_word(word));
            out.push_str(fixed);
            word.clear();
        };

        for c in text.chars() {
            if c.is_alphanumeric() {
                word.push(c);
                continue;
            }
            flush(&mut word, &mut out);
            out.push(c);
        }
        flush(&mut word, &mut out);

        out
    }
}

/// All strings one delete, transpose, replace or insert away from `word`.
fn edits1(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let alphabet: Vec<char> = EDIT_ALPHABET.chars().collect();
    let mut out: Vec<String> =
        Vec::with_capacity(chars.len() * (2 * alphabet.len() + 2) + alphabet.len());

    for i in 0..=chars.len() {
        let (left, right) = chars.split_at(i);

        if let Some((_, rest)) = right.split_first() {
            out.push(left.iter().chain(rest).collect());

            if let Some((second, tail)) = rest.split_first() {
                out.push(
                    left.iter()
                        .chain([second, &right[0]])
                        .chain(tail)
                        .collect(),
                );
            }

            for c in &alphabet {
                out.push(left.iter().chain([c]).chain(rest).collect());
            }
        }

        for c in &alphabet {
            out.push(left.iter().chain([c]).chain(right).collect());
        }
    }

    out
}

/// Applies the capitalisation of `original` to `suggestion`.
fn restore_case(original: &str, suggestion: &str) -> String {
    let starts_upper = original.chars().next().is_some_and(char::is_uppercase);
    let all_upper = original.chars().count() > 1 && original.chars().all(char::is_uppercase);

    if all_upper {
        return suggestion.to_uppercase();
    }
    if starts_upper {
        let mut chars = suggestion.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }
    suggestion.to_string()
}

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Cohesion index from connector markers.
pub mod cohesion;
/// Grammar-error estimate and the corrector seam.
pub mod grammar;
/// Keyword parsing and search.
pub mod keywords;
/// Line counting.
pub mod lines;
/// Rubric scoring.
pub mod score;
/// Dictionary-backed spelling corrector.
pub mod spelling;

pub use cohesion::{estimate_cohesion, markers_found};
pub use grammar::{Correction, Corrector, estimate_grammar_errors, suggest_corrections};
pub use keywords::{KeywordMatches, find_keywords, parse_keywords};
pub use lines::{LineCheck, check_lines, count_lines_within_bounds};
pub use score::{RubricRow, RubricScore, score_essay};
pub use spelling::{Dictionary, DictionaryError, SpellCorrector};

/// Rounds to one decimal place, halves away from zero.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

//! # essay-grader
//!
//! A heuristic essay scorer. Given an essay it reports the number of
//! non-blank lines against an accepted range, which of a set of keywords
//! appear, and an estimated grade over four rubric dimensions (content,
//! cohesion, grammar, structure).
//!
//! The scores are a simulation built from simple text statistics, not an
//! assessment against a real rubric.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Process-wide defaults read from the environment
pub mod config;
/// Constant values used throughout
pub mod constants;
/// The scoring functions
pub mod essay;
/// Grading requests and rendered reports
pub mod report;
/// Shared value types
pub mod types;

use std::path::Path;

use anyhow::{Context, Result};
use essay::{Dictionary, SpellCorrector};

pub use essay::{
    Corrector, RubricScore, count_lines_within_bounds, estimate_cohesion, estimate_grammar_errors,
    find_keywords, score_essay,
};
pub use report::{EssayReport, GradeError, GradeRequest, OutputFormat, grade};
pub use types::LineBounds;

/// Builds the spelling corrector, from `dictionary` when given and from the
/// embedded word list otherwise.
pub fn load_corrector(dictionary: Option<&Path>) -> Result<SpellCorrector> {
    let dictionary = match dictionary {
        Some(path) => {
            tracing::info!("Loading dictionary from {}", path.display());
            Dictionary::from_path(path)?
        }
        None => Dictionary::embedded().context("Embedded dictionary is invalid")?,
    };
    let corrector = SpellCorrector::new(dictionary);
    tracing::debug!(words = corrector.dictionary().len(), "dictionary ready");

    Ok(corrector)
}

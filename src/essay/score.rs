#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Rubric scoring.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use super::{
    cohesion::estimate_cohesion,
    grammar::{Corrector, estimate_grammar_errors},
    round1,
};
use crate::constants::{
    CONTENT_TARGET_CHARS, GRAMMAR_PENALTY_PER_ERROR, LABEL_COHESION, LABEL_CONTENT, LABEL_FINAL,
    LABEL_GRAMMAR, LABEL_STRUCTURE, MAX_DIMENSION_SCORE, STRUCTURE_FULL, STRUCTURE_SHORT,
    STRUCTURE_WORD_THRESHOLD,
};

/// Scores for the four rubric dimensions and their average.
///
/// Serializes as a map keyed by the Portuguese rubric labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RubricScore {
    /// Length-based content score, 0 to 10.
    #[serde(rename = "Conteúdo")]
    pub content:     f64,
    /// Cohesion index rescaled to 0 to 10.
    #[serde(rename = "Coesão")]
    pub cohesion:    f64,
    /// 10 minus half a point per estimated grammar error, floored at 0.
    #[serde(rename = "Gramática")]
    pub grammar:     f64,
    /// 10 for essays over 100 words, 7 otherwise.
    #[serde(rename = "Estrutura")]
    pub structure:   u8,
    /// Average of the four dimensions.
    #[serde(rename = "Nota final estimada")]
    pub final_score: f64,
}

/// One rubric line ready for display.
#[derive(Tabled, Debug, Clone, PartialEq, Eq)]
pub struct RubricRow {
    #[tabled(rename = "Critério")]
    /// * `criterion`: rubric label
    pub criterion: String,
    #[tabled(rename = "Nota")]
    /// * `score`: formatted score
    pub score:     String,
}

impl RubricScore {
    /// Label and formatted value of every entry, in rubric order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (LABEL_CONTENT, format!("{:.1}", self.content)),
            (LABEL_COHESION, format!("{:.1}", self.cohesion)),
            (LABEL_GRAMMAR, format!("{:.1}", self.grammar)),
            (LABEL_STRUCTURE, self.structure.to_string()),
            (LABEL_FINAL, format!("{:.1}", self.final_score)),
        ]
    }

    /// The four dimensions as table rows, without the final grade.
    pub fn dimension_rows(&self) -> Vec<RubricRow> {
        self.entries()
            .into_iter()
            .filter(|(label, _)| *label != LABEL_FINAL)
            .map(|(criterion, score)| RubricRow {
                criterion: criterion.to_string(),
                score,
            })
            .collect()
    }
}

/// Scores `text` on content, cohesion, grammar and structure.
///
/// Only the essay text feeds the score; keywords and line bounds do not.
pub fn score_essay<C: Corrector + ?Sized>(text: &str, corrector: &C) -> RubricScore {
    let content =
        (text.chars().count() as f64 / CONTENT_TARGET_CHARS).min(1.0) * MAX_DIMENSION_SCORE;
    let cohesion = estimate_cohesion(text) / 10.0;
    let errors = estimate_grammar_errors(text, corrector) as f64;
    let grammar = (MAX_DIMENSION_SCORE - errors * GRAMMAR_PENALTY_PER_ERROR).max(0.0);
    let structure = if text.split_whitespace().count() > STRUCTURE_WORD_THRESHOLD {
        STRUCTURE_FULL
    } else {
        STRUCTURE_SHORT
    };

    let final_score = round1((content + cohesion + grammar + f64::from(structure)) / 4.0);
    tracing::debug!(content, cohesion, grammar, structure, final_score, "scored essay");

    RubricScore {
        content: round1(content),
        cohesion: round1(cohesion),
        grammar: round1(grammar),
        structure,
        final_score,
    }
}

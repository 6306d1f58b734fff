#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Grading requests and the reports rendered from them.

use std::{fmt::Display, str::FromStr};

use anyhow::Result;
use bon::Builder;
use colored::Colorize;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tabled::{
    Table,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{
    essay::{
        Correction, Corrector, KeywordMatches, LineCheck, RubricScore, check_lines, find_keywords,
        parse_keywords, score_essay, suggest_corrections,
    },
    types::LineBounds,
};

/// Why a request could not be graded.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GradeError {
    /// The essay is empty or whitespace only.
    #[error("The essay is blank; there is nothing to grade.")]
    BlankEssay,
}

/// How a report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Plain labelled lines.
    #[default]
    Text,
    /// A table of rubric scores.
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format `{other}` (expected text, table or json)"),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Table => "table",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// One grading request: the essay plus what to check it against.
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct GradeRequest {
    /// Essay text.
    essay:    String,
    /// Keywords to look for, in display order.
    #[builder(default, with = |keywords: impl IntoIterator<Item = String>| keywords.into_iter().collect())]
    keywords: Vec<String>,
    /// Accepted line range.
    #[builder(default)]
    bounds:   LineBounds,
}

impl GradeRequest {
    /// Replaces the keyword list with the entries of a comma-separated string.
    pub fn with_keyword_text(mut self, input: &str) -> Self {
        self.keywords = parse_keywords(input);
        self
    }

    /// Returns the essay text.
    pub fn essay(&self) -> &str {
        &self.essay
    }

    /// Returns the requested keywords.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns the accepted line range.
    pub fn bounds(&self) -> LineBounds {
        self.bounds
    }
}

/// Everything shown to the user for one graded essay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayReport {
    /// Line count and whether it is within bounds.
    pub lines:       LineCheck,
    /// Bounds the line count was checked against.
    pub bounds:      LineBounds,
    /// Rubric scores.
    pub rubric:      RubricScore,
    /// Keyword coverage, only when keywords were requested.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub keywords:    Option<KeywordMatches>,
    /// Spelling changes the corrector proposed.
    #[serde(default)]
    pub corrections: Vec<Correction>,
}

/// Grades one request.
///
/// A blank essay is refused with [`GradeError::BlankEssay`]; everything else
/// is scored.
pub fn grade<C: Corrector + ?Sized>(
    request: &GradeRequest,
    corrector: &C,
) -> Result<EssayReport, GradeError> {
    let essay = request.essay();
    if essay.trim().is_empty() {
        return Err(GradeError::BlankEssay);
    }

    let lines = check_lines(essay, request.bounds());
    tracing::debug!(
        line_count = lines.line_count,
        within_bounds = lines.within_bounds,
        "checked line count"
    );

    let rubric = score_essay(essay, corrector);
    let keywords = if request.keywords().is_empty() {
        None
    } else {
        Some(find_keywords(essay, request.keywords()))
    };

    Ok(EssayReport {
        lines,
        bounds: request.bounds(),
        rubric,
        keywords,
        corrections: suggest_corrections(essay, corrector),
    })
}

impl EssayReport {
    /// Renders the report in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Table => Ok(self.render_table()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Plain labelled lines, one rubric entry per line.
    pub fn render_text(&self) -> String {
        let within = if self.lines.within_bounds {
            "true".green()
        } else {
            "false".red()
        };

        let mut out = vec![
            format!("Número de linhas: {} - Dentro do limite? {}", self.lines.line_count, within),
            String::from("Notas por critério:"),
        ];
        out.extend(
            self.rubric
                .entries()
                .into_iter()
                .map(|(label, value)| format!("{label}: {value}")),
        );

        if let Some(keywords) = &self.keywords {
            out.push(String::from("Palavras-chave encontradas:"));
            out.push(format!(
                "[{}] ({}/{})",
                keywords.matched.iter().join(", "),
                keywords.count,
                keywords.requested
            ));
        }

        out.push(String::from("Análise concluída!"));
        out.join("\n")
    }

    /// Rubric dimensions as a table with the final grade in the footer.
    pub fn render_table(&self) -> String {
        Table::new(self.rubric.dimension_rows())
            .with(Panel::header("Notas por critério"))
            .with(Panel::footer(format!("Nota final estimada: {:.1}", self.rubric.final_score)))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string()
    }
}

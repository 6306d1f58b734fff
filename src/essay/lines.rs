#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Line counting against the accepted line range.

use serde::{Deserialize, Serialize};

use crate::types::LineBounds;

/// Outcome of the line-count check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCheck {
    /// Number of lines with non-whitespace content.
    pub line_count:    usize,
    /// Whether `line_count` lies within the requested bounds.
    pub within_bounds: bool,
}

/// Counts the non-blank lines of `text` and tests the count against
/// `min_lines..=max_lines`.
///
/// Lines made only of whitespace are not counted. Bounds are taken as given,
/// including negative or inverted ranges.
pub fn count_lines_within_bounds(text: &str, min_lines: i64, max_lines: i64) -> LineCheck {
    check_lines(text, LineBounds::new(min_lines, max_lines))
}

/// Same as [`count_lines_within_bounds`] with the bounds already paired up.
pub fn check_lines(text: &str, bounds: LineBounds) -> LineCheck {
    let line_count = text.lines().filter(|l| !l.trim().is_empty()).count();

    LineCheck {
        line_count,
        within_bounds: bounds.contains(line_count),
    }
}

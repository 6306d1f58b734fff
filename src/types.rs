use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_LINES, DEFAULT_MIN_LINES};

/// Acceptable range of non-blank lines, both ends inclusive.
///
/// The bounds are not validated against each other: with `min > max` no line
/// count is ever within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineBounds {
    /// Fewest lines accepted.
    pub min: i64,
    /// Most lines accepted.
    pub max: i64,
}

impl LineBounds {
    /// Creates a new pair of bounds.
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Whether `count` falls in `min..=max`.
    pub fn contains(&self, count: usize) -> bool {
        i64::try_from(count).is_ok_and(|count| self.min <= count && count <= self.max)
    }
}

impl Default for LineBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LINES, DEFAULT_MAX_LINES)
    }
}

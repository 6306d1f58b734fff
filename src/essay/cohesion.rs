#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Cohesion index based on connector markers.

use super::round1;
use crate::constants::COHESION_MARKERS;

/// Returns the cohesion markers that occur in `text`, in marker order.
pub fn markers_found(text: &str) -> Vec<&'static str> {
    let text = text.to_lowercase();
    COHESION_MARKERS
        .iter()
        .copied()
        .filter(|m| text.contains(m))
        .collect()
}

/// Percentage of [`COHESION_MARKERS`] present in `text`, rounded to one
/// decimal place. Always in `0.0..=100.0`.
pub fn estimate_cohesion(text: &str) -> f64 {
    let found = markers_found(text).len() as f64;
    round1(found / COHESION_MARKERS.len() as f64 * 100.0)
}

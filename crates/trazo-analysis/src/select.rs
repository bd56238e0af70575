//! Nearest-value column selection.
//!
//! Measurement tables carry one column per swept parameter value (e.g. a
//! fractional delay), far more than a readable figure wants. Selection picks
//! the column whose labeled parameter lies closest to each requested target.

use crate::error::AnalysisError;
use crate::table::Table;

/// Pick, for each target, the trial column whose numeric label is nearest.
///
/// Labels are scanned left to right and the first column minimising
/// `|label - target|` wins; the best-so-far distance starts at infinity, so
/// the first candidate is always provisionally selected and exact ties keep
/// the leftmost column. The result preserves target order, so repeated or
/// out-of-range targets yield repeated columns.
pub fn select_nearest(table: &Table, targets: &[f64]) -> Result<Table, AnalysisError> {
    let values = parse_labels(table)?;
    if values.is_empty() && !targets.is_empty() {
        return Err(AnalysisError::NoTrialColumns);
    }

    let mut chosen = Vec::with_capacity(targets.len());
    for &target in targets {
        let mut best_index = 1;
        let mut best_diff = f64::INFINITY;
        for (offset, &value) in values.iter().enumerate() {
            let diff = (value - target).abs();
            if diff < best_diff {
                best_diff = diff;
                best_index = offset + 1;
            }
        }
        chosen.push(best_index);
    }
    table.restricted(&chosen)
}

/// Parse every trial label as the numeric parameter it encodes.
fn parse_labels(table: &Table) -> Result<Vec<f64>, AnalysisError> {
    table.labels()[1..]
        .iter()
        .map(|label| {
            label
                .trim()
                .parse::<f64>()
                .map_err(|_| AnalysisError::malformed_label(label.clone()))
        })
        .collect()
}

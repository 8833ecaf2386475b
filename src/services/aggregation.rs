//! Totals over a set of estimate lines.
//!
//! Summaries are all-or-nothing: a single invalid line blanks both totals.
//! An empty slice is vacuously valid and sums to zero.

use crate::domain::estimate_line::EstimateLine;

pub fn all_valid(lines: &[EstimateLine]) -> bool {
    lines.iter().all(EstimateLine::is_valid)
}

pub fn summary_mu(lines: &[EstimateLine]) -> Option<f64> {
    if !all_valid(lines) {
        return None;
    }
    lines
        .iter()
        .try_fold(0.0, |total, line| line.mu().map(|mu| total + mu))
}

/// Root-sum-of-squares of the per-line deviations.
pub fn summary_sigma(lines: &[EstimateLine]) -> Option<f64> {
    if !all_valid(lines) {
        return None;
    }
    let variance = lines
        .iter()
        .try_fold(0.0, |total, line| line.sigma().map(|sigma| total + sigma * sigma))?;
    Some(variance.sqrt())
}

pub fn valid_lines(lines: &[EstimateLine]) -> Vec<EstimateLine> {
    lines.iter().filter(|line| line.is_valid()).cloned().collect()
}

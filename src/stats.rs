//! Statistics aggregator: arithmetic mean, minimum, and maximum over a slice
//! of values.

use std::fmt;

/// Aggregate statistics over a non-empty value collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average: {:.6}", self.average)?;
        writeln!(f, "Min: {:.6}", self.min)?;
        write!(f, "Max: {:.6}", self.max)
    }
}

/// Compute average/min/max over `values`, or `None` if there is no data.
///
/// Plain IEEE-754 double arithmetic throughout; magnitude extremes pass
/// through as-is.
pub fn summarize(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }

    let sum: f64 = values.iter().sum();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(Summary {
        average: sum / values.len() as f64,
        min,
        max,
    })
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;

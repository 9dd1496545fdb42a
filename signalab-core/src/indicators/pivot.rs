//! Pivot highs and lows.
//!
//! Index `i` is a pivot high when no value in `[i - left_bars, i + right_bars]`
//! exceeds `values[i]`; a pivot low when none is below it. Ties do not
//! disqualify. Indices without a full window on both sides are never
//! pivots, so the last `right_bars` marks are always false.
//!
//! Output is one mark per input value.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PIVOT_LEFT_BARS: usize = 5;
pub const DEFAULT_PIVOT_RIGHT_BARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PivotOptions {
    pub left_bars: usize,
    pub right_bars: usize,
}

impl Default for PivotOptions {
    fn default() -> Self {
        Self {
            left_bars: DEFAULT_PIVOT_LEFT_BARS,
            right_bars: DEFAULT_PIVOT_RIGHT_BARS,
        }
    }
}

impl PivotOptions {
    /// Pivot high marks for this window shape.
    pub fn highs(&self, values: &[f64]) -> Vec<bool> {
        pivot_high(values, self.left_bars, self.right_bars)
    }

    /// Pivot low marks for this window shape.
    pub fn lows(&self, values: &[f64]) -> Vec<bool> {
        pivot_low(values, self.left_bars, self.right_bars)
    }
}

pub fn pivot_high(values: &[f64], left_bars: usize, right_bars: usize) -> Vec<bool> {
    marks(values, left_bars, right_bars, |candidate, other| other <= candidate)
}

pub fn pivot_low(values: &[f64], left_bars: usize, right_bars: usize) -> Vec<bool> {
    marks(values, left_bars, right_bars, |candidate, other| other >= candidate)
}

fn marks(
    values: &[f64],
    left_bars: usize,
    right_bars: usize,
    holds: impl Fn(f64, f64) -> bool,
) -> Vec<bool> {
    let n = values.len();
    (0..n)
        .map(|i| {
            if i < left_bars || right_bars >= n - i {
                return false;
            }
            let candidate = values[i];
            values[i - left_bars..=i + right_bars]
                .iter()
                .all(|&other| holds(candidate, other))
        })
        .collect()
}

/// Indices flagged in a pivot mark series.
pub fn pivot_indices(marks: &[bool]) -> Vec<usize> {
    marks
        .iter()
        .enumerate()
        .filter_map(|(i, &m)| m.then_some(i))
        .collect()
}

//! Simple and linear-weighted moving averages.
//!
//! SMA: rolling mean over a trailing window.
//! WMA: weights 1..=period, newest value weighted heaviest.
//! Lookback: period - 1 (first value belongs to input index period-1).

use crate::domain::{closes, Candle};
use crate::indicator::Indicator;

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            name: format!("sma_{period}"),
        }
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        sma(&closes(candles), self.period)
    }
}

/// Mean of each trailing window of `period` values.
///
/// Output length is `n - period + 1`; empty when `period == 0 || period > n`.
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    if period == 0 || period > n {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(n - period + 1);

    // Initial window sum
    let mut sum: f64 = values[..period].iter().sum();
    result.push(sum / period as f64);

    // Roll the window forward
    for i in period..n {
        sum = sum - values[i - period] + values[i];
        result.push(sum / period as f64);
    }

    result
}

/// Linear-weighted moving average.
pub fn wma(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    if period == 0 || period > n {
        return Vec::new();
    }

    let denom = (period * (period + 1)) as f64 / 2.0;
    values
        .windows(period)
        .map(|w| {
            let weighted: f64 = w
                .iter()
                .enumerate()
                .map(|(j, &v)| (j + 1) as f64 * v)
                .sum();
            weighted / denom
        })
        .collect()
}

//! Exponential moving averages.
//!
//! Recursive: EMA[t] = alpha * x[t] + (1 - alpha) * EMA[t-1]
//! - `ema`: alpha = 2/(period+1), seed = SMA of the first `period` values.
//! - `wema` (Wilder): alpha = 1/period, same seed.
//! - `ema_from_first`: alpha = 2/(period+1), seed = first input, no warm-up.
//!
//! The recursion runs strictly left to right. Downstream recurrences (RMI,
//! smooth momentum, Supertrend, range bands) are rounding-sensitive, so the
//! accumulation order is part of the contract.

use crate::domain::{closes, Candle};
use crate::indicator::Indicator;

#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    name: String,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            name: format!("ema_{period}"),
        }
    }
}

impl Indicator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        ema(&closes(candles), self.period)
    }
}

/// SMA-seeded exponential moving average. Output length `n - period + 1`.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    smoothed(values, period, 2.0 / (period as f64 + 1.0))
}

/// Wilder's smoothing (alpha = 1/period), SMA-seeded. Output length `n - period + 1`.
pub fn wema(values: &[f64], period: usize) -> Vec<f64> {
    smoothed(values, period, 1.0 / period as f64)
}

/// Exponential moving average seeded with the first input. Output length `n`.
pub fn ema_from_first(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.is_empty() {
        return Vec::new();
    }
    let alpha = 2.0 / (period as f64 + 1.0);
    recurse(values[0], &values[1..], alpha)
}

fn smoothed(values: &[f64], period: usize, alpha: f64) -> Vec<f64> {
    if period == 0 || period > values.len() {
        return Vec::new();
    }

    // Seed: SMA of first `period` values
    let seed = values[..period].iter().sum::<f64>() / period as f64;
    recurse(seed, &values[period..], alpha)
}

fn recurse(seed: f64, rest: &[f64], alpha: f64) -> Vec<f64> {
    let mut result = Vec::with_capacity(rest.len() + 1);
    result.push(seed);

    let mut prev = seed;
    for &v in rest {
        let next = alpha * v + (1.0 - alpha) * prev;
        result.push(next);
        prev = next;
    }

    result
}

//! Stochastic RSI.
//!
//! Stochastic oscillator applied to an RSI series:
//! stoch = 100 * (rsi - min(rsi, stoch_period)) / (max - min)
//! %K = SMA(stoch, k_period), %D = SMA(%K, d_period).
//! A flat RSI window (max == min) yields 0.

use serde::{Deserialize, Serialize};

use super::rsi::{rsi, DEFAULT_RSI_PERIOD};
use super::sma::sma;
use crate::series::{align_suffix, align_suffix3, rolling_max, rolling_min};

pub const DEFAULT_STOCH_PERIOD: usize = 14;
pub const DEFAULT_STOCH_K: usize = 3;
pub const DEFAULT_STOCH_D: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StochRsiOptions {
    pub rsi_period: usize,
    pub stoch_period: usize,
    pub k_period: usize,
    pub d_period: usize,
}

impl Default for StochRsiOptions {
    fn default() -> Self {
        Self {
            rsi_period: DEFAULT_RSI_PERIOD,
            stoch_period: DEFAULT_STOCH_PERIOD,
            k_period: DEFAULT_STOCH_K,
            d_period: DEFAULT_STOCH_D,
        }
    }
}

impl StochRsiOptions {
    pub fn lookback(&self) -> usize {
        [self.stoch_period, self.k_period, self.d_period]
            .iter()
            .fold(self.rsi_period, |acc, &p| acc.saturating_add(p))
            .saturating_sub(3)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StochRsiOutput {
    pub k: Vec<f64>,
    pub d: Vec<f64>,
}

pub fn stoch_rsi(values: &[f64], options: &StochRsiOptions) -> StochRsiOutput {
    let rsi = rsi(values, options.rsi_period);
    let highest = rolling_max(&rsi, options.stoch_period);
    let lowest = rolling_min(&rsi, options.stoch_period);
    let (rsi, highest, lowest) = align_suffix3(&rsi, &highest, &lowest);

    let stoch: Vec<f64> = rsi
        .iter()
        .zip(highest.iter().zip(lowest))
        .map(|(&r, (&hi, &lo))| {
            let range = hi - lo;
            if range == 0.0 {
                0.0
            } else {
                100.0 * (r - lo) / range
            }
        })
        .collect();

    let k = sma(&stoch, options.k_period);
    let d = sma(&k, options.d_period);
    let (k, d) = align_suffix(&k, &d);

    StochRsiOutput {
        k: k.to_vec(),
        d: d.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + (i as f64 * 0.5).sin() * 8.0).collect()
    }

    #[test]
    fn output_lengths_follow_lookback() {
        let values = wave(100);
        let opts = StochRsiOptions::default();
        let out = stoch_rsi(&values, &opts);
        assert_eq!(out.k.len(), out.d.len());
        assert_eq!(out.k.len(), values.len() - opts.lookback());
    }

    #[test]
    fn bounded_zero_to_hundred() {
        let out = stoch_rsi(&wave(120), &StochRsiOptions::default());
        for v in out.k.iter().chain(&out.d) {
            assert!((-1e-9..=100.0 + 1e-9).contains(v), "out of bounds: {v}");
        }
    }

    #[test]
    fn flat_rsi_window_is_zero() {
        // Strictly rising: RSI pinned at 100, range collapses.
        let values: Vec<f64> = (0..60).map(|i| i as f64).collect();
        let out = stoch_rsi(&values, &StochRsiOptions::default());
        assert!(!out.k.is_empty());
        assert!(out.k.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn insufficient_history_is_empty() {
        let out = stoch_rsi(&wave(20), &StochRsiOptions::default());
        assert!(out.k.is_empty() && out.d.is_empty());
    }
}

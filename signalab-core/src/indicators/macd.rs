//! Moving Average Convergence/Divergence.
//!
//! MACD line = MA(fast) - MA(slow), signal = MA(MACD line, signal_period),
//! histogram = MACD line - signal. The oscillator and signal smoothing
//! families are chosen independently.
//!
//! All three output series are trimmed to the signal line's length, so
//! index `i` of each refers to the same candle.

use serde::{Deserialize, Serialize};

use super::ma_type::MaType;
use crate::series::align_suffix;

pub const DEFAULT_MACD_FAST: usize = 12;
pub const DEFAULT_MACD_SLOW: usize = 26;
pub const DEFAULT_MACD_SIGNAL: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdOptions {
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
    pub oscillator_ma: MaType,
    pub signal_ma: MaType,
}

impl Default for MacdOptions {
    fn default() -> Self {
        Self {
            fast_period: DEFAULT_MACD_FAST,
            slow_period: DEFAULT_MACD_SLOW,
            signal_period: DEFAULT_MACD_SIGNAL,
            oscillator_ma: MaType::Ema,
            signal_ma: MaType::Ema,
        }
    }
}

impl MacdOptions {
    /// Candles consumed before the first output value.
    pub fn lookback(&self) -> usize {
        self.fast_period
            .max(self.slow_period)
            .saturating_add(self.signal_period)
            .saturating_sub(2)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacdOutput {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

impl MacdOutput {
    pub fn len(&self) -> usize {
        self.signal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signal.is_empty()
    }
}

pub fn macd(values: &[f64], options: &MacdOptions) -> MacdOutput {
    let fast = options.oscillator_ma.apply(values, options.fast_period);
    let slow = options.oscillator_ma.apply(values, options.slow_period);
    let (fast, slow) = align_suffix(&fast, &slow);

    let line: Vec<f64> = fast.iter().zip(slow).map(|(f, s)| f - s).collect();
    let signal = options.signal_ma.apply(&line, options.signal_period);
    if signal.is_empty() {
        return MacdOutput::default();
    }

    let (line, signal) = align_suffix(&line, &signal);
    let histogram = line.iter().zip(signal).map(|(m, s)| m - s).collect();

    MacdOutput {
        macd: line.to_vec(),
        signal: signal.to_vec(),
        histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, ema, DEFAULT_EPSILON};

    #[test]
    fn macd_lengths_are_aligned() {
        let values: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.3).sin()).collect();
        let out = macd(&values, &MacdOptions::default());
        // slow EMA: 60 - 26 + 1 = 35 points, signal EMA: 35 - 9 + 1 = 27
        assert_eq!(out.len(), 27);
        assert_eq!(out.macd.len(), 27);
        assert_eq!(out.histogram.len(), 27);
        assert_eq!(values.len() - out.len(), MacdOptions::default().lookback());
    }

    #[test]
    fn macd_line_matches_manual_difference() {
        let values: Vec<f64> = (0..40).map(|i| (i * i) as f64 / 10.0).collect();
        let opts = MacdOptions {
            fast_period: 3,
            slow_period: 6,
            signal_period: 4,
            ..MacdOptions::default()
        };
        let out = macd(&values, &opts);
        let fast = ema(&values, 3);
        let slow = ema(&values, 6);
        let last_line = fast[fast.len() - 1] - slow[slow.len() - 1];
        assert_approx(out.macd[out.len() - 1], last_line, DEFAULT_EPSILON);
        assert_approx(
            out.histogram[out.len() - 1],
            out.macd[out.len() - 1] - out.signal[out.len() - 1],
            DEFAULT_EPSILON,
        );
    }

    #[test]
    fn macd_constant_series_is_zero() {
        let out = macd(&[50.0; 50], &MacdOptions::default());
        assert!(!out.is_empty());
        for v in out.macd.iter().chain(&out.signal).chain(&out.histogram) {
            assert_approx(*v, 0.0, 1e-9);
        }
    }

    #[test]
    fn macd_insufficient_history() {
        let out = macd(&[1.0; 20], &MacdOptions::default());
        assert!(out.is_empty());
        assert!(out.macd.is_empty());
    }

    #[test]
    fn options_missing_fields_take_defaults() {
        let opts: MacdOptions = serde_json::from_str(r#"{"fast_period": 5, "bogus": 1}"#).unwrap();
        assert_eq!(opts.fast_period, 5);
        assert_eq!(opts.slow_period, DEFAULT_MACD_SLOW);
        assert_eq!(opts.signal_ma, MaType::Ema);
    }
}

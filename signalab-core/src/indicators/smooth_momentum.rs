//! Smooth momentum oscillator.
//!
//! For each candle with `tmo_length` predecessors, count +1 for every one of
//! the previous `tmo_length` opens the current close is above, -1 for every
//! one it is below. The count is EMA-smoothed twice (`length`, then
//! `smooth_length`) into the main line; the signal line is a further
//! EMA(`smooth_length`) of main. Main is trimmed from the front to the
//! signal line's length so both are index-aligned.

use serde::{Deserialize, Serialize};

use super::ema::ema;
use crate::domain::Candle;
use crate::series::align_suffix;

pub const DEFAULT_TMO_LENGTH: usize = 14;
pub const DEFAULT_SMOOTH_MOMENTUM_LENGTH: usize = 5;
pub const DEFAULT_SMOOTH_MOMENTUM_SMOOTH_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothMomentumOptions {
    /// First smoothing period applied to the raw count.
    pub length: usize,
    /// Second smoothing period (main line) and signal line period.
    pub smooth_length: usize,
    /// Number of prior opens compared against each close.
    pub tmo_length: usize,
}

impl Default for SmoothMomentumOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_SMOOTH_MOMENTUM_LENGTH,
            smooth_length: DEFAULT_SMOOTH_MOMENTUM_SMOOTH_LENGTH,
            tmo_length: DEFAULT_TMO_LENGTH,
        }
    }
}

impl SmoothMomentumOptions {
    pub fn lookback(&self) -> usize {
        self.tmo_length
            .saturating_add(self.length)
            .saturating_add(self.smooth_length.saturating_mul(2))
            .saturating_sub(3)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmoothMomentumOutput {
    pub main: Vec<f64>,
    pub signal: Vec<f64>,
}

/// Raw discretised momentum count, end-aligned (`n - tmo_length` long).
pub fn momentum_count(candles: &[Candle], tmo_length: usize) -> Vec<f64> {
    if tmo_length == 0 || candles.len() <= tmo_length {
        return Vec::new();
    }

    (tmo_length..candles.len())
        .map(|i| {
            let close = candles[i].close;
            candles[i - tmo_length..i]
                .iter()
                .map(|prior| {
                    if close > prior.open {
                        1.0
                    } else if close < prior.open {
                        -1.0
                    } else {
                        0.0
                    }
                })
                .sum()
        })
        .collect()
}

pub fn smooth_momentum(candles: &[Candle], options: &SmoothMomentumOptions) -> SmoothMomentumOutput {
    let count = momentum_count(candles, options.tmo_length);
    let main = ema(&ema(&count, options.length), options.smooth_length);
    let signal = ema(&main, options.smooth_length);

    let (main, signal) = align_suffix(&main, &signal);
    SmoothMomentumOutput {
        main: main.to_vec(),
        signal: signal.to_vec(),
    }
}

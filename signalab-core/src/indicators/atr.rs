//! Average True Range (ATR).
//!
//! True Range: max(high-low, |high-prev_close|, |low-prev_close|), defined
//! from the second candle on (it needs a previous close).
//! ATR uses Wilder smoothing (alpha = 1/period) seeded with the mean of the
//! first `period` true ranges.
//! Lookback: period.

use super::ema::wema;
use crate::domain::Candle;
use crate::indicator::Indicator;

#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
    name: String,
}

impl Atr {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            name: format!("atr_{period}"),
        }
    }
}

impl Indicator for Atr {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        atr(candles, self.period)
    }
}

/// True range series, end-aligned, `n - 1` long.
pub fn true_range(candles: &[Candle]) -> Vec<f64> {
    candles
        .windows(2)
        .map(|w| {
            let (h, l, pc) = (w[1].high, w[1].low, w[0].close);
            (h - l).max((h - pc).abs()).max((l - pc).abs())
        })
        .collect()
}

/// Wilder ATR, end-aligned, `n - period` long.
pub fn atr(candles: &[Candle], period: usize) -> Vec<f64> {
    wema(&true_range(candles), period)
}

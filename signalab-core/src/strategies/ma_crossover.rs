//! Moving average crossover — golden cross and death cross detection.
//!
//! Buy when the fast MA crosses above the slow MA on the last bar, sell when
//! it crosses below.

use crate::domain::{closes, Candle};
use crate::indicators::MaType;
use crate::signals::{crossed_down, crossed_up};

use super::Strategy;

pub const DEFAULT_MA_FAST: usize = 10;
pub const DEFAULT_MA_SLOW: usize = 50;

#[derive(Debug, Clone)]
pub struct MaCrossover {
    pub fast_period: usize,
    pub slow_period: usize,
    pub ma_type: MaType,
}

impl MaCrossover {
    pub fn new(fast_period: usize, slow_period: usize, ma_type: MaType) -> Self {
        Self {
            fast_period,
            slow_period,
            ma_type,
        }
    }

    pub fn default_params() -> Self {
        Self::new(DEFAULT_MA_FAST, DEFAULT_MA_SLOW, MaType::Sma)
    }

    fn lines(&self, candles: &[Candle]) -> (Vec<f64>, Vec<f64>) {
        let closes = closes(candles);
        (
            self.ma_type.apply(&closes, self.fast_period),
            self.ma_type.apply(&closes, self.slow_period),
        )
    }
}

impl Strategy for MaCrossover {
    fn name(&self) -> &str {
        "ma_crossover"
    }

    fn warmup_bars(&self) -> usize {
        self.fast_period.max(self.slow_period).saturating_add(1)
    }

    fn is_buy_signal(&self, candles: &[Candle]) -> bool {
        let (fast, slow) = self.lines(candles);
        crossed_up(&fast, &slow)
    }

    fn is_sell_signal(&self, candles: &[Candle]) -> bool {
        let (fast, slow) = self.lines(candles);
        crossed_down(&fast, &slow)
    }
}

//! MACD crossover — MACD line against its signal line.

use crate::domain::{closes, Candle};
use crate::indicators::{macd, MacdOptions, MacdOutput};
use crate::signals::{crossed_down, crossed_up};

use super::Strategy;

#[derive(Debug, Clone, Default)]
pub struct MacdCrossover {
    pub options: MacdOptions,
}

impl MacdCrossover {
    pub fn new(options: MacdOptions) -> Self {
        Self { options }
    }

    fn lines(&self, candles: &[Candle]) -> MacdOutput {
        macd(&closes(candles), &self.options)
    }
}

impl Strategy for MacdCrossover {
    fn name(&self) -> &str {
        "macd_crossover"
    }

    fn warmup_bars(&self) -> usize {
        self.options.lookback().saturating_add(2)
    }

    fn is_buy_signal(&self, candles: &[Candle]) -> bool {
        let out = self.lines(candles);
        crossed_up(&out.macd, &out.signal)
    }

    fn is_sell_signal(&self, candles: &[Candle]) -> bool {
        let out = self.lines(candles);
        crossed_down(&out.macd, &out.signal)
    }
}

//! Smooth momentum crossover — main line against its signal line.

use crate::domain::Candle;
use crate::indicators::{smooth_momentum, SmoothMomentumOptions, SmoothMomentumOutput};
use crate::signals::{crossed_down, crossed_up};

use super::Strategy;

#[derive(Debug, Clone, Default)]
pub struct SmoothMomentumCrossover {
    pub options: SmoothMomentumOptions,
}

impl SmoothMomentumCrossover {
    pub fn new(options: SmoothMomentumOptions) -> Self {
        Self { options }
    }

    fn lines(&self, candles: &[Candle]) -> SmoothMomentumOutput {
        smooth_momentum(candles, &self.options)
    }
}

impl Strategy for SmoothMomentumCrossover {
    fn name(&self) -> &str {
        "smooth_momentum_crossover"
    }

    fn warmup_bars(&self) -> usize {
        self.options.lookback().saturating_add(2)
    }

    fn is_buy_signal(&self, candles: &[Candle]) -> bool {
        let out = self.lines(candles);
        crossed_up(&out.main, &out.signal)
    }

    fn is_sell_signal(&self, candles: &[Candle]) -> bool {
        let out = self.lines(candles);
        crossed_down(&out.main, &out.signal)
    }
}

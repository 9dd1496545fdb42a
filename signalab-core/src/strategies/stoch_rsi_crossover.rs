//! Stochastic RSI crossover.
//!
//! Buy when %K crosses above %D out of the oversold zone, sell when %K
//! crosses below %D out of the overbought zone. The zone test uses %K on the
//! bar before the cross.

use crate::domain::{closes, Candle};
use crate::indicators::{stoch_rsi, StochRsiOptions, StochRsiOutput};
use crate::signals::{crossed_down, crossed_up};

use super::Strategy;

pub const DEFAULT_STOCH_OVERSOLD: f64 = 20.0;
pub const DEFAULT_STOCH_OVERBOUGHT: f64 = 80.0;

#[derive(Debug, Clone)]
pub struct StochRsiCrossover {
    pub options: StochRsiOptions,
    pub oversold: f64,
    pub overbought: f64,
}

impl StochRsiCrossover {
    pub fn new(options: StochRsiOptions, oversold: f64, overbought: f64) -> Self {
        Self {
            options,
            oversold,
            overbought,
        }
    }

    fn lines(&self, candles: &[Candle]) -> StochRsiOutput {
        stoch_rsi(&closes(candles), &self.options)
    }
}

impl Default for StochRsiCrossover {
    fn default() -> Self {
        Self::new(
            StochRsiOptions::default(),
            DEFAULT_STOCH_OVERSOLD,
            DEFAULT_STOCH_OVERBOUGHT,
        )
    }
}

fn previous(series: &[f64]) -> Option<f64> {
    series.len().checked_sub(2).map(|i| series[i])
}

impl Strategy for StochRsiCrossover {
    fn name(&self) -> &str {
        "stoch_rsi_crossover"
    }

    fn warmup_bars(&self) -> usize {
        self.options.lookback().saturating_add(2)
    }

    fn is_buy_signal(&self, candles: &[Candle]) -> bool {
        let out = self.lines(candles);
        crossed_up(&out.k, &out.d) && previous(&out.k).is_some_and(|k| k < self.oversold)
    }

    fn is_sell_signal(&self, candles: &[Candle]) -> bool {
        let out = self.lines(candles);
        crossed_down(&out.k, &out.d) && previous(&out.k).is_some_and(|k| k > self.overbought)
    }
}

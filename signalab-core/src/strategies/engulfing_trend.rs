//! Engulfing candle with trend and RSI confirmation.
//!
//! Buy on a bullish engulfing bar while the close sits above the trend EMA and
//! RSI is below the overbought level. Sell on a bearish engulfing bar below
//! the trend EMA with RSI above the oversold level.

use crate::domain::{closes, Candle, Trend};
use crate::indicators::rsi::{rsi, DEFAULT_RSI_PERIOD};
use crate::signals::trend::DEFAULT_TREND_EMA_PERIOD;
use crate::signals::{ema_trend, last_engulfing, Engulfing};

use super::oscillator_threshold::{DEFAULT_OVERBOUGHT, DEFAULT_OVERSOLD};
use super::Strategy;

#[derive(Debug, Clone)]
pub struct EngulfingTrend {
    pub trend_period: usize,
    pub rsi_period: usize,
    pub oversold: f64,
    pub overbought: f64,
}

impl EngulfingTrend {
    pub fn new(trend_period: usize, rsi_period: usize, oversold: f64, overbought: f64) -> Self {
        Self {
            trend_period,
            rsi_period,
            oversold,
            overbought,
        }
    }

    fn confirms(&self, candles: &[Candle], pattern: Engulfing) -> bool {
        if last_engulfing(candles) != Some(pattern) {
            return false;
        }
        let closes = closes(candles);
        let Some(&last_rsi) = rsi(&closes, self.rsi_period).last() else {
            return false;
        };
        match pattern {
            Engulfing::Bullish => {
                ema_trend(&closes, self.trend_period) == Trend::Up && last_rsi < self.overbought
            }
            Engulfing::Bearish => {
                ema_trend(&closes, self.trend_period) == Trend::Down && last_rsi > self.oversold
            }
        }
    }
}

impl Default for EngulfingTrend {
    fn default() -> Self {
        Self::new(
            DEFAULT_TREND_EMA_PERIOD,
            DEFAULT_RSI_PERIOD,
            DEFAULT_OVERSOLD,
            DEFAULT_OVERBOUGHT,
        )
    }
}

impl Strategy for EngulfingTrend {
    fn name(&self) -> &str {
        "engulfing_trend"
    }

    fn warmup_bars(&self) -> usize {
        self.trend_period.max(self.rsi_period).max(1).saturating_add(1)
    }

    fn is_buy_signal(&self, candles: &[Candle]) -> bool {
        self.confirms(candles, Engulfing::Bullish)
    }

    fn is_sell_signal(&self, candles: &[Candle]) -> bool {
        self.confirms(candles, Engulfing::Bearish)
    }
}

//! Threshold rules on a bounded oscillator (RSI or RMI).
//!
//! Reversal mode (default): buy when the oscillator climbs back above the
//! oversold level, sell when it falls back below the overbought level.
//!
//! Breakout mode: buy when it pushes above the overbought level, sell when it
//! drops below the oversold level.
//!
//! Only the last two oscillator points are compared.

use serde::{Deserialize, Serialize};

use crate::domain::{closes, Candle};
use crate::indicators::{rmi, rsi, RmiOptions};

use super::{crossed_above_level, crossed_below_level, Strategy};

pub const DEFAULT_OVERSOLD: f64 = 30.0;
pub const DEFAULT_OVERBOUGHT: f64 = 70.0;

/// Which oscillator feeds the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OscillatorSource {
    Rsi { period: usize },
    Rmi(RmiOptions),
}

impl OscillatorSource {
    pub fn lookback(&self) -> usize {
        match self {
            OscillatorSource::Rsi { period } => *period,
            OscillatorSource::Rmi(options) => options.lookback(),
        }
    }

    pub fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        let closes = closes(candles);
        match self {
            OscillatorSource::Rsi { period } => rsi(&closes, *period),
            OscillatorSource::Rmi(options) => rmi(&closes, options),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OscillatorThreshold {
    pub source: OscillatorSource,
    pub oversold: f64,
    pub overbought: f64,
    pub breakout: bool,
}

impl OscillatorThreshold {
    pub fn new(source: OscillatorSource, oversold: f64, overbought: f64, breakout: bool) -> Self {
        Self {
            source,
            oversold,
            overbought,
            breakout,
        }
    }

    /// Levels armed for (buy, sell) in the current mode.
    fn levels(&self) -> (f64, f64) {
        if self.breakout {
            (self.overbought, self.oversold)
        } else {
            (self.oversold, self.overbought)
        }
    }
}

impl Strategy for OscillatorThreshold {
    fn name(&self) -> &str {
        "oscillator_threshold"
    }

    fn warmup_bars(&self) -> usize {
        self.source.lookback().saturating_add(2)
    }

    fn is_buy_signal(&self, candles: &[Candle]) -> bool {
        crossed_above_level(&self.source.compute(candles), self.levels().0)
    }

    fn is_sell_signal(&self, candles: &[Candle]) -> bool {
        crossed_below_level(&self.source.compute(candles), self.levels().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Signal;
    use crate::indicators::make_candles;

    fn rsi_source() -> OscillatorSource {
        OscillatorSource::Rsi { period: 3 }
    }

    /// Slide down hard, then bounce: RSI leaves the oversold zone on the last bar.
    fn bounce() -> Vec<Candle> {
        make_candles(&[50.0, 48.0, 46.0, 44.0, 42.0, 40.0, 45.0])
    }

    /// Rally hard, then fall back: RSI leaves the overbought zone on the last bar.
    fn pullback() -> Vec<Candle> {
        make_candles(&[40.0, 42.0, 44.0, 46.0, 48.0, 50.0, 45.0])
    }

    #[test]
    fn reversal_mode() {
        let s = OscillatorThreshold::new(rsi_source(), 30.0, 70.0, false);
        assert_eq!(s.evaluate(&bounce()), Signal::Buy);
        assert_eq!(s.evaluate(&pullback()), Signal::Sell);
    }

    #[test]
    fn breakout_mode_flips_polarity() {
        let s = OscillatorThreshold::new(rsi_source(), 30.0, 70.0, true);
        // The bounce leaves oversold but does not reach overbought.
        assert_eq!(s.evaluate(&bounce()), Signal::None);
        // Falling from 100 crosses 70 but never 30.
        assert_eq!(s.evaluate(&pullback()), Signal::None);

        let breakout = make_candles(&[50.0, 49.0, 48.0, 47.0, 46.0, 45.0, 44.0, 60.0]);
        assert_eq!(s.evaluate(&breakout), Signal::Buy);
    }

    #[test]
    fn rmi_source() {
        let s = OscillatorThreshold::new(
            OscillatorSource::Rmi(RmiOptions {
                length: 3,
                momentum: 1,
            }),
            30.0,
            70.0,
            false,
        );
        assert_eq!(s.warmup_bars(), 5);
        // One early dip keeps the smoothed down term above zero.
        let candles = make_candles(&[40.0, 42.0, 41.0, 44.0, 46.0, 48.0, 50.0, 45.0]);
        assert_eq!(s.evaluate(&candles), Signal::Sell);
    }

    #[test]
    fn short_window_is_neutral() {
        let s = OscillatorThreshold::new(rsi_source(), 30.0, 70.0, false);
        assert_eq!(s.evaluate(&bounce()[..4]), Signal::None);
    }
}

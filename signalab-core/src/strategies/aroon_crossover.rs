//! Aroon crossover signal - Aroon Up crosses Aroon Down.
//!
//! Buy when Aroon Up crosses above Aroon Down (bullish crossover), sell when
//! Aroon Down crosses above Aroon Up (bearish crossover).

use crate::domain::{highs, lows, Candle};
use crate::indicators::aroon::DEFAULT_AROON_LENGTH;
use crate::indicators::{aroon, AroonOutput};
use crate::signals::{crossed_down, crossed_up};

use super::Strategy;

#[derive(Debug, Clone)]
pub struct AroonCrossover {
    pub length: usize,
}

impl AroonCrossover {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    fn lines(&self, candles: &[Candle]) -> AroonOutput {
        aroon(&highs(candles), &lows(candles), self.length)
    }
}

impl Default for AroonCrossover {
    fn default() -> Self {
        Self::new(DEFAULT_AROON_LENGTH)
    }
}

impl Strategy for AroonCrossover {
    fn name(&self) -> &str {
        "aroon_crossover"
    }

    fn warmup_bars(&self) -> usize {
        self.length.saturating_add(2)
    }

    fn is_buy_signal(&self, candles: &[Candle]) -> bool {
        let out = self.lines(candles);
        crossed_up(&out.up, &out.down)
    }

    fn is_sell_signal(&self, candles: &[Candle]) -> bool {
        let out = self.lines(candles);
        crossed_down(&out.up, &out.down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Signal;
    use crate::indicators::make_candles;

    /// Up 10 bars, down 12, up 12.
    fn zigzag() -> Vec<Candle> {
        let closes: Vec<f64> = (0..10)
            .map(|i| 80.0 + 2.0 * i as f64)
            .chain((1..=12).map(|i| 98.0 - 2.0 * i as f64))
            .chain((1..=12).map(|i| 74.0 + 3.0 * i as f64))
            .collect();
        make_candles(&closes)
    }

    #[test]
    fn crosses_after_each_turn() {
        let candles = zigzag();
        let s = AroonCrossover::new(4);
        let signals: Vec<(usize, Signal)> = (1..=candles.len())
            .map(|end| (end, s.evaluate(&candles[..end])))
            .filter(|(_, sig)| !sig.is_none())
            .collect();
        assert_eq!(signals, vec![(13, Signal::Sell), (24, Signal::Buy)]);
    }

    #[test]
    fn default_length() {
        let s = AroonCrossover::default();
        assert_eq!(s.length, 25);
        assert_eq!(s.warmup_bars(), 27);
        assert_eq!(s.evaluate(&zigzag()[..26]), Signal::None);
    }
}

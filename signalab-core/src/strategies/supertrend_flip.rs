//! Supertrend direction flip.
//!
//! Buy on the bar where the trend turns from short to long, sell where it
//! turns from long to short.
//!
//! Live callers keep the state returned by [`SupertrendFlip::evaluate_with_state`]
//! and pass it back with the next window, one state cell per symbol.

use crate::domain::{Candle, Signal, Trend};
use crate::indicators::{supertrend, supertrend_from, SupertrendOptions, SupertrendState};

use super::Strategy;

#[derive(Debug, Clone, Default)]
pub struct SupertrendFlip {
    pub options: SupertrendOptions,
}

impl SupertrendFlip {
    pub fn new(options: SupertrendOptions) -> Self {
        Self { options }
    }

    /// Decide on the window's last bar and return that bar's state.
    ///
    /// `state_in` is the state of the bar before the last one. Without it both
    /// states are recomputed from the window.
    pub fn evaluate_with_state(
        &self,
        state_in: Option<SupertrendState>,
        candles: &[Candle],
    ) -> (Option<SupertrendState>, Signal) {
        let (prev, current) = match state_in {
            Some(prev) => (
                Some(prev),
                supertrend_from(Some(prev), candles, &self.options),
            ),
            None => match supertrend(candles, &self.options).as_slice() {
                [.., prev, last] => (Some(*prev), Some(*last)),
                [last] => (None, Some(*last)),
                [] => (None, None),
            },
        };

        let signal = match (prev, current) {
            (Some(prev), Some(current)) => flip(prev.trend, current.trend),
            _ => Signal::None,
        };
        if !signal.is_none() {
            tracing::trace!(%signal, "supertrend flip");
        }
        (current, signal)
    }
}

fn flip(prev: Trend, current: Trend) -> Signal {
    match (prev, current) {
        (Trend::Down, Trend::Up) => Signal::Buy,
        (Trend::Up, Trend::Down) => Signal::Sell,
        _ => Signal::None,
    }
}

impl Strategy for SupertrendFlip {
    fn name(&self) -> &str {
        "supertrend_flip"
    }

    fn warmup_bars(&self) -> usize {
        // Indicator lookback + 1 for flip detection (need previous state).
        self.options.atr_period.saturating_add(2)
    }

    fn is_buy_signal(&self, candles: &[Candle]) -> bool {
        self.evaluate_with_state(None, candles).1 == Signal::Buy
    }

    fn is_sell_signal(&self, candles: &[Candle]) -> bool {
        self.evaluate_with_state(None, candles).1 == Signal::Sell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_candles;

    /// Down 2 per bar for 16 bars, then up 3 per bar.
    fn v_shape() -> Vec<Candle> {
        let closes: Vec<f64> = (0..16)
            .map(|i| 100.0 - 2.0 * i as f64)
            .chain((1..=16).map(|i| 70.0 + 3.0 * i as f64))
            .collect();
        make_candles(&closes)
    }

    fn strategy() -> SupertrendFlip {
        SupertrendFlip::new(SupertrendOptions {
            atr_period: 3,
            atr_multiplier: 1.5,
        })
    }

    #[test]
    fn flips_on_both_legs_of_a_v() {
        let candles = v_shape();
        let s = strategy();
        let signals: Vec<(usize, Signal)> = (1..=candles.len())
            .map(|end| (end, s.evaluate(&candles[..end])))
            .filter(|(_, sig)| !sig.is_none())
            .collect();
        assert_eq!(signals, vec![(6, Signal::Sell), (19, Signal::Buy)]);
    }

    #[test]
    fn threaded_state_matches_recomputation() {
        let candles = v_shape();
        let s = strategy();
        let mut state = None;
        for end in 4..=candles.len() {
            let window = &candles[..end];
            let (next, signal) = s.evaluate_with_state(state, window);
            assert_eq!(signal, s.evaluate_with_state(None, window).1, "end={end}");
            assert_eq!(next, supertrend(window, &s.options).last().copied());
            state = next;
        }
    }

    #[test]
    fn short_window_has_no_flip() {
        let candles = v_shape();
        let s = strategy();
        assert_eq!(s.evaluate_with_state(None, &candles[..3]), (None, Signal::None));
        let (state, signal) = s.evaluate_with_state(None, &candles[..4]);
        assert!(state.is_some());
        assert_eq!(signal, Signal::None);
    }
}

//! Range filter turn signal.
//!
//! Buy when the range filter starts rising (it rose on the last bar after a
//! flat or falling bar) with the close above it. Sell when it starts falling
//! with the close below it.

use crate::domain::{closes, Candle, Signal};
use crate::indicators::{range_bands, range_bands_from, RangeBandsOptions, RangeBandsState};

use super::Strategy;

#[derive(Debug, Clone, Default)]
pub struct RangeBandsSignal {
    pub options: RangeBandsOptions,
}

impl RangeBandsSignal {
    pub fn new(options: RangeBandsOptions) -> Self {
        Self { options }
    }

    /// Decide on the window's last bar and return that bar's filter state.
    ///
    /// `state_in` is the state of the bar before the last one; without it
    /// both states come from a batch recomputation of the window.
    pub fn evaluate_with_state(
        &self,
        state_in: Option<RangeBandsState>,
        candles: &[Candle],
    ) -> (Option<RangeBandsState>, Signal) {
        let closes = closes(candles);
        let (prev, current) = match state_in {
            Some(prev) => (
                Some(prev),
                range_bands_from(Some(prev), &closes, &self.options),
            ),
            None => {
                let out = range_bands(&closes, &self.options);
                let prev = out.len().checked_sub(2).and_then(|i| out.state(i));
                (prev, out.last_state())
            }
        };

        let signal = match (prev, current, closes.last()) {
            (Some(prev), Some(current), Some(&close)) => turn(&prev, &current, close),
            _ => Signal::None,
        };
        (current, signal)
    }
}

fn turn(prev: &RangeBandsState, current: &RangeBandsState, close: f64) -> Signal {
    let started_rising = current.filt > prev.filt && prev.downward > 0;
    let started_falling = current.filt < prev.filt && prev.upward > 0;
    Signal::from_flags(
        started_rising && close > current.filt,
        started_falling && close < current.filt,
    )
}

impl Strategy for RangeBandsSignal {
    fn name(&self) -> &str {
        "range_bands"
    }

    fn warmup_bars(&self) -> usize {
        self.options.period.saturating_add(2)
    }

    fn is_buy_signal(&self, candles: &[Candle]) -> bool {
        self.evaluate_with_state(None, candles).1 == Signal::Buy
    }

    fn is_sell_signal(&self, candles: &[Candle]) -> bool {
        self.evaluate_with_state(None, candles).1 == Signal::Sell
    }
}

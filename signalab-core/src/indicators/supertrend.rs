//! Supertrend — ATR band around the recent range midpoint with a ratchet.
//!
//! midpoint   = (highest high + lowest low) / 2 over `atr_period` bars
//! raw bands  = midpoint ± atr_multiplier * ATR(atr_period)
//!
//! Ratchet: the lower band may only rise while the previous close held at or
//! above the previous lower band; the upper band may only fall while the
//! previous close held at or below the previous upper band. Otherwise the
//! band resets to its raw value. A band never resets while the trend it
//! supports is still in force, so the lower band is non-decreasing for as
//! long as the trend stays long (and the upper band non-increasing while
//! short).
//!
//! Trend flips short → long when the close exceeds the current upper band,
//! long → short when it drops below the current lower band, and otherwise
//! persists. The first bar starts long and goes short at once if its close
//! is already below its own lower band.
//!
//! Cross-bar memory lives in [`SupertrendState`], which callers thread
//! explicitly; nothing here is shared between symbols.
//! Lookback: atr_period.

use serde::{Deserialize, Serialize};

use super::atr::atr;
use crate::domain::{highs, lows, Candle, Trend};
use crate::series::{align_suffix3, rolling_max, rolling_min, tail};

pub const DEFAULT_SUPERTREND_ATR_PERIOD: usize = 10;
pub const DEFAULT_SUPERTREND_MULTIPLIER: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupertrendOptions {
    pub atr_period: usize,
    pub atr_multiplier: f64,
}

impl Default for SupertrendOptions {
    fn default() -> Self {
        Self {
            atr_period: DEFAULT_SUPERTREND_ATR_PERIOD,
            atr_multiplier: DEFAULT_SUPERTREND_MULTIPLIER,
        }
    }
}

/// Supertrend state of one bar.
///
/// `close` is that bar's close; the next step's ratchet consumes it.
/// `trend` is always `Up` or `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupertrendState {
    pub trend: Trend,
    pub upper_band: f64,
    pub lower_band: f64,
    pub close: f64,
}

impl SupertrendState {
    /// Advance from the previous bar's state (`None` on the first bar).
    pub fn step(prev: Option<&Self>, close: f64, midpoint: f64, atr: f64, multiplier: f64) -> Self {
        let raw_upper = midpoint + multiplier * atr;
        let raw_lower = midpoint - multiplier * atr;

        let Some(prev) = prev else {
            // Starts long unless the first close already sits below support.
            let trend = if close < raw_lower { Trend::Down } else { Trend::Up };
            return Self {
                trend,
                upper_band: raw_upper,
                lower_band: raw_lower,
                close,
            };
        };

        // Lower band: can only rise while support held or the trend is long
        let lower_band = if prev.close >= prev.lower_band || prev.trend == Trend::Up {
            raw_lower.max(prev.lower_band)
        } else {
            raw_lower
        };

        // Upper band: can only fall while resistance held or the trend is short
        let upper_band = if prev.close <= prev.upper_band || prev.trend == Trend::Down {
            raw_upper.min(prev.upper_band)
        } else {
            raw_upper
        };

        let trend = match prev.trend {
            Trend::Down if close > upper_band => Trend::Up,
            Trend::Up if close < lower_band => Trend::Down,
            Trend::Neutral => Trend::Up,
            other => other,
        };

        Self {
            trend,
            upper_band,
            lower_band,
            close,
        }
    }

    /// Active band: support while long, resistance while short.
    pub fn active_band(&self) -> f64 {
        match self.trend {
            Trend::Down => self.upper_band,
            _ => self.lower_band,
        }
    }
}

/// Per-bar recurrence inputs: (close, midpoint, atr), end-aligned.
fn band_inputs(candles: &[Candle], options: &SupertrendOptions) -> Vec<(f64, f64, f64)> {
    let period = options.atr_period;
    let atr = atr(candles, period);
    let highest = rolling_max(&highs(candles), period);
    let lowest = rolling_min(&lows(candles), period);
    let (highest, lowest, atr) = align_suffix3(&highest, &lowest, &atr);
    let window = tail(candles, atr.len());

    window
        .iter()
        .zip(highest.iter().zip(lowest))
        .zip(atr)
        .map(|((c, (&hi, &lo)), &a)| (c.close, (hi + lo) / 2.0, a))
        .collect()
}

/// Batch Supertrend states, end-aligned, `n - atr_period` long.
pub fn supertrend(candles: &[Candle], options: &SupertrendOptions) -> Vec<SupertrendState> {
    let mut prev: Option<SupertrendState> = None;
    band_inputs(candles, options)
        .into_iter()
        .map(|(close, midpoint, atr)| {
            let state =
                SupertrendState::step(prev.as_ref(), close, midpoint, atr, options.atr_multiplier);
            prev = Some(state);
            state
        })
        .collect()
}

/// State of the window's final bar, resuming from `state_in` when given.
///
/// `state_in` is the state persisted for the bar before the window's last
/// bar (the previous call's output). Without it the previous state comes
/// from the batch recomputation of the window.
pub fn supertrend_from(
    state_in: Option<SupertrendState>,
    candles: &[Candle],
    options: &SupertrendOptions,
) -> Option<SupertrendState> {
    match state_in {
        None => supertrend(candles, options).last().copied(),
        Some(prev) => {
            let &(close, midpoint, atr) = band_inputs(candles, options).last()?;
            Some(SupertrendState::step(
                Some(&prev),
                close,
                midpoint,
                atr,
                options.atr_multiplier,
            ))
        }
    }
}

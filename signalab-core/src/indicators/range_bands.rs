//! Range bands — an adaptive trailing filter with a volatility envelope.
//!
//! avg_range    = EMA(|x[t] - x[t-1]|, period)
//! smooth_range = EMA(avg_range, 2*period - 1) * multiplier
//!
//! Both EMAs are seeded with their first input so the envelope exists from
//! the second bar on. The centre line `filt` only moves when price breaks out
//! of the current half-width: a rise lifts it to `price - smooth_range` if
//! that exceeds the previous value, a fall lowers it to
//! `price + smooth_range` if that is below. Bands are `filt ± smooth_range`.
//!
//! Run counters: `upward` grows while filt does not fall and resets on a fall;
//! `downward` mirrors it. A flat bar extends both runs.
//!
//! Warm-up: the first emitted value belongs to input index `period`.

use serde::{Deserialize, Serialize};

use super::ema::ema_from_first;

pub const DEFAULT_RANGE_PERIOD: usize = 100;
pub const DEFAULT_RANGE_MULTIPLIER: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeBandsOptions {
    pub period: usize,
    pub multiplier: f64,
}

impl Default for RangeBandsOptions {
    fn default() -> Self {
        Self {
            period: DEFAULT_RANGE_PERIOD,
            multiplier: DEFAULT_RANGE_MULTIPLIER,
        }
    }
}

/// Filter state carried from one bar to the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBandsState {
    pub filt: f64,
    pub upward: u32,
    pub downward: u32,
}

impl RangeBandsState {
    /// State before any breakout: the filter sits on the first price.
    pub fn seed(value: f64) -> Self {
        Self {
            filt: value,
            upward: 0,
            downward: 0,
        }
    }

    /// Advance the filter by one bar.
    pub fn step(&self, value: f64, smooth_range: f64) -> Self {
        let prev = self.filt;
        let filt = if value > prev {
            (value - smooth_range).max(prev)
        } else {
            (value + smooth_range).min(prev)
        };

        Self {
            filt,
            upward: if filt >= prev { self.upward + 1 } else { 0 },
            downward: if filt <= prev { self.downward + 1 } else { 0 },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeBandsOutput {
    pub filt: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
    pub upward: Vec<u32>,
    pub downward: Vec<u32>,
}

impl RangeBandsOutput {
    pub fn len(&self) -> usize {
        self.filt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filt.is_empty()
    }

    /// State at output index `i`.
    pub fn state(&self, i: usize) -> Option<RangeBandsState> {
        Some(RangeBandsState {
            filt: *self.filt.get(i)?,
            upward: *self.upward.get(i)?,
            downward: *self.downward.get(i)?,
        })
    }

    pub fn last_state(&self) -> Option<RangeBandsState> {
        self.state(self.len().checked_sub(1)?)
    }
}

/// Smoothed half-width, aligned so that element `k` belongs to input `k + 1`.
pub fn smooth_range(values: &[f64], options: &RangeBandsOptions) -> Vec<f64> {
    if options.period == 0 {
        return Vec::new();
    }
    let changes: Vec<f64> = values.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    let avg_range = ema_from_first(&changes, options.period);
    ema_from_first(&avg_range, options.period.saturating_mul(2) - 1)
        .into_iter()
        .map(|r| r * options.multiplier)
        .collect()
}

pub fn range_bands(values: &[f64], options: &RangeBandsOptions) -> RangeBandsOutput {
    let period = options.period;
    let n = values.len();
    if period == 0 || n <= period {
        return RangeBandsOutput::default();
    }

    let ranges = smooth_range(values, options);
    let mut out = RangeBandsOutput::default();
    let mut state = RangeBandsState::seed(values[0]);

    for i in 1..n {
        let range = ranges[i - 1];
        state = state.step(values[i], range);
        if i >= period {
            out.filt.push(state.filt);
            out.upper.push(state.filt + range);
            out.lower.push(state.filt - range);
            out.upward.push(state.upward);
            out.downward.push(state.downward);
        }
    }

    out
}

/// Recompute the final bar's state, resuming from `state_in` when given.
///
/// `state_in` is the state persisted for the bar before the window's last
/// bar. Without it the previous state comes from the batch recomputation.
pub fn range_bands_from(
    state_in: Option<RangeBandsState>,
    values: &[f64],
    options: &RangeBandsOptions,
) -> Option<RangeBandsState> {
    let n = values.len();
    if options.period == 0 || n <= options.period {
        return None;
    }

    let prev = match state_in {
        Some(state) => state,
        None if n - 1 > options.period => range_bands(&values[..n - 1], options).last_state()?,
        None => {
            // Previous bar is still in warm-up: replay it without emitting.
            let ranges = smooth_range(&values[..n - 1], options);
            ranges
                .iter()
                .zip(&values[1..n - 1])
                .fold(RangeBandsState::seed(values[0]), |s, (&r, &v)| s.step(v, r))
        }
    };

    let range = *smooth_range(values, options).last()?;
    Some(prev.step(values[n - 1], range))
}

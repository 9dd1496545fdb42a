//! Indicator trait for single-series, candle-driven indicators.
//!
//! Indicators are pure functions: candle window in, numeric series out.
//! Unlike a padded representation, the output carries no warm-up values: it
//! is end-aligned with the input and `lookback()` elements shorter.

use crate::domain::Candle;

/// Trait for indicators that reduce a candle window to one numeric series.
///
/// # Look-ahead contamination guard
/// No output value aligned with candle t may depend on candle t+1 or later.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_20", "rsi_14").
    fn name(&self) -> &str;

    /// Number of leading candles consumed before the first output value.
    fn lookback(&self) -> usize;

    /// Compute the indicator over the whole window.
    ///
    /// Returns at most `candles.len() - lookback()` values, the last of which
    /// belongs to the last candle. Too little history yields an empty vector.
    fn compute(&self, candles: &[Candle]) -> Vec<f64>;
}

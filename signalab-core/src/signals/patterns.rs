//! Two-candle engulfing pattern.

use serde::{Deserialize, Serialize};

use crate::domain::Candle;

/// Bodies smaller than this count as doji.
pub const DOJI_BODY_EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engulfing {
    /// Bullish body fully covering the previous bearish body.
    Bullish,
    /// Bearish body fully covering the previous bullish body.
    Bearish,
}

/// Classify the pair `(prev, curr)`. Doji bodies never engulf or get engulfed.
pub fn engulfing(prev: &Candle, curr: &Candle) -> Option<Engulfing> {
    if prev.body().abs() < DOJI_BODY_EPSILON || curr.body().abs() < DOJI_BODY_EPSILON {
        return None;
    }

    if prev.is_bearish() && curr.is_bullish() && curr.open <= prev.close && curr.close >= prev.open
    {
        return Some(Engulfing::Bullish);
    }
    if prev.is_bullish() && curr.is_bearish() && curr.open >= prev.close && curr.close <= prev.open
    {
        return Some(Engulfing::Bearish);
    }
    None
}

/// Pattern formed by the last two candles of the window.
pub fn last_engulfing(candles: &[Candle]) -> Option<Engulfing> {
    match candles {
        [.., prev, curr] => engulfing(prev, curr),
        _ => None,
    }
}

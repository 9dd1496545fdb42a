//! Strategy signal layer — candle window in, tri-state decision out.
//!
//! Each strategy pairs one indicator family with a fixed decision rule and
//! only ever inspects the final bar of its window. Strategies hold options,
//! never market state: the stateful ones (Supertrend, Range Bands) take their
//! previous state as an explicit argument and hand the new one back.

pub mod aroon_crossover;
pub mod config;
pub mod engulfing_trend;
pub mod factory;
pub mod ma_crossover;
pub mod macd_crossover;
pub mod oscillator_threshold;
pub mod range_bands;
pub mod smooth_momentum_crossover;
pub mod stoch_rsi_crossover;
pub mod supertrend_flip;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{Candle, Signal};

pub use aroon_crossover::AroonCrossover;
pub use config::{ConfigError, StrategySet};
pub use engulfing_trend::EngulfingTrend;
pub use factory::{create_strategy, FactoryError, StrategyConfig};
pub use ma_crossover::MaCrossover;
pub use macd_crossover::MacdCrossover;
pub use oscillator_threshold::{OscillatorSource, OscillatorThreshold};
pub use range_bands::RangeBandsSignal;
pub use smooth_momentum_crossover::SmoothMomentumCrossover;
pub use stoch_rsi_crossover::StochRsiCrossover;
pub use supertrend_flip::SupertrendFlip;

/// Trait for signal-producing strategies.
///
/// # Look-ahead contamination guard
/// A decision for the window's last candle may only use that candle and
/// earlier ones. Callers evaluate historical bars by passing a truncated
/// window, never by passing an index into a longer one.
pub trait Strategy: Send + Sync {
    /// Registry name (e.g., "macd_crossover").
    fn name(&self) -> &str;

    /// Minimum window length for a decision.
    fn warmup_bars(&self) -> usize;

    /// Whether the final bar of `candles` is a buy.
    fn is_buy_signal(&self, candles: &[Candle]) -> bool;

    /// Whether the final bar of `candles` is a sell.
    fn is_sell_signal(&self, candles: &[Candle]) -> bool;

    /// Combined decision. Conflicting verdicts resolve to `Signal::None`.
    fn evaluate(&self, candles: &[Candle]) -> Signal {
        if candles.len() < self.warmup_bars() {
            tracing::debug!(
                strategy = self.name(),
                bars = candles.len(),
                warmup = self.warmup_bars(),
                "insufficient history"
            );
            return Signal::None;
        }
        Signal::from_flags(self.is_buy_signal(candles), self.is_sell_signal(candles))
    }
}

/// The closed set of strategy families the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    MaCrossover,
    MacdCrossover,
    OscillatorThreshold,
    StochRsiCrossover,
    EngulfingTrend,
    SupertrendFlip,
    RangeBands,
    SmoothMomentumCrossover,
    AroonCrossover,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 9] = [
        StrategyKind::MaCrossover,
        StrategyKind::MacdCrossover,
        StrategyKind::OscillatorThreshold,
        StrategyKind::StochRsiCrossover,
        StrategyKind::EngulfingTrend,
        StrategyKind::SupertrendFlip,
        StrategyKind::RangeBands,
        StrategyKind::SmoothMomentumCrossover,
        StrategyKind::AroonCrossover,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::MaCrossover => "ma_crossover",
            StrategyKind::MacdCrossover => "macd_crossover",
            StrategyKind::OscillatorThreshold => "oscillator_threshold",
            StrategyKind::StochRsiCrossover => "stoch_rsi_crossover",
            StrategyKind::EngulfingTrend => "engulfing_trend",
            StrategyKind::SupertrendFlip => "supertrend_flip",
            StrategyKind::RangeBands => "range_bands",
            StrategyKind::SmoothMomentumCrossover => "smooth_momentum_crossover",
            StrategyKind::AroonCrossover => "aroon_crossover",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FactoryError::UnknownStrategy(s.to_string()))
    }
}

/// Whether a bounded oscillator's last two points crossed above `level`.
pub(crate) fn crossed_above_level(series: &[f64], level: f64) -> bool {
    crate::signals::crossed_up(series, &[level, level])
}

/// Whether a bounded oscillator's last two points crossed below `level`.
pub(crate) fn crossed_below_level(series: &[f64], level: f64) -> bool {
    crate::signals::crossed_down(series, &[level, level])
}

//! Signalab Core — candles, indicators, crossover and trend rules, strategy signals.
//!
//! This crate turns a chronological candle window into derived series and
//! then into tri-state decisions:
//! - Domain types (candles, signals, trend direction)
//! - Series utilities (suffix alignment, rolling extremes)
//! - Indicators (moving averages, oscillators, ATR, range bands, Supertrend, pivots)
//! - Decision primitives (crossovers, EMA trend, engulfing candles)
//! - Strategies with a config-driven factory
//!
//! Every computation is a pure batch function over its window. Outputs are
//! end-aligned and carry no warm-up padding; too little history yields an
//! empty series or `Signal::None`, never an error.

pub mod domain;
pub mod indicator;
pub mod indicators;
pub mod series;
pub mod signals;
pub mod strategies;

pub use domain::{Candle, Signal, Trend};
pub use indicator::Indicator;
pub use strategies::{create_strategy, Strategy, StrategyConfig, StrategySet};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: core types can move across symbol worker threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<domain::Candle>();
        require_sync::<domain::Candle>();
        require_send::<domain::Signal>();
        require_sync::<domain::Signal>();
        require_send::<domain::Trend>();
        require_sync::<domain::Trend>();

        // State values
        require_send::<indicators::SupertrendState>();
        require_sync::<indicators::SupertrendState>();
        require_send::<indicators::RangeBandsState>();
        require_sync::<indicators::RangeBandsState>();

        // Config types
        require_send::<strategies::StrategyConfig>();
        require_sync::<strategies::StrategyConfig>();
        require_send::<strategies::StrategySet>();
        require_sync::<strategies::StrategySet>();

        // Trait objects
        require_send::<Box<dyn Strategy>>();
        require_sync::<Box<dyn Strategy>>();
        require_send::<Box<dyn Indicator>>();
        require_sync::<Box<dyn Indicator>>();
    }

    /// Architecture contract: strategies see only the candle window.
    ///
    /// There is no index parameter and no state parameter on the trait; the
    /// stateful strategies thread state through their own inherent methods.
    #[test]
    fn strategy_trait_takes_only_the_window() {
        fn _check_trait_object_builds(s: &dyn Strategy, candles: &[Candle]) -> Signal {
            s.evaluate(candles)
        }
    }
}

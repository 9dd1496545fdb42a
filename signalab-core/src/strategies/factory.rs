//! Factory — converts a `StrategyConfig` into a runtime strategy object.
//!
//! Parameters are a flat name → number map. Missing names take the named
//! default constants; unknown names are ignored. Enumerated options use
//! numeric codes (see [`MaType::from_code`]) and flags are non-zero = true.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::indicators::aroon::DEFAULT_AROON_LENGTH;
use crate::indicators::macd::{DEFAULT_MACD_FAST, DEFAULT_MACD_SIGNAL, DEFAULT_MACD_SLOW};
use crate::indicators::range_bands::{DEFAULT_RANGE_MULTIPLIER, DEFAULT_RANGE_PERIOD};
use crate::indicators::rmi::{DEFAULT_RMI_LENGTH, DEFAULT_RMI_MOMENTUM};
use crate::indicators::rsi::DEFAULT_RSI_PERIOD;
use crate::indicators::smooth_momentum::{
    DEFAULT_SMOOTH_MOMENTUM_LENGTH, DEFAULT_SMOOTH_MOMENTUM_SMOOTH_LENGTH, DEFAULT_TMO_LENGTH,
};
use crate::indicators::stoch_rsi::{DEFAULT_STOCH_D, DEFAULT_STOCH_K, DEFAULT_STOCH_PERIOD};
use crate::indicators::supertrend::{
    DEFAULT_SUPERTREND_ATR_PERIOD, DEFAULT_SUPERTREND_MULTIPLIER,
};
use crate::indicators::{
    MaType, MacdOptions, RangeBandsOptions, RmiOptions, SmoothMomentumOptions, StochRsiOptions,
    SupertrendOptions,
};
use crate::signals::trend::DEFAULT_TREND_EMA_PERIOD;

use super::ma_crossover::{DEFAULT_MA_FAST, DEFAULT_MA_SLOW};
use super::oscillator_threshold::{DEFAULT_OVERBOUGHT, DEFAULT_OVERSOLD};
use super::stoch_rsi_crossover::{DEFAULT_STOCH_OVERBOUGHT, DEFAULT_STOCH_OVERSOLD};
use super::{
    AroonCrossover, EngulfingTrend, MaCrossover, MacdCrossover, OscillatorSource,
    OscillatorThreshold, RangeBandsSignal, SmoothMomentumCrossover, StochRsiCrossover, Strategy,
    StrategyKind, SupertrendFlip,
};

// ─── Config type ─────────────────────────────────────────────────────

/// One strategy: its registry name plus numeric parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub component_type: String,
    #[serde(default)]
    pub params: BTreeMap<String, f64>,
}

impl StrategyConfig {
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: &str, value: f64) -> Self {
        self.params.insert(name.to_string(), value);
        self
    }
}

// ─── Error type ──────────────────────────────────────────────────────

/// Errors that can occur during strategy construction.
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("Unknown strategy type: {0}")]
    UnknownStrategy(String),
}

// ─── Helpers ─────────────────────────────────────────────────────────

/// Extract a named f64 parameter from a `StrategyConfig`, falling back to `default`.
fn param(config: &StrategyConfig, name: &str, default: f64) -> f64 {
    config.params.get(name).copied().unwrap_or(default)
}

/// Extract a named usize parameter, falling back to `default`. Negative values
/// clamp to 0 and oversized ones to `usize::MAX`.
fn param_usize(config: &StrategyConfig, name: &str, default: usize) -> usize {
    config
        .params
        .get(name)
        .copied()
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extract a named flag (non-zero = true), falling back to `default`.
fn param_bool(config: &StrategyConfig, name: &str, default: bool) -> bool {
    config
        .params
        .get(name)
        .map(|&v| v != 0.0)
        .unwrap_or(default)
}

fn param_ma(config: &StrategyConfig, name: &str, default: MaType) -> MaType {
    config
        .params
        .get(name)
        .map(|&code| MaType::from_code(code))
        .unwrap_or(default)
}

// ─── Strategy factory ────────────────────────────────────────────────

/// Create a strategy from a `StrategyConfig`.
pub fn create_strategy(config: &StrategyConfig) -> Result<Box<dyn Strategy>, FactoryError> {
    let kind: StrategyKind = config.component_type.parse()?;
    tracing::debug!(strategy = %kind, params = ?config.params, "building strategy");

    let strategy: Box<dyn Strategy> = match kind {
        StrategyKind::MaCrossover => Box::new(MaCrossover::new(
            param_usize(config, "fast_period", DEFAULT_MA_FAST),
            param_usize(config, "slow_period", DEFAULT_MA_SLOW),
            param_ma(config, "ma_type", MaType::Sma),
        )),
        StrategyKind::MacdCrossover => Box::new(MacdCrossover::new(MacdOptions {
            fast_period: param_usize(config, "fast_period", DEFAULT_MACD_FAST),
            slow_period: param_usize(config, "slow_period", DEFAULT_MACD_SLOW),
            signal_period: param_usize(config, "signal_period", DEFAULT_MACD_SIGNAL),
            oscillator_ma: param_ma(config, "oscillator_ma", MaType::Ema),
            signal_ma: param_ma(config, "signal_ma", MaType::Ema),
        })),
        StrategyKind::OscillatorThreshold => {
            // source: 0 = RSI, 1 = RMI
            let source = if param(config, "source", 0.0) == 1.0 {
                OscillatorSource::Rmi(RmiOptions {
                    length: param_usize(config, "length", DEFAULT_RMI_LENGTH),
                    momentum: param_usize(config, "momentum", DEFAULT_RMI_MOMENTUM),
                })
            } else {
                OscillatorSource::Rsi {
                    period: param_usize(config, "period", DEFAULT_RSI_PERIOD),
                }
            };
            Box::new(OscillatorThreshold::new(
                source,
                param(config, "oversold", DEFAULT_OVERSOLD),
                param(config, "overbought", DEFAULT_OVERBOUGHT),
                param_bool(config, "breakout", false),
            ))
        }
        StrategyKind::StochRsiCrossover => Box::new(StochRsiCrossover::new(
            StochRsiOptions {
                rsi_period: param_usize(config, "rsi_period", DEFAULT_RSI_PERIOD),
                stoch_period: param_usize(config, "stoch_period", DEFAULT_STOCH_PERIOD),
                k_period: param_usize(config, "k_period", DEFAULT_STOCH_K),
                d_period: param_usize(config, "d_period", DEFAULT_STOCH_D),
            },
            param(config, "oversold", DEFAULT_STOCH_OVERSOLD),
            param(config, "overbought", DEFAULT_STOCH_OVERBOUGHT),
        )),
        StrategyKind::EngulfingTrend => Box::new(EngulfingTrend::new(
            param_usize(config, "trend_period", DEFAULT_TREND_EMA_PERIOD),
            param_usize(config, "rsi_period", DEFAULT_RSI_PERIOD),
            param(config, "oversold", DEFAULT_OVERSOLD),
            param(config, "overbought", DEFAULT_OVERBOUGHT),
        )),
        StrategyKind::SupertrendFlip => Box::new(SupertrendFlip::new(SupertrendOptions {
            atr_period: param_usize(config, "atr_period", DEFAULT_SUPERTREND_ATR_PERIOD),
            atr_multiplier: param(config, "multiplier", DEFAULT_SUPERTREND_MULTIPLIER),
        })),
        StrategyKind::RangeBands => Box::new(RangeBandsSignal::new(RangeBandsOptions {
            period: param_usize(config, "period", DEFAULT_RANGE_PERIOD),
            multiplier: param(config, "multiplier", DEFAULT_RANGE_MULTIPLIER),
        })),
        StrategyKind::SmoothMomentumCrossover => {
            Box::new(SmoothMomentumCrossover::new(SmoothMomentumOptions {
                length: param_usize(config, "length", DEFAULT_SMOOTH_MOMENTUM_LENGTH),
                smooth_length: param_usize(
                    config,
                    "smooth_length",
                    DEFAULT_SMOOTH_MOMENTUM_SMOOTH_LENGTH,
                ),
                tmo_length: param_usize(config, "tmo_length", DEFAULT_TMO_LENGTH),
            }))
        }
        StrategyKind::AroonCrossover => Box::new(AroonCrossover::new(param_usize(
            config,
            "length",
            DEFAULT_AROON_LENGTH,
        ))),
    };
    Ok(strategy)
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Signal;

    /// Helper: build a StrategyConfig with given type and params.
    fn config(component_type: &str, params: &[(&str, f64)]) -> StrategyConfig {
        params
            .iter()
            .fold(StrategyConfig::new(component_type), |c, &(k, v)| {
                c.with_param(k, v)
            })
    }

    /// Empty-params config.
    fn bare(component_type: &str) -> StrategyConfig {
        config(component_type, &[])
    }

    // ── param helpers ────────────────────────────────────────────

    #[test]
    fn param_returns_value_if_present() {
        let c = config("x", &[("oversold", 25.0)]);
        assert_eq!(param(&c, "oversold", 30.0), 25.0);
        assert_eq!(param(&c, "overbought", 70.0), 70.0);
    }

    #[test]
    fn param_usize_truncates_and_defaults() {
        let c = config("x", &[("period", 30.9), ("neg", -4.0)]);
        assert_eq!(param_usize(&c, "period", 14), 30);
        assert_eq!(param_usize(&c, "neg", 14), 0);
        assert_eq!(param_usize(&c, "missing", 14), 14);
    }

    #[test]
    fn param_bool_nonzero_is_true() {
        let c = config("x", &[("breakout", 1.0), ("off", 0.0)]);
        assert!(param_bool(&c, "breakout", false));
        assert!(!param_bool(&c, "off", true));
        assert!(param_bool(&c, "missing", true));
    }

    // ── Strategy factory (exhaustive) ────────────────────────────

    #[test]
    fn every_kind_builds_with_defaults() {
        for kind in StrategyKind::ALL {
            let s = create_strategy(&bare(kind.as_str())).unwrap();
            assert_eq!(s.name(), kind.as_str());
        }
    }

    #[test]
    fn default_warmups() {
        let warmup = |name: &str| create_strategy(&bare(name)).unwrap().warmup_bars();
        assert_eq!(warmup("ma_crossover"), 51);
        assert_eq!(warmup("macd_crossover"), 35);
        assert_eq!(warmup("oscillator_threshold"), 16);
        assert_eq!(warmup("stoch_rsi_crossover"), 33);
        assert_eq!(warmup("engulfing_trend"), 201);
        assert_eq!(warmup("supertrend_flip"), 12);
        assert_eq!(warmup("range_bands"), 102);
        assert_eq!(warmup("smooth_momentum_crossover"), 24);
        assert_eq!(warmup("aroon_crossover"), 27);
    }

    #[test]
    fn params_override_defaults() {
        let s = create_strategy(&config(
            "ma_crossover",
            &[("fast_period", 5.0), ("slow_period", 20.0)],
        ))
        .unwrap();
        assert_eq!(s.warmup_bars(), 21);

        let rmi = create_strategy(&config(
            "oscillator_threshold",
            &[("source", 1.0), ("length", 10.0), ("momentum", 3.0)],
        ))
        .unwrap();
        assert_eq!(rmi.warmup_bars(), 14);
    }

    #[test]
    fn huge_periods_saturate_to_neutral() {
        let names = [
            "fast_period",
            "slow_period",
            "signal_period",
            "period",
            "length",
            "momentum",
            "rsi_period",
            "stoch_period",
            "k_period",
            "d_period",
            "trend_period",
            "atr_period",
            "smooth_length",
            "tmo_length",
        ];
        let candles = crate::indicators::make_candles(
            &(0..60).map(|i| 100.0 + (i as f64 * 0.3).sin() * 4.0).collect::<Vec<_>>(),
        );
        for source in [0.0, 1.0] {
            for kind in StrategyKind::ALL {
                let c = names
                    .iter()
                    .fold(config(kind.as_str(), &[("source", source)]), |c, &n| {
                        c.with_param(n, 1e30)
                    });
                let s = create_strategy(&c).unwrap();
                assert!(s.warmup_bars() > usize::MAX / 2, "{kind}");
                assert_eq!(s.evaluate(&candles), Signal::None, "{kind}");
                assert!(!s.is_buy_signal(&candles), "{kind}");
                assert!(!s.is_sell_signal(&candles), "{kind}");
            }
        }
    }

    #[test]
    fn unknown_params_are_ignored() {
        let s = create_strategy(&config("aroon_crossover", &[("bogus", 1.0)])).unwrap();
        assert_eq!(s.warmup_bars(), 27);
    }

    #[test]
    fn unknown_type_returns_error() {
        match create_strategy(&bare("bogus_strategy")) {
            Err(FactoryError::UnknownStrategy(name)) => assert_eq!(name, "bogus_strategy"),
            Ok(_) => panic!("expected an error"),
        }
    }
}

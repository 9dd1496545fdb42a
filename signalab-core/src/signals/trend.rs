//! EMA trend classification.

use serde::{Deserialize, Serialize};

use crate::domain::Trend;
use crate::indicators::ema;

pub const DEFAULT_TREND_EMA_PERIOD: usize = 200;
pub const DEFAULT_TRIPLE_EMA_SHORT: usize = 20;
pub const DEFAULT_TRIPLE_EMA_MEDIUM: usize = 50;
pub const DEFAULT_TRIPLE_EMA_LONG: usize = 200;

/// Last close against the EMA of the window.
///
/// Neutral until the window holds more than `period` closes, and when the
/// close sits exactly on the average.
pub fn ema_trend(closes: &[f64], period: usize) -> Trend {
    if period == 0 || closes.len() <= period {
        return Trend::Neutral;
    }
    let (Some(&close), Some(&avg)) = (closes.last(), ema(closes, period).last()) else {
        return Trend::Neutral;
    };

    if close > avg {
        Trend::Up
    } else if close < avg {
        Trend::Down
    } else {
        Trend::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripleEmaOptions {
    pub short: usize,
    pub medium: usize,
    pub long: usize,
}

impl Default for TripleEmaOptions {
    fn default() -> Self {
        Self {
            short: DEFAULT_TRIPLE_EMA_SHORT,
            medium: DEFAULT_TRIPLE_EMA_MEDIUM,
            long: DEFAULT_TRIPLE_EMA_LONG,
        }
    }
}

/// Stacked-average trend: up only when close > short > medium > long.
pub fn triple_ema_trend(closes: &[f64], options: &TripleEmaOptions) -> Trend {
    let longest = options.short.max(options.medium).max(options.long);
    if options.short == 0 || options.medium == 0 || options.long == 0 || closes.len() <= longest {
        return Trend::Neutral;
    }

    let last = |period: usize| ema(closes, period).last().copied();
    let (Some(close), Some(short), Some(medium), Some(long)) = (
        closes.last().copied(),
        last(options.short),
        last(options.medium),
        last(options.long),
    ) else {
        return Trend::Neutral;
    };

    if close > short && short > medium && medium > long {
        Trend::Up
    } else if close < short && short < medium && medium < long {
        Trend::Down
    } else {
        Trend::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rising(n: usize) -> Vec<f64> {
        (1..=n).map(|i| i as f64).collect()
    }

    #[test]
    fn rising_series_trends_up_after_warmup() {
        let closes = rising(250);
        assert_eq!(ema_trend(&closes, 200), Trend::Up);
        assert_eq!(ema_trend(&closes[..200], 200), Trend::Neutral);
        assert_eq!(ema_trend(&closes[..201], 200), Trend::Up);
    }

    #[test]
    fn falling_series_trends_down() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 - i as f64).collect();
        assert_eq!(ema_trend(&closes, 20), Trend::Down);
    }

    #[test]
    fn flat_series_is_neutral() {
        assert_eq!(ema_trend(&[5.0; 50], 10), Trend::Neutral);
        assert_eq!(ema_trend(&[5.0; 50], 0), Trend::Neutral);
    }

    #[test]
    fn triple_stack() {
        let opts = TripleEmaOptions {
            short: 3,
            medium: 5,
            long: 10,
        };
        let up = rising(40);
        assert_eq!(triple_ema_trend(&up, &opts), Trend::Up);
        let down: Vec<f64> = up.iter().rev().copied().collect();
        assert_eq!(triple_ema_trend(&down, &opts), Trend::Down);
        assert_eq!(triple_ema_trend(&[7.0; 40], &opts), Trend::Neutral);
        assert_eq!(triple_ema_trend(&up[..10], &opts), Trend::Neutral);
    }
}

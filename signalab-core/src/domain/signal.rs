//! Tri-state trading decision and trend direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decision emitted by a strategy for the latest candle of its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Sell,
    #[default]
    None,
}

impl Signal {
    /// Combine independent buy and sell verdicts. Conflicting verdicts cancel out.
    pub fn from_flags(buy: bool, sell: bool) -> Self {
        match (buy, sell) {
            (true, false) => Signal::Buy,
            (false, true) => Signal::Sell,
            _ => Signal::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Signal::None)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Signal::Buy => "buy",
            Signal::Sell => "sell",
            Signal::None => "none",
        };
        f.write_str(s)
    }
}

/// Trend direction. The discriminant is the conventional numeric encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Trend {
    Up = 1,
    Down = -1,
    #[default]
    Neutral = 0,
}

impl Trend {
    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_from_flags() {
        assert_eq!(Signal::from_flags(true, false), Signal::Buy);
        assert_eq!(Signal::from_flags(false, true), Signal::Sell);
        assert_eq!(Signal::from_flags(false, false), Signal::None);
        assert_eq!(Signal::from_flags(true, true), Signal::None);
    }

    #[test]
    fn signal_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"buy\"");
        assert_eq!(Signal::Sell.to_string(), "sell");
    }

    #[test]
    fn trend_numeric_encoding() {
        assert_eq!(Trend::Up.as_i8(), 1);
        assert_eq!(Trend::Down.as_i8(), -1);
        assert_eq!(Trend::Neutral.as_i8(), 0);
    }
}

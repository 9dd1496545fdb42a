//! Moving average family selector.

use serde::{Deserialize, Serialize};

use super::ema::{ema, wema};
use super::sma::{sma, wma};

/// Which moving average to apply to a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaType {
    Sma,
    #[default]
    Ema,
    Wema,
    Wma,
}

impl MaType {
    /// Apply this moving average. Output is end-aligned, `n - period + 1` long.
    pub fn apply(self, values: &[f64], period: usize) -> Vec<f64> {
        match self {
            MaType::Sma => sma(values, period),
            MaType::Ema => ema(values, period),
            MaType::Wema => wema(values, period),
            MaType::Wma => wma(values, period),
        }
    }

    /// Decode the numeric form used in flat parameter maps
    /// (0 = SMA, 1 = EMA, 2 = Wilder, 3 = WMA). Unknown codes fall back to EMA.
    pub fn from_code(code: f64) -> Self {
        match code as i64 {
            0 => MaType::Sma,
            2 => MaType::Wema,
            3 => MaType::Wma,
            _ => MaType::Ema,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            MaType::Sma => "sma",
            MaType::Ema => "ema",
            MaType::Wema => "wema",
            MaType::Wma => "wma",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_dispatches() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(MaType::Sma.apply(&v, 2), sma(&v, 2));
        assert_eq!(MaType::Ema.apply(&v, 2), ema(&v, 2));
        assert_eq!(MaType::Wema.apply(&v, 2), wema(&v, 2));
        assert_eq!(MaType::Wma.apply(&v, 2), wma(&v, 2));
    }

    #[test]
    fn codes_round_trip() {
        for ma in [MaType::Sma, MaType::Ema, MaType::Wema, MaType::Wma] {
            let code = match ma {
                MaType::Sma => 0.0,
                MaType::Ema => 1.0,
                MaType::Wema => 2.0,
                MaType::Wma => 3.0,
            };
            assert_eq!(MaType::from_code(code), ma);
        }
        assert_eq!(MaType::from_code(42.0), MaType::Ema);
    }

    #[test]
    fn serde_snake_case() {
        let ma: MaType = serde_json::from_str("\"wema\"").unwrap();
        assert_eq!(ma, MaType::Wema);
        assert_eq!(MaType::Sma.prefix(), "sma");
    }
}

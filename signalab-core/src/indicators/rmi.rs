//! Relative Momentum Index (RMI).
//!
//! RSI generalised to a lag of `momentum` bars:
//! up[t]   = max(x[t] - x[t-momentum], 0)
//! down[t] = max(x[t-momentum] - x[t], 0)
//! Both are EMA-smoothed over `length`; RMI = 100 - 100 / (1 + up/down).
//! A smoothed down term of exactly zero yields 0.
//! Lookback: momentum + length - 1.

use serde::{Deserialize, Serialize};

use super::ema::ema;
use crate::domain::{closes, Candle};
use crate::indicator::Indicator;

pub const DEFAULT_RMI_LENGTH: usize = 20;
pub const DEFAULT_RMI_MOMENTUM: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RmiOptions {
    pub length: usize,
    pub momentum: usize,
}

impl Default for RmiOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_RMI_LENGTH,
            momentum: DEFAULT_RMI_MOMENTUM,
        }
    }
}

impl RmiOptions {
    pub fn lookback(&self) -> usize {
        self.momentum.saturating_add(self.length).saturating_sub(1)
    }
}

#[derive(Debug, Clone)]
pub struct Rmi {
    options: RmiOptions,
    name: String,
}

impl Rmi {
    pub fn new(options: RmiOptions) -> Self {
        Self {
            options,
            name: format!("rmi_{}_{}", options.length, options.momentum),
        }
    }
}

impl Indicator for Rmi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.options.lookback()
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        rmi(&closes(candles), &self.options)
    }
}

pub fn rmi(values: &[f64], options: &RmiOptions) -> Vec<f64> {
    let m = options.momentum;
    if m == 0 || values.len() <= m {
        return Vec::new();
    }

    let (ups, downs): (Vec<f64>, Vec<f64>) = values
        .iter()
        .zip(&values[m..])
        .map(|(&then, &now)| ((now - then).max(0.0), (then - now).max(0.0)))
        .unzip();

    let up = ema(&ups, options.length);
    let down = ema(&downs, options.length);

    up.iter()
        .zip(&down)
        .map(|(&u, &d)| {
            if d == 0.0 {
                0.0
            } else {
                100.0 - 100.0 / (1.0 + u / d)
            }
        })
        .collect()
}

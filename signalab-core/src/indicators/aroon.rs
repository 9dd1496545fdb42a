//! Aroon — time since the highest high / lowest low as a percentage.
//!
//! Within each trailing window of `length + 1` bars, the extreme's signed
//! offset (0 = most recent bar, -length = oldest) maps to
//! `100 * (offset + length) / length`. Ties resolve to the most recent bar.
//! Lookback: length.

use serde::{Deserialize, Serialize};

use crate::series::{align_suffix, argmax_offset, argmin_offset};

pub const DEFAULT_AROON_LENGTH: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AroonOptions {
    pub length: usize,
}

impl Default for AroonOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_AROON_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AroonOutput {
    pub up: Vec<f64>,
    pub down: Vec<f64>,
}

pub fn aroon(highs: &[f64], lows: &[f64], length: usize) -> AroonOutput {
    let (highs, lows) = align_suffix(highs, lows);
    if length == 0 || highs.len() <= length {
        return AroonOutput::default();
    }

    let score = |offset: Option<isize>| {
        let offset = offset.unwrap_or(-(length as isize));
        100.0 * (offset + length as isize) as f64 / length as f64
    };

    AroonOutput {
        up: highs
            .windows(length + 1)
            .map(|w| score(argmax_offset(w)))
            .collect(),
        down: lows
            .windows(length + 1)
            .map(|w| score(argmin_offset(w)))
            .collect(),
    }
}

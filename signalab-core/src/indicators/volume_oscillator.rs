//! Volume oscillator: percentage spread between a short and a long EMA of volume.
//!
//! VO = 100 * (EMA(volume, short) - EMA(volume, long)) / EMA(volume, long)
//! A long EMA of exactly zero yields 0. Output is oldest first, end-aligned
//! with the candles; lookback = max(short, long) - 1.

use serde::{Deserialize, Serialize};

use super::ema::ema;
use crate::domain::{volumes, Candle};
use crate::indicator::Indicator;
use crate::series::align_suffix;

pub const DEFAULT_VO_SHORT_LENGTH: usize = 5;
pub const DEFAULT_VO_LONG_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeOscillatorOptions {
    pub short_length: usize,
    pub long_length: usize,
}

impl Default for VolumeOscillatorOptions {
    fn default() -> Self {
        Self {
            short_length: DEFAULT_VO_SHORT_LENGTH,
            long_length: DEFAULT_VO_LONG_LENGTH,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VolumeOscillator {
    options: VolumeOscillatorOptions,
    name: String,
}

impl VolumeOscillator {
    pub fn new(options: VolumeOscillatorOptions) -> Self {
        Self {
            options,
            name: format!(
                "volume_oscillator_{}_{}",
                options.short_length, options.long_length
            ),
        }
    }
}

impl Indicator for VolumeOscillator {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.options
            .short_length
            .max(self.options.long_length)
            .saturating_sub(1)
    }

    fn compute(&self, candles: &[Candle]) -> Vec<f64> {
        volume_oscillator(candles, &self.options)
    }
}

pub fn volume_oscillator(candles: &[Candle], options: &VolumeOscillatorOptions) -> Vec<f64> {
    let volume = volumes(candles);
    let short = ema(&volume, options.short_length);
    let long = ema(&volume, options.long_length);
    if short.is_empty() || long.is_empty() {
        return Vec::new();
    }

    let (short, long) = align_suffix(&short, &long);
    short
        .iter()
        .zip(long)
        .map(|(&s, &l)| if l == 0.0 { 0.0 } else { 100.0 * (s - l) / l })
        .collect()
}

//! Concrete indicator implementations.
//!
//! Every function here takes a chronological window and returns end-aligned
//! series without warm-up padding. Too little history, a zero period or a
//! period longer than the input all produce empty output, never a panic.
//!
//! Multi-series indicators (MACD, Aroon, StochRSI, smooth momentum, range
//! bands) return a small output struct whose series share one length.

pub mod aroon;
pub mod atr;
pub mod ema;
pub mod ma_type;
pub mod macd;
pub mod pivot;
pub mod range_bands;
pub mod rmi;
pub mod rsi;
pub mod sma;
pub mod smooth_momentum;
pub mod stoch_rsi;
pub mod supertrend;
pub mod volume_oscillator;

pub use aroon::{aroon, AroonOptions, AroonOutput};
pub use atr::{atr, true_range, Atr};
pub use ema::{ema, ema_from_first, wema, Ema};
pub use ma_type::MaType;
pub use macd::{macd, MacdOptions, MacdOutput};
pub use pivot::{pivot_high, pivot_indices, pivot_low, PivotOptions};
pub use range_bands::{
    range_bands, range_bands_from, RangeBandsOptions, RangeBandsOutput, RangeBandsState,
};
pub use rmi::{rmi, Rmi, RmiOptions};
pub use rsi::{rsi, Rsi};
pub use sma::{sma, wma, Sma};
pub use smooth_momentum::{smooth_momentum, SmoothMomentumOptions, SmoothMomentumOutput};
pub use stoch_rsi::{stoch_rsi, StochRsiOptions, StochRsiOutput};
pub use supertrend::{supertrend, supertrend_from, SupertrendOptions, SupertrendState};
pub use volume_oscillator::{volume_oscillator, VolumeOscillator, VolumeOscillatorOptions};

#[cfg(test)]
fn candle_at(i: usize, open: f64, high: f64, low: f64, close: f64, volume: f64) -> crate::domain::Candle {
    use chrono::TimeZone;
    let open_time = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()
        + chrono::Duration::hours(i as i64);
    crate::domain::Candle {
        open_time,
        close_time: open_time + chrono::Duration::hours(1),
        open,
        high,
        low,
        close,
        volume,
    }
}

/// Create synthetic hourly candles from close prices for testing.
///
/// Generates plausible OHLCV: open = prev_close (or close for first candle),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_candles(closes: &[f64]) -> Vec<crate::domain::Candle> {
    let data: Vec<(f64, f64)> = closes.iter().map(|&c| (c, 1000.0)).collect();
    make_candles_with_volume(&data)
}

/// Like [`make_candles`] but with an explicit volume per candle.
#[cfg(test)]
pub fn make_candles_with_volume(data: &[(f64, f64)]) -> Vec<crate::domain::Candle> {
    data.iter()
        .enumerate()
        .map(|(i, &(close, volume))| {
            let open = if i == 0 { close } else { data[i - 1].0 };
            let high = open.max(close) + 1.0;
            let low = open.min(close) - 1.0;
            candle_at(i, open, high, low, close, volume)
        })
        .collect()
}

/// Create candles from explicit (open, high, low, close) tuples.
#[cfg(test)]
pub fn make_ohlc_candles(data: &[(f64, f64, f64, f64)]) -> Vec<crate::domain::Candle> {
    data.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| candle_at(i, open, high, low, close, 1000.0))
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;

//! Domain types for signalab

pub mod candle;
pub mod signal;

pub use candle::{closes, highs, lows, opens, volumes, Candle};
pub use signal::{Signal, Trend};

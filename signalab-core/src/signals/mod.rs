//! Decision primitives shared by strategies: crossovers, trend
//! classification and candle patterns.

pub mod crossover;
pub mod patterns;
pub mod trend;

pub use crossover::{cross_down, cross_up, crossed_down, crossed_up};
pub use patterns::{engulfing, last_engulfing, Engulfing};
pub use trend::{ema_trend, triple_ema_trend, TripleEmaOptions};

//! # EMA Crossover Strategy
//!
//! Watches the difference between a short and a long exponential moving average
//! (the oscillator) against an EMA of that difference (the signal line).
//!
//! ```text
//! Candle → [short EMA] ─┐
//!                       ├─ short − long → [signal EMA] → [Crossing] → [OrderEmitter]
//! Candle → [long EMA]  ─┘
//! ```
//!
//! - **Bullish**: the previous oscillator was below the signal line and the current
//!   one is above it. Buys the available size when nothing sellable is held.
//! - **Bearish**: the previous oscillator was above the signal line and the current
//!   one is below it. Sells the whole position when it is positive.
//!
//! Signals are edge-triggered: nothing happens while the ordering is unchanged, and
//! a reading equal to the signal line is neither above nor below it.
//!
//! ## Parameters
//!
//! ```toml
//! [strategy.params]
//! short_window = 12
//! long_window = 26
//! signal_window = 9
//! pair = "BTC/USD"
//! ```

pub mod config;
pub mod strategy;

pub use config::EmaCrossoverParams;
pub use strategy::EmaCrossoverStrategy;

/// Re-export key framework types
pub use rust_decimal::Decimal;
pub use strategy_shared::{Pair, Strategy, StrategyManager};

//! # Bollinger Bands Breakout Strategy
//!
//! Trades breakouts of a rolling standard deviation band around the close price.
//!
//! ```text
//! Candle → [RollingBands] → [Breakout Check] → [OrderEmitter] → StrategyManager
//!   close     mean ± k·σ      close > upper        market buy
//!                             close < lower        market sell (whole position)
//! ```
//!
//! - **Upper breakout**: when nothing sellable is held, buy whatever size the
//!   manager reports as available at the candle close.
//! - **Lower breakout**: when the sellable position is non-negative, sell all of it.
//!
//! Nothing is evaluated until the band window is full, and at most one order is
//! registered per candle. Service errors propagate out of `on_candle` unchanged.
//!
//! ## Parameters
//!
//! ```toml
//! [strategy.params]
//! window_size = 20    # band period
//! stddev = 2.0        # band multiplier
//! pair = "BTC/USD"
//! ```

pub mod config;
pub mod strategy;

pub use config::BollingerBreakoutParams;
pub use strategy::BollingerBreakoutStrategy;

/// Re-export key framework types
pub use rust_decimal::Decimal;
pub use strategy_shared::{Pair, Strategy, StrategyManager};

//! Shared Strategy Framework
//!
//! Common types, traits and plumbing for candle-driven trading strategies. A
//! strategy implements [`Strategy`]; everything it needs from the outside world
//! (position lookups, order sizing, order registration) goes through the
//! synchronous [`StrategyManager`] trait so the signal logic never blocks on I/O it
//! does not own.

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod orders;
pub mod paper;
pub mod runner;
pub mod service;
pub mod testing;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::{ManagerError, PairParseError, Result, StrategyError};
pub use metrics::*;
pub use orders::{OrderEmitter, OrderIntent};
pub use paper::{PaperConfig, PaperStrategyManager};
pub use runner::{run_feed, run_reader, FeedSource, ReplaySummary};
pub use service::{run_strategy_service, ServiceArgs, ServiceSpec};
pub use traits::*;
pub use types::*;

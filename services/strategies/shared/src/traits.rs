//! Strategy traits and interfaces

use crate::config::RawParams;
use crate::error::{ManagerError, Result};
use crate::orders::OrderIntent;
use crate::types::{Candle, Pair, Trade};
use rust_decimal::Decimal;

/// Position, sizing and order registration service used by strategies.
///
/// Every call is a blocking request/response from the strategy's point of view;
/// implementations that talk to a network do so behind this interface.
pub trait StrategyManager {
    /// Signed size that can be sold. Positive means a long position is held.
    fn available_size_to_sell(&self, pair: &Pair) -> std::result::Result<Decimal, ManagerError>;

    /// Maximum size that can be bought at `price` under current capital limits
    fn available_size_to_buy(
        &self,
        pair: &Pair,
        price: Decimal,
    ) -> std::result::Result<Decimal, ManagerError>;

    /// Hand an order over to the service. No copy is kept by the caller.
    fn register_order(&mut self, order: OrderIntent) -> std::result::Result<(), ManagerError>;
}

/// Core strategy trait that all trading strategies must implement.
///
/// A strategy processes one notification at a time and finishes all indicator
/// and signal work before returning.
pub trait Strategy: Send {
    /// Strategy name for identification
    fn name(&self) -> &'static str;

    /// Build a strategy from its raw parameter map.
    ///
    /// Fails with [`crate::StrategyError::ParamDecode`] or
    /// [`crate::StrategyError::Configuration`]; there is no partially
    /// initialized strategy.
    fn initialize(params: &RawParams) -> Result<Self>
    where
        Self: Sized;

    fn on_start(&mut self) -> Result<()>;

    fn on_candle(&mut self, manager: &mut dyn StrategyManager, candle: &Candle) -> Result<()>;

    fn on_trade(&mut self, manager: &mut dyn StrategyManager, trade: &Trade) -> Result<()>;

    fn on_stop(&mut self) -> Result<()>;

    /// Get current strategy metrics
    fn metrics(&self) -> StrategyMetrics;
}

/// Basic strategy metrics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyMetrics {
    pub candles_processed: u64,
    pub trades_observed: u64,
    pub signals_generated: u64,
    pub orders_submitted: u64,
    pub errors: u64,
}

//! Testing utilities for strategies

use crate::config::RawParams;
use crate::error::{ManagerError, Result, StrategyError};
use crate::metrics::MetricsCollector;
use crate::orders::OrderIntent;
use crate::traits::{Strategy, StrategyManager, StrategyMetrics};
use crate::types::{Candle, OrderSide, Pair, Trade};
use rust_decimal::Decimal;
use std::cell::Cell;

/// Scripted position/order service.
///
/// Starts flat with a fixed buyable size. Accepted orders move the position (buys
/// add, sells subtract) unless fill tracking is turned off, so repeated signals see
/// the effect of earlier ones.
#[derive(Debug)]
pub struct MockStrategyManager {
    pub position: Decimal,
    pub buy_size: Decimal,
    pub orders: Vec<OrderIntent>,
    pub track_fills: bool,
    pub fail_position_queries: bool,
    pub fail_size_queries: bool,
    pub reject_orders: bool,
    position_queries: Cell<usize>,
    size_queries: Cell<usize>,
}

impl MockStrategyManager {
    pub fn new() -> Self {
        Self {
            position: Decimal::ZERO,
            buy_size: Decimal::ONE,
            orders: Vec::new(),
            track_fills: true,
            fail_position_queries: false,
            fail_size_queries: false,
            reject_orders: false,
            position_queries: Cell::new(0),
            size_queries: Cell::new(0),
        }
    }

    pub fn with_position(mut self, position: Decimal) -> Self {
        self.position = position;
        self
    }

    pub fn with_buy_size(mut self, size: Decimal) -> Self {
        self.buy_size = size;
        self
    }

    pub fn without_fill_tracking(mut self) -> Self {
        self.track_fills = false;
        self
    }

    pub fn failing_position_queries(mut self) -> Self {
        self.fail_position_queries = true;
        self
    }

    pub fn failing_size_queries(mut self) -> Self {
        self.fail_size_queries = true;
        self
    }

    pub fn rejecting_orders(mut self) -> Self {
        self.reject_orders = true;
        self
    }

    pub fn position_queries(&self) -> usize {
        self.position_queries.get()
    }

    pub fn size_queries(&self) -> usize {
        self.size_queries.get()
    }

    pub fn sides(&self) -> Vec<OrderSide> {
        self.orders.iter().map(|o| o.side).collect()
    }
}

impl Default for MockStrategyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyManager for MockStrategyManager {
    fn available_size_to_sell(&self, pair: &Pair) -> std::result::Result<Decimal, ManagerError> {
        self.position_queries.set(self.position_queries.get() + 1);
        if self.fail_position_queries {
            return Err(ManagerError::PositionQuery {
                pair: pair.to_string(),
                message: "mock position service down".to_string(),
            });
        }
        Ok(self.position)
    }

    fn available_size_to_buy(
        &self,
        pair: &Pair,
        _price: Decimal,
    ) -> std::result::Result<Decimal, ManagerError> {
        self.size_queries.set(self.size_queries.get() + 1);
        if self.fail_size_queries {
            return Err(ManagerError::SizingQuery {
                pair: pair.to_string(),
                message: "mock sizing service down".to_string(),
            });
        }
        Ok(self.buy_size)
    }

    fn register_order(&mut self, order: OrderIntent) -> std::result::Result<(), ManagerError> {
        if self.reject_orders {
            return Err(ManagerError::OrderRejected {
                reason: "mock rejection".to_string(),
            });
        }
        if self.track_fills {
            match order.side {
                OrderSide::Buy => self.position += order.size,
                OrderSide::Sell => self.position -= order.size,
            }
        }
        self.orders.push(order);
        Ok(())
    }
}

/// Strategy that records what it was fed
pub struct RecordingStrategy {
    pub name: &'static str,
    pub started: bool,
    pub stopped: bool,
    pub closes: Vec<Decimal>,
    pub trades: Vec<Trade>,
    fail_on_candle: Option<usize>,
    metrics: MetricsCollector,
}

impl RecordingStrategy {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            started: false,
            stopped: false,
            closes: Vec::new(),
            trades: Vec::new(),
            fail_on_candle: None,
            metrics: MetricsCollector::new(),
        }
    }

    /// Return an error from the `n`th candle (1-based)
    pub fn failing_on_candle(mut self, n: usize) -> Self {
        self.fail_on_candle = Some(n);
        self
    }
}

impl Strategy for RecordingStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn initialize(_params: &RawParams) -> Result<Self> {
        Ok(Self::new("recording"))
    }

    fn on_start(&mut self) -> Result<()> {
        self.started = true;
        Ok(())
    }

    fn on_candle(&mut self, _manager: &mut dyn StrategyManager, candle: &Candle) -> Result<()> {
        self.closes.push(candle.close);
        self.metrics.increment_candles();
        if self.fail_on_candle == Some(self.closes.len()) {
            self.metrics.increment_errors();
            return Err(StrategyError::from(ManagerError::Unavailable {
                message: "scripted failure".to_string(),
            }));
        }
        Ok(())
    }

    fn on_trade(&mut self, _manager: &mut dyn StrategyManager, trade: &Trade) -> Result<()> {
        self.trades.push(trade.clone());
        self.metrics.increment_trades();
        Ok(())
    }

    fn on_stop(&mut self) -> Result<()> {
        self.stopped = true;
        Ok(())
    }

    fn metrics(&self) -> StrategyMetrics {
        self.metrics.get_metrics()
    }
}

/// Candles with consecutive timestamps, one per close price
pub fn candles_from_closes(closes: &[Decimal]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Candle::from_close(close, (i as u64 + 1) * 60_000_000_000))
        .collect()
}

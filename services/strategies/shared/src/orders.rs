//! Order intents and the emitter that turns signal decisions into them

use crate::error::Result;
use crate::traits::StrategyManager;
use crate::types::{OrderSide, OrderType, Pair};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Order request built fresh for each emitted signal.
///
/// Ownership moves into [`StrategyManager::register_order`]; strategies keep no
/// copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIntent {
    pub pair: Pair,
    pub side: OrderSide,
    pub size: Decimal,
    /// Price of the candle that triggered the order
    pub price: Decimal,
    pub order_type: OrderType,
    pub timestamp_ns: u64,
}

impl OrderIntent {
    pub fn market(pair: Pair, side: OrderSide, size: Decimal, price: Decimal, timestamp_ns: u64) -> Self {
        Self {
            pair,
            side,
            size,
            price,
            order_type: OrderType::Market,
            timestamp_ns,
        }
    }

    pub fn notional(&self) -> Decimal {
        self.size * self.price
    }
}

/// Wraps a [`StrategyManager`] for one pair and one candle.
///
/// Every query and submission error is returned to the caller as is.
pub struct OrderEmitter<'a> {
    manager: &'a mut dyn StrategyManager,
    pair: &'a Pair,
    price: Decimal,
    timestamp_ns: u64,
}

impl<'a> OrderEmitter<'a> {
    pub fn new(
        manager: &'a mut dyn StrategyManager,
        pair: &'a Pair,
        price: Decimal,
        timestamp_ns: u64,
    ) -> Self {
        Self {
            manager,
            pair,
            price,
            timestamp_ns,
        }
    }

    /// Signed sellable position for the pair
    pub fn sellable(&self) -> Result<Decimal> {
        Ok(self.manager.available_size_to_sell(self.pair)?)
    }

    /// Query the buyable size at the candle price and submit a market buy if it is
    /// positive. Returns the submitted size.
    pub fn buy_available(&mut self) -> Result<Option<Decimal>> {
        let size = self.manager.available_size_to_buy(self.pair, self.price)?;
        if size <= Decimal::ZERO {
            debug!(
                "No buyable size for {} at {} (size={})",
                self.pair, self.price, size
            );
            return Ok(None);
        }

        self.submit(OrderSide::Buy, size)?;
        Ok(Some(size))
    }

    /// Submit a market sell of `size`
    pub fn sell(&mut self, size: Decimal) -> Result<()> {
        self.submit(OrderSide::Sell, size)
    }

    fn submit(&mut self, side: OrderSide, size: Decimal) -> Result<()> {
        let order = OrderIntent::market(self.pair.clone(), side, size, self.price, self.timestamp_ns);
        info!(
            "Submitting {} {} {} {} @ {}",
            order.order_type, order.side, order.size, order.pair, order.price
        );
        self.manager.register_order(order)?;
        Ok(())
    }
}

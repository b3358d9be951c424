//! In-memory paper account implementing [`StrategyManager`]
//!
//! Fills every market order immediately at its reference price. It exists so the
//! strategy binaries can run against a recorded feed without an exchange; it does
//! no risk checks beyond refusing to spend more than it holds.

use crate::error::ManagerError;
use crate::orders::OrderIntent;
use crate::traits::StrategyManager;
use crate::types::{OrderSide, Pair};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperConfig {
    /// Starting quote currency balance
    #[serde(default = "default_quote_balance")]
    pub quote_balance: Decimal,
    /// Starting base position
    #[serde(default)]
    pub base_balance: Decimal,
    /// Decimal places buy sizes are truncated to
    #[serde(default = "default_size_scale")]
    pub size_scale: u32,
}

fn default_quote_balance() -> Decimal {
    dec!(10000)
}

fn default_size_scale() -> u32 {
    8
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            quote_balance: default_quote_balance(),
            base_balance: Decimal::ZERO,
            size_scale: default_size_scale(),
        }
    }
}

/// Single-instrument paper account.
///
/// The first pair it is asked about, by query or by order, becomes its only pair.
#[derive(Debug, Clone)]
pub struct PaperStrategyManager {
    config: PaperConfig,
    pair: RefCell<Option<Pair>>,
    quote: Decimal,
    base: Decimal,
    fills: Vec<OrderIntent>,
}

impl PaperStrategyManager {
    pub fn new(config: PaperConfig) -> Self {
        Self {
            quote: config.quote_balance,
            base: config.base_balance,
            pair: RefCell::new(None),
            fills: Vec::new(),
            config,
        }
    }

    pub fn quote_balance(&self) -> Decimal {
        self.quote
    }

    pub fn base_balance(&self) -> Decimal {
        self.base
    }

    pub fn fills(&self) -> &[OrderIntent] {
        &self.fills
    }

    /// Quote balance plus the base position valued at `mark_price`
    pub fn equity(&self, mark_price: Decimal) -> Decimal {
        self.quote + self.base * mark_price
    }

    /// Pair the account is bound to, if it has seen one yet
    pub fn pair(&self) -> Option<Pair> {
        self.pair.borrow().clone()
    }

    fn check_pair(&self, pair: &Pair) -> Result<(), ManagerError> {
        let mut bound = self.pair.borrow_mut();
        match bound.as_ref() {
            Some(existing) if existing != pair => Err(ManagerError::OrderRejected {
                reason: format!("paper account is bound to {}, got {}", existing, pair),
            }),
            Some(_) => Ok(()),
            None => {
                *bound = Some(pair.clone());
                Ok(())
            }
        }
    }
}

impl StrategyManager for PaperStrategyManager {
    fn available_size_to_sell(&self, pair: &Pair) -> Result<Decimal, ManagerError> {
        self.check_pair(pair)?;
        Ok(self.base)
    }

    fn available_size_to_buy(&self, pair: &Pair, price: Decimal) -> Result<Decimal, ManagerError> {
        self.check_pair(pair)?;
        if price <= Decimal::ZERO || self.quote <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }
        Ok((self.quote / price).round_dp_with_strategy(self.config.size_scale, RoundingStrategy::ToZero))
    }

    fn register_order(&mut self, order: OrderIntent) -> Result<(), ManagerError> {
        self.check_pair(&order.pair)?;
        if order.size < Decimal::ZERO {
            return Err(ManagerError::OrderRejected {
                reason: format!("negative size {}", order.size),
            });
        }

        let notional = order.notional();
        match order.side {
            OrderSide::Buy => {
                if notional > self.quote {
                    return Err(ManagerError::OrderRejected {
                        reason: format!(
                            "insufficient quote balance: need {}, available {}",
                            notional, self.quote
                        ),
                    });
                }
                self.quote -= notional;
                self.base += order.size;
            }
            OrderSide::Sell => {
                if order.size > self.base {
                    return Err(ManagerError::OrderRejected {
                        reason: format!(
                            "insufficient position: need {}, available {}",
                            order.size, self.base
                        ),
                    });
                }
                self.base -= order.size;
                self.quote += notional;
            }
        }

        debug!(
            "Paper fill {} {} {} @ {} (quote={}, base={})",
            order.side, order.size, order.pair, order.price, self.quote, self.base
        );
        self.fills.push(order);
        Ok(())
    }
}

//! Strategy configuration

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strategy_shared::{require_period, Pair, Result, StrategyError, StrategyParams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBreakoutParams {
    /// Number of closes in the rolling window
    pub window_size: usize,

    /// Band half-width in standard deviations
    pub stddev: Decimal,

    /// Instrument to trade
    pub pair: Pair,
}

impl StrategyParams for BollingerBreakoutParams {
    fn validate(&self) -> Result<()> {
        require_period("window_size", self.window_size)?;
        if self.stddev < Decimal::ZERO {
            return Err(StrategyError::configuration(format!(
                "stddev must not be negative, got {}",
                self.stddev
            )));
        }
        Ok(())
    }
}

//! Strategy configuration

use serde::{Deserialize, Serialize};
use strategy_shared::{require_period, Pair, Result, StrategyParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmaCrossoverParams {
    /// Fast EMA period
    pub short_window: usize,

    /// Slow EMA period
    pub long_window: usize,

    /// Period of the EMA over the oscillator
    pub signal_window: usize,

    /// Instrument to trade
    pub pair: Pair,
}

impl StrategyParams for EmaCrossoverParams {
    fn validate(&self) -> Result<()> {
        require_period("short_window", self.short_window)?;
        require_period("long_window", self.long_window)?;
        require_period("signal_window", self.signal_window)
    }
}

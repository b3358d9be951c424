//! Bollinger Bands breakout strategy implementation

use crate::config::BollingerBreakoutParams;
use rust_decimal::Decimal;
use signal_indicators::{BandSnapshot, RollingBands};
use strategy_shared::{
    decode_params, Candle, MetricsCollector, OrderEmitter, RawParams, Result, Strategy,
    StrategyManager, StrategyMetrics, Trade,
};
use tracing::{debug, info};

pub struct BollingerBreakoutStrategy {
    params: BollingerBreakoutParams,
    bands: RollingBands,
    metrics: MetricsCollector,
}

impl BollingerBreakoutStrategy {
    pub const NAME: &'static str = "bollinger_breakout";

    /// Build from already validated params; [`Strategy::initialize`] decodes and
    /// validates a raw map first.
    ///
    /// # Panics
    ///
    /// Panics if `params.window_size` is zero.
    pub fn new(params: BollingerBreakoutParams) -> Self {
        let bands = RollingBands::new(params.window_size, params.stddev);
        Self {
            params,
            bands,
            metrics: MetricsCollector::new(),
        }
    }

    pub fn params(&self) -> &BollingerBreakoutParams {
        &self.params
    }

    /// Bands as of the last processed candle
    pub fn bands(&self) -> BandSnapshot {
        self.bands.current()
    }

    fn evaluate(&mut self, manager: &mut dyn StrategyManager, candle: &Candle) -> Result<()> {
        let price = candle.close;
        let bands = self.bands.update(price);
        if !bands.ready {
            return Ok(());
        }

        let mut emitter = OrderEmitter::new(manager, &self.params.pair, price, candle.timestamp_ns);

        if price > bands.upper {
            self.metrics.increment_signals();
            debug!(
                "{}: close {} above upper band {} (middle {})",
                self.params.pair, price, bands.upper, bands.middle
            );

            let position = emitter.sellable()?;
            if position <= Decimal::ZERO && emitter.buy_available()?.is_some() {
                self.metrics.increment_orders();
                return Ok(());
            }
            debug!(
                "{}: upper breakout without order (sellable {})",
                self.params.pair, position
            );
        }

        if price < bands.lower {
            self.metrics.increment_signals();
            debug!(
                "{}: close {} below lower band {} (middle {})",
                self.params.pair, price, bands.lower, bands.middle
            );

            let position = emitter.sellable()?;
            if position >= Decimal::ZERO {
                emitter.sell(position)?;
                self.metrics.increment_orders();
                return Ok(());
            }
            debug!(
                "{}: lower breakout without order (sellable {})",
                self.params.pair, position
            );
        }

        Ok(())
    }
}

impl Strategy for BollingerBreakoutStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn initialize(params: &RawParams) -> Result<Self> {
        let params: BollingerBreakoutParams = decode_params(params)?;
        Ok(Self::new(params))
    }

    fn on_start(&mut self) -> Result<()> {
        info!(
            "Bollinger Bands breakout strategy started for {} (window={}, stddev={})",
            self.params.pair, self.params.window_size, self.params.stddev
        );
        Ok(())
    }

    fn on_candle(&mut self, manager: &mut dyn StrategyManager, candle: &Candle) -> Result<()> {
        self.metrics.increment_candles();
        let result = self.evaluate(manager, candle);
        if result.is_err() {
            self.metrics.increment_errors();
        }
        result
    }

    fn on_trade(&mut self, _manager: &mut dyn StrategyManager, _trade: &Trade) -> Result<()> {
        self.metrics.increment_trades();
        Ok(())
    }

    fn on_stop(&mut self) -> Result<()> {
        let metrics = self.metrics.get_metrics();
        info!(
            "Bollinger Bands breakout strategy stopped after {:?}: {} candles, {} orders",
            self.metrics.uptime(),
            metrics.candles_processed,
            metrics.orders_submitted
        );
        Ok(())
    }

    fn metrics(&self) -> StrategyMetrics {
        self.metrics.get_metrics()
    }
}

//! EMA crossover strategy implementation

use crate::config::EmaCrossoverParams;
use rust_decimal::Decimal;
use signal_indicators::{detect_crossing, Crossing, OscillatorReading, SignalOscillator};
use strategy_shared::{
    decode_params, Candle, MetricsCollector, OrderEmitter, RawParams, Result, Strategy,
    StrategyManager, StrategyMetrics, Trade,
};
use tracing::{debug, error, info};

pub struct EmaCrossoverStrategy {
    params: EmaCrossoverParams,
    oscillator: SignalOscillator,
    /// Oscillator from the previous ready candle, zero before the first one
    last_oscillator: Decimal,
    last_reading: Option<OscillatorReading>,
    metrics: MetricsCollector,
}

impl EmaCrossoverStrategy {
    pub const NAME: &'static str = "ema_crossover";

    /// Build from already validated params; [`Strategy::initialize`] decodes and
    /// validates a raw map first.
    ///
    /// # Panics
    ///
    /// Panics if any of the three windows is zero.
    pub fn new(params: EmaCrossoverParams) -> Self {
        let oscillator =
            SignalOscillator::new(params.short_window, params.long_window, params.signal_window);
        Self {
            params,
            oscillator,
            last_oscillator: Decimal::ZERO,
            last_reading: None,
            metrics: MetricsCollector::new(),
        }
    }

    pub fn params(&self) -> &EmaCrossoverParams {
        &self.params
    }

    /// Most recent ready oscillator reading
    pub fn last_reading(&self) -> Option<OscillatorReading> {
        self.last_reading
    }

    fn evaluate(&mut self, manager: &mut dyn StrategyManager, candle: &Candle) -> Result<()> {
        let Some(reading) = self.oscillator.update(candle.close) else {
            return Ok(());
        };
        self.last_reading = Some(reading);

        let previous = std::mem::replace(&mut self.last_oscillator, reading.oscillator);
        let Some(crossing) = detect_crossing(previous, reading.oscillator, reading.signal) else {
            return Ok(());
        };

        self.metrics.increment_signals();
        debug!(
            "{}: {:?} crossing at {} (oscillator {} -> {}, signal {})",
            self.params.pair, crossing, candle.close, previous, reading.oscillator, reading.signal
        );

        let mut emitter =
            OrderEmitter::new(manager, &self.params.pair, candle.close, candle.timestamp_ns);
        let position = emitter.sellable()?;

        match crossing {
            Crossing::Upward if position <= Decimal::ZERO => {
                if emitter.buy_available()?.is_some() {
                    self.metrics.increment_orders();
                }
            }
            Crossing::Downward if position > Decimal::ZERO => {
                emitter.sell(position)?;
                self.metrics.increment_orders();
            }
            _ => {
                debug!(
                    "{}: {:?} crossing ignored (sellable {})",
                    self.params.pair, crossing, position
                );
            }
        }

        Ok(())
    }
}

impl Strategy for EmaCrossoverStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn initialize(params: &RawParams) -> Result<Self> {
        let params: EmaCrossoverParams = decode_params(params)?;
        Ok(Self::new(params))
    }

    fn on_start(&mut self) -> Result<()> {
        info!(
            "EMA crossover strategy started for {} (short={}, long={}, signal={})",
            self.params.pair,
            self.params.short_window,
            self.params.long_window,
            self.params.signal_window
        );
        Ok(())
    }

    fn on_candle(&mut self, manager: &mut dyn StrategyManager, candle: &Candle) -> Result<()> {
        self.metrics.increment_candles();
        let result = self.evaluate(manager, candle);
        if let Err(e) = &result {
            self.metrics.increment_errors();
            error!(
                "{}: candle at {} failed: {}",
                self.params.pair, candle.timestamp_ns, e
            );
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
            "EMA crossover strategy stopped after {:?}: {} candles, {} signals, {} orders",
            self.metrics.uptime(),
            metrics.candles_processed,
            metrics.signals_generated,
            metrics.orders_submitted
        );
        Ok(())
    }

    fn metrics(&self) -> StrategyMetrics {
        self.metrics.get_metrics()
    }
}

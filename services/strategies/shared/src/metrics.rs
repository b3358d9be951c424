//! Strategy metrics collection

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Per-strategy counters for candles, trades, crossings/breakouts and orders.
///
/// A signal is any band breakout or line crossing the strategy evaluated, whether
/// or not it led to an order; `orders_submitted` only counts accepted registrations.
/// The replay runner copies a snapshot into its `ReplaySummary`.
#[derive(Debug)]
pub struct MetricsCollector {
    start_time: Instant,
    candles_processed: AtomicU64,
    trades_observed: AtomicU64,
    signals_generated: AtomicU64,
    orders_submitted: AtomicU64,
    errors: AtomicU64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            candles_processed: AtomicU64::new(0),
            trades_observed: AtomicU64::new(0),
            signals_generated: AtomicU64::new(0),
            orders_submitted: AtomicU64::new(0),
            errors: AtomicU64::new(0),
        }
    }

    pub fn increment_candles(&self) {
        self.candles_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_trades(&self) {
        self.trades_observed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_signals(&self) {
        self.signals_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_orders(&self) {
        self.orders_submitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_errors(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_metrics(&self) -> super::StrategyMetrics {
        super::StrategyMetrics {
            candles_processed: self.candles_processed.load(Ordering::Relaxed),
            trades_observed: self.trades_observed.load(Ordering::Relaxed),
            signals_generated: self.signals_generated.load(Ordering::Relaxed),
            orders_submitted: self.orders_submitted.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }

    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

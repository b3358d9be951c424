//! Difference-of-EMAs oscillator with a signal line (MACD shape)

use crate::ema::ExponentialAverage;
use rust_decimal::Decimal;

/// One ready reading of the oscillator and its signal line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OscillatorReading {
    /// short EMA - long EMA
    pub oscillator: Decimal,
    /// EMA of the oscillator
    pub signal: Decimal,
}

impl OscillatorReading {
    pub fn histogram(&self) -> Decimal {
        self.oscillator - self.signal
    }
}

/// Short and long EMAs over price, plus a signal EMA over their difference.
///
/// The signal EMA only starts receiving samples once both price EMAs are ready, so
/// its own warm-up begins after theirs.
#[derive(Debug, Clone)]
pub struct SignalOscillator {
    short: ExponentialAverage,
    long: ExponentialAverage,
    signal: ExponentialAverage,
}

impl SignalOscillator {
    pub fn new(short_period: usize, long_period: usize, signal_period: usize) -> Self {
        Self {
            short: ExponentialAverage::new(short_period),
            long: ExponentialAverage::new(long_period),
            signal: ExponentialAverage::new(signal_period),
        }
    }

    /// Feed a price. Returns a reading only once all three EMAs are ready.
    pub fn update(&mut self, price: Decimal) -> Option<OscillatorReading> {
        let short = self.short.update(price);
        let long = self.long.update(price);
        if !self.short.is_ready() || !self.long.is_ready() {
            return None;
        }

        let oscillator = short - long;
        let signal = self.signal.update(oscillator);
        if !self.signal.is_ready() {
            return None;
        }

        Some(OscillatorReading { oscillator, signal })
    }

    pub fn is_ready(&self) -> bool {
        self.short.is_ready() && self.long.is_ready() && self.signal.is_ready()
    }

    pub fn short(&self) -> &ExponentialAverage {
        &self.short
    }

    pub fn long(&self) -> &ExponentialAverage {
        &self.long
    }

    pub fn signal(&self) -> &ExponentialAverage {
        &self.signal
    }
}

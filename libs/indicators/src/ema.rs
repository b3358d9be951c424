//! Exponential moving average

use crate::decimal::smoothing_constant;
use rust_decimal::Decimal;

/// Recursive exponential moving average.
///
/// The first sample seeds the average directly. Readiness is a warm-up gate on the
/// sample count (`count >= period`), not a convergence test.
#[derive(Debug, Clone)]
pub struct ExponentialAverage {
    period: usize,
    k: Decimal,
    one_minus_k: Decimal,
    value: Decimal,
    count: usize,
}

impl ExponentialAverage {
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "EMA period must be positive");
        let k = smoothing_constant(period);
        Self {
            period,
            k,
            one_minus_k: Decimal::ONE - k,
            value: Decimal::ZERO,
            count: 0,
        }
    }

    /// Fold a new sample into the average and return the updated value
    pub fn update(&mut self, price: Decimal) -> Decimal {
        self.value = if self.count == 0 {
            price
        } else {
            price * self.k + self.value * self.one_minus_k
        };
        self.count = self.count.saturating_add(1);
        self.value
    }

    /// Current value, `None` before the first sample
    pub fn value(&self) -> Option<Decimal> {
        (self.count > 0).then_some(self.value)
    }

    pub fn is_ready(&self) -> bool {
        self.count >= self.period
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn smoothing(&self) -> Decimal {
        self.k
    }

    pub fn sample_count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_first_sample_seeds_value() {
        let mut ema = ExponentialAverage::new(10);
        assert_eq!(ema.value(), None);
        assert_eq!(ema.update(dec!(123.45)), dec!(123.45));
        assert_eq!(ema.value(), Some(dec!(123.45)));
    }

    #[test]
    fn test_recurrence() {
        // period 3 -> k = 0.5
        let mut ema = ExponentialAverage::new(3);
        assert_eq!(ema.smoothing(), dec!(0.5));

        ema.update(dec!(10));
        assert_eq!(ema.update(dec!(20)), dec!(15));
        assert_eq!(ema.update(dec!(25)), dec!(20));
        assert_eq!(ema.update(dec!(10)), dec!(15));
    }

    #[test]
    fn test_ready_exactly_at_period() {
        let mut ema = ExponentialAverage::new(4);
        for i in 1..=3 {
            ema.update(Decimal::from(i));
            assert!(!ema.is_ready(), "ready too early at sample {i}");
        }
        ema.update(dec!(4));
        assert!(ema.is_ready());
        assert_eq!(ema.sample_count(), 4);
    }

    #[test]
    fn test_period_one_tracks_price() {
        let mut ema = ExponentialAverage::new(1);
        ema.update(dec!(5));
        assert!(ema.is_ready());
        assert_eq!(ema.update(dec!(8)), dec!(8));
    }

    #[test]
    fn test_constant_stream_is_stable() {
        let mut ema = ExponentialAverage::new(12);
        let mut value = Decimal::ZERO;
        for _ in 0..500 {
            value = ema.update(dec!(101.25));
        }
        // k = 2/13 is rounded at 28 digits; products may differ in the last place
        assert!((value - dec!(101.25)).abs() < dec!(0.00000000000000000001));
    }
}

//! Rolling standard deviation bands (Bollinger style)

use crate::decimal::decimal_sqrt;
use rust_decimal::Decimal;
use std::collections::VecDeque;

/// Band values produced by one [`RollingBands::update`] call.
///
/// Until the window is full `ready` is false and every price field is zero; those
/// zeros are placeholders and must not be compared against prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BandSnapshot {
    pub upper: Decimal,
    pub lower: Decimal,
    pub middle: Decimal,
    pub ready: bool,
}

/// Where a price sits relative to a ready band snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPosition {
    Above,
    Inside,
    Below,
}

impl BandSnapshot {
    fn not_ready() -> Self {
        Self::default()
    }

    /// Distance between the upper and lower band
    pub fn width(&self) -> Decimal {
        self.upper - self.lower
    }

    /// Classify a price with strict comparisons: touching a band is `Inside`.
    ///
    /// A snapshot that is not ready always reports `Inside`.
    pub fn position_of(&self, price: Decimal) -> BandPosition {
        if !self.ready {
            BandPosition::Inside
        } else if price > self.upper {
            BandPosition::Above
        } else if price < self.lower {
            BandPosition::Below
        } else {
            BandPosition::Inside
        }
    }
}

/// Fixed window mean with population standard deviation bands.
#[derive(Debug, Clone)]
pub struct RollingBands {
    period: usize,
    multiplier: Decimal,
    window: VecDeque<Decimal>,
    sum: Decimal,
    last: BandSnapshot,
}

impl RollingBands {
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(period: usize, multiplier: Decimal) -> Self {
        assert!(period > 0, "band period must be positive");
        Self {
            period,
            multiplier,
            window: VecDeque::new(),
            sum: Decimal::ZERO,
            last: BandSnapshot::not_ready(),
        }
    }

    /// Push a price, evicting the oldest once the window is full, and recompute.
    pub fn update(&mut self, price: Decimal) -> BandSnapshot {
        self.window.push_back(price);
        self.sum += price;

        if self.window.len() > self.period {
            if let Some(evicted) = self.window.pop_front() {
                self.sum -= evicted;
            }
        }

        self.last = if self.window.len() < self.period {
            BandSnapshot::not_ready()
        } else {
            self.compute()
        };
        self.last
    }

    fn compute(&self) -> BandSnapshot {
        let count = Decimal::from(self.period as u64);
        let middle = self.sum / count;

        let squared_deviations: Decimal = self
            .window
            .iter()
            .map(|&price| {
                let diff = price - middle;
                diff * diff
            })
            .sum();
        let variance = squared_deviations / count;

        let half_width = decimal_sqrt(variance) * self.multiplier;

        BandSnapshot {
            upper: middle + half_width,
            lower: middle - half_width,
            middle,
            ready: true,
        }
    }

    /// Snapshot from the most recent update
    pub fn current(&self) -> BandSnapshot {
        self.last
    }

    pub fn is_ready(&self) -> bool {
        self.window.len() == self.period
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn multiplier(&self) -> Decimal {
        self.multiplier
    }

    /// Number of samples currently held (never more than the period)
    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

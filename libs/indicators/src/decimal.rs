//! Decimal helpers shared by the indicators

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Square root of a decimal, computed through `f64`.
///
/// This is the only floating-point step in the indicator math. The result carries
/// roughly 15 significant digits, so anything derived from it (band half-width) is a
/// bounded-precision approximation. Zero and negative inputs yield zero.
pub fn decimal_sqrt(value: Decimal) -> Decimal {
    if value <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    value
        .to_f64()
        .map(f64::sqrt)
        .and_then(Decimal::from_f64)
        .unwrap_or(Decimal::ZERO)
}

/// EMA smoothing constant `k = 2 / (period + 1)`, divided exactly in decimal.
pub fn smoothing_constant(period: usize) -> Decimal {
    dec!(2) / (Decimal::from(period) + Decimal::ONE)
}

//! Edge detection between two consecutive readings and a reference level

use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// previous below the reference, current above it
    Upward,
    /// previous above the reference, current below it
    Downward,
}

/// Detect a strict crossing of `reference` between `previous` and `current`.
///
/// Both sides are strict: a reading equal to the reference is neither above nor
/// below it, so touching the level never fires.
pub fn detect_crossing(previous: Decimal, current: Decimal, reference: Decimal) -> Option<Crossing> {
    if previous < reference && current > reference {
        Some(Crossing::Upward)
    } else if previous > reference && current < reference {
        Some(Crossing::Downward)
    } else {
        None
    }
}

//! # Signal Indicators
//!
//! Streaming technical indicators over `rust_decimal::Decimal` prices. Every
//! indicator is updated one sample at a time and keeps only the state it needs:
//!
//! - [`RollingBands`]: fixed window mean and population standard deviation bands
//! - [`ExponentialAverage`]: recursive EMA seeded with the first sample
//! - [`SignalOscillator`]: difference of two EMAs smoothed by a third (signal line)
//! - [`crossing`]: strict edge detection between consecutive readings
//!
//! All arithmetic stays in fixed-point decimals except the square root inside the
//! band computation, see [`decimal_sqrt`].
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use signal_indicators::RollingBands;
//!
//! let mut bands = RollingBands::new(3, dec!(2));
//! assert!(!bands.update(dec!(10)).ready);
//! assert!(!bands.update(dec!(10)).ready);
//! let snapshot = bands.update(dec!(10));
//! assert!(snapshot.ready);
//! assert_eq!(snapshot.upper, dec!(10));
//! ```

pub mod bands;
pub mod crossing;
pub mod decimal;
pub mod ema;
pub mod oscillator;

pub use bands::{BandPosition, BandSnapshot, RollingBands};
pub use crossing::{detect_crossing, Crossing};
pub use decimal::{decimal_sqrt, smoothing_constant};
pub use ema::ExponentialAverage;
pub use oscillator::{OscillatorReading, SignalOscillator};

//! Trend indicators.
//!
//! - SMA (Simple Moving Average)

mod sma;

pub use sma::{compute_sma, Sma, SmaConfig, DEFAULT_SMA_PERIOD};

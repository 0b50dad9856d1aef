//! Prelude for ta-indicators.
//!
//! This module re-exports all commonly used types and functions.

// Momentum indicators
pub use crate::momentum::{
    compute_rsi, Rsi, RsiConfig, RsiZone, DEFAULT_RSI_PERIOD, OVERBOUGHT_LEVEL, OVERSOLD_LEVEL,
};

// Trend indicators
pub use crate::trend::{compute_sma, Sma, SmaConfig, DEFAULT_SMA_PERIOD};

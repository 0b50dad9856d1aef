//! Momentum indicators.
//!
//! - RSI (Relative Strength Index, Wilder smoothing)

mod rsi;

pub use rsi::{
    compute_rsi, Rsi, RsiConfig, RsiZone, DEFAULT_RSI_PERIOD, OVERBOUGHT_LEVEL, OVERSOLD_LEVEL,
};

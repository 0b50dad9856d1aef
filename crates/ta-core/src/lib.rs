//! # ta-core
//!
//! Core types and traits for the stock-ta workspace.
//!
//! - [`TaFloat`] - Trait for numeric types (f32/f64)
//! - [`Series`] - Price series container
//! - [`IndicatorSeries`] - Indicator output with a zero-sentinel warm-up prefix
//! - [`HistoricalRow`] - One trading day of OHLCV history, any field optional
//! - [`DateWindow`] - Inclusive calendar-day window
//! - [`Indicator`] - Indicator computation trait
//!
//! ## Feature Flags
//!
//! - `serde` (default) - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use ta_core::prelude::*;
//!
//! let rows = vec![HistoricalRow { close: Some(100.0), ..Default::default() }];
//! let closes: Series<f64> = price_series(&rows, PriceField::Close);
//! assert_eq!(closes[0], 100.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod calendar;
pub mod error;
pub mod num;
pub mod ohlcv;
pub mod prelude;
pub mod series;
pub mod traits;

// Re-export core types at crate root
pub use calendar::{date_label, parse_day, DateWindow, MISSING_DATE_LABEL};
pub use error::{IndicatorError, Result};
pub use num::TaFloat;
pub use ohlcv::{price_series, HistoricalRow, PriceField};
pub use series::{IndicatorSeries, Series};
pub use traits::{Indicator, IndicatorConfig};

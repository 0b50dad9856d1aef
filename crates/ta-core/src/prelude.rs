//! Prelude module for convenient imports.
//!
//! ```rust
//! use ta_core::prelude::*;
//!
//! let series: Series<f64> = Series::new();
//! let row = HistoricalRow::default();
//! assert_eq!(row.label(), MISSING_DATE_LABEL);
//! ```

// Core types
pub use crate::calendar::{date_label, parse_day, DateWindow, MISSING_DATE_LABEL};
pub use crate::num::TaFloat;
pub use crate::ohlcv::{price_series, HistoricalRow, PriceField};
pub use crate::series::{IndicatorSeries, Series};

// Error types
pub use crate::error::{IndicatorError, Result};

// Traits
pub use crate::traits::Indicator;

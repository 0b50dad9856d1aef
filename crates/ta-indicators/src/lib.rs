//! # ta-indicators
//!
//! The indicator engine: pure, total functions over a price series.
//!
//! - **Momentum**: RSI (Wilder)
//! - **Trend**: SMA
//!
//! Every output is co-indexed with its input. Positions before enough
//! history has accumulated hold the sentinel `0`; see
//! [`ta_core::IndicatorSeries`] for the tagged view.
//!
//! # Example
//!
//! ```
//! use ta_indicators::prelude::*;
//! use ta_core::prelude::*;
//!
//! let closes = [44.0, 44.25, 44.5, 43.75, 44.5, 44.25, 44.0];
//!
//! let sma = compute_sma(&closes, 3).unwrap();
//! assert_eq!(sma.len(), closes.len());
//!
//! let rsi = Rsi::<f64>::new(RsiConfig::new(5));
//! let values = rsi.calculate(&closes).unwrap();
//! assert!(values.value(4).is_none());
//! assert!(values.value(5).is_some());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod momentum;
pub mod trend;

pub mod prelude;

pub use prelude::*;

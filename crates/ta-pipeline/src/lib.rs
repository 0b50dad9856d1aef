//! # ta-pipeline
//!
//! Turns an already-fetched daily history into co-indexed series and keeps
//! them aligned under date-window selection.
//!
//! - [`StockDataAggregator`]: rows → [`ProcessedStockData`] (history, 20-day
//!   SMA, 14-day RSI, date labels)
//! - [`filter_by_date_window`] and [`project`]: one index sequence, applied to
//!   every series
//! - [`views`]: chart-ready rows built from an [`AlignedSeries`]
//!
//! Everything here is pure and synchronous; the aggregate can be shared
//! read-only between views on any number of threads.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use ta_core::{DateWindow, HistoricalRow};
//! use ta_pipeline::StockDataAggregator;
//!
//! let rows: Vec<HistoricalRow> = (1..=3)
//!     .map(|d| {
//!         let day = NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//!         HistoricalRow::new(day, 10.0, 11.0, 9.0, 10.5, 1_000.0)
//!     })
//!     .collect();
//!
//! let data = StockDataAggregator::build(rows);
//! let window = DateWindow::parse("2024-01-02", "2024-01-03").unwrap();
//! let view = data.select(Some(&window));
//!
//! assert_eq!(view.dates, vec!["2024-01-02", "2024-01-03"]);
//! assert_eq!(view.historical.len(), 2);
//! assert_eq!(view.sma.len(), 2);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod aggregator;
mod aligner;
pub mod views;

pub mod prelude;

pub use aggregator::{ProcessedStockData, StockDataAggregator, RSI_PERIOD, SMA_PERIOD};
pub use aligner::{align, filter_by_date_window, project, AlignedSeries};

//! Builds the aggregate of history, indicators and date labels.

use serde::Serialize;
use ta_core::{
    calendar::date_label, price_series, DateWindow, HistoricalRow, IndicatorSeries, PriceField,
    Series,
};
use ta_indicators::{compute_rsi, compute_sma, DEFAULT_RSI_PERIOD, DEFAULT_SMA_PERIOD};
use tracing::debug;

use crate::aligner::{align, AlignedSeries};

/// Moving-average window of the aggregate.
pub const SMA_PERIOD: usize = DEFAULT_SMA_PERIOD;

/// RSI window of the aggregate.
pub const RSI_PERIOD: usize = DEFAULT_RSI_PERIOD;

/// History with its indicators and date labels, all co-indexed.
///
/// `historical()[i]`, `sma()[i]`, `rsi()[i]` and `dates()[i]` always describe
/// the same trading day. The aggregate is immutable once built; share it
/// read-only and derive windows with [`ProcessedStockData::select`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProcessedStockData {
    historical: Vec<HistoricalRow>,
    sma: IndicatorSeries<f64>,
    rsi: IndicatorSeries<f64>,
    dates: Vec<String>,
}

impl ProcessedStockData {
    /// History rows, exactly as supplied.
    #[must_use]
    pub fn historical(&self) -> &[HistoricalRow] {
        &self.historical
    }

    /// 20-period SMA of the closes.
    #[must_use]
    pub fn sma(&self) -> &IndicatorSeries<f64> {
        &self.sma
    }

    /// 14-period RSI of the closes.
    #[must_use]
    pub fn rsi(&self) -> &IndicatorSeries<f64> {
        &self.rsi
    }

    /// `YYYY-MM-DD` labels, `"N/A"` for undated rows.
    #[must_use]
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// Number of trading days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.historical.len()
    }

    /// Whether the aggregate holds no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.historical.is_empty()
    }

    /// Window spanning the first and last labels, if both are dates.
    #[must_use]
    pub fn full_window(&self) -> Option<DateWindow> {
        let first = self.dates.first()?;
        let last = self.dates.last()?;
        DateWindow::parse(first, last).ok()
    }

    /// Restrict all four series to `window` (all days when `None`).
    #[must_use]
    pub fn select(&self, window: Option<&DateWindow>) -> AlignedSeries {
        align(self, window)
    }

    /// Consume the aggregate and return the history rows.
    #[must_use]
    pub fn into_historical(self) -> Vec<HistoricalRow> {
        self.historical
    }
}

/// Turns a raw history into a [`ProcessedStockData`].
///
/// Absent closes count as zero for the indicators; absent dates become
/// `"N/A"`. Building never fails, including on empty input.
///
/// # Example
///
/// ```rust
/// use ta_pipeline::StockDataAggregator;
///
/// let data = StockDataAggregator::build(Vec::new());
/// assert!(data.historical().is_empty());
/// assert!(data.sma().is_empty());
/// assert!(data.rsi().is_empty());
/// assert!(data.dates().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StockDataAggregator;

impl StockDataAggregator {
    /// Build the aggregate from rows ordered by ascending date.
    #[must_use]
    pub fn build(rows: Vec<HistoricalRow>) -> ProcessedStockData {
        let len = rows.len();
        let closes: Series<f64> = price_series(&rows, PriceField::Close);

        // Both windows are non-zero constants, so the error arm is unreachable.
        let sma = compute_sma(closes.as_slice(), SMA_PERIOD)
            .unwrap_or_else(|_| IndicatorSeries::sentinel(len));
        let rsi = compute_rsi(closes.as_slice(), RSI_PERIOD)
            .unwrap_or_else(|_| IndicatorSeries::sentinel(len));

        let dates: Vec<String> = rows.iter().map(|row| date_label(row.date)).collect();

        debug!(
            rows = len,
            undated = rows.iter().filter(|row| row.date.is_none()).count(),
            sma_ready = sma.last_value().is_some(),
            rsi_ready = rsi.last_value().is_some(),
            "built stock data aggregate"
        );

        ProcessedStockData {
            historical: rows,
            sma,
            rsi,
            dates,
        }
    }
}

impl FromIterator<HistoricalRow> for ProcessedStockData {
    fn from_iter<I: IntoIterator<Item = HistoricalRow>>(iter: I) -> Self {
        StockDataAggregator::build(iter.into_iter().collect())
    }
}

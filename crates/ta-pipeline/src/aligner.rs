//! Date-window selection over co-indexed series.
//!
//! The index sequence is computed once from the date labels and then applied
//! to every series, so rows, indicators and labels cannot drift apart no
//! matter which view asks for the window.

use serde::Serialize;
use ta_core::{DateWindow, HistoricalRow, IndicatorSeries};
use tracing::{debug, trace};

use crate::aggregator::ProcessedStockData;

/// Indices of `dates` that fall inside `window`, in original order.
///
/// With no window every index `0..n` is returned. Otherwise a label is kept
/// when its calendar day lies between the start of `window.start` and
/// `23:59:59.999` on `window.end`. Labels that are not dates never match.
/// An empty, out-of-range or inverted window yields an empty vector.
///
/// # Example
///
/// ```rust
/// use ta_core::DateWindow;
/// use ta_pipeline::filter_by_date_window;
///
/// let dates = ["2024-01-01", "2024-01-02", "2024-01-03"];
/// let window = DateWindow::parse("2024-01-02", "2024-01-02").unwrap();
///
/// assert_eq!(filter_by_date_window(&dates, Some(&window)), vec![1]);
/// assert_eq!(filter_by_date_window(&dates, None), vec![0, 1, 2]);
/// ```
#[must_use]
pub fn filter_by_date_window<S: AsRef<str>>(dates: &[S], window: Option<&DateWindow>) -> Vec<usize> {
    let Some(window) = window else {
        return (0..dates.len()).collect();
    };

    if window.is_inverted() {
        trace!(start = %window.start, end = %window.end, "inverted window selects nothing");
        return Vec::new();
    }

    let indices: Vec<usize> = dates
        .iter()
        .enumerate()
        .filter_map(|(i, label)| window.contains_label(label.as_ref()).then_some(i))
        .collect();

    trace!(
        start = %window.start,
        end = %window.end,
        total = dates.len(),
        selected = indices.len(),
        "filtered dates by window"
    );
    indices
}

/// Re-index `series` by `indices`: `result[k] = series[indices[k]]`.
///
/// # Panics
///
/// Panics if an index is out of bounds for `series`.
#[must_use]
pub fn project<T: Clone>(series: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| series[i].clone()).collect()
}

/// The four co-indexed series restricted to one date window.
///
/// Owned by the caller for one render pass; the source aggregate is untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AlignedSeries {
    /// Positions in the source aggregate that were selected.
    pub indices: Vec<usize>,
    /// Selected history rows.
    pub historical: Vec<HistoricalRow>,
    /// Selected SMA values.
    pub sma: IndicatorSeries<f64>,
    /// Selected RSI values.
    pub rsi: IndicatorSeries<f64>,
    /// Selected date labels.
    pub dates: Vec<String>,
}

impl AlignedSeries {
    /// Number of selected trading days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the window selected nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Select the days of `data` inside `window` across all four series.
#[must_use]
pub fn align(data: &ProcessedStockData, window: Option<&DateWindow>) -> AlignedSeries {
    let indices = filter_by_date_window(data.dates(), window);

    let aligned = AlignedSeries {
        historical: project(data.historical(), &indices),
        sma: data.sma().select(&indices),
        rsi: data.rsi().select(&indices),
        dates: project(data.dates(), &indices),
        indices,
    };

    debug!(
        source_len = data.len(),
        selected = aligned.len(),
        windowed = window.is_some(),
        "aligned series"
    );
    aligned
}

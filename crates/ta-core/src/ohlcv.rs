//! Daily OHLCV history rows.
//!
//! Upstream providers may omit any field of a row. Absent values stay `None`
//! here; they are only replaced by zero when a price series is extracted for
//! indicator input.

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::calendar;
use crate::num::TaFloat;
use crate::series::Series;

/// One trading day of history.
///
/// Rows are expected in strictly ascending date order. Non-trading days are
/// absent rather than zero-filled, so spacing between rows is irregular.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use ta_core::HistoricalRow;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let row = HistoricalRow::new(day, 100.0, 105.0, 98.0, 103.0, 1_000_000.0);
/// assert_eq!(row.label(), "2024-01-02");
/// assert!(row.is_bullish());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoricalRow {
    /// Trading day.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "deserialize_day")
    )]
    pub date: Option<NaiveDate>,
    /// Opening price.
    #[cfg_attr(feature = "serde", serde(default))]
    pub open: Option<f64>,
    /// Highest price.
    #[cfg_attr(feature = "serde", serde(default))]
    pub high: Option<f64>,
    /// Lowest price.
    #[cfg_attr(feature = "serde", serde(default))]
    pub low: Option<f64>,
    /// Closing price.
    #[cfg_attr(feature = "serde", serde(default))]
    pub close: Option<f64>,
    /// Traded volume.
    #[cfg_attr(feature = "serde", serde(default))]
    pub volume: Option<f64>,
}

impl HistoricalRow {
    /// Create a fully populated row.
    #[must_use]
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date: Some(date),
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close: Some(close),
            volume: Some(volume),
        }
    }

    /// ISO label of the row's date, or `"N/A"` when absent.
    #[must_use]
    pub fn label(&self) -> String {
        calendar::date_label(self.date)
    }

    /// The requested field, if present.
    #[must_use]
    pub fn field(&self, field: PriceField) -> Option<f64> {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => self.close,
            PriceField::Volume => self.volume,
        }
    }

    /// Whether the day closed above its open. False if either is absent.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        matches!((self.open, self.close), (Some(o), Some(c)) if c > o)
    }
}

/// Which field of a [`HistoricalRow`] feeds a price series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PriceField {
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// Closing price.
    #[default]
    Close,
    /// Traded volume.
    Volume,
}

/// Extract one field of every row as a price series, absent values as zero.
///
/// The result is co-indexed with `rows`.
///
/// # Example
///
/// ```rust
/// use ta_core::{price_series, HistoricalRow, PriceField};
///
/// let rows = vec![
///     HistoricalRow { close: Some(10.0), ..Default::default() },
///     HistoricalRow::default(),
/// ];
/// let closes = price_series::<f64>(&rows, PriceField::Close);
/// assert_eq!(closes.as_slice(), &[10.0, 0.0]);
/// ```
#[must_use]
pub fn price_series<T: TaFloat>(rows: &[HistoricalRow], field: PriceField) -> Series<T> {
    rows.iter()
        .map(|row| {
            row.field(field)
                .map_or(T::ZERO, <T as TaFloat>::from_f64_lossy)
        })
        .collect()
}

/// Date as it arrives from a provider: a string or epoch milliseconds.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDay {
    Text(String),
    Millis(i64),
    Other(serde::de::IgnoredAny),
}

/// Unreadable dates become `None` so the row is kept with the `"N/A"` label.
#[cfg(feature = "serde")]
fn deserialize_day<'de, D>(deserializer: D) -> core::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawDay> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawDay::Text(s)) => calendar::parse_day(&s),
        Some(RawDay::Millis(ms)) => calendar::day_from_millis(ms),
        Some(RawDay::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_row_creation() {
        let row = HistoricalRow::new(day(2), 100.0, 105.0, 98.0, 103.0, 1_000_000.0);
        assert_eq!(row.field(PriceField::Close), Some(103.0));
        assert_eq!(row.field(PriceField::Volume), Some(1_000_000.0));
        assert_eq!(row.label(), "2024-01-02");
    }

    #[test]
    fn test_missing_date_label() {
        let row = HistoricalRow::default();
        assert_eq!(row.label(), "N/A");
        assert!(!row.is_bullish());
    }

    #[test]
    fn test_bullish_requires_both_prices() {
        let up = HistoricalRow::new(day(2), 100.0, 105.0, 98.0, 103.0, 1.0);
        assert!(up.is_bullish());

        let flat = HistoricalRow::new(day(2), 100.0, 105.0, 98.0, 100.0, 1.0);
        assert!(!flat.is_bullish());

        let no_open = HistoricalRow {
            open: None,
            ..up.clone()
        };
        assert!(!no_open.is_bullish());
    }

    #[test]
    fn test_price_series_zero_fills() {
        let rows = vec![
            HistoricalRow::new(day(2), 1.0, 2.0, 0.5, 1.5, 10.0),
            HistoricalRow {
                date: Some(day(3)),
                ..Default::default()
            },
        ];
        let closes = price_series::<f64>(&rows, PriceField::Close);
        assert_eq!(closes.as_slice(), &[1.5, 0.0]);

        let highs = price_series::<f32>(&rows, PriceField::High);
        assert_eq!(highs.as_slice(), &[2.0f32, 0.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_rows() {
        let json = r#"[
            {"date": "2024-01-02T05:00:00.000Z", "open": 1.0, "close": 2.0},
            {"date": "2024-01-03", "volume": 500},
            {"close": 3.0},
            {"date": null, "high": 4.0}
        ]"#;
        let rows: Vec<HistoricalRow> = serde_json::from_str(json).unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].date, Some(day(2)));
        assert_eq!(rows[0].high, None);
        assert_eq!(rows[1].volume, Some(500.0));
        assert_eq!(rows[2].date, None);
        assert_eq!(rows[3].date, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_unreadable_date_keeps_row_undated() {
        let json = r#"[
            {"date": "someday", "close": 1.0},
            {"date": "", "close": 2.0},
            {"date": 1704153600000, "close": 3.0},
            {"date": "2024-01-04", "close": 4.0},
            {"date": true, "close": 5.0}
        ]"#;
        let rows: Vec<HistoricalRow> = serde_json::from_str(json).unwrap();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].date, None);
        assert_eq!(rows[0].label(), "N/A");
        assert_eq!(rows[0].close, Some(1.0));
        assert_eq!(rows[1].date, None);
        // 2024-01-02T00:00:00Z
        assert_eq!(rows[2].date, Some(day(2)));
        assert_eq!(rows[3].date, Some(day(4)));
        assert_eq!(rows[4].date, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_bad_price() {
        let json = r#"[{"date": "2024-01-02", "close": "high"}]"#;
        let result: core::result::Result<Vec<HistoricalRow>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

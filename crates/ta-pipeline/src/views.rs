//! Per-view row builders.
//!
//! Each chart consumes the same [`AlignedSeries`], so a window applied once
//! shows the same days in every view.

use serde::Serialize;
use ta_indicators::RsiZone;

use crate::aligner::AlignedSeries;

/// Closing price with its moving average.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PricePoint {
    /// Date label.
    pub date: String,
    /// Close, zero when absent.
    pub price: f64,
    /// SMA, zero during warm-up.
    pub sma: f64,
}

/// Whether a candle closed above its open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandleDirection {
    /// Close above open.
    Up,
    /// Close at or below open, or either price absent.
    Down,
}

/// One OHLC candle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Candle {
    /// Date label.
    pub date: String,
    /// Opening price.
    pub open: Option<f64>,
    /// Highest price.
    pub high: Option<f64>,
    /// Lowest price.
    pub low: Option<f64>,
    /// Closing price.
    pub close: Option<f64>,
    /// Up or down day.
    pub direction: CandleDirection,
}

/// Traded volume for one day.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VolumeBar {
    /// Date label.
    pub date: String,
    /// Volume, if reported.
    pub volume: Option<f64>,
}

/// RSI reading for one day.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RsiPoint {
    /// Date label.
    pub date: String,
    /// RSI, zero during warm-up.
    pub rsi: f64,
    /// Zone of the reading; `None` during warm-up.
    pub zone: Option<RsiZone>,
}

/// Price line rows.
#[must_use]
pub fn price_points(view: &AlignedSeries) -> Vec<PricePoint> {
    view.dates
        .iter()
        .zip(&view.historical)
        .zip(view.sma.iter())
        .map(|((date, row), &sma)| PricePoint {
            date: date.clone(),
            price: row.close.unwrap_or(0.0),
            sma,
        })
        .collect()
}

/// Candlestick rows.
#[must_use]
pub fn candles(view: &AlignedSeries) -> Vec<Candle> {
    view.dates
        .iter()
        .zip(&view.historical)
        .map(|(date, row)| Candle {
            date: date.clone(),
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            direction: if row.is_bullish() {
                CandleDirection::Up
            } else {
                CandleDirection::Down
            },
        })
        .collect()
}

/// Volume bar rows.
#[must_use]
pub fn volume_bars(view: &AlignedSeries) -> Vec<VolumeBar> {
    view.dates
        .iter()
        .zip(&view.historical)
        .map(|(date, row)| VolumeBar {
            date: date.clone(),
            volume: row.volume,
        })
        .collect()
}

/// RSI rows.
#[must_use]
pub fn rsi_points(view: &AlignedSeries) -> Vec<RsiPoint> {
    view.dates
        .iter()
        .enumerate()
        .map(|(i, date)| RsiPoint {
            date: date.clone(),
            rsi: view.rsi.get(i).unwrap_or(0.0),
            zone: view.rsi.value(i).map(RsiZone::classify),
        })
        .collect()
}

/// Abbreviate a volume: `1.5B`, `2.3M`, `4.0K`, or the plain number below 1000.
#[must_use]
pub fn format_volume(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        value.to_string()
    }
}

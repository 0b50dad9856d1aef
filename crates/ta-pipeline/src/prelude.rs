//! Prelude for ta-pipeline.

pub use crate::aggregator::{ProcessedStockData, StockDataAggregator, RSI_PERIOD, SMA_PERIOD};
pub use crate::aligner::{align, filter_by_date_window, project, AlignedSeries};
pub use crate::views::{
    candles, format_volume, price_points, rsi_points, volume_bars, Candle, CandleDirection,
    PricePoint, RsiPoint, VolumeBar,
};

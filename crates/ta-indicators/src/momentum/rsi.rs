//! Relative Strength Index (RSI) indicator.
//!
//! RSI is a momentum oscillator that measures the speed and magnitude
//! of recent price changes to evaluate overbought or oversold conditions.

use core::marker::PhantomData;

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    series::{IndicatorSeries, Series},
    traits::Indicator,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Window used by the aggregate's RSI.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// RSI at or above this level is overbought.
pub const OVERBOUGHT_LEVEL: f64 = 70.0;

/// RSI at or below this level is oversold.
pub const OVERSOLD_LEVEL: f64 = 30.0;

/// Configuration for the RSI indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RsiConfig {
    /// The lookback period (default: 14).
    pub window: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_RSI_PERIOD,
        }
    }
}

impl RsiConfig {
    /// Create a new RSI configuration with the given window.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Conventional reading of an RSI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RsiZone {
    /// RSI >= 70.
    Overbought,
    /// 30 < RSI < 70.
    Neutral,
    /// RSI <= 30.
    Oversold,
}

impl RsiZone {
    /// Classify an RSI value.
    #[must_use]
    pub fn classify<T: TaFloat>(value: T) -> Self {
        let v = value.to_f64_lossy();
        if v >= OVERBOUGHT_LEVEL {
            Self::Overbought
        } else if v <= OVERSOLD_LEVEL {
            Self::Oversold
        } else {
            Self::Neutral
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overbought => "Overbought",
            Self::Neutral => "Neutral",
            Self::Oversold => "Oversold",
        }
    }
}

/// RSI from Wilder-smoothed average gain and loss.
///
/// No losses in the window reads as maximum strength, including the flat case.
fn rsi_from_averages<T: TaFloat>(avg_gain: T, avg_loss: T) -> T {
    if avg_loss == T::ZERO {
        return T::HUNDRED;
    }
    let rs = avg_gain / avg_loss;
    T::HUNDRED - T::HUNDRED / (T::ONE + rs)
}

/// Compute Wilder's RSI over `prices`.
///
/// Deltas start at index 1. The averages at index `period` are the simple
/// means of the first `period` gains and losses; each later index applies
/// Wilder smoothing, `avg = (prev * (period - 1) + x) / period`. Positions
/// `i < period` hold the sentinel `0`, so input of length `<= period` yields
/// an all-sentinel series.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `period == 0`.
///
/// # Example
///
/// ```rust
/// use ta_indicators::compute_rsi;
///
/// let prices: Vec<f64> = (1..=15).map(f64::from).collect();
/// let rsi = compute_rsi(&prices, 14).unwrap();
/// assert_eq!(rsi.len(), 15);
/// assert_eq!(rsi.last_value(), Some(100.0));
/// ```
pub fn compute_rsi<T: TaFloat>(prices: &[T], period: usize) -> Result<IndicatorSeries<T>> {
    if period == 0 {
        return Err(IndicatorError::invalid_period(period));
    }

    let len = prices.len();
    if len <= period {
        return Ok(IndicatorSeries::sentinel(len));
    }

    let window = <T as TaFloat>::from_usize(period);
    let carry = <T as TaFloat>::from_usize(period - 1);

    let split = |i: usize| {
        let change = prices[i] - prices[i - 1];
        if change > T::ZERO {
            (change, T::ZERO)
        } else {
            (T::ZERO, -change)
        }
    };

    let mut result = Series::with_capacity(len);
    for _ in 0..period {
        result.push(T::ZERO);
    }

    let (gain_sum, loss_sum) = (1..=period).map(split).fold(
        (T::ZERO, T::ZERO),
        |(g, l), (gain, loss)| (g + gain, l + loss),
    );
    let mut avg_gain = gain_sum / window;
    let mut avg_loss = loss_sum / window;
    result.push(rsi_from_averages(avg_gain, avg_loss));

    for i in (period + 1)..len {
        let (gain, loss) = split(i);
        avg_gain = (avg_gain * carry + gain) / window;
        avg_loss = (avg_loss * carry + loss) / window;
        result.push(rsi_from_averages(avg_gain, avg_loss));
    }

    Ok(IndicatorSeries::new(result, period))
}

/// Relative Strength Index indicator.
///
/// # Formula
///
/// RS = Average Gain / Average Loss
/// RSI = 100 - (100 / (1 + RS))
///
/// Wilder's smoothing is used: alpha = 1/n (not 2/(n+1)), seeded with the
/// simple mean of the first n changes.
#[derive(Debug, Clone)]
pub struct Rsi<T: TaFloat> {
    config: RsiConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Rsi<T> {
    type Config = RsiConfig;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    fn min_periods(&self) -> usize {
        self.config.window
    }

    fn calculate(&self, prices: &[T]) -> Result<IndicatorSeries<T>> {
        compute_rsi(prices, self.config.window)
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

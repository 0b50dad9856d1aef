//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the unweighted mean of the previous n data points.

use core::marker::PhantomData;

use ta_core::{
    error::{IndicatorError, Result},
    num::TaFloat,
    series::{IndicatorSeries, Series},
    traits::Indicator,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Window used by the aggregate's moving average.
pub const DEFAULT_SMA_PERIOD: usize = 20;

/// Configuration for the SMA indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmaConfig {
    /// The window size for the moving average.
    pub window: usize,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_SMA_PERIOD,
        }
    }
}

impl SmaConfig {
    /// Create a new SMA configuration with the given window.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Running sum with Neumaier compensation.
///
/// Values leaving the window are subtracted exactly, so one large price
/// does not swamp the smaller prices that follow it.
#[derive(Debug, Clone, Copy, Default)]
struct CompensatedSum<T> {
    sum: T,
    compensation: T,
}

impl<T: TaFloat> CompensatedSum<T> {
    fn add(&mut self, value: T) {
        let total = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation = self.compensation + ((self.sum - total) + value);
        } else {
            self.compensation = self.compensation + ((value - total) + self.sum);
        }
        self.sum = total;
    }

    fn value(&self) -> T {
        self.sum + self.compensation
    }
}

/// Compute a simple moving average over `prices`.
///
/// The output has the same length as the input. Positions `i < period - 1`
/// hold the sentinel `0`; every later position holds the mean of
/// `prices[i + 1 - period ..= i]`. A period longer than the input yields an
/// all-sentinel series.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if `period == 0`.
///
/// # Example
///
/// ```rust
/// use ta_indicators::compute_sma;
///
/// let sma = compute_sma(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
/// assert_eq!(sma.as_slice(), &[0.0, 0.0, 2.0, 3.0, 4.0]);
/// assert_eq!(sma.value(1), None);
/// ```
pub fn compute_sma<T: TaFloat>(prices: &[T], period: usize) -> Result<IndicatorSeries<T>> {
    if period == 0 {
        return Err(IndicatorError::invalid_period(period));
    }

    let len = prices.len();
    let warmup = (period - 1).min(len);
    let divisor = <T as TaFloat>::from_usize(period);

    let mut result = Series::with_capacity(len);
    let mut sum = CompensatedSum::default();

    for (i, &value) in prices.iter().enumerate() {
        sum.add(value);

        if i >= period {
            sum.add(-prices[i - period]);
        }

        if i + 1 >= period {
            result.push(sum.value() / divisor);
        } else {
            result.push(T::ZERO);
        }
    }

    Ok(IndicatorSeries::new(result, warmup))
}

/// Simple Moving Average indicator.
///
/// # Formula
///
/// SMA = (P1 + P2 + ... + Pn) / n
#[derive(Debug, Clone)]
pub struct Sma<T: TaFloat> {
    config: SmaConfig,
    _marker: PhantomData<T>,
}

impl<T: TaFloat> Indicator<T> for Sma<T> {
    type Config = SmaConfig;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    fn min_periods(&self) -> usize {
        self.config.window.saturating_sub(1)
    }

    fn calculate(&self, prices: &[T]) -> Result<IndicatorSeries<T>> {
        compute_sma(prices, self.config.window)
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

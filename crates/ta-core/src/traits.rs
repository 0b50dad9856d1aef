//! Core trait shared by the indicators.

use crate::error::Result;
use crate::num::TaFloat;
use crate::series::IndicatorSeries;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Configuration trait bounds for indicator configurations.
#[cfg(feature = "serde")]
pub trait IndicatorConfig: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

#[cfg(not(feature = "serde"))]
pub trait IndicatorConfig: Clone + Default + Send + Sync {}

#[cfg(feature = "serde")]
impl<T> IndicatorConfig for T where T: Clone + Default + Serialize + DeserializeOwned + Send + Sync {}

#[cfg(not(feature = "serde"))]
impl<T> IndicatorConfig for T where T: Clone + Default + Send + Sync {}

/// A windowed transform over a price series.
///
/// Implementations are pure: `calculate` never mutates its input and returns
/// a series co-indexed with it. Input shorter than the window is not an
/// error; the affected positions are warm-up sentinels.
pub trait Indicator<T: TaFloat>: Send + Sync {
    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Create a new indicator with the given configuration.
    fn new(config: Self::Config) -> Self;

    /// Index of the first position that can hold a computed value.
    fn min_periods(&self) -> usize;

    /// Compute the indicator over `prices`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the configuration is invalid.
    fn calculate(&self, prices: &[T]) -> Result<IndicatorSeries<T>>;

    /// Get a reference to the current configuration.
    fn config(&self) -> &Self::Config;
}

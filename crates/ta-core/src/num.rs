//! Numeric type abstractions for indicator computations.
//!
//! [`TaFloat`] abstracts over `f32` and `f64` so indicators can be written once.

use num_traits::{Float, FromPrimitive, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Serialization bound that collapses to nothing without the `serde` feature.
#[cfg(feature = "serde")]
pub trait SerdeFloat: Serialize + DeserializeOwned {}

#[cfg(feature = "serde")]
impl<T> SerdeFloat for T where T: Serialize + DeserializeOwned {}

/// Serialization bound that collapses to nothing without the `serde` feature.
#[cfg(not(feature = "serde"))]
pub trait SerdeFloat {}

#[cfg(not(feature = "serde"))]
impl<T> SerdeFloat for T {}

/// Trait for floating-point types used in indicator calculations.
///
/// # Example
///
/// ```rust
/// use ta_core::TaFloat;
///
/// fn rsi_from_averages<T: TaFloat>(avg_gain: T, avg_loss: T) -> T {
///     if avg_loss == T::ZERO {
///         return T::HUNDRED;
///     }
///     T::HUNDRED - T::HUNDRED / (T::ONE + avg_gain / avg_loss)
/// }
///
/// assert_eq!(rsi_from_averages(1.0_f64, 0.0), 100.0);
/// ```
pub trait TaFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + SerdeFloat + 'static
{
    /// Zero value. Also the warm-up sentinel of indicator series.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Hundred value (RSI upper bound).
    const HUNDRED: Self;

    /// Convert from `f64`, rounding if the target is narrower.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is valid (not NaN and not infinite).
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

impl TaFloat for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl TaFloat for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(<f64 as TaFloat>::ZERO, 0.0);
        assert_eq!(<f64 as TaFloat>::ONE, 1.0);
        assert_eq!(<f32 as TaFloat>::HUNDRED, 100.0f32);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(f32::from_f64_lossy(42.5), 42.5f32);
        assert_eq!(42.5f32.to_f64_lossy(), 42.5);
        assert_eq!(<f64 as TaFloat>::from_usize(20), 20.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(1.0f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
    }
}

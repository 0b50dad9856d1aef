//! Price and indicator series containers.
//!
//! [`Series`] holds a plain price sequence. [`IndicatorSeries`] holds indicator
//! output, which starts with a warm-up stretch filled with the zero sentinel.

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer};

use crate::num::TaFloat;

/// A contiguous series of floating-point values, one per trading day.
///
/// # Example
///
/// ```rust
/// use ta_core::Series;
///
/// let mut series: Series<f64> = Series::new();
/// series.push(100.0);
/// series.push(101.5);
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series[1], 101.5);
/// assert_eq!(series.last(), Some(&101.5));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent, bound = "T: TaFloat"))]
pub struct Series<T: TaFloat> {
    data: Vec<T>,
}

impl<T: TaFloat> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TaFloat> Series<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a new series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a series from an existing vector.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a series filled with a value.
    #[must_use]
    pub fn filled(value: T, len: usize) -> Self {
        Self {
            data: vec![value; len],
        }
    }

    /// Returns the number of elements in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a value to the end of the series.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Returns a reference to the element at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Returns an iterator over the series.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the series and return the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: TaFloat> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: TaFloat> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: TaFloat> From<Vec<T>> for Series<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: TaFloat> From<&[T]> for Series<T> {
    fn from(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

/// Indicator output, co-indexed with the price series it was computed from.
///
/// Positions before enough history has accumulated hold the sentinel `0`.
/// The sentinel is indistinguishable from a genuine zero by value, so the
/// series also records how many leading positions are warm-up. Use
/// [`IndicatorSeries::value`] for a tagged view, or [`IndicatorSeries::as_slice`]
/// for the raw zero-filled values.
///
/// Serializes as a flat array of the raw values.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorSeries<T: TaFloat> {
    values: Series<T>,
    warmup: usize,
}

impl<T: TaFloat> Default for IndicatorSeries<T> {
    fn default() -> Self {
        Self::new(Series::new(), 0)
    }
}

impl<T: TaFloat> IndicatorSeries<T> {
    /// Wrap computed values whose first `warmup` positions are sentinels.
    ///
    /// `warmup` is capped at the series length.
    #[must_use]
    pub fn new(values: Series<T>, warmup: usize) -> Self {
        let warmup = warmup.min(values.len());
        Self { values, warmup }
    }

    /// A series of `len` sentinels, used when history is shorter than the window.
    #[must_use]
    pub fn sentinel(len: usize) -> Self {
        Self::new(Series::filled(T::ZERO, len), len)
    }

    /// Returns the number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of leading sentinel positions.
    #[must_use]
    pub fn warmup(&self) -> usize {
        self.warmup
    }

    /// Whether position `index` holds a computed value.
    #[must_use]
    pub fn is_defined(&self, index: usize) -> bool {
        index >= self.warmup && index < self.len()
    }

    /// Computed value at `index`, `None` for warm-up or out-of-range positions.
    #[must_use]
    pub fn value(&self, index: usize) -> Option<T> {
        if self.is_defined(index) {
            Some(self.values[index])
        } else {
            None
        }
    }

    /// Raw value at `index`, sentinel included.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    /// Last computed value, if any position is past warm-up.
    #[must_use]
    pub fn last_value(&self) -> Option<T> {
        self.len().checked_sub(1).and_then(|i| self.value(i))
    }

    /// Raw values, sentinel included.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.values.as_slice()
    }

    /// Iterate over raw values.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// Iterate over `(index, value)` pairs past warm-up.
    pub fn defined(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.values
            .iter()
            .copied()
            .enumerate()
            .skip(self.warmup)
    }

    /// Re-index by `indices`, keeping the warm-up count consistent.
    ///
    /// `indices` must be ascending (as produced by a date-window filter);
    /// warm-up positions then form a prefix of the result.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        let values: Series<T> = indices.iter().map(|&i| self.values[i]).collect();
        let warmup = indices.iter().take_while(|&&i| i < self.warmup).count();
        Self::new(values, warmup)
    }

    /// Consume and return the raw values.
    #[must_use]
    pub fn into_series(self) -> Series<T> {
        self.values
    }
}

impl<T: TaFloat> Index<usize> for IndicatorSeries<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

#[cfg(feature = "serde")]
impl<T: TaFloat> Serialize for IndicatorSeries<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values.iter())
    }
}

//! Common test utilities for stock-ta.
//!
//! This module provides float comparison, synthetic close generators and
//! builders for dated history rows.

#![allow(dead_code)]

use chrono::{Datelike, Days, NaiveDate, Weekday};
use ta_core::HistoricalRow;

/// Tiered float comparison with tolerance levels.
///
/// - For values near zero (|expected| < 1e-10): use absolute tolerance
/// - For other values: use relative tolerance
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if actual.is_nan() || expected.is_nan() {
        panic!("{}: NaN in comparison ({} vs {})", context, actual, expected);
    }

    let abs_expected = expected.abs();

    // For values very close to zero, use absolute comparison
    if abs_expected < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{}: Expected {} but got {} (diff: {})",
            context,
            expected,
            actual,
            diff
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{}: Expected {} but got {} (rel diff: {:.2e})",
        context,
        expected,
        actual,
        rel_diff
    );
}

/// Assert two series are equal with tolerance.
pub fn assert_series_eq(actual: &[f64], expected: &[f64], epsilon: f64, name: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: Length mismatch: {} vs {}",
        name,
        actual.len(),
        expected.len()
    );

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let context = format!("{}[{}]", name, i);
        assert_float_eq(a, e, epsilon, &context);
    }
}

// ============================================================================
// Synthetic Data Generators
// ============================================================================

/// Generate linear price series.
pub fn generate_linear(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

/// Generate sine wave price series.
pub fn generate_sine(center: f64, amplitude: f64, period: usize, len: usize) -> Vec<f64> {
    use std::f64::consts::PI;
    (0..len)
        .map(|i| center + amplitude * (2.0 * PI * i as f64 / period as f64).sin())
        .collect()
}

/// Generate random walk price series with deterministic seed.
pub fn generate_random_walk(start: f64, volatility: f64, len: usize, seed: u64) -> Vec<f64> {
    // Simple LCG for deterministic random numbers
    let mut rng_state = seed;
    let lcg_next = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (*state as f64 / u64::MAX as f64) * 2.0 - 1.0
    };

    let mut prices = Vec::with_capacity(len);
    let mut last = start;
    for i in 0..len {
        if i > 0 {
            last = (last + lcg_next(&mut rng_state) * volatility).max(0.01);
        }
        prices.push(last);
    }
    prices
}

// ============================================================================
// History Builders
// ============================================================================

/// Parse a `YYYY-MM-DD` literal.
pub fn day(label: &str) -> NaiveDate {
    NaiveDate::parse_from_str(label, "%Y-%m-%d").unwrap()
}

/// Successive weekdays starting at `start` (weekend starts roll forward).
pub fn trading_days(start: NaiveDate, len: usize) -> Vec<NaiveDate> {
    let mut days = Vec::with_capacity(len);
    let mut current = start;
    while days.len() < len {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            days.push(current);
        }
        current = current.checked_add_days(Days::new(1)).unwrap();
    }
    days
}

/// Build dated rows from closes; open is the previous close.
pub fn rows_from_closes(start: NaiveDate, closes: &[f64]) -> Vec<HistoricalRow> {
    trading_days(start, closes.len())
        .into_iter()
        .zip(closes)
        .enumerate()
        .map(|(i, (date, &close))| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let range = close * 0.01;
            HistoricalRow::new(
                date,
                open,
                close.max(open) + range,
                close.min(open) - range,
                close,
                1000.0 + i as f64 * 100.0,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_float_eq_normal() {
        assert_float_eq(1.0, 1.0, 1e-10, "test");
        assert_float_eq(100.0, 100.0000001, 1e-6, "test");
    }

    #[test]
    fn test_generate_linear() {
        let data = generate_linear(100.0, 1.0, 5);
        assert_eq!(data, vec![100.0, 101.0, 102.0, 103.0, 104.0]);
    }

    #[test]
    fn test_generate_random_walk_deterministic() {
        let data1 = generate_random_walk(100.0, 1.0, 10, 12345);
        let data2 = generate_random_walk(100.0, 1.0, 10, 12345);
        assert_eq!(data1, data2);
    }

    #[test]
    fn test_trading_days_skip_weekends() {
        // 2024-01-05 is a Friday
        let days = trading_days(day("2024-01-05"), 3);
        assert_eq!(days, vec![day("2024-01-05"), day("2024-01-08"), day("2024-01-09")]);
    }
}

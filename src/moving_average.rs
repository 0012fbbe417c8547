// =============================================================================
// Moving Averages (SMA / EMA)
// =============================================================================
//
// SMA — unweighted mean over a trailing window of `period` closes.
//
// EMA — recursively weighted average favouring recent closes:
//   multiplier = 2 / (period + 1)
//   EMA_t      = (close_t - EMA_{t-1}) * multiplier + EMA_{t-1}
//
// The very first EMA value is seeded with the SMA of the first `period`
// closes and sits at index `period - 1`. MACD depends on this exact seeding,
// so the multiplier and seed are not configurable independently of `period`.
//
// Both functions return a series the same length as the input; the first
// `period - 1` positions are `None` (insufficient history).

use crate::error::Result;
use crate::series::{validate_window, windowed_sum, IndicatorSeries};

/// Compute the Simple Moving Average series for `prices` and `period`.
///
/// The output is index-aligned with `prices`: position `i >= period - 1`
/// holds the mean of `prices[i - period + 1 ..= i]`, earlier positions are
/// `None`.
///
/// # Errors
/// - `InvalidParameter` when `period == 0` or `period > prices.len()`
/// - `InsufficientData` when `prices` is empty
pub fn sma(prices: &[f64], period: usize) -> Result<IndicatorSeries> {
    validate_window(prices, period)?;

    let mut result: IndicatorSeries = vec![None; period - 1];
    result.reserve(prices.len() - (period - 1));
    for i in period - 1..prices.len() {
        result.push(Some(windowed_sum(prices, period, i) / period as f64));
    }
    Ok(result)
}

/// Compute the Exponential Moving Average series for `prices` and `period`.
///
/// Index `period - 1` holds the SMA seed; each later position applies the
/// smoothing recurrence. Earlier positions are `None`.
///
/// # Errors
/// - `InvalidParameter` when `period == 0` or `period > prices.len()`
/// - `InsufficientData` when `prices` is empty
pub fn ema(prices: &[f64], period: usize) -> Result<IndicatorSeries> {
    validate_window(prices, period)?;

    let multiplier = 2.0 / (period as f64 + 1.0);

    // Seed: SMA of the first `period` closes.
    let mut prev = windowed_sum(prices, period, period - 1) / period as f64;

    let mut result: IndicatorSeries = vec![None; period - 1];
    result.reserve(prices.len() - (period - 1));
    result.push(Some(prev));

    for &close in &prices[period..] {
        prev = (close - prev) * multiplier + prev;
        result.push(Some(prev));
    }
    Ok(result)
}

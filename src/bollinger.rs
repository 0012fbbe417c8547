// =============================================================================
// Bollinger Bands
// =============================================================================
//
// A middle band (SMA) plus upper/lower bands offset by `deviation` population
// standard deviations of the same window:
//
//   middle_i = SMA(period)_i
//   upper_i  = middle_i + deviation * σ_i
//   lower_i  = middle_i - deviation * σ_i
//
// σ_i is computed around the *already-computed* middle_i rather than a fresh
// window mean, so band and centre line cannot drift apart under
// floating-point rounding. All three series share the SMA's `period - 1`
// undefined prefix.

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::moving_average::sma;
use crate::series::{std_dev, IndicatorSeries};

/// Standard charting default: 20-period window.
pub const DEFAULT_PERIOD: usize = 20;
/// Standard charting default: bands at ±2σ.
pub const DEFAULT_DEVIATION: f64 = 2.0;

/// The three Bollinger series, each index-aligned with the input prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerResult {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
}

/// Compute Bollinger Bands for `prices`.
///
/// # Errors
/// - `InvalidParameter` when `period == 0`, `period > prices.len()`, or
///   `deviation` is negative or non-finite
/// - `InsufficientData` when `prices` is empty
pub fn bollinger(prices: &[f64], period: usize, deviation: f64) -> Result<BollingerResult> {
    if !deviation.is_finite() || deviation < 0.0 {
        return Err(IndicatorError::InvalidParameter(format!(
            "deviation must be finite and >= 0, got {deviation}"
        )));
    }

    let middle = sma(prices, period)?;

    let mut upper: IndicatorSeries = vec![None; period - 1];
    let mut lower: IndicatorSeries = vec![None; period - 1];
    for i in period - 1..prices.len() {
        let window = &prices[i + 1 - period..=i];
        // `middle[i]` is defined for every i >= period - 1.
        if let Some(centre) = middle[i] {
            let sigma = std_dev(window, centre);
            upper.push(Some(centre + deviation * sigma));
            lower.push(Some(centre - deviation * sigma));
        }
    }

    Ok(BollingerResult {
        upper,
        middle,
        lower,
    })
}

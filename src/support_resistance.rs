// =============================================================================
// Support / Resistance Envelope
// =============================================================================
//
// Rolling min/max of the `period` closes strictly *before* each position:
//
//   support_i    = min(prices[i - period .. i])
//   resistance_i = max(prices[i - period .. i])
//
// Unlike the SMA/Bollinger windows this one excludes the current close — the
// envelope is a forecast boundary for the current bar, not a descriptive
// statistic of it. The first `period` positions are `None`.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::series::{validate_window, IndicatorSeries};

/// Standard charting default: 14-bar look-back.
pub const DEFAULT_PERIOD: usize = 14;

/// The support and resistance series, index-aligned with the input prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportResistanceResult {
    pub support: IndicatorSeries,
    pub resistance: IndicatorSeries,
}

/// Compute the support/resistance envelope for `prices` and `period`.
///
/// # Errors
/// - `InvalidParameter` when `period == 0` or `period > prices.len()`
/// - `InsufficientData` when `prices` is empty
pub fn support_resistance(prices: &[f64], period: usize) -> Result<SupportResistanceResult> {
    validate_window(prices, period)?;

    let mut support: IndicatorSeries = vec![None; period];
    let mut resistance: IndicatorSeries = vec![None; period];

    for i in period..prices.len() {
        let window = &prices[i - period..i];
        let min = window.iter().copied().fold(f64::INFINITY, f64::min);
        let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        support.push(Some(min));
        resistance.push(Some(max));
    }

    Ok(SupportResistanceResult {
        support,
        resistance,
    })
}

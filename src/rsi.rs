// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes on a bounded
// [0, 100] scale.
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Seed average gain / average loss with the SMA of the first `period`
//          gains / losses.
// Step 3 — Apply Wilder's exponential smoothing:
//            avg_gain = (prev_avg_gain * (period - 1) + current_gain) / period
//            avg_loss = (prev_avg_loss * (period - 1) + current_loss) / period
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// Differencing consumes one close and seeding consumes `period` deltas, so
// the first defined output sits at index `period` of the price series.
//
// Zero-division policy: when avg_loss is zero the ratio is special-cased
// (all gains => 100, no movement at all => 50) instead of substituting a
// small epsilon. The two policies diverge on flat stretches — the epsilon
// form reports a misleading 0 for a perfectly flat series.
//
// Thresholds:  RSI > 70 => OVERBOUGHT,  RSI < 30 => OVERSOLD.

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::series::IndicatorSeries;

/// Standard charting default: 14-period RSI.
pub const DEFAULT_PERIOD: usize = 14;

/// Compute the full RSI series for `prices` and `period`.
///
/// The output is index-aligned with `prices`; the first `period` positions
/// are `None` and every later position holds a value in `[0, 100]`.
///
/// # Errors
/// - `InvalidParameter` when `period == 0`, or `prices.len() <= period`
///   (fewer than `period` deltas — no seed window)
/// - `InsufficientData` when `prices` is empty
pub fn rsi(prices: &[f64], period: usize) -> Result<IndicatorSeries> {
    if prices.is_empty() {
        return Err(IndicatorError::InsufficientData {
            required: period + 1,
            actual: 0,
        });
    }
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "period must be > 0".into(),
        ));
    }
    if prices.len() <= period {
        return Err(IndicatorError::InvalidParameter(format!(
            "RSI({period}) needs at least {} prices, got {}",
            period + 1,
            prices.len()
        )));
    }

    // --- Price deltas, split into gains and losses ---------------------------
    let deltas: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let gains: Vec<f64> = deltas.iter().map(|&d| d.max(0.0)).collect();
    let losses: Vec<f64> = deltas.iter().map(|&d| (-d).max(0.0)).collect();

    // --- Seed with the SMA of the first `period` deltas ----------------------
    let period_f = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / period_f;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period_f;

    let mut result: IndicatorSeries = vec![None; period];
    result.reserve(prices.len() - period);
    result.push(Some(rsi_from_averages(avg_gain, avg_loss)));

    // --- Wilder's smoothing for subsequent values -----------------------------
    for i in period..deltas.len() {
        avg_gain = (avg_gain * (period_f - 1.0) + gains[i]) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + losses[i]) / period_f;
        result.push(Some(rsi_from_averages(avg_gain, avg_loss)));
    }

    Ok(result)
}

/// Classification of an RSI value against the 70/30 thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    /// Classify a single RSI value.
    pub fn classify(value: f64) -> Self {
        if value >= 70.0 {
            Self::Overbought
        } else if value <= 30.0 {
            Self::Oversold
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for RsiZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overbought => write!(f, "OVERBOUGHT"),
            Self::Oversold => write!(f, "OVERSOLD"),
            Self::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Convert average gain / average loss into an RSI value in [0, 100].
///
/// - If both averages are zero, RSI is 50.0 (no movement — neutral).
/// - If average loss is zero (only gains), RSI is 100.0.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0
    } else if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

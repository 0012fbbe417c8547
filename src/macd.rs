// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// Three index-aligned series:
//
//   macd_i      = EMA(fast)_i - EMA(slow)_i
//   signal_i    = EMA(signal_period) of the *defined* MACD values
//   histogram_i = macd_i - signal_i
//
// The MACD line is undefined wherever the slow EMA is (prefix `slow - 1`,
// since `fast < slow`). The signal line is the EMA of the compacted MACD
// values — undefined entries stripped, the EMA computed over what remains,
// then the result padded back to the original length. Its undefined prefix is
// therefore `(slow - 1) + (signal_period - 1)`. Re-seeding from raw indices
// instead would pull the seed window across the warm-up boundary and skew
// every signal value after it.

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::moving_average::ema;
use crate::series::IndicatorSeries;

/// Standard charting defaults: 12/26/9.
pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

/// The MACD line, signal line, and histogram, each index-aligned with the
/// input prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdResult {
    pub macd: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

/// Compute MACD for `prices` with the given fast/slow/signal periods.
///
/// # Errors
/// - `InvalidParameter` when any period is zero, `fast >= slow`, or the
///   history is too short to seed the slow EMA and the signal EMA
///   (`prices.len() < (slow - 1) + signal_period`)
/// - `InsufficientData` when `prices` is empty
pub fn macd(
    prices: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Result<MacdResult> {
    if prices.is_empty() {
        return Err(IndicatorError::InsufficientData {
            required: slow.max(1),
            actual: 0,
        });
    }
    if fast == 0 || slow == 0 || signal_period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "all MACD periods must be > 0".into(),
        ));
    }
    if fast >= slow {
        return Err(IndicatorError::InvalidParameter(format!(
            "fast period {fast} must be strictly less than slow period {slow}"
        )));
    }
    // The slow EMA defines `len - slow + 1` MACD values; the signal EMA needs
    // `signal_period` of them for its seed.
    if prices.len() < (slow - 1) + signal_period {
        return Err(IndicatorError::InvalidParameter(format!(
            "MACD({fast},{slow},{signal_period}) needs at least {} prices, got {}",
            (slow - 1) + signal_period,
            prices.len()
        )));
    }

    // --- MACD line: fast EMA minus slow EMA ----------------------------------
    let fast_ema = ema(prices, fast)?;
    let slow_ema = ema(prices, slow)?;
    let macd_line: IndicatorSeries = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();

    // --- Signal line: compact, EMA, re-pad -----------------------------------
    let defined: Vec<f64> = macd_line.iter().flatten().copied().collect();
    let undefined_prefix = macd_line.len() - defined.len();

    let mut signal: IndicatorSeries = vec![None; undefined_prefix];
    signal.extend(ema(&defined, signal_period)?);
    debug_assert_eq!(signal.len(), prices.len());

    // --- Histogram -----------------------------------------------------------
    let histogram: IndicatorSeries = macd_line
        .iter()
        .zip(&signal)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        })
        .collect();

    Ok(MacdResult {
        macd: macd_line,
        signal,
        histogram,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<f64> {
        (1..=n).map(|x| x as f64).collect()
    }

    // ---- macd --------------------------------------------------------------

    #[test]
    fn macd_alignment_and_prefixes() {
        let prices = ramp(60);
        let result = macd(&prices, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL).unwrap();

        assert_eq!(result.macd.len(), prices.len());
        assert_eq!(result.signal.len(), prices.len());
        assert_eq!(result.histogram.len(), prices.len());

        // MACD line defined from slow - 1 = 25.
        assert!(result.macd[..25].iter().all(Option::is_none));
        assert!(result.macd[25..].iter().all(Option::is_some));

        // Signal defined from (slow - 1) + (signal - 1) = 33.
        assert!(result.signal[..33].iter().all(Option::is_none));
        assert!(result.signal[33..].iter().all(Option::is_some));

        // Histogram defined exactly where both operands are.
        assert!(result.histogram[..33].iter().all(Option::is_none));
        assert!(result.histogram[33..].iter().all(Option::is_some));
    }

    #[test]
    fn macd_constant_series_is_zero() {
        // Fast EMA == slow EMA == v, so line, signal, and histogram all
        // collapse to exactly zero.
        let prices = vec![50.0; 60];
        let result = macd(&prices, 12, 26, 9).unwrap();
        for v in result.macd.iter().flatten() {
            assert!(v.abs() < 1e-10, "macd line {v} != 0");
        }
        for v in result.signal.iter().flatten() {
            assert!(v.abs() < 1e-10, "signal {v} != 0");
        }
        for v in result.histogram.iter().flatten() {
            assert!(v.abs() < 1e-10, "histogram {v} != 0");
        }
    }

    #[test]
    fn macd_signal_seed_uses_defined_values_only() {
        // First defined signal value must equal the simple mean of the first
        // `signal_period` defined MACD values — proof the seed window was
        // drawn from the compacted series, not raw indices.
        let prices: Vec<f64> = (0..40).map(|i| (i as f64 * 0.7).sin() * 10.0 + 100.0).collect();
        let result = macd(&prices, 3, 6, 4).unwrap();

        let defined: Vec<f64> = result.macd.iter().flatten().copied().collect();
        let seed = defined[..4].iter().sum::<f64>() / 4.0;

        // Prefix = (6 - 1) + (4 - 1) = 8.
        assert!(result.signal[..8].iter().all(Option::is_none));
        assert!((result.signal[8].unwrap() - seed).abs() < 1e-10);
    }

    #[test]
    fn macd_histogram_is_line_minus_signal() {
        let prices = ramp(60);
        let result = macd(&prices, 12, 26, 9).unwrap();
        for i in 0..prices.len() {
            match (result.macd[i], result.signal[i], result.histogram[i]) {
                (Some(m), Some(s), Some(h)) => assert!((h - (m - s)).abs() < 1e-10),
                (_, _, None) => {}
                other => panic!("index {i}: inconsistent definedness {other:?}"),
            }
        }
    }

    #[test]
    fn macd_fast_not_less_than_slow_rejected() {
        let prices = ramp(60);
        assert!(matches!(
            macd(&prices, 26, 26, 9),
            Err(IndicatorError::InvalidParameter(_))
        ));
        assert!(matches!(
            macd(&prices, 30, 26, 9),
            Err(IndicatorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn macd_invalid_periods_and_short_history() {
        let prices = ramp(60);
        assert!(matches!(
            macd(&prices, 0, 26, 9),
            Err(IndicatorError::InvalidParameter(_))
        ));
        assert!(matches!(
            macd(&prices, 12, 26, 0),
            Err(IndicatorError::InvalidParameter(_))
        ));
        // 33 prices needed for 12/26/9; 32 is one short.
        assert!(matches!(
            macd(&ramp(32), 12, 26, 9),
            Err(IndicatorError::InvalidParameter(_))
        ));
        assert!(macd(&ramp(33), 12, 26, 9).is_ok());
        assert!(matches!(
            macd(&[], 12, 26, 9),
            Err(IndicatorError::InsufficientData { .. })
        ));
    }
}

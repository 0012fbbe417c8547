// =============================================================================
// Shared Series Primitives
// =============================================================================
//
// Small numeric building blocks shared by the indicator modules: windowed sum,
// arithmetic mean, and population standard deviation (divide by `n`, not
// `n - 1` — the technical-analysis convention, matching how Bollinger Bands
// are defined in every charting package).
//
// Output series are `Vec<Option<f64>>`: a position is `None` while the
// indicator is still warming up, so "no value yet" is a type-level fact
// instead of a NaN sentinel that silently poisons arithmetic.

use crate::error::{IndicatorError, Result};

/// An indicator output series, index-aligned with the input price series.
///
/// Invariant: for every indicator in this crate,
/// `output.len() == prices.len()`. Positions without enough trailing history
/// are `None`; everything else is `Some(value)`.
pub type IndicatorSeries = Vec<Option<f64>>;

/// Sum of the `period` consecutive values ending at `end_index` inclusive.
///
/// Precondition: `end_index >= period - 1` and `end_index < series.len()`;
/// callers validate before looping.
pub fn windowed_sum(series: &[f64], period: usize, end_index: usize) -> f64 {
    debug_assert!(period >= 1 && end_index >= period - 1 && end_index < series.len());
    series[end_index + 1 - period..=end_index].iter().sum()
}

/// Arithmetic mean of a non-empty slice.
///
/// Returns `InsufficientData` when the slice is empty.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(IndicatorError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation of `values` around a caller-supplied mean.
///
/// The mean is passed in rather than recomputed so a band and its centre line
/// stay consistent under floating-point rounding (see `bollinger`).
pub fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Most recent defined value of a series, if any.
pub fn last_defined(series: &IndicatorSeries) -> Option<f64> {
    series.iter().rev().find_map(|v| *v)
}

/// Validate the `(prices, period)` pair shared by every windowed indicator.
///
/// - Empty input => `InsufficientData`
/// - `period == 0` or `period > prices.len()` => `InvalidParameter`
pub fn validate_window(prices: &[f64], period: usize) -> Result<()> {
    if prices.is_empty() {
        return Err(IndicatorError::InsufficientData {
            required: period.max(1),
            actual: 0,
        });
    }
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "period must be > 0".into(),
        ));
    }
    if period > prices.len() {
        return Err(IndicatorError::InvalidParameter(format!(
            "period {} exceeds series length {}",
            period,
            prices.len()
        )));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    // ---- windowed_sum ------------------------------------------------------

    #[test]
    fn windowed_sum_basic() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        // Window [2, 3, 4] ending at index 3.
        assert!((windowed_sum(&series, 3, 3) - 9.0).abs() < 1e-10);
        // Full-length window.
        assert!((windowed_sum(&series, 5, 4) - 15.0).abs() < 1e-10);
        // Single-element window.
        assert!((windowed_sum(&series, 1, 0) - 1.0).abs() < 1e-10);
    }

    // ---- mean --------------------------------------------------------------

    #[test]
    fn mean_basic() {
        assert!((mean(&[2.0, 4.0, 6.0]).unwrap() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn mean_empty_is_error() {
        assert_eq!(
            mean(&[]),
            Err(IndicatorError::InsufficientData {
                required: 1,
                actual: 0
            })
        );
    }

    // ---- std_dev -----------------------------------------------------------

    #[test]
    fn std_dev_population_convention() {
        // Population σ of [2, 4, 4, 4, 5, 5, 7, 9] around mean 5 is exactly 2.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&values, 5.0) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn std_dev_constant_is_zero() {
        assert!(std_dev(&[3.0; 10], 3.0).abs() < 1e-10);
    }

    // ---- last_defined ------------------------------------------------------

    #[test]
    fn last_defined_skips_trailing_none() {
        let series: IndicatorSeries = vec![None, Some(1.0), Some(2.0), None];
        assert_eq!(last_defined(&series), Some(2.0));
        assert_eq!(last_defined(&vec![None, None]), None);
    }

    // ---- validate_window ---------------------------------------------------

    #[test]
    fn validate_window_rejects_bad_inputs() {
        let prices = [1.0, 2.0, 3.0];
        assert!(validate_window(&prices, 3).is_ok());
        assert!(matches!(
            validate_window(&prices, 0),
            Err(IndicatorError::InvalidParameter(_))
        ));
        assert!(matches!(
            validate_window(&prices, 4),
            Err(IndicatorError::InvalidParameter(_))
        ));
        assert!(matches!(
            validate_window(&[], 3),
            Err(IndicatorError::InsufficientData { .. })
        ));
    }
}

// =============================================================================
// Indicator Engine Errors
// =============================================================================
//
// Two failure kinds cover every indicator:
//
// - `InvalidParameter` — a structurally bad argument (zero period, negative
//   deviation, fast >= slow, or a window larger than the supplied history).
//   Raised before any computation starts; results are never partially built.
// - `InsufficientData` — the price series itself is empty, so not even one
//   output point could ever be defined.
//
// "Not enough history *yet*" is not an error: indicators report it per-index
// with `None` entries in the output series.

use thiserror::Error;

/// Errors produced by the indicator engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// A period, deviation, or period combination is structurally invalid.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input series is too short to produce any output at all.
    #[error("insufficient data: need at least {required} prices, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, IndicatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let e = IndicatorError::InvalidParameter("period must be > 0".into());
        assert!(e.to_string().contains("period must be > 0"));

        let e = IndicatorError::InsufficientData {
            required: 1,
            actual: 0,
        };
        assert!(e.to_string().contains("at least 1"));
    }
}

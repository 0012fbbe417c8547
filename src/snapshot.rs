// =============================================================================
// Market Snapshot — latest-value aggregation over the full indicator set
// =============================================================================
//
// Dashboard-style consumers compute every indicator with its default
// parameters over the same price history and read off the most recent values.
// `snapshot` does that in one call and returns a single serialisable struct.
//
// A history too short for a given indicator leaves its fields `None` — the
// "toggled on but not enough candles yet" state — rather than failing the
// whole snapshot. Only an empty series is an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bollinger::{bollinger, DEFAULT_DEVIATION, DEFAULT_PERIOD as BOLLINGER_PERIOD};
use crate::error::{IndicatorError, Result};
use crate::macd::{macd, DEFAULT_FAST, DEFAULT_SIGNAL, DEFAULT_SLOW};
use crate::moving_average::{ema, sma};
use crate::rsi::{rsi, RsiZone, DEFAULT_PERIOD as RSI_PERIOD};
use crate::series::last_defined;
use crate::support_resistance::{support_resistance, DEFAULT_PERIOD as SR_PERIOD};

/// Window used for the snapshot's SMA and EMA headline values.
pub const MA_PERIOD: usize = 20;

/// Direction of the most recent MACD crossover state.
///
/// Derived from the sign of the latest histogram value: the histogram is
/// positive while the MACD line is above its signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MacdCross {
    Bullish,
    Bearish,
    Flat,
}

impl MacdCross {
    fn from_histogram(h: f64) -> Self {
        if h > 0.0 {
            Self::Bullish
        } else if h < 0.0 {
            Self::Bearish
        } else {
            Self::Flat
        }
    }
}

impl std::fmt::Display for MacdCross {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "Bullish"),
            Self::Bearish => write!(f, "Bearish"),
            Self::Flat => write!(f, "Flat"),
        }
    }
}

/// Latest defined value of every indicator, computed with the default
/// parameters. Fields are `None` when the history is too short for that
/// indicator's warm-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub sma: Option<f64>,
    pub ema: Option<f64>,
    pub rsi: Option<f64>,
    pub rsi_zone: Option<RsiZone>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub macd_cross: Option<MacdCross>,
    pub bollinger_upper: Option<f64>,
    pub bollinger_middle: Option<f64>,
    pub bollinger_lower: Option<f64>,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
}

/// Compute a [`MarketSnapshot`] over `prices`.
///
/// # Errors
/// - `InsufficientData` when `prices` is empty
pub fn snapshot(prices: &[f64]) -> Result<MarketSnapshot> {
    if prices.is_empty() {
        return Err(IndicatorError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    // Short histories come back as `None` fields, not errors.
    let sma_value = sma(prices, MA_PERIOD).ok().and_then(|s| last_defined(&s));
    let ema_value = ema(prices, MA_PERIOD).ok().and_then(|s| last_defined(&s));
    let rsi_value = rsi(prices, RSI_PERIOD).ok().and_then(|s| last_defined(&s));

    let macd_result = macd(prices, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL).ok();
    let (macd_value, signal_value, histogram_value) = match &macd_result {
        Some(r) => (
            last_defined(&r.macd),
            last_defined(&r.signal),
            last_defined(&r.histogram),
        ),
        None => (None, None, None),
    };

    let bands = bollinger(prices, BOLLINGER_PERIOD, DEFAULT_DEVIATION).ok();
    let (upper, middle, lower) = match &bands {
        Some(b) => (
            last_defined(&b.upper),
            last_defined(&b.middle),
            last_defined(&b.lower),
        ),
        None => (None, None, None),
    };

    let envelope = support_resistance(prices, SR_PERIOD).ok();
    let (support, resistance) = match &envelope {
        Some(e) => (last_defined(&e.support), last_defined(&e.resistance)),
        None => (None, None),
    };

    let result = MarketSnapshot {
        sma: sma_value,
        ema: ema_value,
        rsi: rsi_value,
        rsi_zone: rsi_value.map(RsiZone::classify),
        macd: macd_value,
        macd_signal: signal_value,
        macd_histogram: histogram_value,
        macd_cross: histogram_value.map(MacdCross::from_histogram),
        bollinger_upper: upper,
        bollinger_middle: middle,
        bollinger_lower: lower,
        support,
        resistance,
    };

    debug!(
        prices = prices.len(),
        sma = result.sma.map(|v| format!("{v:.4}")),
        rsi = result.rsi.map(|v| format!("{v:.2}")),
        macd_hist = result.macd_histogram.map(|v| format!("{v:.4}")),
        zone = result.rsi_zone.map(|z| z.to_string()),
        cross = result.macd_cross.map(|c| c.to_string()),
        "Market snapshot computed"
    );

    Ok(result)
}

// =============================================================================
// aurora-ta — Technical-Indicator Engine
// =============================================================================
//
// Pure, side-effect-free implementations of the core technical indicators
// used by charting and signal layers: SMA, EMA, Bollinger Bands, RSI (Wilder),
// MACD, and a support/resistance envelope.
//
// Every indicator takes a chronologically ordered slice of prices and returns
// series of the *same length*, index-aligned with the input, so callers can
// zip prices and indicator values without separate alignment logic. Positions
// without enough trailing history are `None`; structurally invalid arguments
// fail with a typed error before any computation runs.
//
// The engine holds no state: each call recomputes from the full supplied
// history, inputs are immutable, and outputs are freshly allocated, so calls
// may run concurrently without synchronisation.

// ── Module declarations ──────────────────────────────────────────────────────
pub mod bollinger;
pub mod error;
pub mod macd;
pub mod moving_average;
pub mod rsi;
pub mod series;
pub mod snapshot;
pub mod support_resistance;

pub use bollinger::{bollinger, BollingerResult};
pub use error::{IndicatorError, Result};
pub use macd::{macd, MacdResult};
pub use moving_average::{ema, sma};
pub use rsi::{rsi, RsiZone};
pub use series::{last_defined, IndicatorSeries};
pub use snapshot::{snapshot, MacdCross, MarketSnapshot};
pub use support_resistance::{support_resistance, SupportResistanceResult};

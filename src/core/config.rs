//! Indicator engine configuration.

use serde::{Deserialize, Serialize};

use super::error::IndicatorError;
use super::Result;

/// Window sizes and options used by [`crate::analysis::IndicatorEngine`].
///
/// Every field falls back to its default when absent, so a partial
/// document such as `{"rsi_window": 14}` loads cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// RSI lookback.
    pub rsi_window: usize,
    /// Bollinger Bands lookback.
    pub bollinger_window: usize,
    /// Bollinger Bands standard deviation multiplier.
    pub bollinger_k: f64,
    /// ATR lookback.
    pub atr_window: usize,
    /// Window reported under `sma_20`.
    pub sma_short_window: usize,
    /// Window reported under `sma_50`.
    pub sma_long_window: usize,
    /// Fan indicator computations out over the rayon pool.
    pub parallel: bool,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_window: 20,
            bollinger_window: 20,
            bollinger_k: 2.0,
            atr_window: 20,
            sma_short_window: 20,
            sma_long_window: 50,
            parallel: true,
        }
    }
}

impl IndicatorConfig {
    /// Same windows, computed on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, window) in [
            ("rsi_window", self.rsi_window),
            ("bollinger_window", self.bollinger_window),
            ("atr_window", self.atr_window),
            ("sma_short_window", self.sma_short_window),
            ("sma_long_window", self.sma_long_window),
        ] {
            if window == 0 {
                return Err(IndicatorError::invalid_parameter(format!(
                    "{name} must be > 0"
                )));
            }
        }
        check_band_window(self.bollinger_window)?;
        check_band_width(self.bollinger_k)
    }
}

/// A band needs at least two bars for a sample standard deviation, or
/// upper and lower would be undefined where the middle band is not.
pub(crate) fn check_band_window(window: usize) -> Result<()> {
    if window < 2 {
        return Err(IndicatorError::invalid_parameter(format!(
            "Bollinger Bands window must be >= 2, got {window}"
        )));
    }
    Ok(())
}

/// Band multipliers must be finite and non-negative so that
/// `lower <= middle <= upper` holds.
pub(crate) fn check_band_width(k: f64) -> Result<()> {
    if !k.is_finite() || k < 0.0 {
        return Err(IndicatorError::invalid_parameter(format!(
            "Bollinger Bands k must be finite and >= 0, got {k}"
        )));
    }
    Ok(())
}

//! Volume indicators: dollar volume.

use crate::core::error::IndicatorError;
use crate::core::Result;

/// Dollar volume (`close * volume`) per bar.
pub fn dollar_volume(close: &[f64], volume: &[f64]) -> Result<Vec<f64>> {
    if close.len() != volume.len() {
        return Err(IndicatorError::length_mismatch("volume", close.len(), volume.len()));
    }

    Ok(close.iter().zip(volume).map(|(c, v)| c * v).collect())
}

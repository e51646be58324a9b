//! Trend indicators: SMA.

use super::rolling::rolling_mean;
use crate::core::error::IndicatorError;
use crate::core::Result;

/// Simple Moving Average.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period
///
/// # Returns
/// Vector of SMA values (NaN for warmup period)
pub fn sma(data: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(IndicatorError::invalid_parameter("SMA period must be > 0"));
    }
    rolling_mean(data, period)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma(&data, 3).unwrap();
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert!((result[2] - 2.0).abs() < 1e-10);
        assert!((result[3] - 3.0).abs() < 1e-10);
        assert!((result[4] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_sma_constant_series() {
        let data = vec![42.0; 60];
        let result = sma(&data, 20).unwrap();
        assert!(result[..19].iter().all(|v| v.is_nan()));
        assert!(result[19..].iter().all(|v| (v - 42.0).abs() < 1e-10));
    }

    #[test]
    fn test_sma_invalid_period() {
        let data = vec![1.0, 2.0, 3.0];
        let result = sma(&data, 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_sma_period_larger_than_data() {
        let data = vec![1.0, 2.0, 3.0];
        let result = sma(&data, 10).unwrap();
        assert!(result.iter().all(|v| v.is_nan()));
    }
}

//! Volatility indicators: Garman-Klass, ATR, Bollinger Bands.

use std::f64::consts::LN_2;

use super::rolling::{rolling_mean, rolling_std};
use crate::core::config::{check_band_window, check_band_width};
use crate::core::error::IndicatorError;
use crate::core::Result;

fn check_lengths(close: &[f64], columns: &[(&'static str, &[f64])]) -> Result<()> {
    for &(field, column) in columns {
        if column.len() != close.len() {
            return Err(IndicatorError::length_mismatch(field, close.len(), column.len()));
        }
    }
    Ok(())
}

/// Garman-Klass volatility estimate, one value per bar.
///
/// `sqrt(0.5 * ln(H/L)^2 - (2 ln 2 - 1) * ln(C/O)^2)`
///
/// # Returns
/// Vector of estimates. NaN where the radicand is negative (a close/open
/// move wider than the high/low range) or a log ratio is undefined.
pub fn garman_klass(open: &[f64], high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<f64>> {
    check_lengths(close, &[("open", open), ("high", high), ("low", low)])?;

    let co_weight = 2.0 * LN_2 - 1.0;
    let result = (0..close.len())
        .map(|i| {
            let log_hl = (high[i] / low[i]).ln();
            let log_co = (close[i] / open[i]).ln();
            (0.5 * log_hl.powi(2) - co_weight * log_co.powi(2)).sqrt()
        })
        .collect();

    Ok(result)
}

/// True Range calculation (single bar).
#[inline]
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// Average True Range (ATR), simple-average variant.
///
/// The first bar has no previous close, so its true range is `high - low`.
///
/// # Arguments
/// * `high` - High prices
/// * `low` - Low prices
/// * `close` - Close prices
/// * `period` - Lookback period (default: 20)
///
/// # Returns
/// Vector of ATR values (NaN for warmup period)
pub fn atr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<Vec<f64>> {
    check_lengths(close, &[("high", high), ("low", low)])?;
    if period == 0 {
        return Err(IndicatorError::invalid_parameter("ATR period must be > 0"));
    }

    let n = close.len();
    let mut tr = vec![f64::NAN; n];
    if n > 0 {
        tr[0] = high[0] - low[0];
    }
    for i in 1..n {
        tr[i] = true_range(high[i], low[i], close[i - 1]);
    }

    rolling_mean(&tr, period)
}

/// Bollinger Bands result.
#[derive(Debug, Clone)]
pub struct BollingerBandsResult {
    /// Upper band (SMA + k * std).
    pub upper: Vec<f64>,
    /// Middle band (SMA).
    pub middle: Vec<f64>,
    /// Lower band (SMA - k * std).
    pub lower: Vec<f64>,
}

/// Bollinger Bands over a sample standard deviation.
///
/// # Arguments
/// * `data` - Price data (typically close prices)
/// * `period` - Lookback period, at least 2 (default: 20)
/// * `k` - Standard deviation multiplier (default: 2.0)
///
/// # Returns
/// BollingerBandsResult with upper, middle and lower bands (NaN for warmup)
pub fn bollinger_bands(data: &[f64], period: usize, k: f64) -> Result<BollingerBandsResult> {
    check_band_window(period)?;
    check_band_width(k)?;

    let middle = rolling_mean(data, period)?;
    let std = rolling_std(data, period)?;

    let upper = middle.iter().zip(&std).map(|(m, s)| m + k * s).collect();
    let lower = middle.iter().zip(&std).map(|(m, s)| m - k * s).collect();

    Ok(BollingerBandsResult {
        upper,
        middle,
        lower,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garman_klass() {
        let result = garman_klass(&[100.0], &[110.0], &[100.0], &[100.0]).unwrap();
        let expected = 1.1_f64.ln() / 2.0_f64.sqrt();
        assert!((result[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_garman_klass_negative_radicand() {
        // zero range but a move from open to close
        let result = garman_klass(&[100.0], &[105.0], &[105.0], &[105.0]).unwrap();
        assert!(result[0].is_nan());
    }

    #[test]
    fn test_garman_klass_length_mismatch() {
        let err = garman_klass(&[1.0], &[1.0, 2.0], &[1.0, 2.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, IndicatorError::length_mismatch("open", 2, 1));
    }

    #[test]
    fn test_atr() {
        let high = vec![50.0, 51.0, 52.0, 51.5, 50.5, 51.0, 52.0, 53.0, 52.5, 51.5];
        let low = vec![48.0, 49.0, 50.0, 49.5, 48.5, 49.0, 50.0, 51.0, 50.5, 49.5];
        let close = vec![49.0, 50.0, 51.0, 50.0, 49.0, 50.0, 51.0, 52.0, 51.0, 50.0];

        let result = atr(&high, &low, &close, 5).unwrap();

        assert!(result[3].is_nan());
        // true ranges 2.0, 2.0, 2.0, 2.0, 2.0
        assert!((result[4] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_atr_first_bar_uses_range_only() {
        let result = atr(&[12.0], &[9.0], &[10.0], 1).unwrap();
        assert!((result[0] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_atr_gap_counts() {
        // gap up: |15 - 10| dominates 15 - 14
        let result = atr(&[11.0, 15.0], &[9.0, 14.0], &[10.0, 14.5], 2).unwrap();
        assert!((result[1] - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_bollinger_bands() {
        let data: Vec<f64> = (1..=30)
            .map(|x| x as f64 + (x as f64 * 0.1).sin())
            .collect();

        let result = bollinger_bands(&data, 20, 2.0).unwrap();

        assert!(result.middle[18].is_nan());
        assert!(!result.middle[19].is_nan());

        assert!(result.upper[19] > result.middle[19]);
        assert!(result.middle[19] > result.lower[19]);
    }

    #[test]
    fn test_bollinger_band_width() {
        let data = vec![1.0, 2.0, 3.0];
        let result = bollinger_bands(&data, 3, 2.0).unwrap();

        // sample std of [1, 2, 3] is 1
        assert!((result.middle[2] - 2.0).abs() < 1e-10);
        assert!((result.upper[2] - 4.0).abs() < 1e-10);
        assert!(result.lower[2].abs() < 1e-10);
    }

    #[test]
    fn test_bollinger_invalid_params() {
        assert!(bollinger_bands(&[1.0], 0, 2.0).is_err());
        assert!(bollinger_bands(&[1.0, 2.0], 2, -2.0).is_err());
    }

    #[test]
    fn test_bollinger_single_bar_window_rejected() {
        let err = bollinger_bands(&[10.0, 11.0, 12.0], 1, 2.0).unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidParameter { .. }));
    }

    #[test]
    fn test_true_range() {
        assert!((true_range(52.0, 48.0, 50.0) - 4.0).abs() < 1e-10);
        assert!((true_range(55.0, 53.0, 50.0) - 5.0).abs() < 1e-10);
        assert!((true_range(48.0, 45.0, 50.0) - 5.0).abs() < 1e-10);
    }
}

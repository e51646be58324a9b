//! Momentum indicators: RSI, percent change.

use super::rolling::rolling_mean;
use crate::core::error::IndicatorError;
use crate::core::Result;

/// Relative Strength Index (RSI), simple-average variant.
///
/// Average gain and loss are plain rolling means of the positive and
/// negative close-to-close moves. The first bar has no move and counts as
/// zero in both, so the first RSI value lands at `period - 1`.
///
/// # Arguments
/// * `data` - Price data (typically close prices)
/// * `period` - Lookback period (default: 20)
///
/// # Returns
/// Vector of RSI values (0-100 scale, NaN for warmup period and for flat
/// windows with neither gains nor losses)
pub fn rsi(data: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(IndicatorError::invalid_parameter("RSI period must be > 0"));
    }

    let n = data.len();
    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];

    for i in 1..n {
        let change = data[i] - data[i - 1];
        if change > 0.0 {
            gains[i] = change;
        } else if change < 0.0 {
            losses[i] = -change;
        }
    }

    let avg_gain = rolling_mean(&gains, period)?;
    let avg_loss = rolling_mean(&losses, period)?;

    // loss == 0 gives rs = inf and RSI = 100; gain == loss == 0 gives NaN.
    let result = avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(gain, loss)| {
            let rs = gain / loss;
            100.0 - 100.0 / (1.0 + rs)
        })
        .collect();

    Ok(result)
}

/// Day-over-day percent change.
///
/// # Returns
/// Vector of percent changes (NaN at index 0; infinite after a zero close)
pub fn percent_change(data: &[f64]) -> Vec<f64> {
    let mut result = vec![f64::NAN; data.len()];
    for i in 1..data.len() {
        result[i] = (data[i] - data[i - 1]) / data[i - 1] * 100.0;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_rising_prices() {
        let data: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let result = rsi(&data, 5).unwrap();

        assert!(result[3].is_nan());
        for value in &result[4..] {
            assert!((value - 100.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_rsi_falling_prices() {
        let data: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        let result = rsi(&data, 5).unwrap();

        for value in &result[5..] {
            assert!(value.abs() < 1e-10);
        }
    }

    #[test]
    fn test_rsi_flat_prices_undefined() {
        let result = rsi(&[10.0; 10], 3).unwrap();
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_rsi_known_value() {
        // moves: +2, -1, +1 -> avg gain 1.0, avg loss 1/3, rs = 3
        let data = vec![10.0, 12.0, 11.0, 12.0];
        let result = rsi(&data, 3).unwrap();
        assert!((result[3] - 75.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_invalid_period() {
        assert!(rsi(&[1.0, 2.0], 0).is_err());
    }

    #[test]
    fn test_percent_change() {
        let result = percent_change(&[100.0, 110.0, 99.0]);
        assert!(result[0].is_nan());
        assert!((result[1] - 10.0).abs() < 1e-10);
        assert!((result[2] + 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_percent_change_after_zero_close() {
        let result = percent_change(&[0.0, 5.0]);
        assert!(result[1].is_infinite());
    }
}

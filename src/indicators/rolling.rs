//! Trailing-window reductions.
//!
//! Every windowed indicator in the crate goes through [`rolling`] or
//! [`rolling_mean`], which share one warmup rule: the first `window - 1`
//! positions are NaN, and so is any position whose window holds a NaN.
//! Both keep running means rather than raw sums, so large finite prices
//! never overflow.

use crate::core::error::IndicatorError;
use crate::core::Result;

/// Apply `reduce` to each trailing window of `data`.
///
/// # Arguments
/// * `data` - Input data slice
/// * `window` - Window length (at least 1)
/// * `reduce` - Reduction over one full window
///
/// # Returns
/// Vec of reduced values, NaN where the window is incomplete or holds NaN
pub fn rolling<F>(data: &[f64], window: usize, reduce: F) -> Result<Vec<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    if window == 0 {
        return Err(IndicatorError::invalid_parameter("window must be at least 1"));
    }

    let n = data.len();
    let mut result = vec![f64::NAN; n];

    if window > n {
        return Ok(result);
    }

    for i in (window - 1)..n {
        let slice = &data[i + 1 - window..=i];
        if slice.iter().any(|v| v.is_nan()) {
            continue;
        }
        result[i] = reduce(slice);
    }

    Ok(result)
}

/// Rolling arithmetic mean, sliding in O(n).
///
/// Any non-finite value in a window leaves that position NaN. A window of
/// exact zeros reports exactly 0 rather than a rounding residue.
pub fn rolling_mean(data: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(IndicatorError::invalid_parameter("window must be at least 1"));
    }

    let n = data.len();
    let mut result = vec![f64::NAN; n];

    if window > n {
        return Ok(result);
    }

    let w = window as f64;
    // mean of the finite values in the window, scaled by the full width
    let mut avg = 0.0;
    let mut gaps = 0usize;
    let mut nonzero = 0usize;

    for i in 0..n {
        let incoming = data[i];
        let outgoing = if i >= window { Some(data[i - window]) } else { None };

        match outgoing {
            Some(out) if out.is_finite() && incoming.is_finite() => avg += (incoming - out) / w,
            _ => {
                if incoming.is_finite() {
                    avg += incoming / w;
                }
                if let Some(out) = outgoing.filter(|v| v.is_finite()) {
                    avg -= out / w;
                }
            }
        }

        if incoming.is_finite() {
            nonzero += usize::from(incoming != 0.0);
        } else {
            gaps += 1;
        }
        if let Some(out) = outgoing {
            if out.is_finite() {
                nonzero -= usize::from(out != 0.0);
            } else {
                gaps -= 1;
            }
        }

        if i + 1 >= window && gaps == 0 {
            result[i] = if nonzero == 0 { 0.0 } else { avg };
        }
    }

    Ok(result)
}

/// Rolling sample standard deviation (divides by `window - 1`).
///
/// A window of 1 has no sample deviation, so every value is NaN.
pub fn rolling_std(data: &[f64], window: usize) -> Result<Vec<f64>> {
    rolling(data, window, sample_std)
}

fn mean(values: &[f64]) -> f64 {
    values
        .iter()
        .enumerate()
        .fold(0.0, |m, (k, x)| m + (x - m) / (k + 1) as f64)
}

fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

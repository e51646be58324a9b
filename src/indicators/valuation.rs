//! Valuation ratios: P/E.

/// Price-to-earnings ratio per bar.
///
/// No guard on `eps`: a zero EPS yields infinities (or NaN for a zero close),
/// which the engine boundary maps to 0.
pub fn pe_ratio(close: &[f64], eps: f64) -> Vec<f64> {
    close.iter().map(|c| c / eps).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pe_ratio() {
        let result = pe_ratio(&[50.0, 75.0], 5.0);
        assert!((result[0] - 10.0).abs() < 1e-10);
        assert!((result[1] - 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_pe_ratio_zero_eps() {
        let result = pe_ratio(&[50.0, 0.0], 0.0);
        assert!(result[0].is_infinite());
        assert!(result[1].is_nan());
    }

    #[test]
    fn test_pe_ratio_negative_eps() {
        let result = pe_ratio(&[50.0], -2.0);
        assert!((result[0] + 25.0).abs() < 1e-10);
    }
}

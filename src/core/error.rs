//! Error types for pricelens.

use thiserror::Error;

/// Result type alias for pricelens operations.
pub type Result<T> = std::result::Result<T, IndicatorError>;

/// Input contract violations.
///
/// Numeric degeneracies (zero denominators, negative radicands, short
/// history) are never reported here; they resolve to 0 in the output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    /// The series holds no bars.
    #[error("Price series is empty")]
    EmptySeries,

    /// A required price or volume column holds NaN or an infinity.
    #[error("Non-numeric value in column '{field}' at index {index}")]
    NonFinite { field: &'static str, index: usize },

    /// A column does not have as many entries as the series.
    #[error("Column '{field}' length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Dates are not strictly ascending.
    #[error("Dates not strictly ascending at index {index}")]
    UnorderedDates { index: usize },

    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// The data source has nothing for this symbol.
    #[error("Unknown symbol: {symbol}")]
    UnknownSymbol { symbol: String },
}

impl IndicatorError {
    /// Create a non-finite value error.
    pub fn non_finite(field: &'static str, index: usize) -> Self {
        Self::NonFinite { field, index }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(field: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            field,
            expected,
            actual,
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: impl Into<String>) -> Self {
        Self::UnknownSymbol {
            symbol: symbol.into(),
        }
    }
}

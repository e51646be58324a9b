//! Market data seam.
//!
//! The engine never fetches data itself. Callers hand it a [`PriceSource`]
//! that already knows how to reach a provider, or use [`InMemorySource`]
//! for fixtures and pre-loaded data.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::error::IndicatorError;
use super::types::PriceSeries;
use super::Result;

/// Supplier of daily history and fundamentals for a symbol.
pub trait PriceSource {
    /// Daily bars dated in `[start, end)`.
    fn history(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<PriceSeries>;

    /// Trailing earnings per share, if the provider reports one.
    fn earnings_per_share(&self, symbol: &str) -> Result<Option<f64>>;
}

#[derive(Debug, Clone)]
struct Listing {
    series: PriceSeries,
    eps: Option<f64>,
}

/// [`PriceSource`] backed by series held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    listings: HashMap<String, Listing>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the data for `symbol`.
    pub fn insert(&mut self, symbol: impl Into<String>, series: PriceSeries, eps: Option<f64>) {
        self.listings
            .insert(symbol.into(), Listing { series, eps });
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, symbol: impl Into<String>, series: PriceSeries, eps: Option<f64>) -> Self {
        self.insert(symbol, series, eps);
        self
    }

    /// Known symbols, sorted.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.listings.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    fn listing(&self, symbol: &str) -> Result<&Listing> {
        self.listings
            .get(symbol)
            .ok_or_else(|| IndicatorError::unknown_symbol(symbol))
    }
}

impl PriceSource for InMemorySource {
    fn history(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<PriceSeries> {
        Ok(self.listing(symbol)?.series.between(start, end))
    }

    fn earnings_per_share(&self, symbol: &str) -> Result<Option<f64>> {
        Ok(self.listing(symbol)?.eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PriceBar;

    fn series(days: std::ops::RangeInclusive<u32>) -> PriceSeries {
        days.map(|d| PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 3, d).unwrap(),
            open: 10.0,
            high: 11.0,
            low: 9.0,
            close: 10.5,
            volume: 1_000.0,
        })
        .collect::<Vec<_>>()
        .try_into()
        .unwrap()
    }

    #[test]
    fn test_history_filters_range() {
        let source = InMemorySource::new().with("AAPL", series(1..=10), Some(6.4));
        let start = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();

        assert_eq!(source.history("AAPL", start, end).unwrap().len(), 3);
        assert_eq!(source.earnings_per_share("AAPL").unwrap(), Some(6.4));
    }

    #[test]
    fn test_unknown_symbol() {
        let source = InMemorySource::new().with("MSFT", series(1..=2), None);
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert_eq!(
            source.history("AAPL", day, day).unwrap_err(),
            IndicatorError::unknown_symbol("AAPL")
        );
        assert_eq!(source.symbols(), vec!["MSFT"]);
    }
}

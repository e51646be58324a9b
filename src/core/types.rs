//! Core data types for pricelens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::IndicatorError;
use super::Result;

/// Type alias for price values.
pub type Price = f64;

/// Type alias for traded volume.
pub type Volume = f64;

/// OHLCV data for a single trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Volume,
}

/// Daily OHLCV series, stored column-wise.
///
/// Dates are strictly ascending. Price relationships such as
/// `low <= close <= high` are trusted, not checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    dates: Vec<NaiveDate>,
    open: Vec<Price>,
    high: Vec<Price>,
    low: Vec<Price>,
    close: Vec<Price>,
    volume: Vec<Volume>,
}

impl PriceSeries {
    /// Build a series from individual bars.
    pub fn from_bars(bars: Vec<PriceBar>) -> Result<Self> {
        let n = bars.len();
        let mut series = Self {
            dates: Vec::with_capacity(n),
            open: Vec::with_capacity(n),
            high: Vec::with_capacity(n),
            low: Vec::with_capacity(n),
            close: Vec::with_capacity(n),
            volume: Vec::with_capacity(n),
        };
        for bar in bars {
            series.dates.push(bar.date);
            series.open.push(bar.open);
            series.high.push(bar.high);
            series.low.push(bar.low);
            series.close.push(bar.close);
            series.volume.push(bar.volume);
        }
        check_ascending(&series.dates)?;
        Ok(series)
    }

    /// Build a series from parallel columns.
    ///
    /// The date column sets the expected length; a shorter or longer price
    /// column is treated as a missing field.
    pub fn from_columns(
        dates: Vec<NaiveDate>,
        open: Vec<Price>,
        high: Vec<Price>,
        low: Vec<Price>,
        close: Vec<Price>,
        volume: Vec<Volume>,
    ) -> Result<Self> {
        let n = dates.len();
        for (field, len) in [
            ("open", open.len()),
            ("high", high.len()),
            ("low", low.len()),
            ("close", close.len()),
            ("volume", volume.len()),
        ] {
            if len != n {
                return Err(IndicatorError::length_mismatch(field, n, len));
            }
        }
        check_ascending(&dates)?;
        Ok(Self {
            dates,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    #[inline]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    #[inline]
    pub fn open(&self) -> &[Price] {
        &self.open
    }

    #[inline]
    pub fn high(&self) -> &[Price] {
        &self.high
    }

    #[inline]
    pub fn low(&self) -> &[Price] {
        &self.low
    }

    #[inline]
    pub fn close(&self) -> &[Price] {
        &self.close
    }

    #[inline]
    pub fn volume(&self) -> &[Volume] {
        &self.volume
    }

    /// Get a single bar at index.
    pub fn get_bar(&self, index: usize) -> Option<PriceBar> {
        if index >= self.len() {
            return None;
        }
        Some(PriceBar {
            date: self.dates[index],
            open: self.open[index],
            high: self.high[index],
            low: self.low[index],
            close: self.close[index],
            volume: self.volume[index],
        })
    }

    /// Iterate over the bars in date order.
    pub fn bars(&self) -> impl Iterator<Item = PriceBar> + '_ {
        (0..self.len()).filter_map(move |i| self.get_bar(i))
    }

    /// Bars dated in `[start, end)`.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Self {
        let from = self.dates.partition_point(|d| *d < start);
        let to = self.dates.partition_point(|d| *d < end).max(from);
        Self {
            dates: self.dates[from..to].to_vec(),
            open: self.open[from..to].to_vec(),
            high: self.high[from..to].to_vec(),
            low: self.low[from..to].to_vec(),
            close: self.close[from..to].to_vec(),
            volume: self.volume[from..to].to_vec(),
        }
    }

    /// Check the series is fit for indicator computation.
    ///
    /// Fails on an empty series or on any NaN/infinite price or volume,
    /// reporting the first offending column and position.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(IndicatorError::EmptySeries);
        }
        for (field, column) in [
            ("open", &self.open),
            ("high", &self.high),
            ("low", &self.low),
            ("close", &self.close),
            ("volume", &self.volume),
        ] {
            if let Some(index) = column.iter().position(|v| !v.is_finite()) {
                return Err(IndicatorError::non_finite(field, index));
            }
        }
        Ok(())
    }
}

fn check_ascending(dates: &[NaiveDate]) -> Result<()> {
    match dates.windows(2).position(|w| w[1] <= w[0]) {
        Some(i) => Err(IndicatorError::UnorderedDates { index: i + 1 }),
        None => Ok(()),
    }
}

impl TryFrom<Vec<PriceBar>> for PriceSeries {
    type Error = IndicatorError;

    fn try_from(bars: Vec<PriceBar>) -> Result<Self> {
        Self::from_bars(bars)
    }
}

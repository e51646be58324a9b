//! Indicator result bundle.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::core::error::IndicatorError;
use crate::core::types::{Price, PriceSeries, Volume};
use crate::core::Result;

/// Replace every NaN and infinity with 0.
///
/// Undefined values travel as NaN through the indicator functions and only
/// become 0 here, at the boundary handed to callers.
pub fn fill_undefined(mut values: Vec<f64>) -> Vec<f64> {
    for value in values.iter_mut() {
        if !value.is_finite() {
            *value = 0.0;
        }
    }
    values
}

/// Names of the sequences in an [`IndicatorResult`], in bundle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndicatorName {
    GarmanKlass,
    Rsi,
    BollingerUpper,
    BollingerMiddle,
    BollingerLower,
    Atr,
    DollarVolume,
    PercentChange,
    Sma20,
    Sma50,
    PeRatio,
}

impl IndicatorName {
    /// Every indicator, in bundle order.
    pub const ALL: [IndicatorName; 11] = [
        IndicatorName::GarmanKlass,
        IndicatorName::Rsi,
        IndicatorName::BollingerUpper,
        IndicatorName::BollingerMiddle,
        IndicatorName::BollingerLower,
        IndicatorName::Atr,
        IndicatorName::DollarVolume,
        IndicatorName::PercentChange,
        IndicatorName::Sma20,
        IndicatorName::Sma50,
        IndicatorName::PeRatio,
    ];

    /// Key used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            IndicatorName::GarmanKlass => "garman_klass",
            IndicatorName::Rsi => "rsi",
            IndicatorName::BollingerUpper => "bollinger_upper",
            IndicatorName::BollingerMiddle => "bollinger_middle",
            IndicatorName::BollingerLower => "bollinger_lower",
            IndicatorName::Atr => "atr",
            IndicatorName::DollarVolume => "dollar_volume",
            IndicatorName::PercentChange => "percent_change",
            IndicatorName::Sma20 => "sma_20",
            IndicatorName::Sma50 => "sma_50",
            IndicatorName::PeRatio => "pe_ratio",
        }
    }
}

impl fmt::Display for IndicatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorName {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self> {
        IndicatorName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| IndicatorError::invalid_parameter(format!("unknown indicator '{s}'")))
    }
}

/// Every indicator for one series, index-aligned with its bars.
///
/// All sequences have the series length and hold only finite values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorResult {
    pub garman_klass: Vec<f64>,
    pub rsi: Vec<f64>,
    pub bollinger_upper: Vec<f64>,
    pub bollinger_middle: Vec<f64>,
    pub bollinger_lower: Vec<f64>,
    pub atr: Vec<f64>,
    pub dollar_volume: Vec<f64>,
    pub percent_change: Vec<f64>,
    pub sma_20: Vec<f64>,
    pub sma_50: Vec<f64>,
    pub pe_ratio: Vec<f64>,
}

impl IndicatorResult {
    /// Sequence for `name`.
    pub fn get(&self, name: IndicatorName) -> &[f64] {
        match name {
            IndicatorName::GarmanKlass => &self.garman_klass,
            IndicatorName::Rsi => &self.rsi,
            IndicatorName::BollingerUpper => &self.bollinger_upper,
            IndicatorName::BollingerMiddle => &self.bollinger_middle,
            IndicatorName::BollingerLower => &self.bollinger_lower,
            IndicatorName::Atr => &self.atr,
            IndicatorName::DollarVolume => &self.dollar_volume,
            IndicatorName::PercentChange => &self.percent_change,
            IndicatorName::Sma20 => &self.sma_20,
            IndicatorName::Sma50 => &self.sma_50,
            IndicatorName::PeRatio => &self.pe_ratio,
        }
    }

    pub(crate) fn get_mut(&mut self, name: IndicatorName) -> &mut Vec<f64> {
        match name {
            IndicatorName::GarmanKlass => &mut self.garman_klass,
            IndicatorName::Rsi => &mut self.rsi,
            IndicatorName::BollingerUpper => &mut self.bollinger_upper,
            IndicatorName::BollingerMiddle => &mut self.bollinger_middle,
            IndicatorName::BollingerLower => &mut self.bollinger_lower,
            IndicatorName::Atr => &mut self.atr,
            IndicatorName::DollarVolume => &mut self.dollar_volume,
            IndicatorName::PercentChange => &mut self.percent_change,
            IndicatorName::Sma20 => &mut self.sma_20,
            IndicatorName::Sma50 => &mut self.sma_50,
            IndicatorName::PeRatio => &mut self.pe_ratio,
        }
    }

    /// Sequence for a serialized key such as `"sma_20"`.
    pub fn get_str(&self, name: &str) -> Option<&[f64]> {
        name.parse().ok().map(|name| self.get(name))
    }

    /// `(name, values)` pairs in bundle order.
    pub fn iter(&self) -> impl Iterator<Item = (IndicatorName, &[f64])> + '_ {
        IndicatorName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }

    /// Number of bars covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.garman_klass.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.garman_klass.is_empty()
    }

    /// Join the bars of `series` with their indicator values.
    ///
    /// `series` must be the series this result was computed from, and every
    /// sequence must have its length.
    pub fn rows(&self, series: &PriceSeries) -> Result<Vec<IndicatorRow>> {
        for (name, values) in self.iter() {
            if values.len() != series.len() {
                return Err(IndicatorError::length_mismatch(
                    name.as_str(),
                    series.len(),
                    values.len(),
                ));
            }
        }

        let rows = series
            .bars()
            .enumerate()
            .map(|(i, bar)| IndicatorRow {
                date: bar.date,
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
                garman_klass: self.garman_klass[i],
                rsi: self.rsi[i],
                bollinger_upper: self.bollinger_upper[i],
                bollinger_middle: self.bollinger_middle[i],
                bollinger_lower: self.bollinger_lower[i],
                atr: self.atr[i],
                dollar_volume: self.dollar_volume[i],
                percent_change: self.percent_change[i],
                sma_20: self.sma_20[i],
                sma_50: self.sma_50[i],
                pe_ratio: self.pe_ratio[i],
            })
            .collect();

        Ok(rows)
    }
}

impl Serialize for IndicatorResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(IndicatorName::ALL.len()))?;
        for (name, values) in self.iter() {
            map.serialize_entry(name.as_str(), values)?;
        }
        map.end()
    }
}

/// One bar with every indicator value, flat for tabular export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Volume,
    pub garman_klass: f64,
    pub rsi: f64,
    pub bollinger_upper: f64,
    pub bollinger_middle: f64,
    pub bollinger_lower: f64,
    pub atr: f64,
    pub dollar_volume: f64,
    pub percent_change: f64,
    pub sma_20: f64,
    pub sma_50: f64,
    pub pe_ratio: f64,
}

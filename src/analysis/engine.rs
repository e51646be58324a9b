//! Indicator engine.
//!
//! Validates a [`PriceSeries`] once, runs every indicator over its columns
//! and hands back dense, finite sequences. The single-indicator functions
//! in this module do the same for callers that need only a subset.

use std::time::Instant;

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{debug, instrument, trace, warn};

use super::result::{fill_undefined, IndicatorName, IndicatorResult};
use crate::core::config::IndicatorConfig;
use crate::core::source::PriceSource;
use crate::core::types::PriceSeries;
use crate::core::Result;
use crate::indicators;

/// Named sequences produced by one [`Job`].
type Outputs = Vec<(IndicatorName, Vec<f64>)>;

/// Computes the full indicator bundle for a series.
///
/// Stateless between calls; the only state is the immutable config.
#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {
    config: IndicatorConfig,
}

impl IndicatorEngine {
    /// Create an engine, rejecting zero windows, single-bar bands and bad
    /// band widths.
    pub fn new(config: IndicatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Compute every indicator for `series`.
    ///
    /// A missing or non-finite `eps` counts as 0, which makes the P/E
    /// sequence all zeros. Fails only if the series is empty or holds a
    /// non-finite price or volume; nothing is computed in that case.
    #[instrument(level = "debug", skip_all, fields(bars = series.len()))]
    pub fn compute(&self, series: &PriceSeries, eps: Option<f64>) -> Result<IndicatorResult> {
        if let Err(err) = series.validate() {
            warn!(%err, "rejecting price series");
            return Err(err);
        }

        let eps = match eps {
            Some(eps) if eps.is_finite() => eps,
            _ => {
                debug!("no usable earnings per share, P/E resolves to 0");
                0.0
            }
        };

        let started = Instant::now();
        let result = self.compute_validated(series, eps)?;
        debug!(
            elapsed_us = started.elapsed().as_micros() as u64,
            parallel = self.config.parallel,
            "computed indicators"
        );

        Ok(result)
    }

    /// Fetch history and EPS for `symbol` from `source`, then compute.
    ///
    /// Returns the fetched series alongside the result so the caller can
    /// re-attach dates. An empty date range fails with `EmptySeries`.
    pub fn compute_from_source<S>(
        &self,
        source: &S,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(PriceSeries, IndicatorResult)>
    where
        S: PriceSource + ?Sized,
    {
        let series = source.history(symbol, start, end)?;
        let eps = source.earnings_per_share(symbol)?;
        debug!(symbol, bars = series.len(), ?eps, "fetched history");

        let result = self.compute(&series, eps)?;
        Ok((series, result))
    }

    fn compute_validated(&self, series: &PriceSeries, eps: f64) -> Result<IndicatorResult> {
        let outputs: Vec<Outputs> = if self.config.parallel {
            Job::ALL
                .par_iter()
                .map(|&job| self.run(job, series, eps))
                .collect::<Result<_>>()?
        } else {
            Job::ALL
                .iter()
                .map(|&job| self.run(job, series, eps))
                .collect::<Result<_>>()?
        };

        let mut result = IndicatorResult::default();
        for (name, values) in outputs.into_iter().flatten() {
            *result.get_mut(name) = values;
        }
        Ok(result)
    }

    fn run(&self, job: Job, series: &PriceSeries, eps: f64) -> Result<Outputs> {
        let config = &self.config;
        let close = series.close();
        let single = |name: IndicatorName, values: Result<Vec<f64>>| {
            dense(name.as_str(), values).map(|values| vec![(name, values)])
        };

        match job {
            Job::GarmanKlass => single(
                IndicatorName::GarmanKlass,
                indicators::garman_klass(series.open(), series.high(), series.low(), close),
            ),
            Job::Rsi => single(IndicatorName::Rsi, indicators::rsi(close, config.rsi_window)),
            Job::BollingerBands => {
                let bands =
                    indicators::bollinger_bands(close, config.bollinger_window, config.bollinger_k)?;
                trace!(indicator = "bollinger_bands", "computed");
                Ok(vec![
                    (IndicatorName::BollingerUpper, fill_undefined(bands.upper)),
                    (IndicatorName::BollingerMiddle, fill_undefined(bands.middle)),
                    (IndicatorName::BollingerLower, fill_undefined(bands.lower)),
                ])
            }
            Job::Atr => single(
                IndicatorName::Atr,
                indicators::atr(series.high(), series.low(), close, config.atr_window),
            ),
            Job::DollarVolume => single(
                IndicatorName::DollarVolume,
                indicators::dollar_volume(close, series.volume()),
            ),
            Job::PercentChange => single(
                IndicatorName::PercentChange,
                Ok(indicators::percent_change(close)),
            ),
            Job::SmaShort => single(
                IndicatorName::Sma20,
                indicators::sma(close, config.sma_short_window),
            ),
            Job::SmaLong => single(
                IndicatorName::Sma50,
                indicators::sma(close, config.sma_long_window),
            ),
            Job::PeRatio => single(IndicatorName::PeRatio, Ok(indicators::pe_ratio(close, eps))),
        }
    }
}

/// Independent units of work. Bollinger Bands yields three sequences.
#[derive(Debug, Clone, Copy)]
enum Job {
    GarmanKlass,
    Rsi,
    BollingerBands,
    Atr,
    DollarVolume,
    PercentChange,
    SmaShort,
    SmaLong,
    PeRatio,
}

impl Job {
    const ALL: [Job; 9] = [
        Job::GarmanKlass,
        Job::Rsi,
        Job::BollingerBands,
        Job::Atr,
        Job::DollarVolume,
        Job::PercentChange,
        Job::SmaShort,
        Job::SmaLong,
        Job::PeRatio,
    ];
}

fn dense(indicator: &str, values: Result<Vec<f64>>) -> Result<Vec<f64>> {
    let values = fill_undefined(values?);
    trace!(indicator, "computed");
    Ok(values)
}

/// Compute every indicator with the default windows.
///
/// See [`IndicatorEngine::compute`].
pub fn compute_all(series: &PriceSeries, eps: Option<f64>) -> Result<IndicatorResult> {
    IndicatorEngine::default().compute(series, eps)
}

/// Garman-Klass volatility per bar, 0 where undefined.
pub fn garman_klass(series: &PriceSeries) -> Result<Vec<f64>> {
    series.validate()?;
    dense(
        IndicatorName::GarmanKlass.as_str(),
        indicators::garman_klass(series.open(), series.high(), series.low(), series.close()),
    )
}

/// RSI over `window` bars, 0 where undefined.
pub fn rsi(series: &PriceSeries, window: usize) -> Result<Vec<f64>> {
    series.validate()?;
    dense(IndicatorName::Rsi.as_str(), indicators::rsi(series.close(), window))
}

/// Bollinger Bands as `(upper, middle, lower)`, 0 where undefined.
pub fn bollinger_bands(
    series: &PriceSeries,
    window: usize,
    k: f64,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    series.validate()?;
    let bands = indicators::bollinger_bands(series.close(), window, k)?;
    Ok((
        fill_undefined(bands.upper),
        fill_undefined(bands.middle),
        fill_undefined(bands.lower),
    ))
}

/// ATR over `window` bars, 0 where undefined.
pub fn atr(series: &PriceSeries, window: usize) -> Result<Vec<f64>> {
    series.validate()?;
    dense(
        IndicatorName::Atr.as_str(),
        indicators::atr(series.high(), series.low(), series.close(), window),
    )
}

/// Close times volume per bar.
pub fn dollar_volume(series: &PriceSeries) -> Result<Vec<f64>> {
    series.validate()?;
    dense(
        IndicatorName::DollarVolume.as_str(),
        indicators::dollar_volume(series.close(), series.volume()),
    )
}

/// Day-over-day percent change, 0 at the first bar.
pub fn percent_change(series: &PriceSeries) -> Result<Vec<f64>> {
    series.validate()?;
    dense(
        IndicatorName::PercentChange.as_str(),
        Ok(indicators::percent_change(series.close())),
    )
}

/// Simple moving average of close over `window` bars, 0 during warmup.
pub fn sma(series: &PriceSeries, window: usize) -> Result<Vec<f64>> {
    series.validate()?;
    dense("sma", indicators::sma(series.close(), window))
}

/// Close over `eps`; all zeros when `eps` is 0 or missing.
pub fn pe_ratio(series: &PriceSeries, eps: Option<f64>) -> Result<Vec<f64>> {
    series.validate()?;
    let eps = eps.filter(|eps| eps.is_finite()).unwrap_or(0.0);
    dense(
        IndicatorName::PeRatio.as_str(),
        Ok(indicators::pe_ratio(series.close(), eps)),
    )
}

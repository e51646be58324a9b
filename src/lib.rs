//! pricelens - technical indicators for daily OHLCV price series.
//!
//! This crate provides:
//! - Volatility estimators (Garman-Klass, ATR, Bollinger Bands)
//! - Momentum oscillators (RSI, percent change)
//! - Moving averages (SMA)
//! - Dollar volume and P/E ratio
//! - An engine that computes all of them as one flat, finite bundle
//!
//! The engine never fetches data; plug a provider in through
//! [`PriceSource`](crate::core::PriceSource) or hand it a [`PriceSeries`] directly.
//!
//! ```no_run
//! use pricelens::core::{PriceBar, PriceSeries};
//!
//! # fn main() -> pricelens::core::Result<()> {
//! let bars: Vec<PriceBar> = Vec::new();
//! let series = PriceSeries::from_bars(bars)?;
//! let result = pricelens::compute_all(&series, Some(6.1))?;
//! println!("{:?}", result.get_str("rsi"));
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod core;
pub mod indicators;

pub use crate::analysis::{compute_all, IndicatorEngine, IndicatorName, IndicatorResult, IndicatorRow};
pub use crate::core::{IndicatorConfig, IndicatorError, PriceBar, PriceSeries, Result};

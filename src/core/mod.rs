//! Core types and utilities for pricelens.

pub mod config;
pub mod error;
pub mod source;
pub mod types;

pub use config::IndicatorConfig;
pub use error::{IndicatorError, Result};
pub use source::{InMemorySource, PriceSource};
pub use types::*;

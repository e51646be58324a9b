//! Indicator engine and result bundle.

pub mod engine;
pub mod result;

pub use engine::{compute_all, IndicatorEngine};
pub use result::{fill_undefined, IndicatorName, IndicatorResult, IndicatorRow};

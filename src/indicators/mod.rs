//! Technical indicators for pricelens.
//!
//! All indicators are implemented as pure functions that take slice inputs
//! and return Vec outputs. NaN marks undefined values (warmup period,
//! zero denominators, negative radicands); the engine turns them into 0.

pub mod momentum;
pub mod rolling;
pub mod trend;
pub mod valuation;
pub mod volatility;
pub mod volume;

pub use momentum::{percent_change, rsi};
pub use rolling::{rolling, rolling_mean, rolling_std};
pub use trend::sma;
pub use valuation::pe_ratio;
pub use volatility::{atr, bollinger_bands, garman_klass, true_range, BollingerBandsResult};
pub use volume::dollar_volume;

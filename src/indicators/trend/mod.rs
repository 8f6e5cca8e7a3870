//! Trend indicators: SMA, EMA, ADX

pub mod sma;
pub mod ema;
pub mod adx;

pub use sma::*;
pub use ema::*;
pub use adx::*;

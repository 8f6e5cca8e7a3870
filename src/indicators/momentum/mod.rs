//! Momentum indicators: RSI, MACD, Stochastic, Williams %R, CCI

pub mod rsi;
pub mod macd;
pub mod stochastic;
pub mod williams_r;
pub mod cci;

pub use rsi::*;
pub use macd::*;
pub use stochastic::*;
pub use williams_r::*;
pub use cci::*;

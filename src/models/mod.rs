//! Shared data models spanning the engine layers.

pub mod alert;
pub mod indicators;
pub mod price;
pub mod signal;

pub use alert::{AlertEvent, AlertKind, AlertState, PriceDirection, PriceTargets};
pub use indicators::{
    BollingerSeries, IndicatorOutput, IndicatorSeries, IndicatorSet, LatestIndicators,
    MacdSeries, StochasticSeries,
};
pub use price::{PriceBar, PriceSeries, MIN_BARS};
pub use signal::{RuleKind, RuleVote, Signal, SignalOutput, StrengthVector, Vote};

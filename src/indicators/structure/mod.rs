//! Structural analysis: support/resistance, chart patterns, trend strength

pub mod support_resistance;
pub mod patterns;
pub mod trend_strength;

pub use support_resistance::*;
pub use patterns::*;
pub use trend_strength::*;

//! Numeric primitives shared across indicators.

pub mod math;

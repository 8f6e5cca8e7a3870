//! Alert evaluation. Delivery and persistence live outside the crate.

pub mod evaluator;

pub use evaluator::*;

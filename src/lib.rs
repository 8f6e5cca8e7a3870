//! Technical analysis core for OHLCV price series.
//!
//! One pass takes an immutable [`models::PriceSeries`] and an
//! [`config::AnalysisConfig`] and derives indicator series, a BUY/SELL/HOLD
//! signal, a strength vector and alert events.

pub mod alerts;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{AnalysisError, Result};

//! Errors raised while building a price series or requesting indicators.

use thiserror::Error;

/// Structural problems with an input price table. Fatal to the pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("column {column} has {found} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("insufficient history: need at least {required} bars, got {provided}")]
    InsufficientBars { required: usize, provided: usize },

    #[error("duplicate timestamp at bar {index}")]
    DuplicateTimestamp { index: usize },

    #[error("timestamp at bar {index} is earlier than its predecessor")]
    NonMonotonicTimestamp { index: usize },

    #[error("invalid {field} at bar {index}: {value}")]
    InvalidPrice {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("invalid volume at bar {index}: {value}")]
    InvalidVolume { index: usize, value: f64 },
}

/// Errors scoped to a single indicator request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("unsupported indicator: {0}")]
    UnknownIndicator(String),

    #[error("invalid parameter for {indicator}: {reason}")]
    InvalidParameter {
        indicator: &'static str,
        reason: String,
    },
}

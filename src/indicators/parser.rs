use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::indicators::error::ValidationError;
use crate::models::price::{PriceBar, PriceSeries};

/// Column names every input table must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Open", "High", "Low", "Close", "Volume"];

/// Build a series from a column table (column name → values) and its
/// timestamps.
///
/// Rows with a NaN in any column are dropped before validation. The input
/// table is never modified.
pub fn parse_price_series_from_columns(
    timestamps: &[DateTime<Utc>],
    columns: &HashMap<String, Vec<f64>>,
) -> Result<PriceSeries, ValidationError> {
    let mut resolved: Vec<&[f64]> = Vec::with_capacity(REQUIRED_COLUMNS.len());
    for name in REQUIRED_COLUMNS {
        let values = columns
            .get(name)
            .ok_or_else(|| ValidationError::MissingColumn(name.to_string()))?;
        if values.len() != timestamps.len() {
            return Err(ValidationError::LengthMismatch {
                column: name.to_string(),
                expected: timestamps.len(),
                found: values.len(),
            });
        }
        resolved.push(values);
    }

    let bars: Vec<PriceBar> = timestamps
        .iter()
        .enumerate()
        .map(|(i, &timestamp)| {
            PriceBar::new(
                timestamp,
                resolved[0][i],
                resolved[1][i],
                resolved[2][i],
                resolved[3][i],
                resolved[4][i],
            )
        })
        .collect();

    parse_price_series_from_records(&bars)
}

/// Build a series from bar records, dropping incomplete (NaN) bars first.
pub fn parse_price_series_from_records(bars: &[PriceBar]) -> Result<PriceSeries, ValidationError> {
    PriceSeries::new(drop_incomplete_bars(bars))
}

/// Copy of `bars` without any bar holding a NaN field.
pub fn drop_incomplete_bars(bars: &[PriceBar]) -> Vec<PriceBar> {
    bars.iter()
        .filter(|b| {
            ![b.open, b.high, b.low, b.close, b.volume]
                .iter()
                .any(|v| v.is_nan())
        })
        .copied()
        .collect()
}

//! OHLCV bars and the validated, chronologically ordered series built from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::indicators::error::ValidationError;

/// Fewest bars accepted for an analysis pass.
pub const MIN_BARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// `(high + low + close) / 3`
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

/// An immutable, validated sequence of bars.
///
/// Construction enforces the structural invariants (minimum length, strictly
/// increasing timestamps, positive finite prices, non-negative volume), so
/// every downstream component can index it freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PriceBar>", into = "Vec<PriceBar>")]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl TryFrom<Vec<PriceBar>> for PriceSeries {
    type Error = ValidationError;

    fn try_from(bars: Vec<PriceBar>) -> Result<Self, Self::Error> {
        Self::new(bars)
    }
}

impl From<PriceSeries> for Vec<PriceBar> {
    fn from(series: PriceSeries) -> Self {
        series.bars
    }
}

impl PriceSeries {
    pub fn new(bars: Vec<PriceBar>) -> Result<Self, ValidationError> {
        validate_bars(&bars)?;
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> &PriceBar {
        // Non-empty by construction.
        &self.bars[self.bars.len() - 1]
    }

    pub fn previous(&self) -> &PriceBar {
        &self.bars[self.bars.len() - 2]
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Fractional change of the latest close against the previous one.
    pub fn last_change_ratio(&self) -> f64 {
        let prev = self.previous().close;
        (self.last().close - prev) / prev
    }
}

fn validate_bars(bars: &[PriceBar]) -> Result<(), ValidationError> {
    if bars.len() < MIN_BARS {
        return Err(ValidationError::InsufficientBars {
            required: MIN_BARS,
            provided: bars.len(),
        });
    }

    for (index, bar) in bars.iter().enumerate() {
        for (field, value) in [
            ("open", bar.open),
            ("high", bar.high),
            ("low", bar.low),
            ("close", bar.close),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidPrice {
                    index,
                    field,
                    value,
                });
            }
        }
        if !bar.volume.is_finite() || bar.volume < 0.0 {
            return Err(ValidationError::InvalidVolume {
                index,
                value: bar.volume,
            });
        }
        if index > 0 {
            let prev = bars[index - 1].timestamp;
            if bar.timestamp == prev {
                return Err(ValidationError::DuplicateTimestamp { index });
            }
            if bar.timestamp < prev {
                return Err(ValidationError::NonMonotonicTimestamp { index });
            }
        }
    }

    Ok(())
}

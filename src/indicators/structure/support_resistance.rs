//! Support and Resistance levels detection

use serde::{Deserialize, Serialize};

use crate::models::price::PriceBar;

pub const DEFAULT_LOOKBACK: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportResistance {
    pub support: f64,
    pub resistance: f64,
    /// Distance from the latest close down to support, in percent.
    pub support_distance_pct: f64,
    /// Distance from the latest close up to resistance, in percent.
    pub resistance_distance_pct: f64,
}

/// Support is the lowest low and resistance the highest high of the trailing
/// `lookback` bars (all bars when fewer exist).
pub fn calculate_support_resistance(bars: &[PriceBar], lookback: usize) -> Option<SupportResistance> {
    if lookback == 0 || bars.is_empty() {
        return None;
    }

    let recent = &bars[bars.len().saturating_sub(lookback)..];
    let support = recent.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let resistance = recent.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let current_price = recent[recent.len() - 1].close;

    Some(SupportResistance {
        support,
        resistance,
        support_distance_pct: (current_price - support) / current_price * 100.0,
        resistance_distance_pct: (resistance - current_price) / current_price * 100.0,
    })
}

/// Calculate support/resistance with default lookback (20)
pub fn calculate_support_resistance_default(bars: &[PriceBar]) -> Option<SupportResistance> {
    calculate_support_resistance(bars, DEFAULT_LOOKBACK)
}

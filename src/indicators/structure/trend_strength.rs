//! Trend strength summary: ADX plus simple price and volume drift.

use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::indicators::trend::adx::calculate_adx;
use crate::models::price::PriceBar;

pub const ADX_PERIOD: usize = 14;
pub const PRICE_TREND_BARS: usize = 20;
pub const VOLUME_SHORT_BARS: usize = 5;
pub const VOLUME_LONG_BARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendStrength {
    /// Latest ADX(14), 0 when undefined.
    pub adx: f64,
    /// Percent change of the close over the last 20 bars.
    pub price_trend: f64,
    /// Percent difference of the 5-bar mean volume over the 20-bar mean.
    pub volume_trend: f64,
    pub direction: TrendDirection,
}

pub fn calculate_trend_strength(bars: &[PriceBar]) -> Option<TrendStrength> {
    let last = bars.last()?;
    let adx = calculate_adx(bars, ADX_PERIOD).adx.latest().unwrap_or(0.0);

    let anchor = bars[bars.len().saturating_sub(PRICE_TREND_BARS)].close;
    let price_trend = (last.close - anchor) / anchor * 100.0;

    let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();
    let short = math::trailing_mean(&volumes, VOLUME_SHORT_BARS)?;
    let long = math::trailing_mean(&volumes, VOLUME_LONG_BARS)?;
    let volume_trend = if long > 0.0 { (short - long) / long * 100.0 } else { 0.0 };

    Some(TrendStrength {
        adx,
        price_trend,
        volume_trend,
        direction: if price_trend > 0.0 { TrendDirection::Up } else { TrendDirection::Down },
    })
}

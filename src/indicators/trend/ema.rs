//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::IndicatorSeries;
use crate::models::price::PriceBar;

/// EMA of closes with α = 2 / (period + 1).
///
/// Seeded with the SMA of the first `period` closes, so the first defined
/// value sits at index `period - 1`.
pub fn calculate_ema(bars: &[PriceBar], period: usize) -> IndicatorSeries {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    IndicatorSeries::new(math::ema_series(&closes, period))
}

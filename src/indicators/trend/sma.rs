//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::indicators::IndicatorSeries;
use crate::models::price::PriceBar;

/// SMA of closes. Undefined for the first `period - 1` bars.
pub fn calculate_sma(bars: &[PriceBar], period: usize) -> IndicatorSeries {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    IndicatorSeries::new(math::sma_series(&closes, period))
}

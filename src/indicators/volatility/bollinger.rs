//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::{BollingerSeries, IndicatorSeries};
use crate::models::price::PriceBar;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// σ is the population standard deviation of the trailing `period` closes.
pub fn calculate_bollinger_bands(bars: &[PriceBar], period: usize, std_dev: f64) -> BollingerSeries {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let middle = math::sma_series(&closes, period);
    let sigma = math::std_dev_series(&closes, period);

    let upper = middle.iter().zip(&sigma).map(|(m, s)| m + std_dev * s).collect();
    let lower = middle.iter().zip(&sigma).map(|(m, s)| m - std_dev * s).collect();

    BollingerSeries {
        upper: IndicatorSeries::new(upper),
        middle: IndicatorSeries::new(middle),
        lower: IndicatorSeries::new(lower),
    }
}

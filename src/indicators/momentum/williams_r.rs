//! Williams %R

use crate::common::math;
use crate::models::indicators::IndicatorSeries;
use crate::models::price::PriceBar;

/// Value reported when the high/low range of the window is zero.
pub const FLAT_RANGE_WILLIAMS_R: f64 = -50.0;

/// %R = −100 · (highest high − close) / (highest high − lowest low), in [−100, 0].
pub fn calculate_williams_r(bars: &[PriceBar], period: usize) -> IndicatorSeries {
    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let highest = math::rolling_max_series(&highs, period);
    let lowest = math::rolling_min_series(&lows, period);

    let values = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let (hh, ll) = (highest[i], lowest[i]);
            if !hh.is_finite() || !ll.is_finite() {
                f64::NAN
            } else if hh == ll {
                FLAT_RANGE_WILLIAMS_R
            } else {
                -100.0 * (hh - bar.close) / (hh - ll)
            }
        })
        .collect();

    IndicatorSeries::new(values)
}

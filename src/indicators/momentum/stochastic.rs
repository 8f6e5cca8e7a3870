//! Stochastic Oscillator

use crate::common::math;
use crate::models::indicators::{IndicatorSeries, StochasticSeries};
use crate::models::price::PriceBar;

/// %K reported when the high/low range of the window is zero.
pub const FLAT_RANGE_K: f64 = 50.0;

/// %K = 100 · (close − lowest low) / (highest high − lowest low) over
/// `k_period` bars; %D = SMA(`d_period`) of %K.
///
/// A flat window reads [`FLAT_RANGE_K`], so %D never sees a NaN once %K is
/// defined.
pub fn calculate_stochastic(bars: &[PriceBar], k_period: usize, d_period: usize) -> StochasticSeries {
    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let highest = math::rolling_max_series(&highs, k_period);
    let lowest = math::rolling_min_series(&lows, k_period);

    let k: Vec<f64> = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let (hh, ll) = (highest[i], lowest[i]);
            if !hh.is_finite() || !ll.is_finite() {
                f64::NAN
            } else if hh == ll {
                FLAT_RANGE_K
            } else {
                100.0 * (bar.close - ll) / (hh - ll)
            }
        })
        .collect();
    let d = math::sma_series(&k, d_period);

    StochasticSeries {
        k: IndicatorSeries::new(k),
        d: IndicatorSeries::new(d),
    }
}

//! CCI (Commodity Channel Index)

use crate::common::math;
use crate::models::indicators::IndicatorSeries;
use crate::models::price::PriceBar;

/// Lambert's constant; scales CCI so most readings fall within ±100.
const CCI_CONSTANT: f64 = 0.015;

/// CCI = (TP − SMA(TP)) / (0.015 · MAD(TP)), TP = (high + low + close) / 3.
///
/// A window with zero mean absolute deviation reads 0.
pub fn calculate_cci(bars: &[PriceBar], period: usize) -> IndicatorSeries {
    let typical: Vec<f64> = bars.iter().map(PriceBar::typical_price).collect();
    let sma = math::sma_series(&typical, period);
    let mad = math::mean_abs_deviation_series(&typical, period);

    let values = typical
        .iter()
        .zip(sma.iter().zip(&mad))
        .map(|(tp, (avg, dev))| {
            if !avg.is_finite() || !dev.is_finite() {
                f64::NAN
            } else if *dev == 0.0 {
                0.0
            } else {
                (tp - avg) / (CCI_CONSTANT * dev)
            }
        })
        .collect();

    IndicatorSeries::new(values)
}

//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::{IndicatorSeries, MacdSeries};
use crate::models::price::PriceBar;

/// Calculate MACD
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// The MACD line is defined from bar `slow - 1`; the signal line and the
/// histogram from bar `slow + signal - 2`.
pub fn calculate_macd(
    bars: &[PriceBar],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    let fast_ema = math::ema_series(&closes, fast_period);
    let slow_ema = math::ema_series(&closes, slow_period);

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(fast, slow)| fast - slow)
        .collect();
    let signal_line = math::ema_series(&macd_line, signal_period);
    let histogram: Vec<f64> = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(macd, signal)| macd - signal)
        .collect();

    MacdSeries {
        macd: IndicatorSeries::new(macd_line),
        signal: IndicatorSeries::new(signal_line),
        histogram: IndicatorSeries::new(histogram),
    }
}

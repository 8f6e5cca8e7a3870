//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::IndicatorSeries;
use crate::models::price::PriceBar;

/// Calculate RSI
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Averages use Wilder's smoothing seeded with the simple mean of the first
/// `period` close-to-close deltas, so the first defined value is at bar
/// `period`. A window without losses reads 100.
pub fn calculate_rsi(bars: &[PriceBar], period: usize) -> IndicatorSeries {
    let mut out = vec![f64::NAN; bars.len()];
    if period == 0 || bars.len() < period + 1 {
        return IndicatorSeries::new(out);
    }

    let (gains, losses): (Vec<f64>, Vec<f64>) = bars
        .windows(2)
        .map(|w| {
            let change = w[1].close - w[0].close;
            if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, change.abs())
            }
        })
        .unzip();

    let avg_gains = math::wilder_series(&gains, period);
    let avg_losses = math::wilder_series(&losses, period);

    for j in (period - 1)..gains.len() {
        out[j + 1] = rsi_from_averages(avg_gains[j], avg_losses[j]);
    }

    IndicatorSeries::new(out)
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

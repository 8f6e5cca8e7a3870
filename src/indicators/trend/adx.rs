//! ADX (Average Directional Index) indicator

use crate::common::math;
use crate::models::indicators::IndicatorSeries;
use crate::models::price::PriceBar;

/// ADX with its directional components.
#[derive(Debug, Clone, PartialEq)]
pub struct AdxSeries {
    pub adx: IndicatorSeries,
    pub plus_di: IndicatorSeries,
    pub minus_di: IndicatorSeries,
}

/// Calculate ADX
///
/// TR, +DM and -DM are Wilder-smoothed over `period`, giving +DI/-DI from
/// bar `period`. DX is then Wilder-smoothed again, so ADX is first defined
/// at bar `2 * period - 1`.
pub fn calculate_adx(bars: &[PriceBar], period: usize) -> AdxSeries {
    let n = bars.len();
    let mut plus_di = vec![f64::NAN; n];
    let mut minus_di = vec![f64::NAN; n];
    let mut adx = vec![f64::NAN; n];

    if period == 0 || n < period + 1 {
        return AdxSeries {
            adx: IndicatorSeries::new(adx),
            plus_di: IndicatorSeries::new(plus_di),
            minus_di: IndicatorSeries::new(minus_di),
        };
    }

    // Movement arrays start at bar 1; index j here maps to bar j + 1.
    let mut tr_values = Vec::with_capacity(n - 1);
    let mut plus_dm_values = Vec::with_capacity(n - 1);
    let mut minus_dm_values = Vec::with_capacity(n - 1);
    for i in 1..n {
        tr_values.push(math::true_range(bars[i].high, bars[i].low, bars[i - 1].close));

        let up_move = bars[i].high - bars[i - 1].high;
        let down_move = bars[i - 1].low - bars[i].low;
        plus_dm_values.push(if up_move > down_move && up_move > 0.0 { up_move } else { 0.0 });
        minus_dm_values.push(if down_move > up_move && down_move > 0.0 { down_move } else { 0.0 });
    }

    let atr = math::wilder_series(&tr_values, period);
    let plus_dm = math::wilder_series(&plus_dm_values, period);
    let minus_dm = math::wilder_series(&minus_dm_values, period);

    let mut dx_values = Vec::with_capacity(n - 1);
    for j in 0..tr_values.len() {
        if !atr[j].is_finite() {
            dx_values.push(f64::NAN);
            continue;
        }
        let (pdi, mdi) = if atr[j] > 0.0 {
            (100.0 * plus_dm[j] / atr[j], 100.0 * minus_dm[j] / atr[j])
        } else {
            (0.0, 0.0)
        };
        plus_di[j + 1] = pdi;
        minus_di[j + 1] = mdi;

        let di_sum = pdi + mdi;
        dx_values.push(if di_sum > 0.0 { 100.0 * (pdi - mdi).abs() / di_sum } else { 0.0 });
    }

    let first_dx = period - 1;
    let smoothed = math::wilder_series(&dx_values[first_dx..], period);
    for (offset, value) in smoothed.into_iter().enumerate() {
        adx[first_dx + offset + 1] = value;
    }

    AdxSeries {
        adx: IndicatorSeries::new(adx),
        plus_di: IndicatorSeries::new(plus_di),
        minus_di: IndicatorSeries::new(minus_di),
    }
}

//! Rolling and exponential statistics shared by every indicator.
//!
//! All `*_series` helpers return a vector positionally aligned with their
//! input. Positions without enough history hold `f64::NAN`.

/// Arithmetic mean of a slice. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Weighted mean `Σ(wᵢ·xᵢ) / Σwᵢ`.
///
/// Returns `None` when the slices differ in length, are empty, or the
/// weights sum to zero.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Option<f64> {
    if values.is_empty() || values.len() != weights.len() {
        return None;
    }
    let total_weight: f64 = weights.iter().sum();
    if total_weight == 0.0 {
        return None;
    }
    let weighted: f64 = values.iter().zip(weights).map(|(v, w)| v * w).sum();
    Some(weighted / total_weight)
}

/// Mean of the last `period` values (or of all values when fewer exist).
pub fn trailing_mean(values: &[f64], period: usize) -> Option<f64> {
    let start = values.len().saturating_sub(period);
    mean(&values[start..])
}

/// Simple moving average: mean of the `period` values ending at each index.
pub fn sma_series(values: &[f64], period: usize) -> Vec<f64> {
    rolling(values, period, |window| {
        window.iter().sum::<f64>() / window.len() as f64
    })
}

/// Rolling population standard deviation (divides by `period`).
pub fn std_dev_series(values: &[f64], period: usize) -> Vec<f64> {
    rolling(values, period, population_std_dev)
}

pub fn rolling_min_series(values: &[f64], period: usize) -> Vec<f64> {
    rolling(values, period, |window| {
        window.iter().copied().fold(f64::INFINITY, f64::min)
    })
}

pub fn rolling_max_series(values: &[f64], period: usize) -> Vec<f64> {
    rolling(values, period, |window| {
        window.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// Rolling mean absolute deviation around the window's own mean.
pub fn mean_abs_deviation_series(values: &[f64], period: usize) -> Vec<f64> {
    rolling(values, period, |window| {
        let n = window.len() as f64;
        let avg = window.iter().sum::<f64>() / n;
        window.iter().map(|v| (v - avg).abs()).sum::<f64>() / n
    })
}

/// Exponential moving average with α = 2 / (period + 1).
///
/// The recurrence starts at the first index where `period` consecutive
/// defined values are available and is seeded with their SMA. Leading
/// undefined input values are skipped, so this also works on the output of
/// another indicator (the MACD line, for instance).
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 {
        return out;
    }
    let first = match values.iter().position(|v| v.is_finite()) {
        Some(i) => i,
        None => return out,
    };
    let seed_end = first + period - 1;
    if seed_end >= values.len() {
        return out;
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut prev = values[first..=seed_end].iter().sum::<f64>() / period as f64;
    out[seed_end] = prev;
    for i in (seed_end + 1)..values.len() {
        prev = ema_from_previous(values[i], prev, alpha);
        out[i] = prev;
    }
    out
}

/// One EMA step: `α·value + (1−α)·previous`.
pub fn ema_from_previous(value: f64, previous: f64, alpha: f64) -> f64 {
    alpha * value + (1.0 - alpha) * previous
}

/// Wilder's smoothing: seed with the simple average of the first `period`
/// values, then `avg = (prev·(period−1) + value) / period`.
///
/// Output index `i` is defined from `period - 1` onward.
pub fn wilder_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    let p = period as f64;
    let mut avg = values[..period].iter().sum::<f64>() / p;
    out[period - 1] = avg;
    for i in period..values.len() {
        avg = (avg * (p - 1.0) + values[i]) / p;
        out[i] = avg;
    }
    out
}

/// True range of a bar given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

fn population_std_dev(window: &[f64]) -> f64 {
    let n = window.len() as f64;
    let avg = window.iter().sum::<f64>() / n;
    let variance = window.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Apply `f` to every full trailing window. A window containing an undefined
/// value yields an undefined result.
fn rolling<F>(values: &[f64], period: usize, f: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    for end in (period - 1)..values.len() {
        let window = &values[end + 1 - period..=end];
        if window.iter().all(|v| v.is_finite()) {
            out[end] = f(window);
        }
    }
    out
}

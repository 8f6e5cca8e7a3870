//! Continuous strength score, computed independently of the discrete signal.
//!
//! Each sub-score is a fixed increment picked by threshold, so the range is
//! bounded by construction and never clamped afterwards.

use crate::common::math;
use crate::models::indicators::IndicatorSet;
use crate::models::price::PriceSeries;
use crate::models::signal::StrengthVector;

/// RSI assumed when none is available.
pub const NEUTRAL_RSI: f64 = 50.0;
pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const STRENGTH_VOLUME_BARS: usize = 20;

/// Momentum sub-score from RSI.
pub fn momentum_score(rsi: Option<f64>) -> f64 {
    let rsi = rsi.unwrap_or(NEUTRAL_RSI);
    if rsi <= RSI_OVERSOLD {
        0.8
    } else if rsi >= RSI_OVERBOUGHT {
        -0.8
    } else if (40.0..=60.0).contains(&rsi) {
        0.2
    } else {
        0.0
    }
}

/// Trend sub-score from the ordering of close, SMA20 and SMA50.
pub fn trend_score(close: f64, sma_20: Option<f64>, sma_50: Option<f64>) -> f64 {
    let (Some(fast), Some(slow)) = (sma_20, sma_50) else {
        return 0.0;
    };
    if close > fast && fast > slow {
        0.6
    } else if close < fast && fast < slow {
        -0.6
    } else {
        0.0
    }
}

/// Volume sub-score from the current volume against its trailing mean.
pub fn volume_score(current: f64, mean: f64) -> f64 {
    if mean <= 0.0 {
        return 0.0;
    }
    let ratio = current / mean;
    if ratio > 1.5 {
        0.4
    } else if ratio < 0.5 {
        -0.2
    } else {
        0.0
    }
}

/// Trend, momentum and volume sub-scores; `overall` is their plain mean.
pub fn calculate_strength(series: &PriceSeries, indicators: &IndicatorSet) -> StrengthVector {
    let last = series.last();

    let momentum = momentum_score(indicators.rsi.as_ref().and_then(|s| s.latest()));
    let trend = trend_score(
        last.close,
        indicators.sma_20.as_ref().and_then(|s| s.latest()),
        indicators.sma_50.as_ref().and_then(|s| s.latest()),
    );
    let mean_volume = math::trailing_mean(&series.volumes(), STRENGTH_VOLUME_BARS).unwrap_or(0.0);
    let volume = volume_score(last.volume, mean_volume);

    let overall = (trend + momentum + volume) / 3.0;

    StrengthVector {
        overall,
        trend,
        momentum,
        volume,
    }
}

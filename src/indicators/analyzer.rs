//! One analysis pass over one price series.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::math;
use crate::config::IndicatorsConfig;
use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_cci, calculate_macd, calculate_rsi, calculate_stochastic, calculate_williams_r};
use crate::indicators::registry::IndicatorKind;
use crate::indicators::structure::{
    calculate_support_resistance, calculate_trend_strength, detect_chart_patterns, ChartPatterns,
    SupportResistance, TrendStrength, DEFAULT_LOOKBACK,
};
use crate::indicators::trend::{calculate_ema, calculate_sma};
use crate::indicators::volatility::calculate_bollinger_bands;
use crate::models::indicators::{IndicatorSet, LatestIndicators};
use crate::models::price::PriceSeries;

/// Volume multiple over the 20-bar mean flagged in the summary.
pub const SUMMARY_VOLUME_SPIKE: f64 = 1.5;
pub const VOLUME_MEAN_BARS: usize = 20;

/// Compute every enabled indicator.
pub fn compute_indicators(series: &PriceSeries, config: &IndicatorsConfig) -> IndicatorSet {
    let mut set = IndicatorSet::new();
    for kind in IndicatorKind::enabled(config) {
        compute_indicator(&mut set, series, config, kind);
    }
    set
}

/// Compute `kind` and store its outputs in `set`, replacing earlier ones.
pub fn compute_indicator(
    set: &mut IndicatorSet,
    series: &PriceSeries,
    config: &IndicatorsConfig,
    kind: IndicatorKind,
) {
    let lookback = kind.lookback(config);
    if series.len() < lookback {
        debug!(
            indicator = kind.name(),
            lookback,
            bars = series.len(),
            "not enough history, series stays undefined"
        );
    }

    let bars = series.bars();
    match kind {
        IndicatorKind::Sma20 => set.sma_20 = Some(calculate_sma(bars, config.sma_20.period)),
        IndicatorKind::Sma50 => set.sma_50 = Some(calculate_sma(bars, config.sma_50.period)),
        IndicatorKind::Ema12 => set.ema_12 = Some(calculate_ema(bars, config.ema_12.period)),
        IndicatorKind::Ema26 => set.ema_26 = Some(calculate_ema(bars, config.ema_26.period)),
        IndicatorKind::Rsi => set.rsi = Some(calculate_rsi(bars, config.rsi.period)),
        IndicatorKind::Macd => {
            set.macd = Some(calculate_macd(
                bars,
                config.macd.fast,
                config.macd.slow,
                config.macd.signal,
            ))
        }
        IndicatorKind::Bollinger => {
            set.bollinger = Some(calculate_bollinger_bands(
                bars,
                config.bollinger.period,
                config.bollinger.std,
            ))
        }
        IndicatorKind::Stochastic => {
            set.stochastic = Some(calculate_stochastic(
                bars,
                config.stoch.k_period,
                config.stoch.d_period,
            ))
        }
        IndicatorKind::WilliamsR => {
            set.williams_r = Some(calculate_williams_r(bars, config.williams_r.period))
        }
        IndicatorKind::Cci => set.cci = Some(calculate_cci(bars, config.cci.period)),
    }
}

/// Snapshot of the latest market state derived in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub current_price: f64,
    /// Percent change of the latest close over the previous one.
    pub price_change: f64,
    pub support_level: f64,
    pub resistance_level: f64,
    pub trend_strength: TrendStrength,
    pub chart_patterns: ChartPatterns,
    pub latest_indicators: LatestIndicators,
    pub volume_spike: bool,
}

/// Owns the indicator set of one pass over a borrowed, immutable series.
pub struct TechnicalAnalyzer<'a> {
    series: &'a PriceSeries,
    config: &'a IndicatorsConfig,
    indicators: IndicatorSet,
}

impl<'a> TechnicalAnalyzer<'a> {
    /// Analyzer with no indicators computed yet.
    pub fn new(series: &'a PriceSeries, config: &'a IndicatorsConfig) -> Self {
        Self {
            series,
            config,
            indicators: IndicatorSet::new(),
        }
    }

    /// Analyzer with every enabled indicator computed.
    pub fn with_enabled(series: &'a PriceSeries, config: &'a IndicatorsConfig) -> Self {
        Self {
            series,
            config,
            indicators: compute_indicators(series, config),
        }
    }

    /// Compute an indicator by configuration name.
    ///
    /// An unknown name fails only this request; indicators computed earlier
    /// stay in place.
    pub fn add_indicator(&mut self, name: &str) -> Result<(), IndicatorError> {
        let kind: IndicatorKind = name.parse()?;
        self.add(kind);
        Ok(())
    }

    pub fn add(&mut self, kind: IndicatorKind) {
        compute_indicator(&mut self.indicators, self.series, self.config, kind);
    }

    pub fn series(&self) -> &PriceSeries {
        self.series
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    pub fn into_indicators(self) -> IndicatorSet {
        self.indicators
    }

    pub fn latest_indicators(&self) -> LatestIndicators {
        self.indicators.latest_values()
    }

    pub fn support_resistance(&self, lookback: usize) -> Option<SupportResistance> {
        calculate_support_resistance(self.series.bars(), lookback)
    }

    pub fn chart_patterns(&self) -> ChartPatterns {
        detect_chart_patterns(self.series.bars())
    }

    pub fn trend_strength(&self) -> Option<TrendStrength> {
        calculate_trend_strength(self.series.bars())
    }

    pub fn summary(&self) -> Option<AnalysisSummary> {
        let levels = self.support_resistance(DEFAULT_LOOKBACK)?;
        let trend_strength = self.trend_strength()?;
        let volumes = self.series.volumes();
        let mean_volume = math::trailing_mean(&volumes, VOLUME_MEAN_BARS)?;

        Some(AnalysisSummary {
            current_price: self.series.last().close,
            price_change: self.series.last_change_ratio() * 100.0,
            support_level: levels.support,
            resistance_level: levels.resistance,
            trend_strength,
            chart_patterns: self.chart_patterns(),
            latest_indicators: self.latest_indicators(),
            volume_spike: self.series.last().volume > mean_volume * SUMMARY_VOLUME_SPIKE,
        })
    }
}

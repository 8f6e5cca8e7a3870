//! The closed set of supported indicators and their metadata.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::IndicatorsConfig;
use crate::indicators::error::IndicatorError;
use crate::models::indicators::IndicatorOutput;

/// A requestable indicator, keyed by its configuration name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    Sma20,
    Sma50,
    Ema12,
    Ema26,
    Rsi,
    Macd,
    Bollinger,
    Stochastic,
    WilliamsR,
    Cci,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 10] = [
        IndicatorKind::Sma20,
        IndicatorKind::Sma50,
        IndicatorKind::Ema12,
        IndicatorKind::Ema26,
        IndicatorKind::Rsi,
        IndicatorKind::Macd,
        IndicatorKind::Bollinger,
        IndicatorKind::Stochastic,
        IndicatorKind::WilliamsR,
        IndicatorKind::Cci,
    ];

    /// Configuration key of the indicator.
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Sma20 => "sma_20",
            IndicatorKind::Sma50 => "sma_50",
            IndicatorKind::Ema12 => "ema_12",
            IndicatorKind::Ema26 => "ema_26",
            IndicatorKind::Rsi => "rsi",
            IndicatorKind::Macd => "macd",
            IndicatorKind::Bollinger => "bollinger",
            IndicatorKind::Stochastic => "stoch",
            IndicatorKind::WilliamsR => "williams_r",
            IndicatorKind::Cci => "cci",
        }
    }

    /// Series this indicator produces.
    pub fn outputs(&self) -> &'static [IndicatorOutput] {
        match self {
            IndicatorKind::Sma20 => &[IndicatorOutput::Sma20],
            IndicatorKind::Sma50 => &[IndicatorOutput::Sma50],
            IndicatorKind::Ema12 => &[IndicatorOutput::Ema12],
            IndicatorKind::Ema26 => &[IndicatorOutput::Ema26],
            IndicatorKind::Rsi => &[IndicatorOutput::Rsi],
            IndicatorKind::Macd => &[
                IndicatorOutput::Macd,
                IndicatorOutput::MacdSignal,
                IndicatorOutput::MacdHistogram,
            ],
            IndicatorKind::Bollinger => &[
                IndicatorOutput::BbUpper,
                IndicatorOutput::BbMiddle,
                IndicatorOutput::BbLower,
            ],
            IndicatorKind::Stochastic => &[IndicatorOutput::StochK, IndicatorOutput::StochD],
            IndicatorKind::WilliamsR => &[IndicatorOutput::WilliamsR],
            IndicatorKind::Cci => &[IndicatorOutput::Cci],
        }
    }

    pub fn is_enabled(&self, config: &IndicatorsConfig) -> bool {
        match self {
            IndicatorKind::Sma20 => config.sma_20.enabled,
            IndicatorKind::Sma50 => config.sma_50.enabled,
            IndicatorKind::Ema12 => config.ema_12.enabled,
            IndicatorKind::Ema26 => config.ema_26.enabled,
            IndicatorKind::Rsi => config.rsi.enabled,
            IndicatorKind::Macd => config.macd.enabled,
            IndicatorKind::Bollinger => config.bollinger.enabled,
            IndicatorKind::Stochastic => config.stoch.enabled,
            IndicatorKind::WilliamsR => config.williams_r.enabled,
            IndicatorKind::Cci => config.cci.enabled,
        }
    }

    /// Bars needed before the indicator's first defined value.
    pub fn lookback(&self, config: &IndicatorsConfig) -> usize {
        match self {
            IndicatorKind::Sma20 => config.sma_20.period,
            IndicatorKind::Sma50 => config.sma_50.period,
            IndicatorKind::Ema12 => config.ema_12.period,
            IndicatorKind::Ema26 => config.ema_26.period,
            IndicatorKind::Rsi => config.rsi.period + 1,
            IndicatorKind::Macd => config.macd.slow + config.macd.signal - 1,
            IndicatorKind::Bollinger => config.bollinger.period,
            IndicatorKind::Stochastic => config.stoch.k_period + config.stoch.d_period - 1,
            IndicatorKind::WilliamsR => config.williams_r.period,
            IndicatorKind::Cci => config.cci.period,
        }
    }

    /// Enabled indicators, in registry order.
    pub fn enabled(config: &IndicatorsConfig) -> Vec<IndicatorKind> {
        Self::ALL
            .iter()
            .copied()
            .filter(|kind| kind.is_enabled(config))
            .collect()
    }
}

impl FromStr for IndicatorKind {
    type Err = IndicatorError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| IndicatorError::UnknownIndicator(name.to_string()))
    }
}

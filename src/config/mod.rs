//! Analysis configuration.
//!
//! Every field carries a serde default equal to the reference defaults, so a
//! config document only has to name what it overrides.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::indicators::error::IndicatorError;
use crate::models::alert::PriceTargets;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error(transparent)]
    InvalidIndicator(#[from] IndicatorError),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Deployment environment, from `APP_ENV` (defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

/// Single-period indicator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodConfig {
    pub enabled: bool,
    pub period: usize,
}

impl PeriodConfig {
    pub const fn new(period: usize, enabled: bool) -> Self {
        Self { enabled, period }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_rsi_period")]
    pub period: usize,
    #[serde(default = "default_overbought")]
    pub overbought: f64,
    #[serde(default = "default_oversold")]
    pub oversold: f64,
}

fn default_rsi_period() -> usize {
    14
}

fn default_overbought() -> f64 {
    70.0
}

fn default_oversold() -> f64 {
    30.0
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            period: default_rsi_period(),
            overbought: default_overbought(),
            oversold: default_oversold(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_macd_fast")]
    pub fast: usize,
    #[serde(default = "default_macd_slow")]
    pub slow: usize,
    #[serde(default = "default_macd_signal")]
    pub signal: usize,
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fast: default_macd_fast(),
            slow: default_macd_slow(),
            signal: default_macd_signal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_bollinger_period")]
    pub period: usize,
    #[serde(default = "default_bollinger_std")]
    pub std: f64,
}

fn default_bollinger_period() -> usize {
    20
}

fn default_bollinger_std() -> f64 {
    2.0
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            period: default_bollinger_period(),
            std: default_bollinger_std(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticConfig {
    #[serde(default = "default_false")]
    pub enabled: bool,
    #[serde(default = "default_stoch_k")]
    pub k_period: usize,
    #[serde(default = "default_stoch_d")]
    pub d_period: usize,
}

fn default_stoch_k() -> usize {
    14
}

fn default_stoch_d() -> usize {
    3
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            k_period: default_stoch_k(),
            d_period: default_stoch_d(),
        }
    }
}

fn default_sma_20() -> PeriodConfig {
    PeriodConfig::new(20, true)
}

fn default_sma_50() -> PeriodConfig {
    PeriodConfig::new(50, true)
}

fn default_ema_12() -> PeriodConfig {
    PeriodConfig::new(12, false)
}

fn default_ema_26() -> PeriodConfig {
    PeriodConfig::new(26, false)
}

fn default_williams_r() -> PeriodConfig {
    PeriodConfig::new(14, false)
}

fn default_cci() -> PeriodConfig {
    PeriodConfig::new(20, false)
}

/// Per-indicator parameters. The set of indicators is closed; each has its
/// own field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "IndicatorsDocument")]
pub struct IndicatorsConfig {
    pub sma_20: PeriodConfig,
    pub sma_50: PeriodConfig,
    pub ema_12: PeriodConfig,
    pub ema_26: PeriodConfig,
    pub rsi: RsiConfig,
    pub macd: MacdConfig,
    pub bollinger: BollingerConfig,
    pub stoch: StochasticConfig,
    pub williams_r: PeriodConfig,
    pub cci: PeriodConfig,
}

/// A single-period entry as written in a config document. Missing fields
/// fall back to that indicator's own defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct PeriodOverride {
    enabled: Option<bool>,
    period: Option<usize>,
}

impl PeriodOverride {
    fn over(self, base: PeriodConfig) -> PeriodConfig {
        PeriodConfig {
            enabled: self.enabled.unwrap_or(base.enabled),
            period: self.period.unwrap_or(base.period),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct IndicatorsDocument {
    #[serde(default)]
    sma_20: PeriodOverride,
    #[serde(default)]
    sma_50: PeriodOverride,
    #[serde(default)]
    ema_12: PeriodOverride,
    #[serde(default)]
    ema_26: PeriodOverride,
    #[serde(default)]
    rsi: RsiConfig,
    #[serde(default)]
    macd: MacdConfig,
    #[serde(default)]
    bollinger: BollingerConfig,
    #[serde(default)]
    stoch: StochasticConfig,
    #[serde(default)]
    williams_r: PeriodOverride,
    #[serde(default)]
    cci: PeriodOverride,
}

impl From<IndicatorsDocument> for IndicatorsConfig {
    fn from(doc: IndicatorsDocument) -> Self {
        Self {
            sma_20: doc.sma_20.over(default_sma_20()),
            sma_50: doc.sma_50.over(default_sma_50()),
            ema_12: doc.ema_12.over(default_ema_12()),
            ema_26: doc.ema_26.over(default_ema_26()),
            rsi: doc.rsi,
            macd: doc.macd,
            bollinger: doc.bollinger,
            stoch: doc.stoch,
            williams_r: doc.williams_r.over(default_williams_r()),
            cci: doc.cci.over(default_cci()),
        }
    }
}

impl Default for IndicatorsConfig {
    fn default() -> Self {
        Self {
            sma_20: default_sma_20(),
            sma_50: default_sma_50(),
            ema_12: default_ema_12(),
            ema_26: default_ema_26(),
            rsi: RsiConfig::default(),
            macd: MacdConfig::default(),
            bollinger: BollingerConfig::default(),
            stoch: StochasticConfig::default(),
            williams_r: default_williams_r(),
            cci: default_cci(),
        }
    }
}

impl IndicatorsConfig {
    /// Every indicator switched on, with default parameters.
    pub fn all_enabled() -> Self {
        let mut config = Self::default();
        config.ema_12.enabled = true;
        config.ema_26.enabled = true;
        config.stoch.enabled = true;
        config.williams_r.enabled = true;
        config.cci.enabled = true;
        config
    }

    pub fn validate(&self) -> Result<(), IndicatorError> {
        for (indicator, period) in [
            ("sma_20", self.sma_20.period),
            ("sma_50", self.sma_50.period),
            ("ema_12", self.ema_12.period),
            ("ema_26", self.ema_26.period),
            ("rsi", self.rsi.period),
            ("macd", self.macd.fast),
            ("macd", self.macd.slow),
            ("macd", self.macd.signal),
            ("bollinger", self.bollinger.period),
            ("stoch", self.stoch.k_period),
            ("stoch", self.stoch.d_period),
            ("williams_r", self.williams_r.period),
            ("cci", self.cci.period),
        ] {
            if period == 0 {
                return Err(IndicatorError::InvalidParameter {
                    indicator,
                    reason: "period must be at least 1".to_string(),
                });
            }
        }
        if self.macd.fast >= self.macd.slow {
            return Err(IndicatorError::InvalidParameter {
                indicator: "macd",
                reason: format!(
                    "fast period ({}) must be shorter than slow period ({})",
                    self.macd.fast, self.macd.slow
                ),
            });
        }
        if !self.bollinger.std.is_finite() || self.bollinger.std < 0.0 {
            return Err(IndicatorError::InvalidParameter {
                indicator: "bollinger",
                reason: format!("deviation multiplier must be non-negative, got {}", self.bollinger.std),
            });
        }
        if self.rsi.oversold >= self.rsi.overbought {
            return Err(IndicatorError::InvalidParameter {
                indicator: "rsi",
                reason: "oversold threshold must be below overbought threshold".to_string(),
            });
        }
        Ok(())
    }
}

/// Alert thresholds plus the polling cadence used by embedding loops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    #[serde(default = "default_oversold")]
    pub rsi_oversold: f64,
    #[serde(default = "default_overbought")]
    pub rsi_overbought: f64,
    #[serde(default = "default_volume_spike_multiplier")]
    pub volume_spike_multiplier: f64,
    /// Percent, e.g. `5.0` for 5%.
    #[serde(default = "default_price_change_threshold")]
    pub price_change_threshold: f64,
    #[serde(default = "default_update_interval", alias = "update_interval")]
    pub update_interval_secs: u64,
    /// Minimum gap between two alerts of the same kind. `0` disables dedup.
    #[serde(default)]
    pub cooldown_secs: u64,
}

fn default_volume_spike_multiplier() -> f64 {
    2.0
}

fn default_price_change_threshold() -> f64 {
    5.0
}

fn default_update_interval() -> u64 {
    300
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            rsi_oversold: default_oversold(),
            rsi_overbought: default_overbought(),
            volume_spike_multiplier: default_volume_spike_multiplier(),
            price_change_threshold: default_price_change_threshold(),
            update_interval_secs: default_update_interval(),
            cooldown_secs: 0,
        }
    }
}

impl AlertConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rsi_oversold >= self.rsi_overbought {
            return Err(ConfigError::InvalidThreshold(format!(
                "rsi_oversold ({}) must be below rsi_overbought ({})",
                self.rsi_oversold, self.rsi_overbought
            )));
        }
        if !(self.volume_spike_multiplier > 0.0) {
            return Err(ConfigError::InvalidThreshold(format!(
                "volume_spike_multiplier must be positive, got {}",
                self.volume_spike_multiplier
            )));
        }
        if !(self.price_change_threshold >= 0.0) {
            return Err(ConfigError::InvalidThreshold(format!(
                "price_change_threshold must be non-negative, got {}",
                self.price_change_threshold
            )));
        }
        Ok(())
    }
}

/// Configuration for one analysis pass. Immutable once the pass begins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub indicators: IndicatorsConfig,
    #[serde(default)]
    pub alerts: AlertConfig,
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.indicators.validate()?;
        self.alerts.validate()?;
        Ok(())
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Load from `ANALYSIS_CONFIG_PATH` when set, defaults otherwise.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var("ANALYSIS_CONFIG_PATH") {
            Ok(path) => Self::from_file(path),
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Settings for the polling worker binary, read from the environment.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub data_dir: PathBuf,
    pub symbols: Vec<String>,
    /// `0` runs a single pass and exits.
    pub interval_secs: u64,
    pub price_targets: HashMap<String, PriceTargets>,
}

impl WorkerConfig {
    pub fn from_env(alerts: &AlertConfig) -> Self {
        let data_dir = env::var("PRICE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        let symbols: Vec<String> = env::var("SYMBOLS")
            .map(|raw| parse_symbols(&raw))
            .unwrap_or_default();

        let interval_secs = env::var("ANALYZE_INTERVAL_SECONDS")
            .ok()
            .and_then(|i| i.parse().ok())
            .unwrap_or(alerts.update_interval_secs);

        let price_targets = symbols
            .iter()
            .map(|symbol| {
                let key = env_key(symbol);
                let targets = PriceTargets {
                    target_price: env::var(format!("TARGET_PRICE_{}", key))
                        .ok()
                        .and_then(|v| v.parse().ok()),
                    stop_loss: env::var(format!("STOP_LOSS_{}", key))
                        .ok()
                        .and_then(|v| v.parse().ok()),
                };
                (symbol.clone(), targets)
            })
            .collect();

        Self {
            data_dir,
            symbols,
            interval_secs,
            price_targets,
        }
    }
}

/// Split a comma-separated symbol list, dropping blanks and duplicates.
pub fn parse_symbols(raw: &str) -> Vec<String> {
    let mut symbols: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    symbols.sort();
    symbols.dedup();
    symbols
}

/// `THYAO.IS` → `THYAO_IS`
fn env_key(symbol: &str) -> String {
    symbol
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

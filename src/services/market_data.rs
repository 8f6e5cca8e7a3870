//! Price data sources feeding the analysis core.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::indicators::error::ValidationError;
use crate::indicators::parser::parse_price_series_from_records;
use crate::models::price::{PriceBar, PriceSeries};

#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("no price data for {0}")]
    UnknownSymbol(String),

    #[error("symbol {0:?} is not a plain file name")]
    InvalidSymbol(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub trait PriceDataSource: Send + Sync {
    /// Full validated history for `symbol`.
    fn load_series(&self, symbol: &str) -> Result<PriceSeries, DataSourceError>;
}

/// One bar as stored on disk. `null` fields mark an incomplete bar.
#[derive(Debug, Deserialize)]
struct StoredBar {
    timestamp: DateTime<Utc>,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    volume: Option<f64>,
}

impl From<StoredBar> for PriceBar {
    fn from(bar: StoredBar) -> Self {
        PriceBar::new(
            bar.timestamp,
            bar.open.unwrap_or(f64::NAN),
            bar.high.unwrap_or(f64::NAN),
            bar.low.unwrap_or(f64::NAN),
            bar.close.unwrap_or(f64::NAN),
            bar.volume.unwrap_or(f64::NAN),
        )
    }
}

/// Reads `<dir>/<SYMBOL>.json`, a JSON array of bars.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding `symbol`'s history. The symbol must name a file directly
    /// inside the data directory.
    pub fn path_for(&self, symbol: &str) -> Result<PathBuf, DataSourceError> {
        if symbol.is_empty() || symbol.contains(['/', '\\']) || symbol.contains("..") {
            return Err(DataSourceError::InvalidSymbol(symbol.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", symbol)))
    }
}

impl PriceDataSource for JsonFileSource {
    fn load_series(&self, symbol: &str) -> Result<PriceSeries, DataSourceError> {
        let path = self.path_for(symbol)?;
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DataSourceError::UnknownSymbol(symbol.to_string()))
            }
            Err(source) => return Err(DataSourceError::Io { path, source }),
        };

        let stored: Vec<StoredBar> = serde_json::from_str(&raw)
            .map_err(|source| DataSourceError::Parse { path, source })?;
        let bars: Vec<PriceBar> = stored.into_iter().map(PriceBar::from).collect();
        Ok(parse_price_series_from_records(&bars)?)
    }
}

/// Fixed in-memory histories, keyed by symbol.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    histories: HashMap<String, Vec<PriceBar>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(mut self, symbol: impl Into<String>, bars: Vec<PriceBar>) -> Self {
        self.histories.insert(symbol.into(), bars);
        self
    }
}

impl PriceDataSource for InMemorySource {
    fn load_series(&self, symbol: &str) -> Result<PriceSeries, DataSourceError> {
        let bars = self
            .histories
            .get(symbol)
            .ok_or_else(|| DataSourceError::UnknownSymbol(symbol.to_string()))?;
        Ok(parse_price_series_from_records(bars)?)
    }
}

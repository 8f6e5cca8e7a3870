//! Polling runtime: one analysis pass per symbol per tick.
//!
//! Passes for different symbols run in parallel on the blocking pool, each
//! over its own freshly loaded series. Alert state is written back only by
//! the task driving the runtime.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{AnalysisConfig, WorkerConfig};
use crate::models::alert::{AlertState, PriceTargets};
use crate::services::market_data::{DataSourceError, PriceDataSource};
use crate::signals::engine::{AnalysisReport, SignalEngine};

/// Outcome of one symbol's pass.
#[derive(Debug)]
pub struct SymbolReport {
    pub symbol: String,
    pub report: AnalysisReport,
}

pub struct AnalysisRuntime {
    source: Arc<dyn PriceDataSource>,
    config: Arc<AnalysisConfig>,
    symbols: Vec<String>,
    price_targets: HashMap<String, PriceTargets>,
    alert_states: HashMap<String, AlertState>,
}

impl AnalysisRuntime {
    pub fn new(
        source: Arc<dyn PriceDataSource>,
        config: Arc<AnalysisConfig>,
        worker: &WorkerConfig,
    ) -> Self {
        Self {
            source,
            config,
            symbols: worker.symbols.clone(),
            price_targets: worker.price_targets.clone(),
            alert_states: HashMap::new(),
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn alert_state(&self, symbol: &str) -> Option<&AlertState> {
        self.alert_states.get(symbol)
    }

    /// Analyze every symbol once. Symbols that fail to load are logged and
    /// skipped.
    pub async fn run_once(&mut self, now: DateTime<Utc>) -> Vec<SymbolReport> {
        let mut handles = Vec::with_capacity(self.symbols.len());

        for symbol in &self.symbols {
            let source = Arc::clone(&self.source);
            let config = Arc::clone(&self.config);
            let targets = self.price_targets.get(symbol).copied().unwrap_or_default();
            let state = self.alert_states.get(symbol).cloned().unwrap_or_default();
            let task_symbol = symbol.clone();

            let handle = tokio::task::spawn_blocking(move || {
                let series = source.load_series(&task_symbol)?;
                Ok::<_, DataSourceError>(SignalEngine::run_pass(
                    &series, &config, &targets, &state, now,
                ))
            });
            handles.push((symbol.clone(), handle));
        }

        let mut reports = Vec::with_capacity(handles.len());
        for (symbol, handle) in handles {
            match handle.await {
                Ok(Ok(report)) => {
                    info!(
                        symbol = %symbol,
                        signal = %report.signal.signal,
                        strength = report.strength.overall,
                        alerts = report.alerts.len(),
                        "Symbol analyzed"
                    );
                    for alert in &report.alerts {
                        info!(symbol = %symbol, kind = alert.kind.name(), value = alert.value, "{}", alert.message);
                    }
                    self.alert_states
                        .insert(symbol.clone(), report.alert_state.clone());
                    reports.push(SymbolReport { symbol, report });
                }
                Ok(Err(e)) => warn!(symbol = %symbol, error = %e, "Skipping symbol"),
                Err(e) => warn!(symbol = %symbol, error = %e, "Analysis task failed"),
            }
        }

        reports
    }
}

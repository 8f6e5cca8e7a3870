//! Bistrix Worker
//!
//! Periodically loads price history for the configured symbols and runs an
//! analysis pass over each.

use bistrix::config::{AnalysisConfig, WorkerConfig};
use bistrix::core::runtime::AnalysisRuntime;
use bistrix::logging;
use bistrix::services::market_data::{JsonFileSource, PriceDataSource};
use chrono::Utc;
use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let env = bistrix::config::get_environment();
    info!("Starting Bistrix Worker");
    info!(environment = %env, "Environment");

    let config = Arc::new(AnalysisConfig::load()?);
    let worker_config = WorkerConfig::from_env(&config.alerts);

    if worker_config.symbols.is_empty() {
        warn!("SYMBOLS is empty - nothing to analyze");
        return Ok(());
    }
    info!(
        symbols = ?worker_config.symbols,
        data_dir = %worker_config.data_dir.display(),
        interval = worker_config.interval_secs,
        "Worker configured"
    );

    let source: Arc<dyn PriceDataSource> =
        Arc::new(JsonFileSource::new(worker_config.data_dir.clone()));
    let mut runtime = AnalysisRuntime::new(source, config, &worker_config);

    if worker_config.interval_secs == 0 {
        runtime.run_once(Utc::now()).await;
        info!("Single pass complete");
        return Ok(());
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(worker_config.interval_secs));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let reports = runtime.run_once(Utc::now()).await;
                info!(analyzed = reports.len(), total = runtime.symbols().len(), "Pass complete");
            }
            _ = signal::ctrl_c() => {
                info!("Shutting down worker...");
                break;
            }
        }
    }

    info!("Worker stopped");
    Ok(())
}

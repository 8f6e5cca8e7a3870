//! Polling runtime over several symbols.

use bistrix::config::{AnalysisConfig, AlertConfig, WorkerConfig};
use bistrix::core::runtime::AnalysisRuntime;
use bistrix::models::alert::{AlertKind, PriceTargets};
use bistrix::models::price::PriceBar;
use bistrix::services::market_data::{InMemorySource, JsonFileSource, PriceDataSource};
use chrono::{Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use super::test_utils::write_history;

fn history(count: usize) -> Vec<PriceBar> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let close = 100.0 + i as f64 * 0.5;
            PriceBar::new(
                start + Duration::days(i as i64),
                close,
                close + 1.0,
                close - 1.0,
                close,
                1_000.0,
            )
        })
        .collect()
}

fn worker_config(symbols: &[&str], targets: HashMap<String, PriceTargets>) -> WorkerConfig {
    WorkerConfig {
        data_dir: PathBuf::from("unused"),
        symbols: symbols.iter().map(|s| s.to_string()).collect(),
        interval_secs: 0,
        price_targets: targets,
    }
}

#[tokio::test]
async fn test_run_once_skips_failing_symbols() {
    let source: Arc<dyn PriceDataSource> = Arc::new(
        InMemorySource::new()
            .with_history("GARAN.IS", history(80))
            .with_history("SHORT.IS", history(20)),
    );
    let config = Arc::new(AnalysisConfig::default());
    let worker = worker_config(&["GARAN.IS", "MISSING.IS", "SHORT.IS"], HashMap::new());

    let mut runtime = AnalysisRuntime::new(source, config, &worker);
    let reports = runtime.run_once(Utc::now()).await;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].symbol, "GARAN.IS");
    assert!(runtime.alert_state("GARAN.IS").is_some());
    assert!(runtime.alert_state("MISSING.IS").is_none());
}

#[test]
fn test_cooldown_carries_across_ticks() {
    let mut targets = HashMap::new();
    targets.insert(
        "GARAN.IS".to_string(),
        PriceTargets {
            target_price: Some(100.0),
            stop_loss: None,
        },
    );
    let source: Arc<dyn PriceDataSource> =
        Arc::new(InMemorySource::new().with_history("GARAN.IS", history(80)));
    let config = Arc::new(AnalysisConfig {
        alerts: AlertConfig {
            cooldown_secs: 3_600,
            ..AlertConfig::default()
        },
        ..AnalysisConfig::default()
    });
    let worker = worker_config(&["GARAN.IS"], targets);
    let mut runtime = AnalysisRuntime::new(source, config, &worker);
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();

    let first = tokio_test::block_on(runtime.run_once(now));
    let fired = |reports: &[bistrix::core::runtime::SymbolReport]| {
        reports[0]
            .report
            .alerts
            .iter()
            .filter(|a| a.kind == AlertKind::PriceTarget)
            .count()
    };
    assert_eq!(fired(&first), 1);

    let second = tokio_test::block_on(runtime.run_once(now + Duration::minutes(10)));
    assert_eq!(fired(&second), 0);

    let third = tokio_test::block_on(runtime.run_once(now + Duration::hours(2)));
    assert_eq!(fired(&third), 1);
}

#[tokio::test]
async fn test_runtime_reads_json_files() {
    let dir = TempDir::new().unwrap();
    write_history(dir.path(), "AKBNK.IS", 70, |i| 50.0 + (i % 7) as f64);
    write_history(dir.path(), "THYAO.IS", 70, |i| 200.0 - i as f64);

    let source: Arc<dyn PriceDataSource> = Arc::new(JsonFileSource::new(dir.path()));
    let worker = worker_config(&["AKBNK.IS", "THYAO.IS"], HashMap::new());
    let mut runtime = AnalysisRuntime::new(source, Arc::new(AnalysisConfig::default()), &worker);

    let reports = runtime.run_once(Utc::now()).await;
    let symbols: Vec<&str> = reports.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["AKBNK.IS", "THYAO.IS"]);
}

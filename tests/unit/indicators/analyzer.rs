//! Unit tests for the technical analyzer

use bistrix::config::IndicatorsConfig;
use bistrix::indicators::analyzer::{compute_indicators, TechnicalAnalyzer};
use bistrix::indicators::error::IndicatorError;
use bistrix::models::indicators::IndicatorOutput;
use bistrix::models::price::PriceSeries;

use crate::fixtures::{bars_from_closes, series_from_closes, wave_closes};

#[test]
fn test_unknown_indicator_keeps_earlier_results() {
    let series = series_from_closes(&wave_closes(60));
    let config = IndicatorsConfig::default();
    let mut analyzer = TechnicalAnalyzer::new(&series, &config);

    analyzer.add_indicator("sma_20").unwrap();
    assert_eq!(
        analyzer.add_indicator("ichimoku"),
        Err(IndicatorError::UnknownIndicator("ichimoku".to_string()))
    );
    assert!(analyzer.indicators().sma_20.is_some());
    assert!(analyzer.indicators().rsi.is_none());
}

#[test]
fn test_default_config_outputs() {
    let series = series_from_closes(&wave_closes(60));
    let set = compute_indicators(&series, &IndicatorsConfig::default());

    let outputs: Vec<IndicatorOutput> = set.outputs().into_iter().map(|(o, _)| o).collect();
    assert_eq!(
        outputs,
        vec![
            IndicatorOutput::Sma20,
            IndicatorOutput::Sma50,
            IndicatorOutput::Rsi,
            IndicatorOutput::Macd,
            IndicatorOutput::MacdSignal,
            IndicatorOutput::MacdHistogram,
            IndicatorOutput::BbUpper,
            IndicatorOutput::BbMiddle,
            IndicatorOutput::BbLower,
        ]
    );
    for (_, values) in set.outputs() {
        assert_eq!(values.len(), series.len());
    }
}

#[test]
fn test_period_beyond_history_is_undefined() {
    let series = series_from_closes(&wave_closes(60));
    let mut config = IndicatorsConfig::default();
    config.sma_50.period = 200;

    let set = compute_indicators(&series, &config);
    let sma = set.sma_50.unwrap();
    assert_eq!(sma.len(), 60);
    assert!(sma.is_all_undefined());
}

#[test]
fn test_latest_indicators_skip_undefined() {
    let series = series_from_closes(&wave_closes(60));
    let mut config = IndicatorsConfig::all_enabled();
    config.cci.period = 100;

    let analyzer = TechnicalAnalyzer::with_enabled(&series, &config);
    let latest = analyzer.latest_indicators();
    assert!(latest.contains_key(&IndicatorOutput::StochK));
    assert!(latest.contains_key(&IndicatorOutput::WilliamsR));
    assert!(!latest.contains_key(&IndicatorOutput::Cci));
}

#[test]
fn test_summary_snapshot() {
    let mut closes = vec![100.0; 59];
    closes.push(103.0);
    let mut bars = bars_from_closes(&closes);
    bars[59].volume = 2_000.0;
    let series = PriceSeries::new(bars).unwrap();
    let config = IndicatorsConfig::default();

    let summary = TechnicalAnalyzer::with_enabled(&series, &config).summary().unwrap();
    assert_eq!(summary.current_price, 103.0);
    assert!((summary.price_change - 3.0).abs() < 1e-9);
    assert_eq!(summary.support_level, 99.0);
    assert_eq!(summary.resistance_level, 104.0);
    assert!(summary.volume_spike);
    assert!(summary.latest_indicators.contains_key(&IndicatorOutput::Sma20));
}

//! Unit tests for the signal rules and vote combination

use bistrix::config::AnalysisConfig;
use bistrix::indicators::analyzer::compute_indicators;
use bistrix::models::indicators::{BollingerSeries, IndicatorSeries, IndicatorSet};
use bistrix::models::price::PriceSeries;
use bistrix::models::signal::{RuleKind, Signal, Vote};
use bistrix::signals::rules::{
    bollinger_rule, combine_signals, evaluate_rules, moving_average_rule, volume_rule, RuleContext,
};

use crate::fixtures::{bars_with_volumes, series_from_closes};

/// Declining closes followed by a steady climb: SMA20 crosses above SMA50
/// exactly once, at index 75.
fn golden_cross_closes() -> Vec<f64> {
    (0..100)
        .map(|i| {
            if i < 60 {
                200.0 - i as f64
            } else {
                140.0 + 3.0 * (i as f64 - 59.0)
            }
        })
        .collect()
}

#[test]
fn test_moving_average_rule_fires_only_at_crossing_bar() {
    let closes = golden_cross_closes();
    let config = AnalysisConfig::default();
    let mut fired = Vec::new();

    for len in 50..=closes.len() {
        let series = series_from_closes(&closes[..len]);
        let indicators = compute_indicators(&series, &config.indicators);
        let ctx = RuleContext {
            series: &series,
            indicators: &indicators,
            config: &config,
        };
        if let Some(vote) = moving_average_rule(&ctx) {
            fired.push((len - 1, vote));
        }
    }

    assert_eq!(fired, vec![(75, Vote::Buy)]);
}

/// 49 quiet bars then one bar at exactly 3x the trailing 20-bar mean
/// (the mean includes the spike bar itself).
fn volume_spike_series(last_close: f64) -> PriceSeries {
    let mut closes = vec![100.0; 49];
    closes.push(last_close);
    let mut volumes = vec![1_000.0; 49];
    volumes.push(57_000.0 / 17.0);
    PriceSeries::new(bars_with_volumes(&closes, &volumes)).unwrap()
}

#[test]
fn test_volume_rule_follows_price_direction() {
    let config = AnalysisConfig::default();
    let indicators = IndicatorSet::new();

    for (close, expected) in [
        (103.0, Some(Vote::Buy)),
        (97.0, Some(Vote::Sell)),
        (100.0, None),
    ] {
        let series = volume_spike_series(close);
        let ctx = RuleContext {
            series: &series,
            indicators: &indicators,
            config: &config,
        };
        assert_eq!(volume_rule(&ctx), expected, "close {}", close);
    }
}

#[test]
fn test_volume_rule_needs_spike() {
    let mut closes = vec![100.0; 49];
    closes.push(105.0);
    let series = series_from_closes(&closes);
    let config = AnalysisConfig::default();
    let indicators = IndicatorSet::new();
    let ctx = RuleContext {
        series: &series,
        indicators: &indicators,
        config: &config,
    };
    assert_eq!(volume_rule(&ctx), None);
}

#[test]
fn test_bollinger_rule_tolerance() {
    let series = series_from_closes(&[100.0; 50]);
    let config = AnalysisConfig::default();

    for (lower, upper, expected) in [
        (98.5, 120.0, Some(Vote::Buy)),
        (80.0, 101.5, Some(Vote::Sell)),
        (90.0, 110.0, None),
        (f64::NAN, 110.0, None),
    ] {
        let mut indicators = IndicatorSet::new();
        indicators.bollinger = Some(BollingerSeries {
            upper: IndicatorSeries::new(vec![upper]),
            middle: IndicatorSeries::new(vec![100.0]),
            lower: IndicatorSeries::new(vec![lower]),
        });
        let ctx = RuleContext {
            series: &series,
            indicators: &indicators,
            config: &config,
        };
        assert_eq!(bollinger_rule(&ctx), expected);
    }
}

#[test]
fn test_two_buys_one_sell_is_buy() {
    assert_eq!(combine_signals(&[Vote::Buy, Vote::Buy, Vote::Sell]), Signal::Buy);
    assert_eq!(combine_signals(&[Vote::Sell, Vote::Sell, Vote::Buy]), Signal::Sell);
}

#[test]
fn test_ties_hold() {
    assert_eq!(combine_signals(&[]), Signal::Hold);
    assert_eq!(combine_signals(&[Vote::Buy, Vote::Sell]), Signal::Hold);
}

#[test]
fn test_evaluate_rules_reports_every_rule_in_order() {
    let series = volume_spike_series(103.0);
    let config = AnalysisConfig::default();
    let indicators = compute_indicators(&series, &config.indicators);
    let output = evaluate_rules(&RuleContext {
        series: &series,
        indicators: &indicators,
        config: &config,
    });

    let rules: Vec<RuleKind> = output.votes.iter().map(|v| v.rule).collect();
    assert_eq!(
        rules,
        vec![
            RuleKind::Rsi,
            RuleKind::Macd,
            RuleKind::MovingAverage,
            RuleKind::Bollinger,
            RuleKind::Volume,
        ]
    );
    let volume = output.votes.iter().find(|v| v.rule == RuleKind::Volume).unwrap();
    assert_eq!(volume.vote, Some(Vote::Buy));
    let cast = output.votes.iter().filter(|v| v.vote.is_some()).count();
    assert_eq!(output.buy_votes + output.sell_votes, cast);
}

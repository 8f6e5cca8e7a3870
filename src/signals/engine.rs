//! Runs one complete analysis pass.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::alerts::evaluate_alerts;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::indicators::analyzer::{AnalysisSummary, TechnicalAnalyzer};
use crate::indicators::parser::parse_price_series_from_records;
use crate::models::alert::{AlertEvent, AlertState, PriceTargets};
use crate::models::indicators::IndicatorSet;
use crate::models::price::{PriceBar, PriceSeries};
use crate::models::signal::{SignalOutput, StrengthVector};
use crate::signals::rules::{evaluate_rules, RuleContext};
use crate::signals::scoring::calculate_strength;

/// Everything one pass derives from a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub indicators: IndicatorSet,
    pub signal: SignalOutput,
    pub strength: StrengthVector,
    pub alerts: Vec<AlertEvent>,
    /// State to hand to the next pass over the same instrument.
    #[serde(skip)]
    pub alert_state: AlertState,
    /// `None` when the series is too short for trend strength.
    pub summary: Option<AnalysisSummary>,
}

pub struct SignalEngine;

impl SignalEngine {
    /// Analyze an already validated series with a validated config.
    pub fn run_pass(
        series: &PriceSeries,
        config: &AnalysisConfig,
        targets: &PriceTargets,
        state: &AlertState,
        now: DateTime<Utc>,
    ) -> AnalysisReport {
        let analyzer = TechnicalAnalyzer::with_enabled(series, &config.indicators);
        let summary = analyzer.summary();
        let indicators = analyzer.into_indicators();

        let ctx = RuleContext {
            series,
            indicators: &indicators,
            config,
        };
        let signal = evaluate_rules(&ctx);
        let strength = calculate_strength(series, &indicators);
        let (alerts, alert_state) =
            evaluate_alerts(series, &indicators, &config.alerts, targets, state, now);

        debug!(
            bars = series.len(),
            signal = %signal.signal,
            buy_votes = signal.buy_votes,
            sell_votes = signal.sell_votes,
            overall = strength.overall,
            alerts = alerts.len(),
            "analysis pass complete"
        );

        AnalysisReport {
            indicators,
            signal,
            strength,
            alerts,
            alert_state,
            summary,
        }
    }

    /// Validate raw bars and config, then run a pass.
    pub fn analyze(
        bars: &[PriceBar],
        config: &AnalysisConfig,
        targets: &PriceTargets,
        state: &AlertState,
        now: DateTime<Utc>,
    ) -> Result<AnalysisReport> {
        config.validate()?;
        let series = parse_price_series_from_records(bars)?;
        Ok(Self::run_pass(&series, config, targets, state, now))
    }
}

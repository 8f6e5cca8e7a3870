//! Rule detectors and the majority vote that combines them.
//!
//! Every rule reads only the latest one or two points of the indicator state.
//! A rule whose inputs are missing or undefined abstains.

use tracing::trace;

use crate::common::math;
use crate::config::AnalysisConfig;
use crate::models::indicators::{IndicatorSeries, IndicatorSet};
use crate::models::price::PriceSeries;
use crate::models::signal::{RuleKind, RuleVote, Signal, SignalOutput, Vote};

/// Bars in the trailing volume mean, current bar included.
pub const VOLUME_MEAN_BARS: usize = 20;
/// One-bar price move the volume rule needs, as a fraction.
pub const VOLUME_PRICE_MOVE: f64 = 0.02;
/// How close to a band counts as touching it, as a fraction of the band.
pub const BAND_TOLERANCE: f64 = 0.02;

/// Inputs every rule reads from.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub series: &'a PriceSeries,
    pub indicators: &'a IndicatorSet,
    pub config: &'a AnalysisConfig,
}

pub type RuleFn = fn(&RuleContext<'_>) -> Option<Vote>;

/// The fixed rule set, in evaluation order.
pub const RULES: [(RuleKind, RuleFn); 5] = [
    (RuleKind::Rsi, rsi_rule),
    (RuleKind::Macd, macd_rule),
    (RuleKind::MovingAverage, moving_average_rule),
    (RuleKind::Bollinger, bollinger_rule),
    (RuleKind::Volume, volume_rule),
];

pub fn rsi_rule(ctx: &RuleContext<'_>) -> Option<Vote> {
    let rsi = ctx.indicators.rsi.as_ref()?.latest()?;
    let thresholds = &ctx.config.indicators.rsi;
    if rsi <= thresholds.oversold {
        Some(Vote::Buy)
    } else if rsi >= thresholds.overbought {
        Some(Vote::Sell)
    } else {
        None
    }
}

pub fn macd_rule(ctx: &RuleContext<'_>) -> Option<Vote> {
    let macd = ctx.indicators.macd.as_ref()?;
    crossover(&macd.macd, &macd.signal)
}

/// Golden cross (SMA20 over SMA50) buys, death cross sells.
pub fn moving_average_rule(ctx: &RuleContext<'_>) -> Option<Vote> {
    let fast = ctx.indicators.sma_20.as_ref()?;
    let slow = ctx.indicators.sma_50.as_ref()?;
    crossover(fast, slow)
}

pub fn bollinger_rule(ctx: &RuleContext<'_>) -> Option<Vote> {
    let bands = ctx.indicators.bollinger.as_ref()?;
    let upper = bands.upper.latest()?;
    let lower = bands.lower.latest()?;
    let close = ctx.series.last().close;

    if close <= lower * (1.0 + BAND_TOLERANCE) {
        Some(Vote::Buy)
    } else if close >= upper * (1.0 - BAND_TOLERANCE) {
        Some(Vote::Sell)
    } else {
        None
    }
}

/// Heavy volume confirming a move of more than 2% in either direction.
pub fn volume_rule(ctx: &RuleContext<'_>) -> Option<Vote> {
    let volumes = ctx.series.volumes();
    let mean_volume = math::trailing_mean(&volumes, VOLUME_MEAN_BARS)?;
    let current = ctx.series.last().volume;
    if current <= mean_volume * ctx.config.alerts.volume_spike_multiplier {
        return None;
    }

    let change = ctx.series.last_change_ratio();
    if change > VOLUME_PRICE_MOVE {
        Some(Vote::Buy)
    } else if change < -VOLUME_PRICE_MOVE {
        Some(Vote::Sell)
    } else {
        None
    }
}

/// Vote for a crossing of `fast` over `slow` between the last two bars.
fn crossover(fast: &IndicatorSeries, slow: &IndicatorSeries) -> Option<Vote> {
    let (prev_fast, cur_fast) = fast.latest_pair()?;
    let (prev_slow, cur_slow) = slow.latest_pair()?;

    if prev_fast <= prev_slow && cur_fast > cur_slow {
        Some(Vote::Buy)
    } else if prev_fast >= prev_slow && cur_fast < cur_slow {
        Some(Vote::Sell)
    } else {
        None
    }
}

/// Unweighted majority vote. Ties, including no votes at all, hold.
pub fn combine_signals(votes: &[Vote]) -> Signal {
    let buys = votes.iter().filter(|v| **v == Vote::Buy).count();
    let sells = votes.len() - buys;
    match buys.cmp(&sells) {
        std::cmp::Ordering::Greater => Signal::Buy,
        std::cmp::Ordering::Less => Signal::Sell,
        std::cmp::Ordering::Equal => Signal::Hold,
    }
}

/// Run every rule and combine the votes.
pub fn evaluate_rules(ctx: &RuleContext<'_>) -> SignalOutput {
    let votes: Vec<RuleVote> = RULES
        .iter()
        .map(|(rule, detect)| {
            let vote = detect(ctx);
            trace!(rule = rule.name(), ?vote, "rule evaluated");
            RuleVote { rule: *rule, vote }
        })
        .collect();

    let cast: Vec<Vote> = votes.iter().filter_map(|v| v.vote).collect();
    let buy_votes = cast.iter().filter(|v| **v == Vote::Buy).count();

    SignalOutput {
        signal: combine_signals(&cast),
        buy_votes,
        sell_votes: cast.len() - buy_votes,
        votes,
    }
}

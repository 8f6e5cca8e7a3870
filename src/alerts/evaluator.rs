//! Threshold alerts over the latest bar.
//!
//! Checks are stateless. Cross-pass deduplication goes through an explicit
//! [`AlertState`] that the caller stores between passes.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::common::math;
use crate::config::AlertConfig;
use crate::models::alert::{AlertEvent, AlertKind, AlertState, PriceDirection, PriceTargets};
use crate::models::indicators::IndicatorSet;
use crate::models::price::PriceSeries;

pub const ALERT_VOLUME_BARS: usize = 20;

/// Target and stop-loss checks against the latest close.
pub fn check_price_alerts(
    series: &PriceSeries,
    targets: &PriceTargets,
    now: DateTime<Utc>,
) -> Vec<AlertEvent> {
    let close = series.last().close;
    let mut alerts = Vec::new();

    if let Some(target) = targets.target_price {
        if close >= target {
            alerts.push(AlertEvent {
                kind: AlertKind::PriceTarget,
                message: format!("Price target {:.2} reached, last close {:.2}", target, close),
                timestamp: now,
                value: close,
                direction: None,
            });
        }
    }

    if let Some(stop) = targets.stop_loss {
        if close <= stop {
            alerts.push(AlertEvent {
                kind: AlertKind::StopLoss,
                message: format!("Stop loss {:.2} triggered, last close {:.2}", stop, close),
                timestamp: now,
                value: close,
                direction: None,
            });
        }
    }

    alerts
}

/// RSI, volume and price-move checks. Each is independent of the others.
pub fn check_technical_alerts(
    series: &PriceSeries,
    indicators: &IndicatorSet,
    config: &AlertConfig,
    now: DateTime<Utc>,
) -> Vec<AlertEvent> {
    let mut alerts = Vec::new();

    if let Some(rsi) = indicators.rsi.as_ref().and_then(|s| s.latest()) {
        if rsi <= config.rsi_oversold {
            alerts.push(AlertEvent {
                kind: AlertKind::RsiOversold,
                message: format!("RSI oversold at {:.2}", rsi),
                timestamp: now,
                value: rsi,
                direction: None,
            });
        } else if rsi >= config.rsi_overbought {
            alerts.push(AlertEvent {
                kind: AlertKind::RsiOverbought,
                message: format!("RSI overbought at {:.2}", rsi),
                timestamp: now,
                value: rsi,
                direction: None,
            });
        }
    }

    let volume = series.last().volume;
    if let Some(mean_volume) = math::trailing_mean(&series.volumes(), ALERT_VOLUME_BARS) {
        if mean_volume > 0.0 && volume > mean_volume * config.volume_spike_multiplier {
            alerts.push(AlertEvent {
                kind: AlertKind::VolumeSpike,
                message: format!("Volume spike: {:.0} against a mean of {:.0}", volume, mean_volume),
                timestamp: now,
                value: volume / mean_volume,
                direction: None,
            });
        }
    }

    let change_pct = series.last_change_ratio() * 100.0;
    if change_pct.abs() > config.price_change_threshold {
        let direction = if change_pct > 0.0 {
            PriceDirection::Up
        } else {
            PriceDirection::Down
        };
        let label = match direction {
            PriceDirection::Up => "rise",
            PriceDirection::Down => "drop",
        };
        alerts.push(AlertEvent {
            kind: AlertKind::PriceChange,
            message: format!("Large price {}: {:.2}%", label, change_pct.abs()),
            timestamp: now,
            value: change_pct.abs(),
            direction: Some(direction),
        });
    }

    alerts
}

/// Run every alert check and apply the cooldown.
///
/// Returns the events that survive the cooldown together with the state the
/// caller should pass to the next evaluation. With `cooldown_secs == 0` every
/// triggered alert is emitted.
pub fn evaluate_alerts(
    series: &PriceSeries,
    indicators: &IndicatorSet,
    config: &AlertConfig,
    targets: &PriceTargets,
    state: &AlertState,
    now: DateTime<Utc>,
) -> (Vec<AlertEvent>, AlertState) {
    let triggered = check_price_alerts(series, targets, now)
        .into_iter()
        .chain(check_technical_alerts(series, indicators, config, now));

    let mut next = state.clone();
    let mut emitted = Vec::new();

    for alert in triggered {
        if config.cooldown_secs > 0 {
            if let Some(last) = state.last_emitted(alert.kind) {
                let elapsed = (now - last).num_seconds();
                if elapsed < 0 || (elapsed as u64) < config.cooldown_secs {
                    debug!(kind = alert.kind.name(), %last, "alert suppressed by cooldown");
                    continue;
                }
            }
        }
        next = next.with_emitted(alert.kind, now);
        emitted.push(alert);
    }

    (emitted, next)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    PriceTarget,
    StopLoss,
    RsiOversold,
    RsiOverbought,
    VolumeSpike,
    PriceChange,
}

impl AlertKind {
    pub fn name(&self) -> &'static str {
        match self {
            AlertKind::PriceTarget => "price_target",
            AlertKind::StopLoss => "stop_loss",
            AlertKind::RsiOversold => "rsi_oversold",
            AlertKind::RsiOverbought => "rsi_overbought",
            AlertKind::VolumeSpike => "volume_spike",
            AlertKind::PriceChange => "price_change",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceDirection {
    Up,
    Down,
}

/// A threshold condition that held at evaluation time.
///
/// `value` carries the kind-specific payload: the close for price alerts,
/// the RSI reading, the volume ratio, or the absolute percentage change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEvent {
    pub kind: AlertKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<PriceDirection>,
}

/// Caller-supplied price levels for one instrument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTargets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
}

/// When each alert kind last fired for one instrument.
///
/// The evaluator never mutates this; it takes the prior state and hands back
/// the next one, leaving storage to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertState {
    last_emitted: HashMap<AlertKind, DateTime<Utc>>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_emitted(&self, kind: AlertKind) -> Option<DateTime<Utc>> {
        self.last_emitted.get(&kind).copied()
    }

    /// Copy of this state with `kind` stamped at `at`.
    pub fn with_emitted(&self, kind: AlertKind, at: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        next.last_emitted.insert(kind, at);
        next
    }
}

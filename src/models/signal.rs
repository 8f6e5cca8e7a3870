use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete trading signal for one analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        };
        f.write_str(label)
    }
}

/// A non-abstaining rule outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Vote {
    Buy,
    Sell,
}

/// The fixed set of signal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Rsi,
    Macd,
    MovingAverage,
    Bollinger,
    Volume,
}

impl RuleKind {
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Rsi => "rsi",
            RuleKind::Macd => "macd",
            RuleKind::MovingAverage => "moving_average",
            RuleKind::Bollinger => "bollinger",
            RuleKind::Volume => "volume",
        }
    }
}

/// One rule's outcome. `vote == None` means the rule abstained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleVote {
    pub rule: RuleKind,
    pub vote: Option<Vote>,
}

/// Combined signal together with the per-rule votes that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalOutput {
    pub signal: Signal,
    pub votes: Vec<RuleVote>,
    pub buy_votes: usize,
    pub sell_votes: usize,
}

/// Continuous composite score. Independent of [`Signal`]; the two may disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthVector {
    pub overall: f64,
    pub trend: f64,
    pub momentum: f64,
    pub volume: f64,
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A float series aligned 1:1 with its source price series.
///
/// Undefined positions (not enough history yet) are stored as NaN. Accessors
/// only ever hand out finite values, so a NaN can never leak into a rule
/// comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorSeries(Vec<f64>);

impl IndicatorSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `index` if it is defined.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied().filter(|v| v.is_finite())
    }

    /// The last value, if defined.
    pub fn latest(&self) -> Option<f64> {
        self.0.last().copied().filter(|v| v.is_finite())
    }

    /// `(previous, current)` when both of the last two values are defined.
    pub fn latest_pair(&self) -> Option<(f64, f64)> {
        let n = self.0.len();
        if n < 2 {
            return None;
        }
        Some((self.get(n - 2)?, self.get(n - 1)?))
    }

    pub fn first_defined_index(&self) -> Option<usize> {
        self.0.iter().position(|v| v.is_finite())
    }

    pub fn defined_count(&self) -> usize {
        self.0.iter().filter(|v| v.is_finite()).count()
    }

    pub fn is_all_undefined(&self) -> bool {
        self.defined_count() == 0
    }
}

/// Every named output the indicator engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorOutput {
    #[serde(rename = "sma_20")]
    Sma20,
    #[serde(rename = "sma_50")]
    Sma50,
    #[serde(rename = "ema_12")]
    Ema12,
    #[serde(rename = "ema_26")]
    Ema26,
    Rsi,
    Macd,
    MacdSignal,
    MacdHistogram,
    BbUpper,
    BbMiddle,
    BbLower,
    StochK,
    StochD,
    WilliamsR,
    Cci,
}

impl IndicatorOutput {
    pub const ALL: [IndicatorOutput; 15] = [
        IndicatorOutput::Sma20,
        IndicatorOutput::Sma50,
        IndicatorOutput::Ema12,
        IndicatorOutput::Ema26,
        IndicatorOutput::Rsi,
        IndicatorOutput::Macd,
        IndicatorOutput::MacdSignal,
        IndicatorOutput::MacdHistogram,
        IndicatorOutput::BbUpper,
        IndicatorOutput::BbMiddle,
        IndicatorOutput::BbLower,
        IndicatorOutput::StochK,
        IndicatorOutput::StochD,
        IndicatorOutput::WilliamsR,
        IndicatorOutput::Cci,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            IndicatorOutput::Sma20 => "sma_20",
            IndicatorOutput::Sma50 => "sma_50",
            IndicatorOutput::Ema12 => "ema_12",
            IndicatorOutput::Ema26 => "ema_26",
            IndicatorOutput::Rsi => "rsi",
            IndicatorOutput::Macd => "macd",
            IndicatorOutput::MacdSignal => "macd_signal",
            IndicatorOutput::MacdHistogram => "macd_histogram",
            IndicatorOutput::BbUpper => "bb_upper",
            IndicatorOutput::BbMiddle => "bb_middle",
            IndicatorOutput::BbLower => "bb_lower",
            IndicatorOutput::StochK => "stoch_k",
            IndicatorOutput::StochD => "stoch_d",
            IndicatorOutput::WilliamsR => "williams_r",
            IndicatorOutput::Cci => "cci",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StochasticSeries {
    pub k: IndicatorSeries,
    pub d: IndicatorSeries,
}

/// Latest defined value per output, keyed by output name.
pub type LatestIndicators = BTreeMap<IndicatorOutput, f64>;

/// All indicator series computed during one analysis pass.
///
/// A `None` field means the indicator was not requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_20: Option<IndicatorSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_50: Option<IndicatorSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_12: Option<IndicatorSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_26: Option<IndicatorSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<IndicatorSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stochastic: Option<StochasticSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub williams_r: Option<IndicatorSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cci: Option<IndicatorSeries>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, output: IndicatorOutput) -> Option<&IndicatorSeries> {
        match output {
            IndicatorOutput::Sma20 => self.sma_20.as_ref(),
            IndicatorOutput::Sma50 => self.sma_50.as_ref(),
            IndicatorOutput::Ema12 => self.ema_12.as_ref(),
            IndicatorOutput::Ema26 => self.ema_26.as_ref(),
            IndicatorOutput::Rsi => self.rsi.as_ref(),
            IndicatorOutput::Macd => self.macd.as_ref().map(|m| &m.macd),
            IndicatorOutput::MacdSignal => self.macd.as_ref().map(|m| &m.signal),
            IndicatorOutput::MacdHistogram => self.macd.as_ref().map(|m| &m.histogram),
            IndicatorOutput::BbUpper => self.bollinger.as_ref().map(|b| &b.upper),
            IndicatorOutput::BbMiddle => self.bollinger.as_ref().map(|b| &b.middle),
            IndicatorOutput::BbLower => self.bollinger.as_ref().map(|b| &b.lower),
            IndicatorOutput::StochK => self.stochastic.as_ref().map(|s| &s.k),
            IndicatorOutput::StochD => self.stochastic.as_ref().map(|s| &s.d),
            IndicatorOutput::WilliamsR => self.williams_r.as_ref(),
            IndicatorOutput::Cci => self.cci.as_ref(),
        }
    }

    /// Latest defined value of `output`, if computed.
    pub fn latest(&self, output: IndicatorOutput) -> Option<f64> {
        self.get(output).and_then(IndicatorSeries::latest)
    }

    /// Every computed output in a stable order.
    pub fn outputs(&self) -> Vec<(IndicatorOutput, &IndicatorSeries)> {
        IndicatorOutput::ALL
            .iter()
            .filter_map(|&output| self.get(output).map(|series| (output, series)))
            .collect()
    }

    /// Last value of every computed output, leaving out undefined ones.
    pub fn latest_values(&self) -> LatestIndicators {
        self.outputs()
            .into_iter()
            .filter_map(|(output, series)| series.latest().map(|v| (output, v)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs().is_empty()
    }
}

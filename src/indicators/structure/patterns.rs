//! Peak/valley detection and double-top / double-bottom flags.
//!
//! The pattern flags are a heuristic: two recent extremes at roughly the same
//! level. They are not a formal chart-pattern recogniser and do not check
//! necklines, volume or breakout confirmation.

use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::models::price::PriceBar;

/// Bars examined for pattern flags.
pub const PATTERN_WINDOW: usize = 50;
/// Neighbours on each side an extreme must beat.
pub const DEFAULT_MARGIN: usize = 5;
/// Maximum gap between the two extremes, as a fraction of the window mean.
pub const LEVEL_TOLERANCE: f64 = 0.02;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPatterns {
    pub double_top: bool,
    pub double_bottom: bool,
    /// Not detected; always false.
    pub head_shoulders: bool,
    /// Not detected; always false.
    pub triangle: bool,
    /// Not detected; always false.
    pub flag: bool,
}

/// Indices whose value is strictly greater than every value within
/// `margin` positions on both sides.
pub fn find_peaks(values: &[f64], margin: usize) -> Vec<usize> {
    find_extremes(values, margin, |center, other| center > other)
}

/// Indices whose value is strictly less than every value within `margin`
/// positions on both sides.
pub fn find_valleys(values: &[f64], margin: usize) -> Vec<usize> {
    find_extremes(values, margin, |center, other| center < other)
}

fn find_extremes<F>(values: &[f64], margin: usize, beats: F) -> Vec<usize>
where
    F: Fn(f64, f64) -> bool,
{
    if margin == 0 || values.len() < 2 * margin + 1 {
        return Vec::new();
    }
    (margin..values.len() - margin)
        .filter(|&i| {
            (1..=margin).all(|j| beats(values[i], values[i - j]) && beats(values[i], values[i + j]))
        })
        .collect()
}

/// Flag double tops (highs) and double bottoms (lows) in the trailing
/// [`PATTERN_WINDOW`] bars.
pub fn detect_chart_patterns(bars: &[PriceBar]) -> ChartPatterns {
    let recent = &bars[bars.len().saturating_sub(PATTERN_WINDOW)..];
    let highs: Vec<f64> = recent.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = recent.iter().map(|b| b.low).collect();

    ChartPatterns {
        double_top: matching_pair(&highs, &find_peaks(&highs, DEFAULT_MARGIN)),
        double_bottom: matching_pair(&lows, &find_valleys(&lows, DEFAULT_MARGIN)),
        ..ChartPatterns::default()
    }
}

/// Whether the last two extremes differ by less than the tolerance.
fn matching_pair(values: &[f64], extremes: &[usize]) -> bool {
    let [.., previous, last] = extremes else {
        return false;
    };
    let Some(avg) = math::mean(values) else {
        return false;
    };
    (values[*last] - values[*previous]).abs() < avg * LEVEL_TOLERANCE
}

//! Match scoring.
//!
//! Three ways of deciding whether colors go together:
//!
//! - **Histogram similarity**: correlation of two [`HueSatHistogram`]s as a
//!   percentage, compared against a threshold ([`histogram_match`])
//! - **Rule lookup**: the [`MatchTable`] score of two color names
//!   ([`pair_match`])
//! - **Accessory aggregate**: the floor average of an accessory's scores
//!   against both base colors ([`accessory_score`])
//!
//! All results are normalized to 0-100 integers before aggregation, and a
//! missing rule counts as 0.

use crate::extract::HueSatHistogram;
use crate::naming::ColorName;
use crate::rules::MatchTable;

/// Default similarity percentage a histogram pair must exceed.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 30.0;

/// Message shown for a positive verdict.
pub const MATCH_MESSAGE: &str = "👍 The clothes match!";

/// Message shown for a negative verdict.
pub const NO_MATCH_MESSAGE: &str = "👎 The clothes don't match.";

/// Human-readable verdict.
pub fn verdict_message(matches: bool) -> &'static str {
    if matches {
        MATCH_MESSAGE
    } else {
        NO_MATCH_MESSAGE
    }
}

/// Correlation of two histograms scaled to a percentage (-100..=100).
pub fn histogram_similarity(a: &HueSatHistogram, b: &HueSatHistogram) -> f64 {
    a.correlation(b) * 100.0
}

/// Outcome of a histogram comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramMatch {
    /// Correlation as a percentage
    pub similarity: f64,
    /// Threshold that was applied
    pub threshold: f64,
    /// `similarity > threshold`
    pub matches: bool,
}

/// Compare two histograms against a similarity threshold.
///
/// The comparison is strict: a similarity equal to the threshold is not a
/// match.
pub fn histogram_match(a: &HueSatHistogram, b: &HueSatHistogram, threshold: f64) -> HistogramMatch {
    let similarity = histogram_similarity(a, b);
    HistogramMatch {
        similarity,
        threshold,
        matches: similarity > threshold,
    }
}

/// Outcome of a rule-table lookup between two color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairMatch {
    pub first: ColorName,
    pub second: ColorName,
    /// Table score, `None` if no rule covers the pair
    pub compatibility: Option<u8>,
    /// Compatibility with a missing rule counted as 0
    pub score: u8,
    /// `score >= threshold` and a rule exists
    pub matches: bool,
}

/// Look up a pair of names and decide whether they match.
pub fn pair_match(table: &MatchTable, first: ColorName, second: ColorName, threshold: u8) -> PairMatch {
    let compatibility = table.compatibility(first, second);
    let score = compatibility.unwrap_or(0);
    PairMatch {
        first,
        second,
        compatibility,
        score,
        matches: compatibility.is_some() && score >= threshold,
    }
}

/// Combined score of an accessory against two base colors.
///
/// Each side is a 0-100 score with `None` counted as 0. The result is the
/// integer average, rounded down: `(70, 80)` gives 75, `(70, 81)` also 75.
///
/// # Example
/// ```
/// use outfit_color::accessory_score;
///
/// assert_eq!(accessory_score(Some(70), Some(80)), 75);
/// assert_eq!(accessory_score(Some(90), None), 45);
/// ```
pub fn accessory_score(vs_first: Option<u8>, vs_second: Option<u8>) -> u8 {
    let total = vs_first.unwrap_or(0) as u16 + vs_second.unwrap_or(0) as u16;
    (total / 2) as u8
}

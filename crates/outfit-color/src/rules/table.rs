//! Static compatibility table between color names.

use std::collections::HashMap;

use super::error::RuleError;
use crate::naming::ColorName;

/// Highest allowed compatibility score.
pub const MAX_SCORE: u8 = 100;

/// Default score a pair must reach to count as a match.
pub const DEFAULT_MATCH_THRESHOLD: u8 = 50;

/// Built-in rules: unordered pairs and their compatibility score.
pub const BUILTIN_RULES: &[(ColorName, ColorName, u8)] = &[
    (ColorName::Red, ColorName::Black, 90),
    (ColorName::Red, ColorName::Gray, 80),
    (ColorName::Blue, ColorName::Gray, 85),
    (ColorName::Blue, ColorName::Black, 75),
    (ColorName::Blue, ColorName::Yellow, 80),
    (ColorName::Blue, ColorName::Orange, 70),
    (ColorName::Green, ColorName::Black, 60),
    (ColorName::Green, ColorName::Gray, 65),
    (ColorName::Yellow, ColorName::Black, 75),
    (ColorName::Yellow, ColorName::Gray, 70),
    (ColorName::Orange, ColorName::Black, 80),
    (ColorName::Orange, ColorName::Gray, 60),
    (ColorName::Gray, ColorName::Black, 70),
    (ColorName::Gray, ColorName::Gray, 55),
    (ColorName::Black, ColorName::Black, 60),
];

/// Symmetric lookup table from color-name pairs to a 0-100 score.
///
/// Pairs are stored under a canonical key, so `compatibility(a, b)` and
/// `compatibility(b, a)` always agree. [`ColorName::Unknown`] never appears
/// in a table.
///
/// # Example
///
/// ```
/// use outfit_color::{ColorName, MatchTable};
///
/// let table = MatchTable::builtin();
/// assert_eq!(table.compatibility(ColorName::Black, ColorName::Gray), Some(70));
/// assert_eq!(table.compatibility(ColorName::Gray, ColorName::Black), Some(70));
/// assert_eq!(table.compatibility(ColorName::Red, ColorName::Green), None);
/// ```
#[derive(Debug, Clone)]
pub struct MatchTable {
    scores: HashMap<(ColorName, ColorName), u8>,
}

impl MatchTable {
    /// Build a table from unordered `(a, b, score)` entries.
    ///
    /// # Errors
    ///
    /// - [`RuleError::Empty`] if no entries are given
    /// - [`RuleError::ScoreOutOfRange`] if a score exceeds [`MAX_SCORE`]
    /// - [`RuleError::UnknownColor`] if an entry names [`ColorName::Unknown`]
    /// - [`RuleError::DuplicatePair`] if a pair appears twice in either order
    pub fn new(entries: &[(ColorName, ColorName, u8)]) -> Result<Self, RuleError> {
        if entries.is_empty() {
            return Err(RuleError::Empty);
        }

        let mut scores = HashMap::with_capacity(entries.len());
        for (index, &(a, b, score)) in entries.iter().enumerate() {
            if score > MAX_SCORE {
                return Err(RuleError::ScoreOutOfRange { index, score });
            }
            if a == ColorName::Unknown || b == ColorName::Unknown {
                return Err(RuleError::UnknownColor { index });
            }
            if scores.insert(canonical(a, b), score).is_some() {
                return Err(RuleError::DuplicatePair { index });
            }
        }

        Ok(Self { scores })
    }

    /// The built-in rule table.
    pub fn builtin() -> Self {
        let scores = BUILTIN_RULES
            .iter()
            .map(|&(a, b, score)| (canonical(a, b), score))
            .collect();
        Self { scores }
    }

    /// Score for a pair, or `None` if no rule covers it.
    pub fn compatibility(&self, a: ColorName, b: ColorName) -> Option<u8> {
        self.scores.get(&canonical(a, b)).copied()
    }

    /// Score for a pair, with uncovered pairs scoring 0.
    pub fn score(&self, a: ColorName, b: ColorName) -> u8 {
        self.compatibility(a, b).unwrap_or(0)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Default for MatchTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[inline]
fn canonical(a: ColorName, b: ColorName) -> (ColorName, ColorName) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_validates() {
        let table = MatchTable::new(BUILTIN_RULES).unwrap();
        assert_eq!(table.len(), BUILTIN_RULES.len());
        assert_eq!(MatchTable::builtin().len(), BUILTIN_RULES.len());
    }

    #[test]
    fn test_lookup_is_symmetric_for_all_pairs() {
        let table = MatchTable::builtin();
        for a in ColorName::ALL {
            for b in ColorName::ALL {
                assert_eq!(
                    table.compatibility(a, b),
                    table.compatibility(b, a),
                    "asymmetric lookup for ({a}, {b})"
                );
            }
        }
    }

    #[test]
    fn test_reverse_order_finds_rule() {
        let table = MatchTable::builtin();
        assert_eq!(table.compatibility(ColorName::Black, ColorName::Gray), Some(70));
        assert_eq!(table.compatibility(ColorName::Black, ColorName::Red), Some(90));
    }

    #[test]
    fn test_missing_pair_scores_zero() {
        let table = MatchTable::builtin();
        assert_eq!(table.compatibility(ColorName::Red, ColorName::Green), None);
        assert_eq!(table.score(ColorName::Red, ColorName::Green), 0);
    }

    #[test]
    fn test_unknown_never_matches() {
        let table = MatchTable::builtin();
        for other in ColorName::ALL {
            assert_eq!(table.compatibility(ColorName::Unknown, other), None);
        }
    }

    #[test]
    fn test_builtin_scores_clear_default_threshold() {
        for &(_, _, score) in BUILTIN_RULES {
            assert!(score >= DEFAULT_MATCH_THRESHOLD);
            assert!(score <= MAX_SCORE);
        }
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(MatchTable::new(&[]).unwrap_err(), RuleError::Empty);
    }

    #[test]
    fn test_new_rejects_reversed_duplicate() {
        let err = MatchTable::new(&[
            (ColorName::Red, ColorName::Black, 90),
            (ColorName::Black, ColorName::Red, 40),
        ])
        .unwrap_err();
        assert_eq!(err, RuleError::DuplicatePair { index: 1 });
    }

    #[test]
    fn test_new_rejects_out_of_range_score() {
        let err = MatchTable::new(&[(ColorName::Red, ColorName::Black, 101)]).unwrap_err();
        assert_eq!(err, RuleError::ScoreOutOfRange { index: 0, score: 101 });
    }

    #[test]
    fn test_new_rejects_unknown() {
        let err = MatchTable::new(&[(ColorName::Unknown, ColorName::Black, 10)]).unwrap_err();
        assert_eq!(err, RuleError::UnknownColor { index: 0 });
    }
}

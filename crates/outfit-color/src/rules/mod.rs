//! Compatibility rules between named colors.
//!
//! A [`MatchTable`] maps unordered pairs of [`ColorName`](crate::ColorName)s
//! to a score from 0 to 100. Pairs with no rule have no score; callers that
//! need a number treat them as 0.

mod error;
mod table;

pub use error::RuleError;
pub use table::{MatchTable, BUILTIN_RULES, DEFAULT_MATCH_THRESHOLD, MAX_SCORE};

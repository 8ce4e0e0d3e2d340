//! outfit-color: clothing color extraction and matching
//!
//! This library reduces clothing photos to a representative color and
//! decides whether two (or more) pieces go together.
//!
//! # Quick Start
//!
//! The [`OutfitChecker`] builder is the primary entry point:
//!
//! ```
//! use outfit_color::{ColorName, OutfitChecker, Rgb};
//!
//! let checker = OutfitChecker::new();
//! let report = checker.score_outfit(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), &[]);
//!
//! assert_eq!(report.first.name, ColorName::Black);
//! assert_eq!(report.second.name, ColorName::Gray);
//! assert_eq!(report.pair.compatibility, Some(70));
//! ```
//!
//! # Two Ways to Compare
//!
//! | Method | Extractor | Matcher | Result |
//! |--------|-----------|---------|--------|
//! | Histogram | 100x100 grid, 50x60 hue/saturation histogram | correlation x100 > threshold | similarity %, bool |
//! | Named color | 50x50 grid, mean color, [`color_name`] | [`MatchTable`] lookup | 0-100 score, bool |
//!
//! The histogram method compares whole color distributions and needs no
//! naming step, so it works for patterned fabric. The named-color method
//! reduces each piece to one of eight names and consults a fixed table of
//! pairs that are known to work together, which also allows scoring
//! accessories against both base pieces.
//!
//! ## Pipeline
//!
//! ```text
//! JPEG/PNG bytes
//!     |
//!     v
//! decode_rgb              (image crate, always 8-bit RGB)
//!     |
//!     +---> downsample 100x100 --> HSV --> HueSatHistogram --> correlation
//!     |
//!     +---> downsample 50x50 --> mean_color --> color_name --> MatchTable
//! ```
//!
//! # Determinism
//!
//! The dominant color is the centroid of a single cluster, which is the
//! arithmetic mean, so it is computed directly with no random seeding.
//! Every function in the crate returns the same output for the same input.

pub mod api;
pub mod color;
pub mod extract;
pub mod matcher;
pub mod naming;
pub mod preprocess;
pub mod rules;

#[cfg(test)]
mod domain_tests;

pub use api::{AccessoryMatch, ColorError, ColorReading, OutfitChecker, OutfitReport};
pub use color::{Hsv, Rgb};
pub use extract::{dominant_color, mean_color, HueSatHistogram};
pub use matcher::{
    accessory_score, histogram_match, histogram_similarity, pair_match, verdict_message,
    HistogramMatch, PairMatch, DEFAULT_SIMILARITY_THRESHOLD,
};
pub use naming::{color_name, ColorName, ParseColorNameError};
pub use preprocess::{decode_rgb, LoadError};
pub use rules::{MatchTable, RuleError, DEFAULT_MATCH_THRESHOLD};

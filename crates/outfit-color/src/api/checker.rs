//! OutfitChecker builder -- the primary entry point for the crate.
//!
//! [`OutfitChecker`] bundles decoding, extraction, and matching behind a
//! small builder with the standard thresholds as defaults.

use image::RgbImage;

use crate::color::Rgb;
use crate::extract::{dominant_color, HueSatHistogram};
use crate::matcher::{
    accessory_score, histogram_match, pair_match, HistogramMatch, PairMatch,
    DEFAULT_SIMILARITY_THRESHOLD,
};
use crate::naming::{color_name, ColorName};
use crate::preprocess::decode_rgb;
use crate::rules::{MatchTable, DEFAULT_MATCH_THRESHOLD};

use super::error::ColorError;

/// Dominant color of one image and its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorReading {
    pub rgb: Rgb,
    pub name: ColorName,
}

impl ColorReading {
    /// Name an RGB color.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            name: color_name(rgb),
        }
    }
}

/// One accessory scored against both base colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessoryMatch {
    pub reading: ColorReading,
    /// Compatibility with the first base color
    pub vs_first: Option<u8>,
    /// Compatibility with the second base color
    pub vs_second: Option<u8>,
    /// Floor average of both sides, missing rules counted as 0
    pub score: u8,
}

/// Full result for a two-piece outfit plus accessories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitReport {
    pub first: ColorReading,
    pub second: ColorReading,
    pub pair: PairMatch,
    pub accessories: Vec<AccessoryMatch>,
}

/// High-level builder for outfit color checks.
///
/// - Configuration methods consume and return `self`
/// - Check methods take `&self` so a checker is reusable across requests
///
/// # Example
///
/// ```
/// use outfit_color::{ColorName, OutfitChecker, Rgb};
///
/// let checker = OutfitChecker::new().match_threshold(60);
/// let report = checker.score_outfit(Rgb::new(255, 0, 0), Rgb::new(0, 0, 0), &[]);
///
/// assert_eq!(report.first.name, ColorName::Red);
/// assert_eq!(report.second.name, ColorName::Black);
/// assert_eq!(report.pair.score, 90);
/// assert!(report.pair.matches);
/// ```
#[derive(Debug, Clone)]
pub struct OutfitChecker {
    table: MatchTable,
    similarity_threshold: f64,
    match_threshold: u8,
}

impl OutfitChecker {
    /// Create a checker with the built-in rule table and default thresholds
    /// (similarity 30, match score 50).
    pub fn new() -> Self {
        Self {
            table: MatchTable::builtin(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }

    /// Replace the rule table.
    #[inline]
    pub fn table(mut self, table: MatchTable) -> Self {
        self.table = table;
        self
    }

    /// Set the histogram similarity percentage a pair must exceed.
    #[inline]
    pub fn similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the rule score a pair must reach.
    #[inline]
    pub fn match_threshold(mut self, threshold: u8) -> Self {
        self.match_threshold = threshold;
        self
    }

    /// Configured similarity threshold.
    pub fn default_similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }

    /// Rule table in use.
    pub fn rules(&self) -> &MatchTable {
        &self.table
    }

    /// Histogram comparison of two encoded images with the configured threshold.
    pub fn compare_images(&self, first: &[u8], second: &[u8]) -> Result<HistogramMatch, ColorError> {
        self.compare_images_with(first, second, self.similarity_threshold)
    }

    /// Histogram comparison of two encoded images with an explicit threshold.
    pub fn compare_images_with(
        &self,
        first: &[u8],
        second: &[u8],
        threshold: f64,
    ) -> Result<HistogramMatch, ColorError> {
        let first = decode_rgb(first)?;
        let second = decode_rgb(second)?;
        self.compare_decoded(&first, &second, threshold)
    }

    /// Histogram comparison of two decoded images.
    pub fn compare_decoded(
        &self,
        first: &RgbImage,
        second: &RgbImage,
        threshold: f64,
    ) -> Result<HistogramMatch, ColorError> {
        let a = HueSatHistogram::from_image(first)?;
        let b = HueSatHistogram::from_image(second)?;
        Ok(histogram_match(&a, &b, threshold))
    }

    /// Dominant color and name of an encoded image.
    pub fn read_color(&self, bytes: &[u8]) -> Result<ColorReading, ColorError> {
        let image = decode_rgb(bytes)?;
        self.read_decoded(&image)
    }

    /// Dominant color and name of a decoded image.
    pub fn read_decoded(&self, image: &RgbImage) -> Result<ColorReading, ColorError> {
        Ok(ColorReading::from_rgb(dominant_color(image)?))
    }

    /// Name two base images and any accessories, then score them.
    ///
    /// Fails on the first image that cannot be decoded.
    pub fn evaluate_outfit<A: AsRef<[u8]>>(
        &self,
        first: &[u8],
        second: &[u8],
        accessories: &[A],
    ) -> Result<OutfitReport, ColorError> {
        let first = self.read_color(first)?;
        let second = self.read_color(second)?;
        let accessory_colors = accessories
            .iter()
            .map(|bytes| self.read_color(bytes.as_ref()).map(|reading| reading.rgb))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.score_outfit(first.rgb, second.rgb, &accessory_colors))
    }

    /// Score already-extracted colors.
    pub fn score_outfit(&self, first: Rgb, second: Rgb, accessories: &[Rgb]) -> OutfitReport {
        let first = ColorReading::from_rgb(first);
        let second = ColorReading::from_rgb(second);
        let pair = pair_match(&self.table, first.name, second.name, self.match_threshold);

        let accessories = accessories
            .iter()
            .map(|&rgb| {
                let reading = ColorReading::from_rgb(rgb);
                let vs_first = self.table.compatibility(reading.name, first.name);
                let vs_second = self.table.compatibility(reading.name, second.name);
                AccessoryMatch {
                    reading,
                    vs_first,
                    vs_second,
                    score: accessory_score(vs_first, vs_second),
                }
            })
            .collect();

        OutfitReport {
            first,
            second,
            pair,
            accessories,
        }
    }
}

impl Default for OutfitChecker {
    fn default() -> Self {
        Self::new()
    }
}

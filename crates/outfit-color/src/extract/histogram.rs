//! Hue/saturation histogram extraction.
//!
//! The image is reduced to a 100x100 grid, converted to 8-bit HSV, and
//! binned into a 50 (hue) x 60 (saturation) histogram. Value is ignored, so
//! the histogram describes which hues are present and how vivid they are,
//! independent of lighting brightness.

use image::RgbImage;

use crate::color::{Hsv, Rgb, HUE_RANGE};
use crate::preprocess::{downsample, ensure_not_empty, LoadError};

/// Grid side length the image is resampled to before binning.
pub const HISTOGRAM_GRID: u32 = 100;

/// Number of hue bins spanning [0, 180).
pub const HUE_BINS: usize = 50;

/// Number of saturation bins spanning [0, 256).
pub const SATURATION_BINS: usize = 60;

const SATURATION_RANGE: u16 = 256;

/// A min-max normalized 2D hue/saturation histogram.
///
/// Bins are stored row-major by hue: index `hue_bin * SATURATION_BINS + sat_bin`.
/// After normalization the most populated bin is 1.0 and the least is 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct HueSatHistogram {
    bins: Vec<f32>,
}

impl HueSatHistogram {
    /// Build a normalized histogram from a decoded image.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::EmptyImage`] if the image has no pixels.
    pub fn from_image(image: &RgbImage) -> Result<Self, LoadError> {
        ensure_not_empty(image)?;
        let grid = downsample(image, HISTOGRAM_GRID, HISTOGRAM_GRID);
        let mut histogram = Self::from_pixels(grid.pixels().map(|&p| Rgb::from(p)));
        histogram.normalize_min_max();
        Ok(histogram)
    }

    /// Accumulate raw (unnormalized) counts for a sequence of pixels.
    pub fn from_pixels(pixels: impl IntoIterator<Item = Rgb>) -> Self {
        let mut bins = vec![0.0; HUE_BINS * SATURATION_BINS];
        for rgb in pixels {
            let hsv = Hsv::from(rgb);
            bins[Self::bin_index(hsv)] += 1.0;
        }
        Self { bins }
    }

    /// Bin index for an HSV pixel.
    #[inline]
    pub fn bin_index(hsv: Hsv) -> usize {
        let hue_bin = hsv.h as usize * HUE_BINS / HUE_RANGE as usize;
        let sat_bin = hsv.s as usize * SATURATION_BINS / SATURATION_RANGE as usize;
        hue_bin.min(HUE_BINS - 1) * SATURATION_BINS + sat_bin.min(SATURATION_BINS - 1)
    }

    /// Rescale bins linearly so the minimum maps to 0.0 and the maximum to 1.0.
    ///
    /// A histogram whose bins are all equal becomes all zeros.
    pub fn normalize_min_max(&mut self) {
        let (min, max) = self
            .bins
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let range = max - min;
        let scale = if range > f32::EPSILON { 1.0 / range } else { 0.0 };
        for bin in &mut self.bins {
            *bin = (*bin - min) * scale;
        }
    }

    /// Pearson correlation with another histogram, in [-1, 1].
    ///
    /// If either histogram is flat (zero variance) the correlation is
    /// defined as 1.0.
    pub fn correlation(&self, other: &Self) -> f64 {
        let n = self.bins.len() as f64;
        let mean_a = self.bins.iter().map(|&v| v as f64).sum::<f64>() / n;
        let mean_b = other.bins.iter().map(|&v| v as f64).sum::<f64>() / n;

        let mut cov = 0.0;
        let mut var_a = 0.0;
        let mut var_b = 0.0;
        for (&a, &b) in self.bins.iter().zip(&other.bins) {
            let da = a as f64 - mean_a;
            let db = b as f64 - mean_b;
            cov += da * db;
            var_a += da * da;
            var_b += db * db;
        }

        let denom = var_a * var_b;
        if denom.abs() > f64::EPSILON {
            cov / denom.sqrt()
        } else {
            1.0
        }
    }

    /// Raw bin values.
    pub fn bins(&self) -> &[f32] {
        &self.bins
    }

    /// Value of a single bin.
    pub fn get(&self, hue_bin: usize, sat_bin: usize) -> f32 {
        self.bins[hue_bin * SATURATION_BINS + sat_bin]
    }
}

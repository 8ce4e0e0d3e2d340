//! Dominant-color extraction.
//!
//! The image is reduced to a 50x50 grid and the dominant color is the
//! centroid of a single color cluster, which is exactly the per-channel
//! arithmetic mean. No random initialization is involved, so the result is
//! fully determined by the input pixels.

use image::RgbImage;

use crate::color::Rgb;
use crate::preprocess::{downsample, ensure_not_empty, pixels, LoadError};

/// Grid side length the image is resampled to before averaging.
pub const DOMINANT_GRID: u32 = 50;

/// Per-channel arithmetic mean of a pixel list, rounded to nearest.
///
/// Returns `None` for an empty slice.
///
/// # Example
/// ```
/// use outfit_color::{mean_color, Rgb};
///
/// let pixels = [Rgb::new(0, 0, 0), Rgb::new(255, 100, 51)];
/// assert_eq!(mean_color(&pixels), Some(Rgb::new(128, 50, 26)));
/// ```
pub fn mean_color(pixels: &[Rgb]) -> Option<Rgb> {
    if pixels.is_empty() {
        return None;
    }

    let (r, g, b) = pixels.iter().fold((0u64, 0u64, 0u64), |(r, g, b), p| {
        (r + p.r as u64, g + p.g as u64, b + p.b as u64)
    });
    let n = pixels.len() as f64;
    let channel = |sum: u64| (sum as f64 / n).round().clamp(0.0, 255.0) as u8;

    Some(Rgb::new(channel(r), channel(g), channel(b)))
}

/// Dominant color of a decoded image.
///
/// # Errors
///
/// Returns [`LoadError::EmptyImage`] if the image has no pixels.
pub fn dominant_color(image: &RgbImage) -> Result<Rgb, LoadError> {
    ensure_not_empty(image)?;
    let grid = downsample(image, DOMINANT_GRID, DOMINANT_GRID);
    let flat = pixels(&grid);
    let (width, height) = image.dimensions();
    mean_color(&flat).ok_or(LoadError::EmptyImage { width, height })
}

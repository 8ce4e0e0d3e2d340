//! Fixed-size downsampling.
//!
//! Both extractors work on a small fixed grid so that analysis cost does not
//! depend on the upload resolution. Resampling is bilinear.

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::color::Rgb;

/// Resample `image` to exactly `width` x `height` with a bilinear filter.
///
/// Aspect ratio is not preserved.
pub fn downsample(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    imageops::resize(image, width, height, FilterType::Triangle)
}

/// Flatten an image into row-major pixel triples.
pub fn pixels(image: &RgbImage) -> Vec<Rgb> {
    image.pixels().map(|&p| Rgb::from(p)).collect()
}

//! Representative-color extraction.
//!
//! Two extractors reduce an image to something comparable:
//!
//! - [`HueSatHistogram`]: a normalized hue/saturation distribution, compared
//!   by correlation
//! - [`dominant_color`]: a single mean [`Rgb`](crate::Rgb), named by
//!   [`color_name`](crate::color_name) and compared through the rule table

mod dominant;
mod histogram;

pub use dominant::{dominant_color, mean_color, DOMINANT_GRID};
pub use histogram::{HueSatHistogram, HISTOGRAM_GRID, HUE_BINS, SATURATION_BINS};

//! Color types and conversion utilities
//!
//! - [`Rgb`]: 8-bit RGB, the representative color of an image
//! - [`Hsv`]: 8-bit HSV (hue in half-degrees), used for histograms
//!
//! # Example
//!
//! ```
//! use outfit_color::{Hsv, Rgb};
//!
//! let hsv = Hsv::from(Rgb::new(0, 0, 255));
//! assert_eq!(hsv.h, 120);
//! ```

mod hsv;
mod rgb;

pub use hsv::{Hsv, HUE_RANGE};
pub use rgb::Rgb;

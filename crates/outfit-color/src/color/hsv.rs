//! 8-bit HSV color type
//!
//! Uses the compact 8-bit encoding common in computer-vision tooling: hue is
//! stored as half-degrees so it fits in a byte.

use super::rgb::Rgb;

/// Exclusive upper bound of the 8-bit hue channel (half-degrees).
pub const HUE_RANGE: u16 = 180;

/// A color in 8-bit HSV.
///
/// - `h`: hue in half-degrees, 0..180
/// - `s`: saturation, 0..=255
/// - `v`: value (max channel), 0..=255
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    /// Hue in half-degrees (0..180)
    pub h: u8,
    /// Saturation (0..=255)
    pub s: u8,
    /// Value (0..=255)
    pub v: u8,
}

impl Hsv {
    #[inline]
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

impl From<Rgb> for Hsv {
    /// Convert RGB to 8-bit HSV.
    ///
    /// Saturation is `255 * (max - min) / max` and hue is the standard hexcone
    /// angle halved, both rounded to the nearest integer. A rounded hue of
    /// 180 wraps to 0. Achromatic colors have hue 0.
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f32;
        let g = rgb.g as f32;
        let b = rgb.b as f32;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = max - min;

        let v = max as u8;
        let s = if max > 0.0 {
            (255.0 * diff / max).round() as u8
        } else {
            0
        };

        if diff == 0.0 {
            return Self::new(0, s, v);
        }

        let degrees = if max == r {
            60.0 * (g - b) / diff
        } else if max == g {
            120.0 + 60.0 * (b - r) / diff
        } else {
            240.0 + 60.0 * (r - g) / diff
        };
        let degrees = if degrees < 0.0 { degrees + 360.0 } else { degrees };

        let mut h = (degrees / 2.0).round() as u16;
        if h >= HUE_RANGE {
            h -= HUE_RANGE;
        }

        Self::new(h as u8, s, v)
    }
}

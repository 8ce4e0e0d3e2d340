//! Test fixtures and constants.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, RgbImage};
use std::io::Cursor;

/// Solid garment colors used across tests
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const GREEN: [u8; 3] = [0, 200, 0];
    pub const YELLOW: [u8; 3] = [255, 255, 0];
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
}

/// Encode a solid-color image as PNG
pub fn solid_png(color: [u8; 3], width: u32, height: u32) -> Vec<u8> {
    encode(&RgbImage::from_pixel(width, height, image::Rgb(color)), ImageFormat::Png)
}

/// Encode a solid-color 100x100 image as base64 PNG
pub fn solid_png_b64(color: [u8; 3]) -> String {
    STANDARD.encode(solid_png(color, 100, 100))
}

/// Encode a solid-color 100x100 image as base64 JPEG
pub fn solid_jpeg_b64(color: [u8; 3]) -> String {
    let image = RgbImage::from_pixel(100, 100, image::Rgb(color));
    STANDARD.encode(encode(&image, ImageFormat::Jpeg))
}

/// Base64 that decodes fine but is not an image
pub fn not_an_image_b64() -> String {
    STANDARD.encode(b"definitely not a picture")
}

fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .expect("Failed to encode fixture image");
    bytes
}

//! Image decoding from raw bytes.

use image::RgbImage;

use super::error::LoadError;

/// Decode JPEG or PNG bytes into an RGB image.
///
/// The format is sniffed from the content, not from a file name. Alpha is
/// dropped and grayscale is expanded, so the result is always 3-channel RGB.
///
/// # Errors
///
/// [`LoadError::Decode`] for corrupt or unsupported bytes,
/// [`LoadError::EmptyImage`] for a zero-sized image.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, LoadError> {
    let image = image::load_from_memory(bytes)?.to_rgb8();
    ensure_not_empty(&image)?;
    Ok(image)
}

pub(crate) fn ensure_not_empty(image: &RgbImage) -> Result<(), LoadError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(LoadError::EmptyImage { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb};
    use std::io::Cursor;

    fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
        bytes
    }

    #[test]
    fn test_decode_png() {
        let image = RgbImage::from_pixel(4, 3, Rgb([10, 20, 30]));
        let decoded = decode_rgb(&encode(&image, ImageFormat::Png)).unwrap();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(2, 1), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_decode_jpeg() {
        let image = RgbImage::from_pixel(16, 16, Rgb([200, 200, 200]));
        let decoded = decode_rgb(&encode(&image, ImageFormat::Jpeg)).unwrap();
        assert_eq!(decoded.dimensions(), (16, 16));
        // Lossy, but a flat field stays close
        let pixel = decoded.get_pixel(8, 8);
        assert!(pixel.0.iter().all(|&c| (c as i32 - 200).abs() <= 3));
    }

    #[test]
    fn test_decode_garbage_is_error() {
        let err = decode_rgb(b"definitely not an image").unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
        assert!(err.to_string().starts_with("invalid image"));
    }

    #[test]
    fn test_decode_truncated_png_is_error() {
        let image = RgbImage::from_pixel(8, 8, Rgb([1, 2, 3]));
        let bytes = encode(&image, ImageFormat::Png);
        let err = decode_rgb(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_empty_image_rejected() {
        let image = RgbImage::new(0, 5);
        let err = ensure_not_empty(&image).unwrap_err();
        assert!(matches!(
            err,
            LoadError::EmptyImage {
                width: 0,
                height: 5
            }
        ));
    }
}

//! Error types for image loading
//!
//! Decoding is delegated to the `image` crate; this module wraps its failures
//! in a small error enum so callers never see a panic for bad input bytes.

use std::fmt;

/// Error type for turning raw bytes into an analyzable image.
#[derive(Debug)]
pub enum LoadError {
    /// Bytes are not a supported or well-formed image
    Decode(image::ImageError),
    /// Image decoded but has no pixels
    EmptyImage {
        /// Decoded width
        width: u32,
        /// Decoded height
        height: u32,
    },
}

impl From<image::ImageError> for LoadError {
    fn from(err: image::ImageError) -> Self {
        LoadError::Decode(err)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Decode(err) => write!(f, "invalid image: {}", err),
            LoadError::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({}x{})", width, height)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

//! Image loading and preprocessing.
//!
//! Turns uploaded bytes into a fixed-size RGB grid ready for analysis:
//!
//! 1. **Decode** - JPEG/PNG bytes to 8-bit RGB ([`decode_rgb`])
//! 2. **Downsample** - bilinear resample to the extractor's grid ([`downsample`])
//! 3. **Flatten** - row-major pixel list ([`pixels`])

mod decode;
mod error;
mod resize;

pub(crate) use decode::ensure_not_empty;
pub use decode::decode_rgb;
pub use error::LoadError;
pub use resize::{downsample, pixels};

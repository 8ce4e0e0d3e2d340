//! Unified error type for the outfit-color public API.
//!
//! [`ColorError`] wraps the errors a check can hit at runtime into a single
//! enum for convenient `?` propagation in application code. Rule table
//! validation happens at construction time and reports
//! [`RuleError`](crate::RuleError) directly.

use crate::preprocess::LoadError;
use std::fmt;

/// Unified error type for the outfit-color public API.
///
/// # Example
///
/// ```
/// use outfit_color::{ColorError, OutfitChecker};
///
/// fn check(bytes: &[u8]) -> Result<(), ColorError> {
///     let reading = OutfitChecker::new().read_color(bytes)?;
///     println!("{}", reading.name);
///     Ok(())
/// }
///
/// assert!(check(b"not an image").is_err());
/// ```
#[derive(Debug)]
pub enum ColorError {
    /// Image bytes could not be turned into pixels
    Load(LoadError),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Load(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ColorError::Load(err) => Some(err),
        }
    }
}

impl From<LoadError> for ColorError {
    fn from(err: LoadError) -> Self {
        ColorError::Load(err)
    }
}

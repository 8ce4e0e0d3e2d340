//! Public API for the outfit-color crate.
//!
//! This module provides the high-level API: [`OutfitChecker`] builder and
//! [`ColorError`] unified error type.

mod checker;
mod error;

pub use checker::{AccessoryMatch, ColorReading, OutfitChecker, OutfitReport};
pub use error::ColorError;

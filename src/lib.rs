//! Outfit Match - clothing color match checker
//!
//! HTTP service and CLI around the `outfit-color` pipeline.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;

//! Prelude module - Commonly used types for quick imports
//!
//! This module re-exports the most commonly used types from Feature-6450,
//! allowing users to import them with a single `use feature_6450::prelude::*;`
//! statement instead of importing each type individually.

// Core types - always available
pub use crate::config::{FeatureConfig, InputLimits};
pub use crate::error::FeatureError;
pub use crate::runtime::{handle, setup, validate_input, FeatureRuntime, FeatureStats};

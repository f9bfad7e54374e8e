//! Copyright (c) 2026, Kirky.X
//!
//! MIT License
//!
//! Centralized configuration constants for Feature-6450.
//!
//! This module provides well-documented constants used throughout the library.
//! All magic numbers are defined here with their purpose and usage context.

/// Canonical feature name.
///
/// Used as the default configuration name and as the identity field
/// attached to log events emitted by the runtime.
pub const FEATURE_NAME: &str = "feature-6450";

/// Default configuration version.
pub const DEFAULT_CONFIG_VERSION: &str = "0.1.0";

// ============================================================================
// Input Validation Constants
// ============================================================================

/// Default maximum number of entries accepted in an input mapping.
///
/// Standard out-of-box limit; can be raised per configuration up to
/// [`MAX_INPUT_ENTRIES`].
pub const DEFAULT_MAX_INPUT_ENTRIES: usize = 64;

/// Hard upper bound on configurable input entry counts.
///
/// Prevents excessive memory usage when validating large input mappings.
///
/// # Usage
///
/// Used in [`InputLimits::validate()`] to reject configurations that raise
/// the entry limit beyond acceptable bounds.
///
/// [`InputLimits::validate()`]: crate::config::InputLimits::validate
pub const MAX_INPUT_ENTRIES: usize = 1024;

/// Default maximum input key length (256 characters).
///
/// Standard length for input key validation.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 256;

/// Default maximum input value length (8192 characters).
///
/// Standard length for input value validation.
pub const DEFAULT_MAX_VALUE_LENGTH: usize = 8192;

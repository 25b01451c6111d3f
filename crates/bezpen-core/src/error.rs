//! Error types for host-facing operations.
//!
//! Geometry edits themselves never fail; these only cover explicit indices
//! supplied by a host and configuration loading.

use thiserror::Error;

/// Errors from explicit-index edits and collection commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Segment index {index} out of range (curve has {len} segments)")]
    SegmentOutOfRange { index: usize, len: usize },
    #[error("Curve index {index} out of range (collection has {len} curves)")]
    CurveOutOfRange { index: usize, len: usize },
    #[error("No active curve")]
    NoActiveCurve,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for edit operations.
pub type EditResult<T> = Result<T, EditError>;

//! # Error Handling
//!
//! Error types for the resolution layer. Two failure classes exist:
//! configuration errors (an unusable bounding envelope, fatal at
//! construction) and validation errors (a non-positive source dimension).
//! Failures on the renegotiation path that stop a target size from reaching
//! an encoder are reported as processing errors.

use std::{error::Error as StdError, fmt};

use cap_fit::FitError;

/// Errors surfaced by configuration, validation and planning.
#[derive(Debug)]
pub enum CaptureError {
    /// Configuration validation errors
    Config {
        field: String,
        value: String,
        reason: String,
    },
    /// Input validation errors
    Validation {
        field: String,
        constraint: String,
        value: String,
    },
    /// Errors on the renegotiation path
    Processing { operation: String, reason: String },
}

impl CaptureError {
    /// Create a configuration error
    pub fn config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Config {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a validation error
    pub fn validation(
        field: impl Into<String>,
        constraint: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            constraint: constraint.into(),
            value: value.into(),
        }
    }

    /// Create a processing error
    pub fn processing(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Processing {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Get the error category as a string
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Validation { .. } => "validation",
            Self::Processing { .. } => "processing",
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Config {
                field,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Configuration error in '{}': {} (value: {})",
                    field, reason, value
                )
            }
            CaptureError::Validation {
                field,
                constraint,
                value,
            } => {
                write!(
                    f,
                    "Validation failed for '{}': {} (value: {})",
                    field, constraint, value
                )
            }
            CaptureError::Processing { operation, reason } => {
                write!(f, "Processing failed during {}: {}", operation, reason)
            }
        }
    }
}

impl StdError for CaptureError {}

impl From<FitError> for CaptureError {
    fn from(error: FitError) -> Self {
        match error {
            FitError::InvalidBounds {
                target_min,
                target_max,
            } => Self::config(
                "target_bounds",
                format!("{}..={}", target_min, target_max),
                "target_min must be positive and not exceed target_max",
            ),
            FitError::InvalidDimensions { width, height } => Self::validation(
                "source_dimensions",
                "both dimensions must be positive",
                format!("{}x{}", width, height),
            ),
        }
    }
}

/// Result type alias using our custom error type
pub type CaptureResult<T> = Result<T, CaptureError>;

//! # Capture Resolution Library
//!
//! Target-resolution calculation for screen-capture pipelines: fit an
//! arbitrary reported source resolution into a configured bounding envelope,
//! preserving aspect ratio and keeping both output dimensions even for
//! encoder macroblock alignment.
//!
//! The library is organized into a few small modules:
//! - `config`: Configuration management and validation
//! - `error`: Structured error types for the resolution layer
//! - `processing`: Renegotiation-facing planning on top of the calculator
//!
//! The calculator itself lives in the `cap-fit` crate and is re-exported
//! here; it is pure, allocation-free and safe to call concurrently.
//!
//! ## Example
//!
//! ```rust
//! use capture_resolution::{negotiate_target_size, ResolutionConfig, Size};
//!
//! let config = ResolutionConfig::default();
//! let target = negotiate_target_size(&config, Size::new(3840, 2160))?;
//! assert_eq!(target, Size::new(1920, 1080));
//! # Ok::<(), capture_resolution::CaptureError>(())
//! ```

// Internal module imports
pub mod config;
pub mod error;
pub mod processing;

/// Re-export error types for convenience
pub use error::{CaptureError, CaptureResult};

/// Re-export commonly used types from the calculator crate
pub use cap_fit::{Envelope, EnvelopePreset, FitError, Size};

pub use config::ResolutionConfig;
pub use processing::ResolutionPlanner;

/// Compute an encoder target size straight from a configuration.
///
/// One-shot convenience wrapper: validates the configuration, builds the
/// envelope and runs the calculator. Long-lived capture sessions should hold
/// a [`ResolutionPlanner`] instead, which caches the previous negotiation and
/// rejects degenerate targets. This wrapper returns the raw calculator
/// result, so a degenerate zero dimension is passed through for the caller
/// to detect.
pub fn negotiate_target_size(config: &ResolutionConfig, source: Size) -> CaptureResult<Size> {
    config.validate()?;
    let envelope = config.to_envelope()?;
    Ok(envelope.compute_target_size(source)?)
}

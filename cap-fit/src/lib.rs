// SPDX-License-Identifier: MIT
//! # cap-fit: Bounding-Envelope Target Resolution
//!
//! Given an arbitrary source capture resolution, compute the output
//! resolution a video encoder should be configured with: inside a
//! `(target_min, target_max)` bounding envelope, aspect ratio preserved,
//! both dimensions aligned down to even values.
//!
//! The calculator is a pure function of its inputs plus an immutable
//! [`Envelope`]; it performs no I/O, holds no mutable state, and may be
//! shared freely across threads.
//!
//! ## Usage Example
//!
//! ```rust
//! use cap_fit::{Envelope, Size};
//!
//! let envelope = Envelope::new(1080, 1920)?;
//! let target = envelope.compute_target_size(Size::new(3840, 1080))?;
//! assert_eq!(target, Size::new(1920, 540));
//! # Ok::<(), cap_fit::FitError>(())
//! ```

pub mod envelope;
pub mod presets;

pub use envelope::{Envelope, FitError, Size};
pub use presets::EnvelopePreset;

// SPDX-License-Identifier: MIT
//! # Envelope Fitting
//!
//! Core target-size computation. A capture source reports an arbitrary
//! resolution; downstream encoders accept at most `target_max` pixels on the
//! larger axis and `target_min` on the smaller one, and require even
//! dimensions for macroblock alignment. [`Envelope::compute_target_size`]
//! produces the size satisfying both bounds while preserving the source
//! aspect ratio.
//!
//! All intermediate arithmetic uses `f64`; integer truncation happens only at
//! the final alignment step, so sources in the tens of millions of pixels per
//! axis stay exact.

use std::{error::Error as StdError, fmt};

/// A width/height pair in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// Errors produced by envelope construction and target-size computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// Unusable bound pair: `target_min` is zero or exceeds `target_max`.
    InvalidBounds { target_min: u32, target_max: u32 },
    /// A source dimension was zero.
    InvalidDimensions { width: u32, height: u32 },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::InvalidBounds {
                target_min,
                target_max,
            } => {
                write!(
                    f,
                    "invalid envelope bounds: target_min {} must be positive and not exceed target_max {}",
                    target_min, target_max
                )
            }
            FitError::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "invalid source dimensions {}x{}: both must be positive",
                    width, height
                )
            }
        }
    }
}

impl StdError for FitError {}

/// The `(target_min, target_max)` pair constraining output dimensions.
///
/// `target_min` bounds the smaller output axis, `target_max` the larger one.
/// The pair is validated once at construction and never changes; a
/// misconfigured pair yields no usable instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Envelope {
    target_min: u32,
    target_max: u32,
}

impl Envelope {
    /// Create an envelope, rejecting unusable bounds up front.
    pub fn new(target_min: u32, target_max: u32) -> Result<Self, FitError> {
        if target_min == 0 || target_min > target_max {
            return Err(FitError::InvalidBounds {
                target_min,
                target_max,
            });
        }
        Ok(Self {
            target_min,
            target_max,
        })
    }

    /// Invariant-free constructor for compile-time-known valid bounds.
    pub(crate) const fn from_bounds(target_min: u32, target_max: u32) -> Self {
        Self {
            target_min,
            target_max,
        }
    }

    /// Bound on the smaller output axis.
    pub fn target_min(&self) -> u32 {
        self.target_min
    }

    /// Bound on the larger output axis.
    pub fn target_max(&self) -> u32 {
        self.target_max
    }

    /// Compute the output size for a reported source resolution.
    ///
    /// A source fits the envelope when its larger axis is at most
    /// `target_max` and its smaller axis is at most `target_min`; equality
    /// counts as fitting. A fitting source passes through unchanged except
    /// for even alignment, with no scale factor computed.
    ///
    /// When either bound is exceeded, both candidate ratios
    /// `target_max / max_dim` and `target_min / min_dim` are evaluated and
    /// the smaller one is applied uniformly to width and height, so the
    /// factor that satisfies the violated bound cannot push the other bound
    /// over. Each scaled dimension is truncated to an integer and aligned
    /// down to even, after scaling, never before.
    ///
    /// The operation is symmetric in the two axes: `(w, h)` and `(h, w)`
    /// yield mirrored results. Extremely skewed sources can collapse an axis
    /// to 0; callers must reject a zero dimension before configuring an
    /// encoder with the result.
    pub fn compute_target_size(&self, source: Size) -> Result<Size, FitError> {
        if source.w == 0 || source.h == 0 {
            return Err(FitError::InvalidDimensions {
                width: source.w,
                height: source.h,
            });
        }

        let max_dim = source.w.max(source.h);
        let min_dim = source.w.min(source.h);

        if max_dim <= self.target_max && min_dim <= self.target_min {
            return Ok(Size::new(
                align_down_even(source.w),
                align_down_even(source.h),
            ));
        }

        let scale = (f64::from(self.target_max) / f64::from(max_dim))
            .min(f64::from(self.target_min) / f64::from(min_dim));

        Ok(Size::new(
            align_down_even((f64::from(source.w) * scale) as u32),
            align_down_even((f64::from(source.h) * scale) as u32),
        ))
    }
}

/// Round down to the nearest even value (encoder macroblock alignment).
#[inline]
fn align_down_even(n: u32) -> u32 {
    n & !1
}

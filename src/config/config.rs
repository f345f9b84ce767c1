//! Configuration for the target-resolution calculator.
//!
//! [`ResolutionConfig`] is the interface between CLI or session code and the
//! core calculator: it carries the bounding envelope either as a numeric
//! `(target_min, target_max)` pair or as a named [`EnvelopePreset`], and
//! validates the pair before an [`Envelope`] is built from it.
//!
//! | Parameter    | Type   | Constraint                   |
//! |--------------|--------|------------------------------|
//! | `target_min` | `u32`  | `> 0`                        |
//! | `target_max` | `u32`  | `>= target_min`              |
//! | `preset`     | option | overrides the pair when set  |

use cap_fit::{Envelope, EnvelopePreset};

use crate::error::{CaptureError, CaptureResult};

/// Configuration for target-resolution calculation.
#[derive(Debug, Clone)]
pub struct ResolutionConfig {
    /// Largest allowed value of the smaller output dimension.
    pub target_min: u32,

    /// Largest allowed value of the larger output dimension.
    pub target_max: u32,

    /// Optional named envelope; overrides the numeric pair when set.
    pub preset: Option<EnvelopePreset>,
}

impl Default for ResolutionConfig {
    /// 1080p envelope, the common encoder default.
    fn default() -> Self {
        Self {
            target_min: 1080,
            target_max: 1920,
            preset: None,
        }
    }
}

impl ResolutionConfig {
    /// Creates a new configuration with the specified parameters.
    pub fn new(target_min: u32, target_max: u32, preset: Option<EnvelopePreset>) -> Self {
        Self {
            target_min,
            target_max,
            preset,
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> CaptureResult<()> {
        if self.preset.is_some() {
            return Ok(());
        }
        if self.target_min == 0 {
            return Err(CaptureError::config(
                "target_min",
                self.target_min.to_string(),
                "must be greater than 0",
            ));
        }
        if self.target_max < self.target_min {
            return Err(CaptureError::config(
                "target_max",
                self.target_max.to_string(),
                format!("must not be below target_min {}", self.target_min),
            ));
        }
        Ok(())
    }

    /// Build the bounding envelope this configuration describes.
    pub fn to_envelope(&self) -> CaptureResult<Envelope> {
        if let Some(preset) = self.preset {
            return Ok(preset.envelope());
        }
        Ok(Envelope::new(self.target_min, self.target_max)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cap_fit::Size;

    #[test]
    fn default_config_is_valid() {
        let config = ResolutionConfig::default();
        assert!(config.validate().is_ok());
        let envelope = config.to_envelope().unwrap();
        assert_eq!(envelope.target_min(), 1080);
        assert_eq!(envelope.target_max(), 1920);
    }

    #[test]
    fn zero_target_min_is_rejected() {
        let config = ResolutionConfig::new(0, 1920, None);
        let err = config.validate().unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let config = ResolutionConfig::new(1920, 1080, None);
        assert!(config.validate().is_err());
        assert!(config.to_envelope().is_err());
    }

    #[test]
    fn preset_overrides_numeric_pair() {
        // The numeric pair is unusable, but the preset takes precedence.
        let config = ResolutionConfig::new(0, 0, Some(EnvelopePreset::Hd720));
        assert!(config.validate().is_ok());
        let envelope = config.to_envelope().unwrap();
        assert_eq!(envelope.target_max(), 1280);
        let out = envelope.compute_target_size(Size::new(2560, 1440)).unwrap();
        assert_eq!(out, Size::new(1280, 720));
    }
}

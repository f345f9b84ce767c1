//! Renegotiation-facing resolution planning.
//!
//! Capture collaborators (session orchestration, device enumeration, the
//! encoder wiring) call [`ResolutionPlanner::negotiate`] once per
//! capture-source change or resolution renegotiation event and configure the
//! encoder with the returned size as-is; the size is never re-derived or
//! re-rounded downstream.

use cap_fit::{Envelope, Size};
use log::{debug, warn};

use crate::error::{CaptureError, CaptureResult};

/// Plans encoder target sizes across capture-source renegotiations.
///
/// The underlying calculator is pure; the planner adds the two concerns the
/// integration point needs: skipping recomputation when a renegotiation
/// reports an unchanged source, and refusing degenerate targets before they
/// can reach an encoder configuration call.
pub struct ResolutionPlanner {
    envelope: Envelope,
    /// Source and target of the previous negotiation.
    last: Option<(Size, Size)>,
}

impl ResolutionPlanner {
    /// Create a planner for a fixed bounding envelope.
    pub fn new(envelope: Envelope) -> Self {
        Self {
            envelope,
            last: None,
        }
    }

    /// The envelope this planner negotiates against.
    pub fn envelope(&self) -> Envelope {
        self.envelope
    }

    /// Compute the encoder target size for a reported source resolution.
    ///
    /// Consecutive calls with an unchanged source return the previous result
    /// without recomputation. A source so skewed that an output axis
    /// collapses to zero is rejected here rather than handed to an encoder.
    pub fn negotiate(&mut self, source: Size) -> CaptureResult<Size> {
        if let Some((prev_source, prev_target)) = self.last {
            if prev_source == source {
                return Ok(prev_target);
            }
        }

        let target = self.envelope.compute_target_size(source)?;
        if target.w == 0 || target.h == 0 {
            warn!(
                "source {} collapses to {} within envelope {}..={}",
                source,
                target,
                self.envelope.target_min(),
                self.envelope.target_max()
            );
            return Err(CaptureError::processing(
                "resolution negotiation",
                format!("source {} yields degenerate target {}", source, target),
            ));
        }

        debug!("negotiated {} -> {}", source, target);
        self.last = Some((source, target));
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negotiation_is_idempotent_for_unchanged_source() {
        let mut planner = ResolutionPlanner::new(Envelope::new(1080, 1920).unwrap());
        let first = planner.negotiate(Size::new(3840, 2160)).unwrap();
        let second = planner.negotiate(Size::new(3840, 2160)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn degenerate_target_is_rejected() {
        let mut planner = ResolutionPlanner::new(Envelope::new(1080, 1920).unwrap());
        let err = planner.negotiate(Size::new(1_048_576, 2)).unwrap_err();
        assert_eq!(err.category(), "processing");
    }
}

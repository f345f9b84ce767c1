//! Invariant sweeps for the bounding-envelope calculator.
//!
//! These exercise the contract properties across several envelopes and a
//! grid of source resolutions: fit, no-op pass-through, aspect tolerance,
//! evenness, and orientation symmetry.

use capture_resolution::{Envelope, Size};

fn envelopes() -> Vec<Envelope> {
    vec![
        Envelope::new(720, 1280).unwrap(),
        Envelope::new(1080, 1920).unwrap(),
        Envelope::new(1440, 2560).unwrap(),
    ]
}

/// Common display dimensions plus deliberately awkward odd values.
fn grid_dimensions() -> &'static [u32] {
    &[
        320, 479, 640, 719, 800, 1024, 1080, 1280, 1366, 1437, 1600, 1920, 2160, 2560, 3440,
        3840, 5120, 7680,
    ]
}

fn grid_sources() -> Vec<Size> {
    let mut sources = Vec::new();
    for &w in grid_dimensions() {
        for &h in grid_dimensions() {
            sources.push(Size::new(w, h));
        }
    }
    sources
}

/// Magnitude and skew extremes the grid does not cover.
fn extreme_sources() -> Vec<Size> {
    vec![
        Size::new(93_215_327, 32_171_121),
        Size::new(40_000_000, 30_000_000),
        Size::new(1_048_576, 2),
        Size::new(2, 1_048_576),
        Size::new(1, 1),
    ]
}

fn aspect_millis(w: u32, h: u32) -> u64 {
    1000 * u64::from(w) / u64::from(h)
}

#[test]
fn output_always_fits_the_envelope() {
    for envelope in envelopes() {
        for source in grid_sources().into_iter().chain(extreme_sources()) {
            let out = envelope.compute_target_size(source).unwrap();
            assert!(
                out.w.max(out.h) <= envelope.target_max(),
                "{} -> {} exceeds target_max {}",
                source,
                out,
                envelope.target_max()
            );
            assert!(
                out.w.min(out.h) <= envelope.target_min(),
                "{} -> {} exceeds target_min {}",
                source,
                out,
                envelope.target_min()
            );
        }
    }
}

#[test]
fn outputs_are_always_even() {
    for envelope in envelopes() {
        for source in grid_sources().into_iter().chain(extreme_sources()) {
            let out = envelope.compute_target_size(source).unwrap();
            assert_eq!(out.w % 2, 0, "{} -> {} has odd width", source, out);
            assert_eq!(out.h % 2, 0, "{} -> {} has odd height", source, out);
        }
    }
}

#[test]
fn fitting_sources_pass_through_with_even_alignment() {
    for envelope in envelopes() {
        for source in grid_sources() {
            let fits = source.w.max(source.h) <= envelope.target_max()
                && source.w.min(source.h) <= envelope.target_min();
            if !fits {
                continue;
            }
            let out = envelope.compute_target_size(source).unwrap();
            assert_eq!(
                out,
                Size::new(source.w & !1, source.h & !1),
                "fitting source {} was not passed through",
                source
            );
        }
    }
}

#[test]
fn orientation_symmetry_holds_everywhere() {
    for envelope in envelopes() {
        for source in grid_sources().into_iter().chain(extreme_sources()) {
            let out = envelope.compute_target_size(source).unwrap();
            let mirrored = envelope
                .compute_target_size(Size::new(source.h, source.w))
                .unwrap();
            assert_eq!(
                mirrored,
                Size::new(out.h, out.w),
                "{} and its transpose disagree",
                source
            );
        }
    }
}

#[test]
fn aspect_drift_stays_below_tolerance() {
    // The tolerance applies to realistic sources; sweep aspect ratios up to
    // 2:1 in either orientation. Wider strips are exercised by the
    // degenerate-collapse tests instead.
    for envelope in envelopes() {
        for source in grid_sources() {
            if source.w > 2 * source.h || source.h > 2 * source.w {
                continue;
            }
            let scales = source.w.max(source.h) > envelope.target_max()
                || source.w.min(source.h) > envelope.target_min();
            if !scales {
                continue;
            }
            let out = envelope.compute_target_size(source).unwrap();
            let drift = aspect_millis(source.w, source.h).abs_diff(aspect_millis(out.w, out.h));
            assert!(
                drift < 12,
                "{} -> {} drifts aspect by {}/1000",
                source,
                out,
                drift
            );
        }
    }
}

//! Mapping between global progress and segment-local parameters or
//! control-point indices.
//!
//! Progress is divided uniformly across segments: every segment covers
//! `1 / segment_count` of the range regardless of its length.

use crate::math::PROGRESS_TOLERANCE;

/// A position on the path expressed as a segment and a local parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLocation {
    /// Index of the segment (not of its first control point).
    pub segment: usize,
    /// Local parameter in `[0, 1]`.
    pub t: f64,
}

/// Clamps a progress value to `[0, 1]`, mapping NaN to 0.
#[must_use]
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Returns whether the control point at `index` is an anchor.
#[must_use]
pub fn is_anchor(index: usize) -> bool {
    index % 3 == 0
}

/// Splits a global progress value into a segment and local parameter.
///
/// A progress of 1 (or more) stays on the last segment with `t = 1` instead
/// of rolling over into a segment that does not exist.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn to_segment(progress: f64, segment_count: usize) -> SegmentLocation {
    debug_assert!(segment_count > 0, "path without segments");
    let progress = clamp_progress(progress);
    if progress >= 1.0 {
        return SegmentLocation {
            segment: segment_count - 1,
            t: 1.0,
        };
    }
    let scaled = progress * segment_count as f64;
    let segment = (scaled.floor() as usize).min(segment_count - 1);
    SegmentLocation {
        segment,
        t: scaled - segment as f64,
    }
}

/// Global progress at which the control point `index` sits.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn progress_for_index(index: usize, segment_count: usize) -> f64 {
    index as f64 / (segment_count * 3) as f64
}

/// The control point lying exactly at `progress`, if any.
///
/// Only exact hits (within [`PROGRESS_TOLERANCE`]) are reported; a progress
/// between two control points yields `None`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn selected_index(progress: f64, segment_count: usize) -> Option<usize> {
    let index = clamp_progress(progress) * (segment_count * 3) as f64;
    let nearest = index.round();
    ((index - nearest).abs() <= PROGRESS_TOLERANCE).then_some(nearest as usize)
}

/// The anchor whose orientation keyframe applies at control point `index`.
///
/// An anchor and the handle after it map to that anchor; the handle before
/// an anchor maps forward to it.
#[must_use]
pub fn handle_owner_anchor(index: usize) -> usize {
    if index % 3 <= 1 {
        (index / 3) * 3
    } else {
        index + 1
    }
}

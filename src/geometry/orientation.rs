use crate::math::{UnitQuaternion, TOLERANCE};

/// Shortest-path spherical interpolation between two unit rotations.
///
/// `t` is clamped to `[0, 1]`. When the rotations are numerically identical
/// (slerp is undefined) the normalized linear blend is returned instead.
#[must_use]
pub fn interpolate_orientation(a: &UnitQuaternion, b: &UnitQuaternion, t: f64) -> UnitQuaternion {
    let t = t.clamp(0.0, 1.0);
    let dot = a.coords.dot(&b.coords);
    // q and -q are the same rotation; pick the hemisphere closest to `a`.
    let b = if dot < 0.0 {
        UnitQuaternion::new_unchecked(-b.into_inner())
    } else {
        *b
    };
    if dot.abs() >= 1.0 - TOLERANCE {
        return a.nlerp(&b, t);
    }
    a.try_slerp(&b, t, TOLERANCE).unwrap_or_else(|| a.nlerp(&b, t))
}

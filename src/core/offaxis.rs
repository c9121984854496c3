//! Type definition of Float, otherwise constants and small functions
//! which can be used almost everywhere else in the code.

// std
use std::f64::consts::PI;

/// The frustum reconstruction divides near-plane extents by the
/// far/near ratio (about 1e6 for the default clip planes), which
/// leaves single precision with no significant digits.
pub type Float = f64;

/// Default distance of the near clip plane. Only the angular shape of
/// the frustum matters for the derivations, not its depth range.
pub const DEFAULT_Z_NEAR: Float = 1e-3;
/// Default distance of the far clip plane.
pub const DEFAULT_Z_FAR: Float = 1000.0;

/// Two plane normals count as parallel when the squared length of
/// their cross product is at most this fraction of the product of
/// their squared lengths (sin² of the angle between them).
pub const PARALLEL_EPSILON: Float = 1e-12;
/// A 3x3 system counts as singular when its determinant is at most
/// this fraction of the product of its column lengths.
pub const SINGULAR_EPSILON: Float = 1e-12;
/// The eye counts as lying on the screen plane when its distance is at
/// most this fraction of the larger screen extent.
pub const DISTANCE_EPSILON: Float = 1e-9;

/// Convert from angles expressed in degrees to radians.
pub fn radians(deg: Float) -> Float {
    (PI / 180.0) * deg
}

/// Convert from angles expressed in radians to degrees.
pub fn degrees(rad: Float) -> Float {
    (180.0 / PI) * rad
}

/// Linear interpolation between *a* and *b*.
pub fn lerp(t: Float, a: Float, b: Float) -> Float {
    (1.0 - t) * a + t * b
}

/// Returns true if both values agree within *tolerance*, measured
/// relative to the larger magnitude (but never tighter than absolute).
pub fn approx_eq(a: Float, b: Float, tolerance: Float) -> bool {
    (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0)
}

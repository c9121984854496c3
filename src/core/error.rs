//! Errors raised while deriving or reconstructing off-axis cameras.
//!
//! Every failure is detected at the point where a division or a
//! determinant would otherwise turn into NaN or infinity. Inputs are
//! deterministic, so there is nothing to retry; callers report which
//! camera strategy failed and skip it.

// others
use strum_macros::Display;
use thiserror::Error;
// offaxis
use crate::core::offaxis::Float;

/// Failure of one of the off-axis camera derivations.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum OffAxisError {
    /// The screen or eye (or a frustum recovered from matrices) does not
    /// describe a finite, non-degenerate frustum.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(#[from] Degeneracy),
    /// Two bounding planes of a reconstructed frustum are parallel, as
    /// with an orthographic projection.
    #[error("the {0} frustum planes are parallel and do not intersect")]
    NoIntersection(PlanePair),
    /// The linear system for the closest approach between the two
    /// plane-intersection lines has no unique solution.
    #[error("closest-approach system is singular (determinant {determinant:e})")]
    SingularSystem { determinant: Float },
    /// A 4x4 matrix has no inverse.
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,
}

/// The specific way in which geometric input is degenerate.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum Degeneracy {
    #[error("a screen corner or the eye position is not finite")]
    NonFinite,
    #[error("screen edge {0} has zero length")]
    ZeroLengthEdge(ScreenEdge),
    #[error("screen corners are collinear")]
    CollinearCorners,
    #[error("eye lies on the screen plane (distance {distance:e})")]
    EyeOnScreenPlane { distance: Float },
    #[error("eye lies behind the screen (distance {distance})")]
    EyeBehindScreen { distance: Float },
    #[error("clip planes must satisfy 0 < near < far (near {near}, far {far})")]
    InvalidClipPlanes { near: Float, far: Float },
    #[error("a frustum corner unprojects to infinity")]
    PointAtInfinity,
    #[error("a frustum edge has zero length")]
    CollapsedFrustum,
    #[error("stereo rig has no usable right vector")]
    NoRightVector,
}

/// Edges of the screen quadrilateral which must have non-zero length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum ScreenEdge {
    #[strum(serialize = "lower-left to lower-right")]
    Bottom,
    #[strum(serialize = "lower-right to upper-right")]
    Right,
}

/// The pairs of opposite frustum side planes which are intersected
/// during reconstruction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum PlanePair {
    #[strum(serialize = "left/right")]
    LeftRight,
    #[strum(serialize = "bottom/top")]
    BottomTop,
}

//! A physical projection screen (one wall of a CAVE or a powerwall)
//! and the frame it spans relative to a tracked eye.
//!
//! The screen is given by three of its corners, the fourth is implied.
//! Its basis is
//!
//! - `X = normalize(LR - LL)` (along the bottom edge),
//! - `Y = normalize(UR - LR)` (along the right edge),
//! - `Z = X x Y` (the screen normal, pointing towards the viewer).
//!
//! The basis is not re-orthogonalized, the corners are expected to
//! span a rectangle.

// others
use serde::{Deserialize, Serialize};
// offaxis
use crate::core::error::{Degeneracy, OffAxisError, ScreenEdge};
use crate::core::geometry::{vec3_cross_vec3, vec3_dot_vec3f, Point3f, Vector3f};
use crate::core::offaxis::{Float, DISTANCE_EPSILON, PARALLEL_EPSILON};

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenQuad {
    pub lower_left: Point3f,
    pub lower_right: Point3f,
    pub upper_right: Point3f,
}

impl ScreenQuad {
    pub fn new(lower_left: Point3f, lower_right: Point3f, upper_right: Point3f) -> Self {
        ScreenQuad {
            lower_left,
            lower_right,
            upper_right,
        }
    }
    pub fn upper_left(&self) -> Point3f {
        self.lower_left + (self.upper_right - self.lower_right)
    }
    pub fn width(&self) -> Float {
        (self.lower_right - self.lower_left).length()
    }
    pub fn height(&self) -> Float {
        (self.upper_right - self.lower_right).length()
    }
    pub fn is_finite(&self) -> bool {
        self.lower_left.is_finite() && self.lower_right.is_finite() && self.upper_right.is_finite()
    }
    /// Checks the screen on its own, without an eye.
    pub fn validate(&self) -> Result<(), OffAxisError> {
        ScreenBasis::new(self).map(|_| ())
    }
}

/// The orthonormal(ish) basis spanned by a screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenBasis {
    pub x: Vector3f,
    pub y: Vector3f,
    pub z: Vector3f,
    pub width: Float,
    pub height: Float,
}

impl ScreenBasis {
    pub fn new(screen: &ScreenQuad) -> Result<ScreenBasis, OffAxisError> {
        if !screen.is_finite() {
            return Err(Degeneracy::NonFinite.into());
        }
        let bottom: Vector3f = screen.lower_right - screen.lower_left;
        let right: Vector3f = screen.upper_right - screen.lower_right;
        let width: Float = bottom.length();
        let height: Float = right.length();
        let x: Vector3f = bottom
            .try_normalize()
            .ok_or(Degeneracy::ZeroLengthEdge(ScreenEdge::Bottom))?;
        let y: Vector3f = right
            .try_normalize()
            .ok_or(Degeneracy::ZeroLengthEdge(ScreenEdge::Right))?;
        let z: Vector3f = vec3_cross_vec3(&x, &y);
        if !(z.length_squared() > PARALLEL_EPSILON) {
            return Err(Degeneracy::CollinearCorners.into());
        }
        Ok(ScreenBasis {
            x,
            y,
            z,
            width,
            height,
        })
    }
}

/// Extents of the screen as seen from the eye, measured in the screen
/// plane from the foot point of the eye.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenFrame {
    pub basis: ScreenBasis,
    /// Distance from the eye to the screen plane (along `Z`).
    pub dist: Float,
    pub left: Float,
    pub right: Float,
    pub bottom: Float,
    pub top: Float,
}

impl ScreenFrame {
    /// The eye has to be in front of the screen, i.e. on the side the
    /// normal `Z` points to.
    pub fn new(screen: &ScreenQuad, eye: &Point3f) -> Result<ScreenFrame, OffAxisError> {
        let basis = ScreenBasis::new(screen)?;
        if !eye.is_finite() {
            return Err(Degeneracy::NonFinite.into());
        }
        let eye_p: Vector3f = eye - screen.lower_left;
        let dist: Float = vec3_dot_vec3f(&eye_p, &basis.z);
        if dist.abs() <= DISTANCE_EPSILON * basis.width.max(basis.height) {
            return Err(Degeneracy::EyeOnScreenPlane { distance: dist }.into());
        }
        if dist < 0.0 {
            return Err(Degeneracy::EyeBehindScreen { distance: dist }.into());
        }
        let left: Float = vec3_dot_vec3f(&eye_p, &basis.x);
        let bottom: Float = vec3_dot_vec3f(&eye_p, &basis.y);
        Ok(ScreenFrame {
            basis,
            dist,
            left,
            right: basis.width - left,
            bottom,
            top: basis.height - bottom,
        })
    }
}

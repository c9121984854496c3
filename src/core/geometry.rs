//! The off-axis derivations are built on a handful of geometric
//! classes. These classes represent mathematical constructs like
//! points and vectors.
//!
//! # Points
//!
//! A **point** is a zero-dimensional location in 2D or 3D space. A
//! screen corner or the tracked eye position is a **Point3f**. Although
//! the same representation is used for vectors, the fact that a point
//! represents a position whereas a vector represents a direction leads
//! to a number of important differences in how they are treated:
//! subtracting two points yields a vector, adding a vector to a point
//! yields a point.
//!
//! ```rust
//! use rs_offaxis::core::geometry::{Point3f, Vector3f};
//!
//!     let lower_left = Point3f { x: 0.0, y: 0.0, z: 0.0 };
//!     let lower_right = Point3f { x: 3.0, y: 0.0, z: 0.0 };
//!     let edge: Vector3f = lower_right - lower_left;
//!
//!     assert_eq!(edge.length(), 3.0);
//! ```
//!
//! # Vectors
//!
//! Vectors are used for the screen basis (edge directions and the
//! screen normal) and for the camera direction and up vector.
//!
//! ```rust
//! use rs_offaxis::core::geometry::{vec3_cross_vec3, Vector3f};
//!
//!     let x = Vector3f { x: 1.0, y: 0.0, z: 0.0 };
//!     let y = Vector3f { x: 0.0, y: 1.0, z: 0.0 };
//!
//!     assert_eq!(vec3_cross_vec3(&x, &y), Vector3f { x: 0.0, y: 0.0, z: 1.0 });
//! ```
//!
//! # Bounding Boxes
//!
//! **Bounds2f** describes the normalized image region of a symmetric
//! camera, i.e. the part of the rendered image which corresponds to
//! the asymmetric frustum.
//!
//! ```rust
//! use rs_offaxis::core::geometry::{Bounds2f, Point2f};
//!
//!     let full = Bounds2f::unit();
//!
//!     assert_eq!(full.p_min, Point2f { x: 0.0, y: 0.0 });
//!     assert_eq!(full.area(), 1.0);
//! ```

// std
use std::ops;
// others
use serde::{Deserialize, Serialize};
// offaxis
use crate::core::offaxis::Float;

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector2f {
    pub x: Float,
    pub y: Float,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Vector3f { x, y, z }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }
    /// Compute a new vector pointing in the same direction but with unit
    /// length.
    pub fn normalize(&self) -> Vector3f {
        *self / self.length()
    }
    /// Like [`normalize`](Self::normalize), but returns `None` for
    /// vectors which have no direction (zero length or non-finite).
    pub fn try_normalize(&self) -> Option<Vector3f> {
        let length: Float = self.length();
        if length > 0.0 && length.is_finite() {
            Some(*self / length)
        } else {
            None
        }
    }
}

impl_op!(-|a: Vector3f| -> Vector3f {
    Vector3f {
        x: -a.x,
        y: -a.y,
        z: -a.z,
    }
});

impl From<Point3f> for Vector3f {
    fn from(p: Point3f) -> Self {
        Vector3f {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

/// Product of the Euclidean magnitudes of the two vectors and the
/// cosine of the angle between them. A return value of zero means
/// both vectors are orthogonal, a value if one means they are
/// codirectional.
pub fn vec3_dot_vec3f(v1: &Vector3f, v2: &Vector3f) -> Float {
    v1.x * v2.x + v1.y * v2.y + v1.z * v2.z
}

/// Given two vectors in 3D, the cross product is a vector that is
/// perpendicular to both of them.
pub fn vec3_cross_vec3(v1: &Vector3f, v2: &Vector3f) -> Vector3f {
    Vector3f {
        x: (v1.y * v2.z) - (v1.z * v2.y),
        y: (v1.z * v2.x) - (v1.x * v2.z),
        z: (v1.x * v2.y) - (v1.y * v2.x),
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point2f {
    pub x: Float,
    pub y: Float,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Point3f {
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Point3f { x, y, z }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<Vector3f> for Point3f {
    fn from(v: Vector3f) -> Self {
        Point3f {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl_op_ex!(+|a: &Point3f, b: &Point3f| -> Point3f {
    Point3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(+|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(-|a: &Vector3f, b: &Vector3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(+|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x + b.x,
        y: a.y + b.y,
        z: a.z + b.z,
    }
});

impl_op_ex!(-|a: &Point3f, b: &Point3f| -> Vector3f {
    Vector3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(-|a: &Point3f, b: &Vector3f| -> Point3f {
    Point3f {
        x: a.x - b.x,
        y: a.y - b.y,
        z: a.z - b.z,
    }
});

impl_op_ex!(-|a: &Point2f, b: &Point2f| -> Vector2f {
    Vector2f {
        x: a.x - b.x,
        y: a.y - b.y,
    }
});

impl_op_ex!(*|a: &Point3f, b: Float| -> Point3f {
    Point3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});

impl_op_ex!(*|a: &Vector3f, b: Float| -> Vector3f {
    Vector3f {
        x: a.x * b,
        y: a.y * b,
        z: a.z * b,
    }
});

impl_op_ex!(/|a: &Point3f, b: Float| -> Point3f {
    assert_ne!(b, 0.0 as Float);
    let inv: Float = 1.0 as Float / b;
    Point3f {
        x: a.x * inv,
        y: a.y * inv,
        z: a.z * inv,
    }
});

impl_op_ex!(/|a: &Vector3f, b: Float| -> Vector3f {
    assert_ne!(b, 0.0 as Float);
    let inv: Float = 1.0 as Float / b;
    Vector3f {
        x: a.x * inv,
        y: a.y * inv,
        z: a.z * inv,
    }
});

/// Interpolate linearly between two provided points.
pub fn pnt3_lerp(t: Float, p0: &Point3f, p1: &Point3f) -> Point3f {
    *p0 * (1.0 as Float - t) + *p1 * t
}

/// The distance between two points is the length of the vector
/// between them.
pub fn pnt3_distancef(p1: &Point3f, p2: &Point3f) -> Float {
    (p1 - p2).length()
}

/// An axis-aligned rectangle; used for normalized image regions.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds2f {
    pub p_min: Point2f,
    pub p_max: Point2f,
}

impl Bounds2f {
    pub fn new(x_min: Float, y_min: Float, x_max: Float, y_max: Float) -> Self {
        Bounds2f {
            p_min: Point2f { x: x_min, y: y_min },
            p_max: Point2f { x: x_max, y: y_max },
        }
    }
    /// The full normalized image, `[0,1] x [0,1]`.
    pub fn unit() -> Self {
        Bounds2f::new(0.0, 0.0, 1.0, 1.0)
    }
    pub fn diagonal(&self) -> Vector2f {
        self.p_max - self.p_min
    }
    pub fn area(&self) -> Float {
        let d: Vector2f = self.p_max - self.p_min;
        d.x * d.y
    }
    /// Largest absolute difference of any of the four coordinates.
    pub fn max_deviation(&self, other: &Bounds2f) -> Float {
        (self.p_min.x - other.p_min.x)
            .abs()
            .max((self.p_min.y - other.p_min.y).abs())
            .max((self.p_max.x - other.p_max.x).abs())
            .max((self.p_max.y - other.p_max.y).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_product_is_perpendicular() {
        let a = Vector3f::new(1.0, 2.0, 3.0);
        let b = Vector3f::new(-2.0, 0.5, 4.0);
        let c = vec3_cross_vec3(&a, &b);
        assert_eq!(vec3_dot_vec3f(&a, &c), 0.0);
        assert_eq!(vec3_dot_vec3f(&b, &c), 0.0);
        // anti-commutative
        assert_eq!(vec3_cross_vec3(&b, &a), -c);
    }

    #[test]
    fn normalize_has_unit_length() {
        let v = Vector3f::new(3.0, 0.0, 4.0).normalize();
        assert!((v.x - 0.6).abs() < 1e-15);
        assert_eq!(v.y, 0.0);
        assert!((v.z - 0.8).abs() < 1e-15);
        assert!((v.length() - 1.0).abs() < 1e-15);
        assert_eq!(
            Vector3f::new(0.0, 0.0, 4.0).normalize(),
            Vector3f::new(0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn try_normalize_rejects_zero() {
        assert_eq!(Vector3f::default().try_normalize(), None);
        assert_eq!(
            Vector3f::new(Float::INFINITY, 0.0, 0.0).try_normalize(),
            None
        );
        assert_eq!(
            Vector3f::new(0.0, -2.0, 0.0).try_normalize(),
            Some(Vector3f::new(0.0, -1.0, 0.0))
        );
    }

    #[test]
    fn point_vector_arithmetic() {
        let p = Point3f::new(1.0, 1.0, 1.0);
        let q = Point3f::new(4.0, 5.0, 1.0);
        let d: Vector3f = q - p;
        assert_eq!(d, Vector3f::new(3.0, 4.0, 0.0));
        assert_eq!(p + d, q);
        assert_eq!(q - d, p);
        assert_eq!(pnt3_distancef(&p, &q), 5.0);
        assert_eq!(pnt3_lerp(0.5, &p, &q), Point3f::new(2.5, 3.0, 1.0));
        assert_eq!((p + q) / 2.0, Point3f::new(2.5, 3.0, 1.0));
    }

    #[test]
    fn bounds_area_and_deviation() {
        let b = Bounds2f::new(0.0, 0.25, 1.0, 0.75);
        assert_eq!(b.area(), 0.5);
        assert_eq!(b.diagonal(), Vector2f { x: 1.0, y: 0.5 });
        assert_eq!(b.max_deviation(&Bounds2f::unit()), 0.25);
    }
}

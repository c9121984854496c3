//! In general, transformations make it possible to work in the most
//! convenient coordinate space.
//!
//! ## 3 x 3 Matrices
//!
//! The **Matrix3x3** structure only exists to solve small linear
//! systems with Cramer's rule: its columns are the unknowns'
//! coefficients.
//!
//! ## 4 x 4 Matrices
//!
//! The **Matrix4x4** structure provides a low-level representation of
//! 4 x 4 matrices. Matrices are stored row-major and act on column
//! vectors, so the translation of an affine matrix lives in the last
//! column and the projective row is the last row.
//!
//! ## Transformations
//!
//! A **Transform** keeps a matrix together with its inverse. The
//! projection transforms built here (`frustum` and `orthographic_box`)
//! follow the OpenGL conventions: the eye looks down the negative *z*
//! axis and the view volume maps to the `[-1,1]^3` cube of normalized
//! device coordinates, with the near plane at *z = -1*.

// std
use std::ops::Mul;
// others
use serde::{Deserialize, Serialize};
// offaxis
use crate::core::error::{Degeneracy, OffAxisError};
use crate::core::geometry::{vec3_dot_vec3f, Point3f, Vector3f};
use crate::core::offaxis::{Float, SINGULAR_EPSILON};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix3x3 {
    pub m: [[Float; 3]; 3],
}

impl Matrix3x3 {
    pub fn from_columns(c0: &Vector3f, c1: &Vector3f, c2: &Vector3f) -> Self {
        Matrix3x3 {
            m: [
                [c0.x, c1.x, c2.x],
                [c0.y, c1.y, c2.y],
                [c0.z, c1.z, c2.z],
            ],
        }
    }
    pub fn column(&self, j: usize) -> Vector3f {
        Vector3f {
            x: self.m[0][j],
            y: self.m[1][j],
            z: self.m[2][j],
        }
    }
    /// Returns a copy with column *j* replaced by *c*.
    pub fn with_column(&self, j: usize, c: &Vector3f) -> Self {
        let mut r: Matrix3x3 = *self;
        r.m[0][j] = c.x;
        r.m[1][j] = c.y;
        r.m[2][j] = c.z;
        r
    }
    pub fn determinant(&self) -> Float {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix4x4 {
    pub m: [[Float; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}

impl Matrix4x4 {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        t00: Float,
        t01: Float,
        t02: Float,
        t03: Float,
        t10: Float,
        t11: Float,
        t12: Float,
        t13: Float,
        t20: Float,
        t21: Float,
        t22: Float,
        t23: Float,
        t30: Float,
        t31: Float,
        t32: Float,
        t33: Float,
    ) -> Self {
        Matrix4x4 {
            m: [
                [t00, t01, t02, t03],
                [t10, t11, t12, t13],
                [t20, t21, t22, t23],
                [t30, t31, t32, t33],
            ],
        }
    }
    pub fn transpose(m: &Matrix4x4) -> Matrix4x4 {
        Matrix4x4 {
            m: [
                [m.m[0][0], m.m[1][0], m.m[2][0], m.m[3][0]],
                [m.m[0][1], m.m[1][1], m.m[2][1], m.m[3][1]],
                [m.m[0][2], m.m[1][2], m.m[2][2], m.m[3][2]],
                [m.m[0][3], m.m[1][3], m.m[2][3], m.m[3][3]],
            ],
        }
    }
    /// Gauss-Jordan elimination with full pivoting.
    pub fn inverse(m: &Matrix4x4) -> Result<Matrix4x4, OffAxisError> {
        let mut indxc = [0_usize; 4];
        let mut indxr = [0_usize; 4];
        let mut ipiv = [0_u8; 4];
        let mut minv: Matrix4x4 = *m;
        for i in 0..4 {
            let mut irow = 0;
            let mut icol = 0;
            let mut big: Float = 0.0;
            // choose pivot
            for j in 0..4 {
                if ipiv[j] != 1 {
                    for (k, item) in ipiv.iter().enumerate() {
                        if *item == 0 {
                            let abs: Float = (minv.m[j][k]).abs();
                            if abs >= big {
                                big = abs;
                                irow = j;
                                icol = k;
                            }
                        } else if *item > 1 {
                            return Err(OffAxisError::SingularMatrix);
                        }
                    }
                }
            }
            ipiv[icol] += 1;
            // swap rows _irow_ and _icol_ for pivot
            if irow != icol {
                minv.m.swap(irow, icol);
            }
            indxr[i] = irow;
            indxc[i] = icol;
            if minv.m[icol][icol] == 0.0 || !minv.m[icol][icol].is_finite() {
                return Err(OffAxisError::SingularMatrix);
            }
            // set $m[icol][icol]$ to one by scaling row _icol_ appropriately
            let pivinv: Float = 1.0 / minv.m[icol][icol];
            minv.m[icol][icol] = 1.0;
            for j in 0..4 {
                minv.m[icol][j] *= pivinv;
            }
            // subtract this row from others to zero out their columns
            for j in 0..4 {
                if j != icol {
                    let save: Float = minv.m[j][icol];
                    minv.m[j][icol] = 0.0;
                    for k in 0..4 {
                        minv.m[j][k] -= minv.m[icol][k] * save;
                    }
                }
            }
        }
        // swap columns to reflect permutation
        for j in (0..4).rev() {
            if indxr[j] != indxc[j] {
                for k in 0..4 {
                    minv.m[k].swap(indxr[j], indxc[j])
                }
            }
        }
        Ok(minv)
    }
    /// Applies the matrix to the homogeneous point `(p, 1)` and
    /// performs the perspective divide.
    pub fn transform_point(&self, p: &Point3f) -> Result<Point3f, OffAxisError> {
        let x: Float = p.x;
        let y: Float = p.y;
        let z: Float = p.z;
        let xp: Float = self.m[0][0] * x + self.m[0][1] * y + self.m[0][2] * z + self.m[0][3];
        let yp: Float = self.m[1][0] * x + self.m[1][1] * y + self.m[1][2] * z + self.m[1][3];
        let zp: Float = self.m[2][0] * x + self.m[2][1] * y + self.m[2][2] * z + self.m[2][3];
        let wp: Float = self.m[3][0] * x + self.m[3][1] * y + self.m[3][2] * z + self.m[3][3];
        if wp == 0.0 || !wp.is_finite() {
            return Err(Degeneracy::PointAtInfinity.into());
        }
        let inv: Float = 1.0 as Float / wp;
        let r = Point3f {
            x: inv * xp,
            y: inv * yp,
            z: inv * zp,
        };
        if r.is_finite() {
            Ok(r)
        } else {
            Err(Degeneracy::PointAtInfinity.into())
        }
    }
    pub fn transform_vector(&self, v: &Vector3f) -> Vector3f {
        Vector3f {
            x: self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            y: self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            z: self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        }
    }
}

/// The product of two matrices.
pub fn mtx_mul(m1: &Matrix4x4, m2: &Matrix4x4) -> Matrix4x4 {
    let mut r: Matrix4x4 = Matrix4x4::default();
    for i in 0..4 {
        for j in 0..4 {
            r.m[i][j] = m1.m[i][0] * m2.m[0][j]
                + m1.m[i][1] * m2.m[1][j]
                + m1.m[i][2] * m2.m[2][j]
                + m1.m[i][3] * m2.m[3][j];
        }
    }
    r
}

/// Finds the solution of a 3x3 linear system `a * x = b` with
/// Cramer's rule.
pub fn solve_linear_system_3x3(a: &Matrix3x3, b: &Vector3f) -> Result<Vector3f, OffAxisError> {
    let d: Float = a.determinant();
    // Hadamard's bound: |det| can not exceed the product of the column lengths
    let scale: Float = a.column(0).length() * a.column(1).length() * a.column(2).length();
    if !(d.abs() > SINGULAR_EPSILON * scale) {
        return Err(OffAxisError::SingularSystem { determinant: d });
    }
    let d1: Float = a.with_column(0, b).determinant();
    let d2: Float = a.with_column(1, b).determinant();
    let d3: Float = a.with_column(2, b).determinant();
    Ok(Vector3f {
        x: d1 / d,
        y: d2 / d,
        z: d3 / d,
    })
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub m: Matrix4x4,
    pub m_inv: Matrix4x4,
}

impl Transform {
    /// Wraps an arbitrary matrix, computing its inverse numerically.
    pub fn from_matrix(m: Matrix4x4) -> Result<Transform, OffAxisError> {
        Ok(Transform {
            m,
            m_inv: Matrix4x4::inverse(&m)?,
        })
    }
    pub fn inverse(t: &Transform) -> Transform {
        Transform {
            m: t.m_inv,
            m_inv: t.m,
        }
    }
    /// Maps a point from world space into a coordinate system with
    /// origin *eye* and the given axes; the axes are the rows of the
    /// rotation part.
    pub fn from_basis(
        x: &Vector3f,
        y: &Vector3f,
        z: &Vector3f,
        eye: &Point3f,
    ) -> Result<Transform, OffAxisError> {
        let e: Vector3f = Vector3f::from(*eye);
        let m = Matrix4x4::new(
            x.x,
            x.y,
            x.z,
            -vec3_dot_vec3f(x, &e),
            y.x,
            y.y,
            y.z,
            -vec3_dot_vec3f(y, &e),
            z.x,
            z.y,
            z.z,
            -vec3_dot_vec3f(z, &e),
            0.0,
            0.0,
            0.0,
            1.0,
        );
        Transform::from_matrix(m)
    }
    /// Asymmetric perspective projection (OpenGL `glFrustum`). The
    /// extents are measured on the near plane.
    pub fn frustum(
        left: Float,
        right: Float,
        bottom: Float,
        top: Float,
        z_near: Float,
        z_far: Float,
    ) -> Transform {
        let m = Matrix4x4::new(
            (2.0 * z_near) / (right - left),
            0.0,
            (right + left) / (right - left),
            0.0,
            0.0,
            (2.0 * z_near) / (top - bottom),
            (top + bottom) / (top - bottom),
            0.0,
            0.0,
            0.0,
            -(z_far + z_near) / (z_far - z_near),
            -(2.0 * z_far * z_near) / (z_far - z_near),
            0.0,
            0.0,
            -1.0,
            0.0,
        );
        let m_inv = Matrix4x4::new(
            (right - left) / (2.0 * z_near),
            0.0,
            0.0,
            (right + left) / (2.0 * z_near),
            0.0,
            (top - bottom) / (2.0 * z_near),
            0.0,
            (top + bottom) / (2.0 * z_near),
            0.0,
            0.0,
            0.0,
            -1.0,
            0.0,
            0.0,
            -(z_far - z_near) / (2.0 * z_far * z_near),
            (z_far + z_near) / (2.0 * z_far * z_near),
        );
        Transform { m, m_inv }
    }
    /// Parallel projection of a box (OpenGL `glOrtho`).
    pub fn orthographic_box(
        left: Float,
        right: Float,
        bottom: Float,
        top: Float,
        z_near: Float,
        z_far: Float,
    ) -> Transform {
        let m = Matrix4x4::new(
            2.0 / (right - left),
            0.0,
            0.0,
            -(right + left) / (right - left),
            0.0,
            2.0 / (top - bottom),
            0.0,
            -(top + bottom) / (top - bottom),
            0.0,
            0.0,
            -2.0 / (z_far - z_near),
            -(z_far + z_near) / (z_far - z_near),
            0.0,
            0.0,
            0.0,
            1.0,
        );
        let m_inv = Matrix4x4::new(
            (right - left) / 2.0,
            0.0,
            0.0,
            (right + left) / 2.0,
            0.0,
            (top - bottom) / 2.0,
            0.0,
            (top + bottom) / 2.0,
            0.0,
            0.0,
            -(z_far - z_near) / 2.0,
            -(z_far + z_near) / 2.0,
            0.0,
            0.0,
            0.0,
            1.0,
        );
        Transform { m, m_inv }
    }
    pub fn transform_point(&self, p: &Point3f) -> Result<Point3f, OffAxisError> {
        self.m.transform_point(p)
    }
}

impl Mul for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            m: mtx_mul(&self.m, &rhs.m),
            m_inv: mtx_mul(&rhs.m_inv, &self.m_inv),
        }
    }
}

//! Plane/plane intersection and the closest approach of two lines.
//!
//! Planes are passed around as a normal and a point on the plane, they
//! are never stored. A **Line3f** has an origin and a direction which
//! does not need to be normalized.

// others
use serde::{Deserialize, Serialize};
// offaxis
use crate::core::error::OffAxisError;
use crate::core::geometry::{vec3_cross_vec3, vec3_dot_vec3f, Point3f, Vector3f};
use crate::core::offaxis::{Float, PARALLEL_EPSILON};
use crate::core::transform::{solve_linear_system_3x3, Matrix3x3};

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line3f {
    pub o: Point3f,
    pub d: Vector3f,
}

impl Line3f {
    pub fn new(o: Point3f, d: Vector3f) -> Self {
        Line3f { o, d }
    }
    pub fn position(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }
}

/// Intersects the plane through *pa* with normal *na* and the plane
/// through *pb* with normal *nb*. Returns `None` for (nearly) parallel
/// planes.
///
/// The direction of the resulting line is `na x nb`, the origin is the
/// point of the line closest to the coordinate origin.
pub fn intersect_plane_plane(
    na: &Vector3f,
    pa: &Point3f,
    nb: &Vector3f,
    pb: &Point3f,
) -> Option<Line3f> {
    let nc: Vector3f = vec3_cross_vec3(na, nb);
    let det: Float = nc.length_squared();
    if !(det > PARALLEL_EPSILON * na.length_squared() * nb.length_squared()) {
        return None;
    }
    // plane equations n.x + d = 0
    let da: Float = -vec3_dot_vec3f(na, &Vector3f::from(*pa));
    let db: Float = -vec3_dot_vec3f(nb, &Vector3f::from(*pb));
    let o: Vector3f =
        (vec3_cross_vec3(&nc, nb) * da + vec3_cross_vec3(na, &nc) * db) / det;
    Some(Line3f {
        o: Point3f::from(o),
        d: nc,
    })
}

/// Returns the pair of points, one on each line, where the two lines
/// come closest. Parallel lines have no unique answer.
pub fn closest_points_between_lines(
    a: &Line3f,
    b: &Line3f,
) -> Result<(Point3f, Point3f), OffAxisError> {
    let nc: Vector3f = match vec3_cross_vec3(&a.d, &b.d).try_normalize() {
        Some(n) => n,
        None => return Err(OffAxisError::SingularSystem { determinant: 0.0 }),
    };
    // a.o + a.d * s + nc * u = b.o + b.d * t
    let m = Matrix3x3::from_columns(&a.d, &(-b.d), &nc);
    let x: Vector3f = solve_linear_system_3x3(&m, &(b.o - a.o))?;
    Ok((a.position(x.x), b.position(x.y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::offaxis::approx_eq;

    fn assert_on_plane(p: &Point3f, n: &Vector3f, q: &Point3f) {
        let d: Float = vec3_dot_vec3f(n, &(p - q));
        assert!(d.abs() < 1e-12, "{:?} is {} away from plane", p, d);
    }

    #[test]
    fn perpendicular_planes_meet_in_a_line() {
        let na = Vector3f::new(1.0, 0.0, 0.0);
        let pa = Point3f::new(2.0, 5.0, 7.0);
        let nb = Vector3f::new(0.0, 1.0, 0.0);
        let pb = Point3f::new(-1.0, 3.0, 0.0);
        let line = intersect_plane_plane(&na, &pa, &nb, &pb).unwrap();
        assert_eq!(line.o, Point3f::new(2.0, 3.0, 0.0));
        assert_eq!(line.d, Vector3f::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn oblique_planes_line_lies_in_both() {
        let na = Vector3f::new(1.0, 2.0, -0.5).normalize();
        let pa = Point3f::new(0.3, -1.0, 4.0);
        let nb = Vector3f::new(-2.0, 0.25, 1.0).normalize();
        let pb = Point3f::new(1.0, 1.0, 1.0);
        let line = intersect_plane_plane(&na, &pa, &nb, &pb).unwrap();
        for t in [-10.0, 0.0, 3.5] {
            let p = line.position(t);
            assert_on_plane(&p, &na, &pa);
            assert_on_plane(&p, &nb, &pb);
        }
    }

    #[test]
    fn parallel_planes_do_not_intersect() {
        let n = Vector3f::new(0.0, 0.0, 1.0);
        assert_eq!(
            intersect_plane_plane(&n, &Point3f::default(), &(-n), &Point3f::new(0.0, 0.0, 1.0)),
            None
        );
        // nearly parallel still counts
        let m = Vector3f::new(1e-7, 0.0, 1.0);
        assert_eq!(
            intersect_plane_plane(&n, &Point3f::default(), &m, &Point3f::default()),
            None
        );
    }

    #[test]
    fn skew_lines_closest_points() {
        // x axis and a line parallel to y through (0, 0, 2)
        let a = Line3f::new(Point3f::new(-3.0, 0.0, 0.0), Vector3f::new(2.0, 0.0, 0.0));
        let b = Line3f::new(Point3f::new(0.0, 4.0, 2.0), Vector3f::new(0.0, -1.0, 0.0));
        let (pa, pb) = closest_points_between_lines(&a, &b).unwrap();
        assert!(approx_eq(pa.x, 0.0, 1e-14) && pa.y == 0.0 && pa.z == 0.0);
        assert!(pb.x == 0.0 && approx_eq(pb.y, 0.0, 1e-14) && pb.z == 2.0);
    }

    #[test]
    fn intersecting_lines_share_the_closest_point() {
        let a = Line3f::new(Point3f::new(1.0, 1.0, 1.0), Vector3f::new(1.0, 1.0, 0.0));
        let b = Line3f::new(Point3f::new(3.0, 0.0, 1.0), Vector3f::new(-1.0, 1.0, 0.0));
        let (pa, pb) = closest_points_between_lines(&a, &b).unwrap();
        // s = 0.5 on the first line, t = 1.5 on the second
        assert!(approx_eq(pa.x, 1.5, 1e-14) && approx_eq(pa.y, 1.5, 1e-14));
        assert!(approx_eq(pb.x, 1.5, 1e-14) && approx_eq(pb.y, 1.5, 1e-14));
        assert!(approx_eq(pa.z, 1.0, 1e-14) && approx_eq(pb.z, 1.0, 1e-14));
    }

    #[test]
    fn parallel_lines_are_singular() {
        let a = Line3f::new(Point3f::default(), Vector3f::new(0.0, 1.0, 0.0));
        let b = Line3f::new(Point3f::new(1.0, 0.0, 0.0), Vector3f::new(0.0, 2.0, 0.0));
        assert!(matches!(
            closest_points_between_lines(&a, &b),
            Err(OffAxisError::SingularSystem { .. })
        ));
    }
}

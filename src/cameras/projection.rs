//! Off-axis projection and view matrices for a screen and an eye.
//!
//! The eye looks perpendicularly at the screen plane, but the screen
//! is usually not centered in front of it. The resulting asymmetric
//! (off-axis) frustum has its apex at the eye and passes through the
//! four screen corners. The view transform is rigid and maps the eye
//! to the origin with the screen basis as axes, so the camera looks
//! down `-Z` with `Y` up.

// others
use log::debug;
use serde::{Deserialize, Serialize};
// offaxis
use crate::cameras::screen::{ScreenFrame, ScreenQuad};
use crate::core::error::{Degeneracy, OffAxisError};
use crate::core::geometry::Point3f;
use crate::core::offaxis::{Float, DEFAULT_Z_FAR, DEFAULT_Z_NEAR};
use crate::core::transform::Transform;

/// Distances of the near and far clip planes from the eye.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipPlanes {
    pub near: Float,
    pub far: Float,
}

impl Default for ClipPlanes {
    fn default() -> Self {
        ClipPlanes {
            near: DEFAULT_Z_NEAR,
            far: DEFAULT_Z_FAR,
        }
    }
}

impl ClipPlanes {
    pub fn new(near: Float, far: Float) -> Self {
        ClipPlanes { near, far }
    }
    pub fn validate(&self) -> Result<(), OffAxisError> {
        if self.near > 0.0 && self.far > self.near && self.far.is_finite() {
            Ok(())
        } else {
            Err(Degeneracy::InvalidClipPlanes {
                near: self.near,
                far: self.far,
            }
            .into())
        }
    }
}

/// Projection and view transforms of one eye looking at one screen.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffAxisTransform {
    pub projection: Transform,
    pub view: Transform,
}

impl OffAxisTransform {
    /// World space to clip space.
    pub fn view_projection(&self) -> Transform {
        self.projection * self.view
    }
}

/// Builds the off-axis frustum with the default clip planes.
pub fn build_off_axis_transform(
    screen: &ScreenQuad,
    eye: &Point3f,
) -> Result<OffAxisTransform, OffAxisError> {
    build_off_axis_transform_with_clip(screen, eye, &ClipPlanes::default())
}

pub fn build_off_axis_transform_with_clip(
    screen: &ScreenQuad,
    eye: &Point3f,
    clip: &ClipPlanes,
) -> Result<OffAxisTransform, OffAxisError> {
    clip.validate()?;
    let frame = ScreenFrame::new(screen, eye)?;
    // project the screen extents onto the near plane
    let scale: Float = clip.near / frame.dist;
    let left: Float = -frame.left * scale;
    let right: Float = frame.right * scale;
    let bottom: Float = -frame.bottom * scale;
    let top: Float = frame.top * scale;
    debug!(
        "frustum l={} r={} b={} t={} near={} far={} (dist {})",
        left, right, bottom, top, clip.near, clip.far, frame.dist
    );
    let projection = Transform::frustum(left, right, bottom, top, clip.near, clip.far);
    let view = Transform::from_basis(&frame.basis.x, &frame.basis.y, &frame.basis.z, eye)?;
    Ok(OffAxisTransform { projection, view })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::{pnt3_lerp, Vector3f};
    use crate::core::offaxis::approx_eq;
    use crate::core::transform::Matrix4x4;
    use rstest::rstest;

    fn assert_point_close(a: &Point3f, b: &Point3f, tolerance: Float) {
        assert!(
            approx_eq(a.x, b.x, tolerance)
                && approx_eq(a.y, b.y, tolerance)
                && approx_eq(a.z, b.z, tolerance),
            "{:?} != {:?}",
            a,
            b
        );
    }

    fn unproject(t: &OffAxisTransform, x: Float, y: Float, z: Float) -> Point3f {
        let inv = Transform::inverse(&t.view_projection());
        inv.transform_point(&Point3f::new(x, y, z)).unwrap()
    }

    #[rstest]
    #[case::powerwall(
        ScreenQuad::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(3.0, 0.0, 0.0), Point3f::new(3.0, 3.0, 0.0)),
        Point3f::new(1.5, 1.68, 1.5)
    )]
    #[case::left_wall(
        ScreenQuad::new(Point3f::new(-1.5, 0.0, 1.5), Point3f::new(-1.5, 0.0, -1.5), Point3f::new(-1.5, 3.0, -1.5)),
        Point3f::new(0.2, 1.7, 0.4)
    )]
    #[case::floor(
        ScreenQuad::new(Point3f::new(-1.5, 0.0, 1.5), Point3f::new(1.5, 0.0, 1.5), Point3f::new(1.5, 0.0, -1.5)),
        Point3f::new(0.3, 1.8, -0.2)
    )]
    #[case::tilted(
        ScreenQuad::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(2.0, 0.0, -1.0), Point3f::new(2.6, 2.0, 0.2)),
        Point3f::new(0.5, 1.2, 2.0)
    )]
    fn corners_unproject_onto_the_screen_rays(#[case] screen: ScreenQuad, #[case] eye: Point3f) {
        let clip = ClipPlanes::new(0.1, 100.0);
        let t = build_off_axis_transform_with_clip(&screen, &eye, &clip).unwrap();
        let dist = ScreenFrame::new(&screen, &eye).unwrap().dist;
        let corners = [
            (-1.0, -1.0, screen.lower_left),
            (1.0, -1.0, screen.lower_right),
            (1.0, 1.0, screen.upper_right),
            (-1.0, 1.0, screen.upper_left()),
        ];
        for (x, y, corner) in corners.iter() {
            for (z, plane) in [(-1.0, clip.near), (1.0, clip.far)] {
                let expected = pnt3_lerp(plane / dist, &eye, corner);
                assert_point_close(&unproject(&t, *x, *y, z), &expected, 1e-9);
            }
        }
    }

    #[test]
    fn view_is_rigid_and_centers_the_eye() {
        let screen = ScreenQuad::new(
            Point3f::new(-1.5, 0.0, 1.5),
            Point3f::new(-1.5, 0.0, -1.5),
            Point3f::new(-1.5, 3.0, -1.5),
        );
        let eye = Point3f::new(0.2, 1.7, 0.4);
        let t = build_off_axis_transform(&screen, &eye).unwrap();
        assert_point_close(&t.view.transform_point(&eye).unwrap(), &Point3f::default(), 1e-15);
        // the screen normal maps to +z, i.e. the camera looks down -z
        let v = t.view.m.transform_vector(&Vector3f::new(1.0, 0.0, 0.0));
        assert_eq!(v, Vector3f::new(0.0, 0.0, 1.0));
        let rt = Matrix4x4::transpose(&t.view.m);
        for i in 0..3 {
            for j in 0..3 {
                assert!(approx_eq(rt.m[i][j], t.view.m_inv.m[i][j], 1e-15));
            }
        }
    }

    #[test]
    fn symmetric_frustum_for_centered_eye() {
        let screen = ScreenQuad::new(
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(2.0, 0.0, 0.0),
            Point3f::new(2.0, 2.0, 0.0),
        );
        let t = build_off_axis_transform(&screen, &Point3f::new(1.0, 1.0, 1.0)).unwrap();
        // (r + l) / (r - l) and (t + b) / (t - b) vanish
        assert_eq!(t.projection.m.m[0][2], 0.0);
        assert_eq!(t.projection.m.m[1][2], 0.0);
        assert_eq!(t.projection.m.m[3][2], -1.0);
    }

    #[rstest]
    #[case(ClipPlanes::new(0.0, 10.0))]
    #[case(ClipPlanes::new(1.0, 1.0))]
    #[case(ClipPlanes::new(-1.0, 10.0))]
    #[case(ClipPlanes::new(0.1, Float::INFINITY))]
    fn invalid_clip_planes(#[case] clip: ClipPlanes) {
        let screen = ScreenQuad::new(
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(3.0, 0.0, 0.0),
            Point3f::new(3.0, 3.0, 0.0),
        );
        assert_eq!(
            build_off_axis_transform_with_clip(&screen, &Point3f::new(1.0, 1.0, 1.0), &clip),
            Err(OffAxisError::DegenerateGeometry(
                Degeneracy::InvalidClipPlanes {
                    near: clip.near,
                    far: clip.far
                }
            ))
        );
    }

    #[test]
    fn degenerate_screen_is_reported() {
        let p = Point3f::new(1.0, 1.0, 0.0);
        let screen = ScreenQuad::new(p, p, Point3f::new(1.0, 2.0, 0.0));
        assert!(matches!(
            build_off_axis_transform(&screen, &Point3f::new(1.0, 1.0, 1.0)),
            Err(OffAxisError::DegenerateGeometry(Degeneracy::ZeroLengthEdge(_)))
        ));
    }
}

//! Recovering an off-axis camera from its inverse matrices.
//!
//! Some applications only hand out the (inverse) projection and view
//! matrices of each eye. The eight corners of the NDC cube are
//! unprojected into world space, which gives the frustum as a
//! truncated pyramid. Its four side planes pass through the apex, so
//! the left/right planes meet in a line through the eye, and so do the
//! bottom/top planes. The eye is the midpoint of the closest approach
//! of both lines (they intersect exactly for exact input).
//!
//! The screen is taken from the far-plane corners (NDC `z = +1`). That
//! rectangle is the physical screen scaled about the eye by
//! `far / dist`, so by similar triangles it yields the same symmetric
//! camera as the physical screen would.

// others
use log::trace;
use serde::{Deserialize, Serialize};
// offaxis
use crate::cameras::perspective::{derive_symmetric_camera, SymmetricCamera};
use crate::cameras::screen::ScreenQuad;
use crate::core::error::{Degeneracy, OffAxisError, PlanePair};
use crate::core::geometry::{vec3_cross_vec3, Point3f, Vector3f};
use crate::core::intersect::{closest_points_between_lines, intersect_plane_plane, Line3f};
use crate::core::offaxis::Float;
use crate::core::transform::{mtx_mul, Matrix4x4};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconstructedCamera {
    pub eye: Point3f,
    /// The far-plane rectangle of the frustum.
    pub screen: ScreenQuad,
    pub camera: SymmetricCamera,
}

/// Maps a point of the NDC cube back into world space.
pub fn unproject_ndc(
    proj_inv: &Matrix4x4,
    view_inv: &Matrix4x4,
    ndc: &Point3f,
) -> Result<Point3f, OffAxisError> {
    mtx_mul(view_inv, proj_inv).transform_point(ndc)
}

fn edge(from: &Point3f, to: &Point3f) -> Result<Vector3f, OffAxisError> {
    (to - from)
        .try_normalize()
        .ok_or_else(|| Degeneracy::CollapsedFrustum.into())
}

fn face_normal(a: &Vector3f, b: &Vector3f) -> Result<Vector3f, OffAxisError> {
    vec3_cross_vec3(a, b)
        .try_normalize()
        .ok_or_else(|| Degeneracy::CollapsedFrustum.into())
}

pub fn reconstruct_from_matrices(
    proj_inv: &Matrix4x4,
    view_inv: &Matrix4x4,
) -> Result<ReconstructedCamera, OffAxisError> {
    let clip_to_world: Matrix4x4 = mtx_mul(view_inv, proj_inv);
    let corner = |x: Float, y: Float, z: Float| -> Result<Point3f, OffAxisError> {
        clip_to_world.transform_point(&Point3f::new(x, y, z))
    };
    let v000 = corner(-1.0, -1.0, -1.0)?;
    let v001 = corner(-1.0, -1.0, 1.0)?;
    let v100 = corner(1.0, -1.0, -1.0)?;
    let v101 = corner(1.0, -1.0, 1.0)?;
    let v110 = corner(1.0, 1.0, -1.0)?;
    let v111 = corner(1.0, 1.0, 1.0)?;
    let v010 = corner(-1.0, 1.0, -1.0)?;
    let v011 = corner(-1.0, 1.0, 1.0)?;
    trace!(
        "near corners {:?} {:?} {:?} {:?}",
        v000,
        v100,
        v110,
        v010
    );
    trace!(
        "far corners {:?} {:?} {:?} {:?}",
        v001,
        v101,
        v111,
        v011
    );
    // edges from -z to +z
    let ez00 = edge(&v000, &v001)?;
    let ez10 = edge(&v100, &v101)?;
    let ez01 = edge(&v010, &v011)?;
    // edges from -y to +y
    let ey00 = edge(&v000, &v010)?;
    let ey10 = edge(&v100, &v110)?;
    // edges from -x to +x
    let ex00 = edge(&v000, &v100)?;
    let ex10 = edge(&v010, &v110)?;
    let n_left = face_normal(&ey00, &ez00)?;
    let n_right = face_normal(&ez10, &ey10)?;
    let n_bottom = face_normal(&ez00, &ex00)?;
    let n_top = face_normal(&ex10, &ez01)?;
    let lr: Line3f = intersect_plane_plane(&n_left, &v000, &n_right, &v100)
        .ok_or(OffAxisError::NoIntersection(PlanePair::LeftRight))?;
    let bt: Line3f = intersect_plane_plane(&n_bottom, &v000, &n_top, &v010)
        .ok_or(OffAxisError::NoIntersection(PlanePair::BottomTop))?;
    trace!("left/right line {:?}, bottom/top line {:?}", lr, bt);
    let (p1, p2) = closest_points_between_lines(&lr, &bt)?;
    let eye: Point3f = (p1 + p2) * 0.5;
    trace!("eye {:?} (gap {:?})", eye, p2 - p1);
    let screen = ScreenQuad::new(v001, v101, v111);
    let camera = derive_symmetric_camera(&screen, &eye)?;
    Ok(ReconstructedCamera {
        eye,
        screen,
        camera,
    })
}

//! A symmetric perspective camera which encloses an off-axis frustum.
//!
//! Many renderers only offer a pinhole camera with a symmetric frustum
//! (direction, up, vertical field of view and aspect ratio). Such a
//! camera can still drive an off-axis display: widen the frustum until
//! it is symmetric around the view direction and crop the rendered
//! image to the part which corresponds to the screen. The crop is
//! given as a normalized **image region** in `[0,1]^2`.

// std
use std::fmt;
// others
use log::debug;
use serde::{Deserialize, Serialize};
// offaxis
use crate::cameras::screen::{ScreenFrame, ScreenQuad};
use crate::core::error::OffAxisError;
use crate::core::geometry::{Bounds2f, Point3f, Vector3f};
use crate::core::offaxis::{degrees, Float};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymmetricCamera {
    pub direction: Vector3f,
    pub up: Vector3f,
    /// Vertical field of view in radians.
    pub fovy: Float,
    pub aspect: Float,
    pub image_region: Bounds2f,
}

impl fmt::Display for SymmetricCamera {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "dir=({:.6}, {:.6}, {:.6}) up=({:.6}, {:.6}, {:.6}) fovy={:.4}deg aspect={:.6} region=[{:.6}, {:.6}]x[{:.6}, {:.6}]",
            self.direction.x,
            self.direction.y,
            self.direction.z,
            self.up.x,
            self.up.y,
            self.up.z,
            degrees(self.fovy),
            self.aspect,
            self.image_region.p_min.x,
            self.image_region.p_max.x,
            self.image_region.p_min.y,
            self.image_region.p_max.y
        )
    }
}

/// Derives the smallest symmetric camera at *eye* which contains the
/// whole screen, together with the image region covering the screen.
pub fn derive_symmetric_camera(
    screen: &ScreenQuad,
    eye: &Point3f,
) -> Result<SymmetricCamera, OffAxisError> {
    let frame = ScreenFrame::new(screen, eye)?;
    Ok(symmetric_camera_from_frame(&frame))
}

pub fn symmetric_camera_from_frame(frame: &ScreenFrame) -> SymmetricCamera {
    let left: Float = frame.left;
    let right: Float = frame.right;
    let bottom: Float = frame.bottom;
    let top: Float = frame.top;
    let new_width: Float = if left < right { 2.0 * right } else { 2.0 * left };
    let new_height: Float = if bottom < top { 2.0 * top } else { 2.0 * bottom };
    let fovy: Float = 2.0 * (new_height / (2.0 * frame.dist)).atan();
    let aspect: Float = new_width / new_height;
    // ties go to the full extent on that side
    let image_region = Bounds2f::new(
        if left < right {
            (right - left) / new_width
        } else {
            0.0
        },
        if bottom < top {
            (top - bottom) / new_height
        } else {
            0.0
        },
        if right < left {
            (left + right) / new_width
        } else {
            1.0
        },
        if top < bottom {
            (bottom + top) / new_height
        } else {
            1.0
        },
    );
    let camera = SymmetricCamera {
        direction: -frame.basis.z,
        up: frame.basis.y,
        fovy,
        aspect,
        image_region,
    };
    debug!("symmetric camera {}", camera);
    camera
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Degeneracy;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn powerwall() -> ScreenQuad {
        ScreenQuad::new(
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(3.0, 0.0, 0.0),
            Point3f::new(3.0, 3.0, 0.0),
        )
    }

    #[test]
    fn tracked_head_in_front_of_powerwall() {
        let camera = derive_symmetric_camera(&powerwall(), &Point3f::new(1.5, 1.68, 1.5)).unwrap();
        assert_eq!(camera.direction, Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(camera.up, Vector3f::new(0.0, 1.0, 0.0));
        assert!((camera.fovy - 2.0 * (1.12 as Float).atan()).abs() < 1e-12);
        assert!((camera.aspect - 3.0 / 3.36).abs() < 1e-12);
        assert_eq!(camera.image_region.p_min.x, 0.0);
        assert_eq!(camera.image_region.p_min.y, 0.0);
        assert_eq!(camera.image_region.p_max.x, 1.0);
        assert!((camera.image_region.p_max.y - 3.0 / 3.36).abs() < 1e-12);
    }

    #[rstest]
    #[case::unit(1.0)]
    #[case::wide(2.5)]
    #[case::narrow(0.75)]
    fn centered_eye_uses_the_full_image(#[case] width: Float) {
        let screen = ScreenQuad::new(
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(width, 0.0, 0.0),
            Point3f::new(width, 1.0, 0.0),
        );
        let camera =
            derive_symmetric_camera(&screen, &Point3f::new(width / 2.0, 0.5, 2.0)).unwrap();
        assert_eq!(camera.image_region, Bounds2f::unit());
        assert_eq!(camera.aspect, width);
        assert_eq!(camera.fovy, 2.0 * (0.25 as Float).atan());
    }

    #[test]
    fn eye_left_of_center_crops_the_left_part() {
        // left = 1, right = 3: the image spans [-3, 3], the screen [-1, 3]
        let screen = ScreenQuad::new(
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(4.0, 0.0, 0.0),
            Point3f::new(4.0, 2.0, 0.0),
        );
        let camera = derive_symmetric_camera(&screen, &Point3f::new(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(camera.image_region, Bounds2f::new(1.0 / 3.0, 0.0, 1.0, 1.0));
        assert_eq!(camera.aspect, 6.0 / 2.0);
        // mirrored: left = 3, right = 1
        let camera = derive_symmetric_camera(&screen, &Point3f::new(3.0, 1.0, 1.0)).unwrap();
        assert_eq!(camera.image_region, Bounds2f::new(0.0, 0.0, 4.0 / 6.0, 1.0));
    }

    #[test]
    fn region_stays_normalized() {
        let screen = powerwall();
        for (x, y) in [(0.1, 0.2), (2.9, 0.3), (1.0, 2.7), (-0.5, 4.0)] {
            let camera = derive_symmetric_camera(&screen, &Point3f::new(x, y, 0.8)).unwrap();
            let r = camera.image_region;
            assert!(0.0 <= r.p_min.x && r.p_min.x < r.p_max.x && r.p_max.x <= 1.0);
            assert!(0.0 <= r.p_min.y && r.p_min.y < r.p_max.y && r.p_max.y <= 1.0);
        }
    }

    #[test]
    fn collapsed_screen_is_an_error() {
        let p = Point3f::new(1.0, 1.0, 0.0);
        assert_eq!(
            derive_symmetric_camera(
                &ScreenQuad::new(p, p, Point3f::new(1.0, 2.0, 0.0)),
                &Point3f::new(1.0, 1.0, 1.0)
            ),
            Err(OffAxisError::DegenerateGeometry(
                Degeneracy::ZeroLengthEdge(crate::core::error::ScreenEdge::Bottom)
            ))
        );
    }
}

//! Round-trip verification of the matrix reconstruction.
//!
//! Random eye positions in front of a screen are turned into off-axis
//! matrices, the matrices are inverted and the camera is reconstructed
//! from them. The reconstructed eye and camera are compared against the
//! camera derived directly from the screen and the eye.

// others
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;
// offaxis
use crate::cameras::perspective::{derive_symmetric_camera, SymmetricCamera};
use crate::cameras::projection::{build_off_axis_transform_with_clip, ClipPlanes};
use crate::cameras::reconstruct::reconstruct_from_matrices;
use crate::cameras::screen::{ScreenBasis, ScreenQuad};
use crate::core::error::OffAxisError;
use crate::core::geometry::{pnt3_distancef, Point3f, Vector3f};
use crate::core::offaxis::Float;
use crate::core::rng::Rng;
use crate::core::transform::Matrix4x4;

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    pub samples: usize,
    pub failures: usize,
    pub max_eye_error: Float,
    pub max_fovy_error: Float,
    pub max_aspect_error: Float,
    pub max_region_error: Float,
}

impl SweepReport {
    fn failed(samples: usize) -> Self {
        SweepReport {
            samples,
            failures: samples,
            ..Default::default()
        }
    }
    fn merge(self, other: SweepReport) -> SweepReport {
        SweepReport {
            samples: self.samples + other.samples,
            failures: self.failures + other.failures,
            max_eye_error: self.max_eye_error.max(other.max_eye_error),
            max_fovy_error: self.max_fovy_error.max(other.max_fovy_error),
            max_aspect_error: self.max_aspect_error.max(other.max_aspect_error),
            max_region_error: self.max_region_error.max(other.max_region_error),
        }
    }
    pub fn passes(&self, tolerance: Float) -> bool {
        self.failures == 0
            && self.max_eye_error <= tolerance
            && self.max_fovy_error <= tolerance
            && self.max_aspect_error <= tolerance
            && self.max_region_error <= tolerance
    }
}

/// Picks an eye in front of the screen: up to half a screen beyond
/// each edge and between a tenth of and twice the larger screen extent
/// away from the plane.
fn random_eye(screen: &ScreenQuad, basis: &ScreenBasis, rng: &mut Rng) -> Point3f {
    let extent: Float = basis.width.max(basis.height);
    let u: Float = rng.uniform_range(-0.5 * basis.width, 1.5 * basis.width);
    let v: Float = rng.uniform_range(-0.5 * basis.height, 1.5 * basis.height);
    let d: Float = rng.uniform_range(0.1 * extent, 2.0 * extent);
    let normal: Vector3f = basis.z.normalize();
    screen.lower_left + basis.x * u + basis.y * v + normal * d
}

fn compare(
    screen: &ScreenQuad,
    eye: &Point3f,
    clip: &ClipPlanes,
) -> Result<SweepReport, OffAxisError> {
    let direct: SymmetricCamera = derive_symmetric_camera(screen, eye)?;
    let t = build_off_axis_transform_with_clip(screen, eye, clip)?;
    let proj_inv = Matrix4x4::inverse(&t.projection.m)?;
    let view_inv = Matrix4x4::inverse(&t.view.m)?;
    let r = reconstruct_from_matrices(&proj_inv, &view_inv)?;
    Ok(SweepReport {
        samples: 1,
        failures: 0,
        max_eye_error: pnt3_distancef(&r.eye, eye),
        max_fovy_error: (r.camera.fovy - direct.fovy).abs(),
        max_aspect_error: (r.camera.aspect - direct.aspect).abs(),
        max_region_error: r.camera.image_region.max_deviation(&direct.image_region),
    })
}

/// Runs *samples* round trips in parallel. Sample `i` draws its eye
/// from sequence `seed + i`, so the report only depends on the seed.
pub fn round_trip_sweep(
    screen: &ScreenQuad,
    samples: usize,
    seed: u64,
    clip: &ClipPlanes,
) -> SweepReport {
    let basis = match ScreenBasis::new(screen) {
        Ok(basis) => basis,
        Err(e) => {
            warn!("cannot sweep screen: {}", e);
            return SweepReport::failed(samples);
        }
    };
    let report = (0..samples)
        .into_par_iter()
        .map(|i| {
            let mut rng = Rng::new();
            rng.set_sequence(seed.wrapping_add(i as u64));
            let eye = random_eye(screen, &basis, &mut rng);
            match compare(screen, &eye, clip) {
                Ok(r) => r,
                Err(e) => {
                    warn!("round trip failed for eye {:?}: {}", eye, e);
                    SweepReport::failed(1)
                }
            }
        })
        .reduce(SweepReport::default, SweepReport::merge);
    debug!("{:?}", report);
    report
}

//! Three ways of driving a renderer's camera from a screen and an eye.
//!
//! 1. **MatrixCamera** passes the off-axis projection and view matrices
//!    directly. This needs a renderer which accepts explicit matrices.
//! 2. **FixedFramePerspective** places a symmetric perspective camera
//!    at the eye and crops its image to the screen with an image
//!    region.
//! 3. **MatricesToPerspective** starts from the (inverted) matrices of
//!    strategy 1, as an application would hand them out, reconstructs
//!    the eye and the screen and continues like strategy 2.
//!
//! All strategies render the same image of the screen.

// std
use std::fmt;
// others
use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;
// offaxis
use crate::cameras::perspective::{derive_symmetric_camera, SymmetricCamera};
use crate::cameras::projection::{build_off_axis_transform_with_clip, ClipPlanes};
use crate::cameras::reconstruct::reconstruct_from_matrices;
use crate::cameras::screen::ScreenQuad;
use crate::core::error::OffAxisError;
use crate::core::geometry::Point3f;
use crate::core::transform::Matrix4x4;

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    MatrixCamera,
    FixedFramePerspective,
    MatricesToPerspective,
}

/// Camera features a renderer may or may not offer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Capability {
    #[strum(serialize = "a camera with explicit projection and view matrices")]
    MatrixCamera,
    #[strum(serialize = "a perspective camera")]
    PerspectiveCamera,
    #[strum(serialize = "image regions on the perspective camera")]
    ImageRegion,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererCapabilities {
    pub matrix_camera: bool,
    pub perspective_camera: bool,
    pub image_region: bool,
}

impl Default for RendererCapabilities {
    fn default() -> Self {
        // a matrix camera is a renderer extension
        RendererCapabilities {
            matrix_camera: false,
            perspective_camera: true,
            image_region: true,
        }
    }
}

impl RendererCapabilities {
    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::MatrixCamera => self.matrix_camera,
            Capability::PerspectiveCamera => self.perspective_camera,
            Capability::ImageRegion => self.image_region,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum StrategyError {
    #[error("renderer does not support {0}")]
    Unsupported(Capability),
    #[error(transparent)]
    Geometry(#[from] OffAxisError),
}

/// What a strategy hands to the renderer.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CameraSetup {
    Matrix {
        projection: Matrix4x4,
        view: Matrix4x4,
    },
    Perspective {
        position: Point3f,
        #[serde(flatten)]
        camera: SymmetricCamera,
    },
}

impl fmt::Display for CameraSetup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CameraSetup::Matrix { projection, view } => {
                writeln!(f, "matrix camera")?;
                for (name, m) in [("proj", projection), ("view", view)] {
                    for row in m.m.iter() {
                        writeln!(
                            f,
                            "  {} [{:>12.6} {:>12.6} {:>12.6} {:>12.6}]",
                            name, row[0], row[1], row[2], row[3]
                        )?;
                    }
                }
                Ok(())
            }
            CameraSetup::Perspective { position, camera } => writeln!(
                f,
                "perspective camera pos=({:.6}, {:.6}, {:.6}) {}",
                position.x, position.y, position.z, camera
            ),
        }
    }
}

impl Strategy {
    pub fn required_capabilities(&self) -> &'static [Capability] {
        match self {
            Strategy::MatrixCamera => &[Capability::MatrixCamera],
            Strategy::FixedFramePerspective | Strategy::MatricesToPerspective => {
                &[Capability::PerspectiveCamera, Capability::ImageRegion]
            }
        }
    }
    /// The first capability this strategy needs but the renderer lacks.
    pub fn missing_capability(&self, caps: &RendererCapabilities) -> Option<Capability> {
        self.required_capabilities()
            .iter()
            .copied()
            .find(|c| !caps.supports(*c))
    }
    pub fn camera_setup(
        &self,
        caps: &RendererCapabilities,
        screen: &ScreenQuad,
        eye: &Point3f,
        clip: &ClipPlanes,
    ) -> Result<CameraSetup, StrategyError> {
        if let Some(capability) = self.missing_capability(caps) {
            return Err(StrategyError::Unsupported(capability));
        }
        let setup = match self {
            Strategy::MatrixCamera => {
                let t = build_off_axis_transform_with_clip(screen, eye, clip)?;
                CameraSetup::Matrix {
                    projection: t.projection.m,
                    view: t.view.m,
                }
            }
            Strategy::FixedFramePerspective => CameraSetup::Perspective {
                position: *eye,
                camera: derive_symmetric_camera(screen, eye)?,
            },
            Strategy::MatricesToPerspective => {
                let t = build_off_axis_transform_with_clip(screen, eye, clip)?;
                let proj_inv: Matrix4x4 = Matrix4x4::inverse(&t.projection.m)?;
                let view_inv: Matrix4x4 = Matrix4x4::inverse(&t.view.m)?;
                let r = reconstruct_from_matrices(&proj_inv, &view_inv)?;
                CameraSetup::Perspective {
                    position: r.eye,
                    camera: r.camera,
                }
            }
        };
        debug!("{}: {:?}", self, setup);
        Ok(setup)
    }
}

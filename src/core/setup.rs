//! The physical layout of a CAVE or powerwall installation.
//!
//! A setup is read from a JSON file. Every field is optional, missing
//! ones fall back to a single 3x3 powerwall with the tracked head 1.5
//! units in front of it:
//!
//! ```json
//! {
//!   "screens": [
//!     {
//!       "name": "front",
//!       "lower_left": { "x": 0.0, "y": 0.0, "z": 0.0 },
//!       "lower_right": { "x": 3.0, "y": 0.0, "z": 0.0 },
//!       "upper_right": { "x": 3.0, "y": 3.0, "z": 0.0 }
//!     }
//!   ],
//!   "head": { "x": 1.5, "y": 1.68, "z": 1.5 },
//!   "eye_separation": 0.065,
//!   "clip_planes": { "near": 0.001, "far": 1000.0 },
//!   "renderer": { "matrix_camera": false }
//! }
//! ```

// std
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
// others
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;
// offaxis
use crate::cameras::projection::ClipPlanes;
use crate::cameras::screen::ScreenQuad;
use crate::cameras::stereo::StereoRig;
use crate::cameras::strategy::RendererCapabilities;
use crate::core::error::OffAxisError;
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::offaxis::Float;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to read setup file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse setup")]
    Parse(#[from] serde_json::Error),
    #[error("setup contains no screens")]
    NoScreens,
    #[error("screen {name:?} is invalid")]
    Screen {
        name: String,
        #[source]
        source: OffAxisError,
    },
    #[error("clip planes are invalid")]
    ClipPlanes(#[source] OffAxisError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScreen {
    pub name: String,
    #[serde(flatten)]
    pub quad: ScreenQuad,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveSetup {
    pub screens: Vec<NamedScreen>,
    /// Tracked head position.
    pub head: Point3f,
    /// Direction from the left to the right eye.
    pub head_right: Vector3f,
    /// Zero renders a single (mono) eye at the head position.
    pub eye_separation: Float,
    pub clip_planes: ClipPlanes,
    pub renderer: RendererCapabilities,
}

impl Default for CaveSetup {
    fn default() -> Self {
        CaveSetup {
            screens: vec![NamedScreen {
                name: String::from("front"),
                quad: ScreenQuad::new(
                    Point3f::new(0.0, 0.0, 0.0),
                    Point3f::new(3.0, 0.0, 0.0),
                    Point3f::new(3.0, 3.0, 0.0),
                ),
            }],
            head: Point3f::new(1.5, 1.68, 1.5),
            head_right: Vector3f::new(1.0, 0.0, 0.0),
            eye_separation: 0.0,
            clip_planes: ClipPlanes::default(),
            renderer: RendererCapabilities::default(),
        }
    }
}

impl CaveSetup {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<CaveSetup, SetupError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let setup = CaveSetup::from_json(&text)?;
        info!(
            "loaded {} screen(s) from {}",
            setup.screens.len(),
            path.display()
        );
        Ok(setup)
    }
    /// Parses and validates a setup.
    pub fn from_json(text: &str) -> Result<CaveSetup, SetupError> {
        let setup: CaveSetup = serde_json::from_str(text)?;
        setup.validate()?;
        Ok(setup)
    }
    /// Checks each screen on its own; whether the head is in front of
    /// a screen is decided per strategy.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.screens.is_empty() {
            return Err(SetupError::NoScreens);
        }
        for screen in &self.screens {
            screen
                .quad
                .validate()
                .map_err(|source| SetupError::Screen {
                    name: screen.name.clone(),
                    source,
                })?;
        }
        self.clip_planes.validate().map_err(SetupError::ClipPlanes)
    }
    pub fn stereo_rig(&self) -> StereoRig {
        StereoRig {
            head: self.head,
            right: self.head_right,
            separation: self.eye_separation,
        }
    }
}

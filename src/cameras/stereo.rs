//! Left and right eye positions of a tracked head.

// others
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
// offaxis
use crate::core::error::{Degeneracy, OffAxisError};
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::offaxis::Float;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Eye {
    Left,
    Right,
    Center,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct StereoRig {
    /// Tracked head position, halfway between both eyes.
    pub head: Point3f,
    /// Direction from the left to the right eye.
    pub right: Vector3f,
    /// Interpupillary distance, in the units of the screen corners.
    pub separation: Float,
}

impl StereoRig {
    pub fn mono(head: Point3f) -> Self {
        StereoRig {
            head,
            right: Vector3f::new(1.0, 0.0, 0.0),
            separation: 0.0,
        }
    }
    pub fn is_stereo(&self) -> bool {
        self.separation != 0.0
    }
    /// The eyes to render for this rig, `Center` only for mono.
    pub fn eyes(&self) -> &'static [Eye] {
        if self.is_stereo() {
            &[Eye::Left, Eye::Right]
        } else {
            &[Eye::Center]
        }
    }
    pub fn eye_position(&self, eye: Eye) -> Result<Point3f, OffAxisError> {
        if !self.head.is_finite() || !self.separation.is_finite() {
            return Err(Degeneracy::NonFinite.into());
        }
        let sign: Float = match eye {
            Eye::Left => -0.5,
            Eye::Right => 0.5,
            Eye::Center => return Ok(self.head),
        };
        if !self.is_stereo() {
            return Ok(self.head);
        }
        let right: Vector3f = self.right.try_normalize().ok_or(Degeneracy::NoRightVector)?;
        Ok(self.head + right * (sign * self.separation))
    }
}

//! An off-axis camera looks perpendicularly at a planar screen from a
//! tracked eye position which is generally not centered in front of
//! the screen. Its frustum is asymmetric.
//!
//! - **screen**: the screen rectangle and its frame relative to the eye
//! - **projection**: off-axis projection and view matrices
//! - **perspective**: the enclosing symmetric camera plus image region
//! - **reconstruct**: recovering eye and camera from inverse matrices
//! - **strategy**: the three ways of driving a renderer's camera
//! - **stereo**: left and right eye positions of a tracked head
//! - **verify**: randomized round trips through the matrices
//!
//! ## Symmetric camera with image region
//!
//! A renderer which only offers a symmetric pinhole camera can still
//! show an off-axis view: the frustum is widened until it is symmetric
//! and the image is cropped back to the screen.

pub mod perspective;
pub mod projection;
pub mod reconstruct;
pub mod screen;
pub mod stereo;
pub mod strategy;
pub mod verify;

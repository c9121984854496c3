//! # rs_offaxis
//!
//! [Rust][rust] crate to drive off-axis (CAVE or powerwall) stereo
//! projection cameras. Given a physical screen and a tracked eye it
//! computes
//!
//! 1. the asymmetric [projection and view matrices][matrices],
//! 2. an enclosing [symmetric camera][symmetric] with an image region,
//! 3. the eye and camera [reconstructed][reconstruct] from inverse
//!    matrices alone.
//!
//! [rust]: https://www.rust-lang.org
//! [matrices]: cameras/projection/fn.build_off_axis_transform.html
//! [symmetric]: cameras/perspective/fn.derive_symmetric_camera.html
//! [reconstruct]: cameras/reconstruct/fn.reconstruct_from_matrices.html

#[macro_use]
extern crate impl_ops;

pub mod cameras;
pub mod core;

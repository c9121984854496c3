//! Numeric foundation of the off-axis cameras.
//!
//! - **offaxis**: the `Float` type, default clip planes and tolerances
//! - **geometry**: points, vectors and bounds
//! - **transform**: 3x3 and 4x4 matrices, linear systems, transforms
//! - **intersect**: plane/plane intersection, closest points of lines
//! - **error**: what can go wrong while deriving a camera
//! - **rng**: PCG32 random numbers for the verification sweep
//! - **setup**: screens, head and renderer read from JSON

pub mod error;
pub mod geometry;
pub mod intersect;
pub mod offaxis;
pub mod rng;
pub mod setup;
pub mod transform;

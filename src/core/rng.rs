//! Random Number Generator
//!
//! PCG32 by Melissa O'Neill. Every sample of the verification sweep
//! gets its own sequence, so results do not depend on the order in
//! which worker threads pick up samples.

use hexf::*;

// offaxis
use crate::core::offaxis::{lerp, Float};

pub const FLOAT_ONE_MINUS_EPSILON: Float = hexf64!("0x1.fffffffffffffp-1");
pub const PCG32_DEFAULT_STATE: u64 = 0x853c_49e6_748f_ea9b;
pub const PCG32_DEFAULT_STREAM: u64 = 0xda3e_39cb_94b9_5bdb;
pub const PCG32_MULT: u64 = 0x5851_f42d_4c95_7f2d;

/// Random number generator
#[derive(Debug, Copy, Clone)]
pub struct Rng {
    state: u64,
    inc: u64,
}

impl Default for Rng {
    fn default() -> Self {
        Rng::new()
    }
}

impl Rng {
    pub fn new() -> Self {
        Rng {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        }
    }
    pub fn set_sequence(&mut self, initseq: u64) {
        self.state = 0_u64;
        self.inc = initseq.wrapping_shl(1) | 1;
        self.uniform_uint32();
        self.state = self.state.wrapping_add(PCG32_DEFAULT_STATE);
        self.uniform_uint32();
    }
    pub fn uniform_uint32(&mut self) -> u32 {
        let oldstate: u64 = self.state;
        self.state = oldstate.wrapping_mul(PCG32_MULT).wrapping_add(self.inc);
        let xorshifted: u32 = (oldstate.wrapping_shr(18) ^ oldstate).wrapping_shr(27) as u32;
        let rot: u32 = oldstate.wrapping_shr(59) as u32;
        xorshifted.wrapping_shr(rot)
            | xorshifted.wrapping_shl(rot.wrapping_neg().wrapping_add(1_u32) & 31)
    }
    /// Uniformly distributed value in `[0, 1)`.
    pub fn uniform_float(&mut self) -> Float {
        (self.uniform_uint32() as Float * hexf64!("0x1.0p-32")).min(FLOAT_ONE_MINUS_EPSILON)
    }
    /// Uniformly distributed value in `[a, b)`.
    pub fn uniform_range(&mut self, a: Float, b: Float) -> Float {
        lerp(self.uniform_float(), a, b)
    }
}

#![no_std]

extern crate alloc;
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod lcg;
pub mod lcrng;
pub mod lcrng64;
pub mod mt;
pub mod mt_fast;

pub use lcrng::*;
pub use lcrng64::*;
pub use mt::*;
pub use mt_fast::*;
pub use rand_core::*;

// LCG parameters of the target games. Every reverse pair is the exact
// inverse map of its forward pair: mult_r = 1 / mult, add_r = -add / mult.

// 32-bit LCGs, third and fourth generation titles.
pub const POKERNG_MULT: u32 = 0x41c64e6d;
pub const POKERNG_ADD: u32 = 0x00006073;
pub const POKERNG_R_MULT: u32 = 0xeeb9eb65;
pub const POKERNG_R_ADD: u32 = 0x0a3561a1;

// 32-bit LCGs, GameCube titles.
pub const XDRNG_MULT: u32 = 0x000343fd;
pub const XDRNG_ADD: u32 = 0x00269ec3;
pub const XDRNG_R_MULT: u32 = 0xb9b33155;
pub const XDRNG_R_ADD: u32 = 0xa170f641;

// 32-bit LCGs, mystery gift and auxiliary generator.
pub const ARNG_MULT: u32 = 0x6c078965;
pub const ARNG_ADD: u32 = 0x00000001;
pub const ARNG_R_MULT: u32 = 0x9638806d;
pub const ARNG_R_ADD: u32 = 0x69c77f93;

// 64-bit LCGs, fifth generation titles.
pub const BWRNG_MULT: u64 = 0x5d588b656c078965;
pub const BWRNG_ADD: u64 = 0x0000000000269ec3;
pub const BWRNG_R_MULT: u64 = 0xdedcedae9638806d;
pub const BWRNG_R_ADD: u64 = 0x9b1ae6e9a384e6f9;

/// Sequential stepping shared by every generator in this crate.
/// Generators are plain state machines: each instance has a single owner
/// advancing it, and stepping never fails.
pub trait Stepping {
    /// Native output of one step.
    type Output;

    /// Advances one step and returns its output.
    fn step(&mut self) -> Self::Output;

    /// Skips the given number of outputs without producing them.
    fn skip(&mut self, steps: u64);
}

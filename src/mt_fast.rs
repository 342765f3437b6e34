use alloc::vec;
use alloc::vec::Vec;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use super::mt::{expand_seed, temper_truncated, twist, MT_OFFSET, MT_SIZE};

/// Largest usable size bound. Past this, the standard regeneration pass
/// starts mixing in words it has already regenerated, which the fast
/// engine never does, and the two sequences part ways.
pub const FAST_MAX_SIZE: usize = MT_SIZE - MT_OFFSET;

/// Mersenne Twister for search loops that draw a small, known number of outputs per seed.
///
/// Only `size + MT_OFFSET` words are seeded and only the first `size` are regenerated,
/// so the engine produces exactly `size` valid outputs per seeding.
/// Tempering stops before its last stage, which leaves the high 16 bits intact:
/// `next_u16` matches [`MersenneTwister::next_u16`](crate::MersenneTwister::next_u16)
/// for the first `size` outputs, while `next` does not match the standard 32-bit output.
///
/// # Contract
/// Callers must not draw or skip more than `size` outputs between seedings.
/// Nothing checks this in release builds; breaking it yields stale words, not an error.
/// Debug builds assert both the size bound and the output count.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct MersenneTwisterFast {
    /// Exactly size + MT_OFFSET words.
    mt: Vec<u32>,
    size: usize,
    index: usize,
}

impl core::fmt::Debug for MersenneTwisterFast {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "MersenneTwisterFast {{ size: {}, index: {} }}", self.size, self.index)
    }
}

impl MersenneTwisterFast {

    /// Creates a new fast Mersenne Twister good for `size` outputs.
    /// `size` must not exceed FAST_MAX_SIZE.
    pub fn new(seed: u32, size: usize) -> Self {
        debug_assert!(size <= FAST_MAX_SIZE, "MersenneTwisterFast size {} exceeds {}", size, FAST_MAX_SIZE);
        let mut rng = MersenneTwisterFast { mt: vec![0; size + MT_OFFSET], size, index: 0 };
        rng.initialize(seed);
        rng
    }

    /// Reseeds the buffer and parks the cursor at the end of it.
    /// This restores the full budget of `size` outputs.
    pub fn initialize(&mut self, seed: u32) {
        expand_seed(&mut self.mt, seed);
        self.index = self.mt.len();
    }

    /// Reseeds, then skips the given number of outputs. `frames` counts against the budget.
    pub fn set_seed(&mut self, seed: u32, frames: u32) {
        self.initialize(seed);
        self.advance_frames(frames);
    }

    /// Skips the given number of outputs. `frames` counts against the budget.
    pub fn advance_frames(&mut self, frames: u32) {
        // Whole passes first, so the cursor cannot overflow a 32-bit usize.
        let frames = frames as usize;
        let len = self.mt.len();
        for _ in 0 .. frames / len {
            self.regenerate();
        }
        self.index += frames % len;
        while self.index >= len {
            self.shuffle();
        }
    }

    /// Returns the output budget per seeding.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the index of the next word to read.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Regenerates the first `size` words. Indexing is linear, no wraparound.
    fn regenerate(&mut self) {
        for i in 0 .. self.size {
            self.mt[i] = twist(self.mt[i], self.mt[i + 1], self.mt[i + MT_OFFSET]);
        }
    }

    /// Regenerates and moves the cursor back by the buffer length.
    fn shuffle(&mut self) {
        self.regenerate();
        self.index -= self.mt.len();
    }

    /// Generates the next output with truncated tempering.
    /// Only the high 16 bits agree with the standard engine.
    #[inline]
    pub fn next(&mut self) -> u32 {
        if self.index >= self.mt.len() {
            self.shuffle();
        }
        debug_assert!(self.index < self.size, "MersenneTwisterFast drew more than {} outputs", self.size);
        let y = self.mt[self.index];
        self.index += 1;
        temper_truncated(y)
    }

    /// Generates the next output and returns its high 16 bits.
    #[inline]
    pub fn next_u16(&mut self) -> u16 {
        (self.next() >> 16) as u16
    }
}

use super::Stepping;

impl Stepping for MersenneTwisterFast {
    type Output = u32;

    #[inline]
    fn step(&mut self) -> u32 {
        self.next()
    }

    fn skip(&mut self, steps: u64) {
        // Anything past u32::MAX is far beyond any valid budget.
        self.advance_frames(steps.min(u32::MAX as u64) as u32);
    }
}

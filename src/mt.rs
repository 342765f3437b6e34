use wrapping_arithmetic::wrappit;

// Mersenne Twister as the target games run it: MT19937 seed expansion
// and regeneration, with the cursor parked past the end after seeding
// so that the first read regenerates the buffer.

/// Number of words in the standard state buffer.
pub const MT_SIZE: usize = 624;
/// Distance to the word mixed into each regenerated word.
pub const MT_OFFSET: usize = 397;

const UPPER_MASK: u32 = 0x80000000;
const LOWER_MASK: u32 = 0x7fffffff;
const MATRIX_A: u32 = 0x9908b0df;
const SEED_MULT: u32 = 0x6c078965;
const TEMPER_B: u32 = 0x9d2c5680;
const TEMPER_C: u32 = 0xefc60000;

/// Fills the whole buffer from the seed with the MT linear recurrence.
#[wrappit]
pub(crate) fn expand_seed(mt: &mut [u32], seed: u32) {
    mt[0] = seed;
    for i in 1 .. mt.len() {
        let prev: u32 = mt[i - 1];
        mt[i] = (prev ^ (prev >> 30)) * SEED_MULT + i as u32;
    }
}

/// Regenerates one word from the word itself, its successor and the word MT_OFFSET ahead.
#[inline]
pub(crate) fn twist(current: u32, next: u32, far: u32) -> u32 {
    let y = (current & UPPER_MASK) | (next & LOWER_MASK);
    let mut z = y >> 1;
    if y & 1 == 1 {
        z ^= MATRIX_A;
    }
    z ^ far
}

/// The first three tempering stages.
/// The last stage, y ^= y >> 18, cannot change bits above bit 13,
/// so the high 16 bits of this and of `temper` are always equal.
#[inline]
pub fn temper_truncated(y: u32) -> u32 {
    let y = y ^ (y >> 11);
    let y = y ^ ((y << 7) & TEMPER_B);
    y ^ ((y << 15) & TEMPER_C)
}

/// Full MT19937 output tempering.
#[inline]
pub fn temper(y: u32) -> u32 {
    let y = temper_truncated(y);
    y ^ (y >> 18)
}

/// Standard Mersenne Twister. 32-bit output, 624-word state.
#[derive(Clone, Eq, PartialEq)]
pub struct MersenneTwister {
    mt: [u32; MT_SIZE],
    /// Index of the next word to read. At or past MT_SIZE, the buffer is due for regeneration.
    index: usize,
}

// Printing 624 words is not useful, show the cursor only.
impl core::fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "MersenneTwister {{ index: {} }}", self.index)
    }
}

impl MersenneTwister {

    /// Creates a new Mersenne Twister from a seed.
    /// The first output regenerates the buffer.
    pub fn new(seed: u32) -> Self {
        let mut rng = MersenneTwister { mt: [0; MT_SIZE], index: MT_SIZE };
        rng.initialize(seed);
        rng
    }

    /// Reseeds the buffer and parks the cursor at the end of it.
    pub fn initialize(&mut self, seed: u32) {
        expand_seed(&mut self.mt, seed);
        self.index = MT_SIZE;
    }

    /// Reseeds, then skips the given number of outputs.
    pub fn set_seed(&mut self, seed: u32, frames: u32) {
        self.initialize(seed);
        self.advance_frames(frames);
    }

    /// Skips the given number of outputs without tempering them.
    /// Each regeneration pass consumes exactly MT_SIZE of the skip.
    pub fn advance_frames(&mut self, frames: u32) {
        // Whole passes first, so the cursor stays below 2 * MT_SIZE even with a 32-bit usize.
        let frames = frames as usize;
        for _ in 0 .. frames / MT_SIZE {
            self.regenerate();
        }
        self.index += frames % MT_SIZE;
        while self.index >= MT_SIZE {
            self.shuffle();
        }
    }

    /// Returns the index of the next word to read.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Regenerates the whole buffer in place.
    fn regenerate(&mut self) {
        for i in 0 .. MT_SIZE {
            self.mt[i] = twist(self.mt[i], self.mt[(i + 1) % MT_SIZE], self.mt[(i + MT_OFFSET) % MT_SIZE]);
        }
    }

    /// Regenerates the buffer and moves the cursor back by MT_SIZE.
    fn shuffle(&mut self) {
        self.regenerate();
        self.index -= MT_SIZE;
    }

    /// Generates the next 32-bit output.
    #[inline]
    pub fn next(&mut self) -> u32 {
        if self.index >= MT_SIZE {
            self.shuffle();
        }
        let y = self.mt[self.index];
        self.index += 1;
        temper(y)
    }

    /// Generates the next output and returns its high 16 bits.
    #[inline]
    pub fn next_u16(&mut self) -> u16 {
        (self.next() >> 16) as u16
    }
}

use super::{Error, RngCore, SeedableRng, Stepping, impls};

impl RngCore for MersenneTwister {
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        Ok(self.fill_bytes(dest))
    }
}

impl SeedableRng for MersenneTwister {
    type Seed = [u8; 4];

    /// Creates a new Mersenne Twister from a seed.
    fn from_seed(seed: Self::Seed) -> Self {
        // Always use Little-Endian.
        MersenneTwister::new(u32::from_le_bytes(seed))
    }
}

impl Stepping for MersenneTwister {
    type Output = u32;

    #[inline]
    fn step(&mut self) -> u32 {
        self.next()
    }

    fn skip(&mut self, steps: u64) {
        let mut left = steps;
        while left > 0 {
            let frames = left.min(u32::MAX as u64) as u32;
            self.advance_frames(frames);
            left -= frames as u64;
        }
    }
}

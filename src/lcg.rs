use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

// This module contains the affine map algebra behind the LCG
// (linear congruential generator) engines.
// LCG iteration is state <- state * mult + add, wrapping at the word size.
// Each word size gets its own module with an identical API.

/// Number of entries in a jump table. Entry i advances by 2**i steps.
pub const JUMP_BITS: usize = 32;

macro_rules! lcg_algebra {
    ($module:ident, $word:ty) => {
        pub mod $module {
            use super::*;

            /// Applies one LCG step.
            #[wrappit] #[inline]
            pub fn step(state: $word, mult: $word, add: $word) -> $word {
                state * mult + add
            }

            /// Precomputed doubling table for one (mult, add) pair.
            /// Entry i is the affine map equal to 2**i applications of the base step.
            #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
            #[derive(Clone, Copy, Debug, Eq, PartialEq)]
            pub struct JumpTable {
                mult: [$word; JUMP_BITS],
                add: [$word; JUMP_BITS],
            }

            impl JumpTable {
                /// Builds the table. This is a pure function of its inputs,
                /// so family tables are built once into statics at compile time.
                pub const fn new(mult: $word, add: $word) -> Self {
                    let mut table = JumpTable { mult: [0; JUMP_BITS], add: [0; JUMP_BITS] };
                    table.mult[0] = mult;
                    table.add[0] = add;
                    let mut i = 1;
                    while i < JUMP_BITS {
                        // Applying (m, a) twice gives (m * m, a * (m + 1)).
                        table.add[i] = table.add[i - 1].wrapping_mul(table.mult[i - 1].wrapping_add(1));
                        table.mult[i] = table.mult[i - 1].wrapping_mul(table.mult[i - 1]);
                        i += 1;
                    }
                    table
                }

                /// Returns the (mult, add) pair of entry i.
                #[inline]
                pub fn entry(&self, i: usize) -> ($word, $word) {
                    (self.mult[i], self.add[i])
                }

                /// Returns the state after the given number of steps from `state`.
                /// Step counts wider than the table keep doubling from the last entry,
                /// so the cost is O(log steps) over the whole u64 range.
                #[wrappit]
                pub fn jump(&self, state: $word, steps: u64) -> $word {
                    let mut state: $word = state;
                    let mut bits: u64 = steps;
                    let mut i: usize = 0;

                    while bits != 0 && i < JUMP_BITS {
                        if bits & 1 == 1 {
                            state = state * self.mult[i] + self.add[i];
                        }
                        bits >>= 1;
                        i += 1;
                    }

                    if bits != 0 {
                        // Remaining bits count in units of 2**JUMP_BITS steps.
                        let (m, p) = self.entry(JUMP_BITS - 1);
                        state = state_after(m * m, (m + 1) * p, state, bits);
                    }
                    state
                }
            }

            /// Returns the (mult, add) pair that iterates by n steps at once.
            /// Table-free counterpart of `JumpTable`: entry i equals `jump_coefficients(mult, add, 1 << i)`,
            /// which is what the table tests check against.
            #[wrappit]
            pub fn jump_coefficients(mult: $word, add: $word, n: u64) -> ($word, $word) {
                // Algorithm from Brown, F. B., "Random Number Generation with Arbitrary Stride",
                // Transactions of the American Nuclear Society, 1994.
                let mut unit_m: $word = mult;
                let mut unit_p: $word = add;
                let mut jump_m: $word = 1;
                let mut jump_p: $word = 0;
                let mut delta: u64 = n;

                while delta > 0 {
                    if delta & 1 == 1 {
                        jump_m = jump_m * unit_m;
                        jump_p = jump_p * unit_m + unit_p;
                    }
                    unit_p = (unit_m + 1) * unit_p;
                    unit_m *= unit_m;
                    delta >>= 1;
                }
                (jump_m, jump_p)
            }

            /// Returns the state after the specified number of iterations from the origin state.
            /// Needs no table; `JumpTable::jump` uses it for step counts wider than the table.
            #[wrappit]
            pub fn state_after(mult: $word, add: $word, origin: $word, iterations: u64) -> $word {
                let mut jump_m: $word = mult;
                let mut jump_p: $word = add;
                let mut state: $word = origin;
                let mut ordinal: u64 = iterations;

                while ordinal > 0 {
                    if ordinal & 1 == 1 {
                        state = state * jump_m + jump_p;
                    }
                    jump_p = (jump_m + 1) * jump_p;
                    jump_m *= jump_m;
                    ordinal >>= 1;
                }
                state
            }

            /// Returns the number of forward iterations between the origin state and the given state.
            /// Assumes (mult, add) is full period, otherwise the loop may not terminate.
            #[wrappit]
            pub fn distance(mult: $word, add: $word, origin: $word, state: $word) -> $word {
                let mut jump_m: $word = mult;
                let mut jump_p: $word = add;
                let mut ordinal: $word = 0;
                let mut bit: $word = 1;
                let mut address: $word = origin;

                while address != state {
                    if (bit & address) != (bit & state) {
                        address = address * jump_m + jump_p;
                        ordinal = ordinal + bit;
                    }
                    jump_p = (jump_m + 1) * jump_p;
                    jump_m *= jump_m;
                    bit <<= 1;
                }
                ordinal
            }

            /// Multiplicative inverse of an odd multiplier.
            pub const fn inverse(mult: $word) -> $word {
                // Newton iteration. Any odd x satisfies x * x = 1 (mod 8),
                // and each round doubles the number of correct low bits.
                let mut x = mult;
                let mut round = 0;
                while round < 5 {
                    x = x.wrapping_mul((2 as $word).wrapping_sub(mult.wrapping_mul(x)));
                    round += 1;
                }
                x
            }

            /// Returns the (mult, add) pair of the map that undoes one step of (mult, add).
            pub const fn reverse(mult: $word, add: $word) -> ($word, $word) {
                let mult_r = inverse(mult);
                (mult_r, (0 as $word).wrapping_sub(add.wrapping_mul(mult_r)))
            }
        }
    };
}

lcg_algebra!(w32, u32);
lcg_algebra!(w64, u64);

pub use w32::JumpTable as JumpTable32;
pub use w64::JumpTable as JumpTable64;

#[cfg(test)] mod tests {
    use super::*;
    use super::super::*;
    use proptest::prelude::*;

    // 64-bit LCG multiplier from Steele, G. and Vigna, S.,
    // Computationally Easy, Spectrally Good Multipliers for
    // Congruential Pseudorandom Number Generators (2020).
    const LCG_M64_1: u64 = 0xd1342543de82ef95;

    #[test] pub fn table_doubling_law() {
        let table = JumpTable64::new(BWRNG_MULT, BWRNG_ADD);
        assert_eq!((BWRNG_MULT, BWRNG_ADD), table.entry(0));
        for i in 1 .. JUMP_BITS {
            let (m, a) = table.entry(i - 1);
            assert_eq!((m.wrapping_mul(m), a.wrapping_mul(m.wrapping_add(1))), table.entry(i));
            // Entry i must equal 2**i plain steps.
            assert_eq!(w64::jump_coefficients(BWRNG_MULT, BWRNG_ADD, 1 << i), table.entry(i));
        }
        assert_eq!(table, JumpTable64::new(BWRNG_MULT, BWRNG_ADD));

        let table = JumpTable32::new(POKERNG_MULT, POKERNG_ADD);
        assert_eq!((POKERNG_MULT, POKERNG_ADD), table.entry(0));
        for i in 1 .. JUMP_BITS {
            assert_eq!(w32::jump_coefficients(POKERNG_MULT, POKERNG_ADD, 1 << i), table.entry(i));
        }
    }

    #[test] pub fn jump_matches_stepping() {
        let table = JumpTable64::new(BWRNG_MULT, BWRNG_ADD);
        let mut state: u64 = 0x0123456789abcdef;
        for _ in 0 .. 1_000_000 { state = w64::step(state, BWRNG_MULT, BWRNG_ADD); }
        assert_eq!(0xaafcf1db71272c2f, state);
        assert_eq!(state, table.jump(0x0123456789abcdef, 1_000_000));

        let origin: u64 = 0xfeedface;
        let mut state = origin;
        for k in 0 .. 4096 {
            assert_eq!(state, table.jump(origin, k));
            state = w64::step(state, BWRNG_MULT, BWRNG_ADD);
        }
    }

    #[test] pub fn composition_law() {
        let table = JumpTable64::new(BWRNG_MULT, BWRNG_ADD);
        let origin: u64 = 0x1234;
        let (k1, k2) = (100_000u64, 250_000u64);
        let mut state = origin;
        for _ in 0 .. k1 + k2 { state = w64::step(state, BWRNG_MULT, BWRNG_ADD); }
        assert_eq!(state, table.jump(table.jump(origin, k1), k2));
        assert_eq!(state, table.jump(origin, k1 + k2));
    }

    #[test] pub fn wide_jumps() {
        let table = JumpTable64::new(BWRNG_MULT, BWRNG_ADD);
        let origin: u64 = 0xabad1dea;
        for &k in [1u64 << 32, (1 << 32) + 7, 0x0123_4567_89ab_cdef, u64::MAX].iter() {
            assert_eq!(w64::state_after(BWRNG_MULT, BWRNG_ADD, origin, k), table.jump(origin, k));
            let (m, p) = w64::jump_coefficients(BWRNG_MULT, BWRNG_ADD, k);
            assert_eq!(origin.wrapping_mul(m).wrapping_add(p), table.jump(origin, k));
        }

        // Whole multiples of 2**32 go through the table-free path alone.
        let (m, p) = w64::jump_coefficients(BWRNG_MULT, BWRNG_ADD, 1 << 32);
        let mut state = origin;
        for _ in 0 .. 3 { state = w64::step(state, m, p); }
        assert_eq!(state, table.jump(origin, 3 << 32));

        // A full-period 32-bit LCG returns to its origin after 2**32 steps.
        let table = JumpTable32::new(XDRNG_MULT, XDRNG_ADD);
        assert_eq!(0x5eed, table.jump(0x5eed, 1 << 32));
        assert_eq!(table.jump(0x5eed, 5), table.jump(0x5eed, (3 << 32) + 5));
    }

    #[test] pub fn reverse_parameters() {
        assert_eq!((BWRNG_R_MULT, BWRNG_R_ADD), w64::reverse(BWRNG_MULT, BWRNG_ADD));
        assert_eq!((POKERNG_R_MULT, POKERNG_R_ADD), w32::reverse(POKERNG_MULT, POKERNG_ADD));
        assert_eq!((XDRNG_R_MULT, XDRNG_R_ADD), w32::reverse(XDRNG_MULT, XDRNG_ADD));
        assert_eq!((ARNG_R_MULT, ARNG_R_ADD), w32::reverse(ARNG_MULT, ARNG_ADD));
        assert_eq!((BWRNG_MULT, BWRNG_ADD), w64::reverse(BWRNG_R_MULT, BWRNG_R_ADD));
        assert_eq!(1, BWRNG_MULT.wrapping_mul(w64::inverse(BWRNG_MULT)));
    }

    #[test] pub fn run_tests() {

        let mut r: u64 = 0;
        let mut rnd = || -> u64 { r = r.wrapping_mul(BWRNG_MULT).wrapping_add(0xffff); r };

        for _ in 0 .. 1<<12 {

            let m = match rnd() % 3 { 0 => BWRNG_MULT, 1 => BWRNG_R_MULT, _ => LCG_M64_1 };
            let p = rnd() | 1;
            let origin = rnd();

            assert_eq!(origin.wrapping_mul(m).wrapping_add(p), w64::state_after(m, p, origin, 1));
            assert_eq!(1, w64::distance(m, p, origin, origin.wrapping_mul(m).wrapping_add(p)));

            // Run some consistency tests.
            let state = rnd();
            let n = w64::distance(m, p, origin, state);
            assert_eq!(state, w64::state_after(m, p, origin, n));

            let (m_total, p_total) = w64::jump_coefficients(m, p, n);
            assert_eq!(origin.wrapping_mul(m_total).wrapping_add(p_total), state);
            assert_eq!(state, JumpTable64::new(m, p).jump(origin, n));

            let n = rnd();
            let state = w64::state_after(m, p, origin, n);
            assert_eq!(n, w64::distance(m, p, origin, state));

            // Get h <= n.
            let h = n & rnd();
            let state_h = w64::state_after(m, p, origin, h);
            assert_eq!(n - h, w64::distance(m, p, state_h, state));

            // Walking back the same distance with the inverse map returns to the origin.
            let (m_r, p_r) = w64::reverse(m, p);
            assert_eq!(origin, w64::state_after(m_r, p_r, state, n));
        }
    }

    proptest! {
        #[test]
        fn jumps_compose(origin in any::<u64>(), k1 in 0u64 .. 1 << 40, k2 in 0u64 .. 1 << 40) {
            let table = JumpTable64::new(BWRNG_MULT, BWRNG_ADD);
            prop_assert_eq!(table.jump(table.jump(origin, k1), k2), table.jump(origin, k1 + k2));
        }

        #[test]
        fn forward_then_reverse_is_identity(origin in any::<u32>(), k in any::<u64>()) {
            let forward = JumpTable32::new(POKERNG_MULT, POKERNG_ADD);
            let reverse = JumpTable32::new(POKERNG_R_MULT, POKERNG_R_ADD);
            prop_assert_eq!(origin, reverse.jump(forward.jump(origin, k), k));
        }
    }
}

use std::fmt;

use crate::{Seed, WORDS};

/// Per-step shifts applied to the accumulator, selected by `i mod 4`. Positive values shift left,
/// negative values shift right.
const SHIFTS: [i32; 4] = [13, -6, 2, -16];

const MASK: usize = WORDS - 1;

/// The ISAAC mixing engine.
///
/// Holds the accumulator `a`, the last result `b`, the round counter `c` and the 256-word
/// internal state. Every call to [`Isaac::round`] rewrites the whole state in place and returns
/// the next batch of 256 words.
pub struct Isaac {
    /// Entropy accumulator.
    a: u32,
    /// Last result.
    b: u32,
    /// Round counter, guarantees a minimum cycle length.
    c: u32,
    /// Internal state.
    s: [u32; WORDS],
}

impl Isaac {
    /// Returns an engine whose state is the big-endian unpacking of `seed`, with the three
    /// registers set to zero.
    ///
    /// # Example
    /// ```
    /// # use isaac_stream::{Isaac, Seed};
    /// let mut engine = Isaac::new(&Seed::default());
    /// let batch = engine.round();
    /// assert_eq!(batch[0], 1);
    /// ```
    pub fn new(seed: &Seed) -> Self {
        Self {
            a: 0,
            b: 0,
            c: 0,
            s: seed.words(),
        }
    }

    /// Advances the state by one round and returns the 256 words it produced.
    pub fn round(&mut self) -> [u32; WORDS] {
        let mut r = [0; WORDS];
        self.c = self.c.wrapping_add(1);
        self.b = self.b.wrapping_add(self.c);
        for (i, out) in r.iter_mut().enumerate() {
            self.a ^= match SHIFTS[i & 3] {
                shift if shift > 0 => self.a << shift,
                shift => self.a >> -shift,
            };
            self.a = self.a.wrapping_add(self.s[(i + 128) & MASK]);
            let x = self.s[i];
            let y = self
                .a
                .wrapping_add(self.b)
                .wrapping_add(self.s[(x >> 2) as usize & MASK]);
            self.s[i] = y;
            self.b = x.wrapping_add(self.s[(y >> 10) as usize & MASK]);
            *out = self.b;
        }
        r
    }

    /// Returns the number of rounds completed so far, modulo 2^32.
    pub fn counter(&self) -> u32 {
        self.c
    }
}

impl fmt::Debug for Isaac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Isaac").field("counter", &self.c).finish_non_exhaustive()
    }
}

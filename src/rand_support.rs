use rand::{RngCore, SeedableRng};

use crate::{pack_words, Block, Isaac, Seed, BLOCK_SIZE};

/// An adapter that exposes the engine through the `rand` traits.
///
/// Bytes come out in the same order and layout as the command-line stream, so
/// `fill_bytes` on a fresh generator reproduces the stream for the same seed.
#[derive(Debug)]
pub struct IsaacRng {
    engine: Isaac,
    block: Block,
    /// Read position within `block`; `BLOCK_SIZE` means the block is used up.
    index: usize,
}

impl IsaacRng {
    pub fn new(seed: &Seed) -> Self {
        Self {
            engine: Isaac::new(seed),
            block: [0; BLOCK_SIZE],
            index: BLOCK_SIZE,
        }
    }

    fn refill(&mut self) {
        self.block = pack_words(&self.engine.round());
        self.index = 0;
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut bytes = [0; N];
        self.fill_bytes(&mut bytes);
        bytes
    }
}

impl RngCore for IsaacRng {
    fn next_u32(&mut self) -> u32 {
        u32::from_be_bytes(self.take())
    }

    fn next_u64(&mut self) -> u64 {
        u64::from_be_bytes(self.take())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut filled = 0;
        while filled < dest.len() {
            if self.index == BLOCK_SIZE {
                self.refill();
            }
            let n = (dest.len() - filled).min(BLOCK_SIZE - self.index);
            dest[filled..filled + n].copy_from_slice(&self.block[self.index..self.index + n]);
            self.index += n;
            filled += n;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for IsaacRng {
    type Seed = Seed;

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(&seed)
    }
}

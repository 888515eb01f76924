//! A deterministic pseudorandom byte stream built on the ISAAC word generator.
//!
//! A 1024-octet seed fully determines an unbounded stream of output. The stream is produced in
//! blocks of 1024 octets, one block per round of the mixing engine, with every 32-bit word
//! serialized big-endian, the same layout the seed is read in.
//!
//! # Example
//! ```
//! use isaac_stream::{Isaac, Seed, Stream};
//!
//! let seed = Seed::default();
//! let mut stream = Stream::new(Isaac::new(&seed), Vec::new());
//! let block = stream.next_block();
//! assert_eq!(&block[..4], &[0, 0, 0, 1]);
//! ```

pub mod error;

mod args;
mod engine;
#[cfg(feature = "rand")]
mod rand_support;
mod seed;
mod stream;

#[cfg(test)]
mod bench;

pub use args::check_args;
pub use engine::Isaac;
pub use error::{Error, Result, USAGE};
#[cfg(feature = "rand")]
pub use rand_support::IsaacRng;
pub use seed::Seed;
pub use stream::{pack_words, Block, Shutdown, Stream};

/// The number of 32-bit words in the engine state and in every result batch.
pub const WORDS: usize = 256;

/// The number of octets in a seed and in every output block.
pub const BLOCK_SIZE: usize = WORDS * std::mem::size_of::<u32>();

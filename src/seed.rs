use std::{
    fmt,
    io::{ErrorKind, Read},
};

use log::debug;

use crate::{Error, Result, BLOCK_SIZE, WORDS};

/// The 1024 octets that determine the whole output stream.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; BLOCK_SIZE]);

impl Seed {
    /// Wraps raw seed material.
    pub fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Reads a seed from `reader`, which must carry exactly 1024 octets.
    ///
    /// Fails with [`Error::ShortSeed`] if the input ends early and with [`Error::LongSeed`] if
    /// anything follows the 1024th octet. Telling the two apart means waiting for the end of the
    /// input after the 1024th octet, so a producer that keeps its end of `reader` open holds up
    /// the seed until it closes it.
    ///
    /// # Example
    /// ```
    /// # use isaac_stream::{Error, Seed};
    /// let seed = Seed::read_from(&[7u8; 1024][..]).unwrap();
    /// assert_eq!(seed.words()[0], 0x07070707);
    ///
    /// let err = Seed::read_from(&[7u8; 10][..]).unwrap_err();
    /// assert!(matches!(err, Error::ShortSeed { read: 10 }));
    /// ```
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = [0; BLOCK_SIZE];
        let read = read_full(&mut reader, &mut bytes)?;
        if read < BLOCK_SIZE {
            return Err(Error::ShortSeed { read });
        }
        if read_full(&mut reader, &mut [0; 1])? != 0 {
            return Err(Error::LongSeed);
        }
        debug!("loaded {read} byte seed");
        Ok(Self(bytes))
    }

    /// Returns the seed as 256 words, each built from 4 consecutive octets with the first octet
    /// most significant.
    pub fn words(&self) -> [u32; WORDS] {
        let mut words = [0; WORDS];
        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }

    /// Returns the raw seed material.
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }
}

/// Reads into `buf` until it is full or the reader is exhausted, returning the number of octets
/// read.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

impl Default for Seed {
    /// Returns the all-zero seed.
    fn default() -> Self {
        Self([0; BLOCK_SIZE])
    }
}

impl AsMut<[u8]> for Seed {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

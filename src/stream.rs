use std::io::{ErrorKind, Write};

use log::{debug, trace};

use crate::{Isaac, Result, BLOCK_SIZE, WORDS};

/// One serialized batch of output.
pub type Block = [u8; BLOCK_SIZE];

/// Serializes `words` into a block, most significant octet of each word first. This is the exact
/// inverse of [`Seed::words`](crate::Seed::words).
pub fn pack_words(words: &[u32; WORDS]) -> Block {
    let mut block = [0; BLOCK_SIZE];
    for (chunk, word) in block.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    block
}

/// How a stream ended. The only clean ending is the consumer closing its end of the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shutdown {
    /// The number of complete blocks accepted by the sink before it was closed.
    pub blocks: u64,
}

/// Pairs the engine with an output sink and pumps blocks into it.
#[derive(Debug)]
pub struct Stream<W> {
    engine: Isaac,
    sink: W,
    blocks: u64,
}

impl<W: Write> Stream<W> {
    /// Returns a stream that writes the output of `engine` to `sink`, starting with its next
    /// round.
    pub fn new(engine: Isaac, sink: W) -> Self {
        Self {
            engine,
            sink,
            blocks: 0,
        }
    }

    /// Runs one round and returns its packed output without writing it.
    pub fn next_block(&mut self) -> Block {
        pack_words(&self.engine.round())
    }

    /// Writes blocks to the sink until the consumer disconnects.
    ///
    /// Returns `Ok` once a write fails with [`ErrorKind::BrokenPipe`]. Any other write failure is
    /// returned as an error. The call never returns while the sink keeps accepting data.
    pub fn run(&mut self) -> Result<Shutdown> {
        loop {
            let block = self.next_block();
            match self.sink.write_all(&block) {
                Ok(()) => {
                    self.blocks += 1;
                    trace!("wrote block {}", self.blocks);
                }
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("consumer disconnected after {} blocks", self.blocks);
                    return Ok(Shutdown {
                        blocks: self.blocks,
                    });
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Returns the number of blocks delivered so far.
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    /// Consumes the stream, returning the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::{Error, Seed};

    /// A sink that accepts `limit` octets and then fails every write with `kind`. Writes are
    /// capped at 100 octets to exercise `write_all` looping over partial writes.
    struct Limited {
        data: Vec<u8>,
        limit: usize,
        kind: ErrorKind,
    }

    impl Limited {
        fn new(limit: usize, kind: ErrorKind) -> Self {
            Self {
                data: Vec::new(),
                limit,
                kind,
            }
        }
    }

    impl Write for Limited {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit - self.data.len();
            if room == 0 {
                return Err(self.kind.into());
            }
            let n = buf.len().min(room).min(100);
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn pack_big_endian() {
        let mut words = [0; WORDS];
        words[0] = 0x01020304;
        words[255] = 0xA0B0C0D0;
        let block = pack_words(&words);
        assert_eq!(block[..4], [1, 2, 3, 4]);
        assert_eq!(block[1020..], [0xA0, 0xB0, 0xC0, 0xD0]);
        assert!(block[4..1020].iter().all(|&b| b == 0));
    }

    #[test]
    fn pack_inverts_seed_unpacking() {
        let bytes: Block = std::array::from_fn(|i| (i * 37 + 11) as u8);
        let seed = Seed::from_bytes(bytes);
        assert_eq!(pack_words(&seed.words()), bytes);
    }

    #[test]
    fn broken_pipe_is_clean() {
        for k in [0, 1, 3] {
            let sink = Limited::new(k * BLOCK_SIZE, ErrorKind::BrokenPipe);
            let mut stream = Stream::new(Isaac::new(&Seed::default()), sink);
            let shutdown = stream.run().unwrap();
            assert_eq!(shutdown, Shutdown { blocks: k as u64 });
            assert_eq!(stream.into_sink().data.len(), k * BLOCK_SIZE);
        }
    }

    #[test]
    fn partial_block_is_not_counted() {
        let sink = Limited::new(2 * BLOCK_SIZE + 500, ErrorKind::BrokenPipe);
        let mut stream = Stream::new(Isaac::new(&Seed::default()), sink);
        assert_eq!(stream.run().unwrap().blocks, 2);
        assert_eq!(stream.blocks(), 2);
    }

    #[test]
    fn other_write_errors_are_fatal() {
        let sink = Limited::new(BLOCK_SIZE, ErrorKind::Other);
        let mut stream = Stream::new(Isaac::new(&Seed::default()), sink);
        match stream.run() {
            Err(Error::Io(e)) => assert_eq!(e.kind(), ErrorKind::Other),
            other => panic!("expected an I/O error, got {other:?}"),
        }
        assert_eq!(stream.blocks(), 1);
    }

    #[test]
    fn buffered_sink() {
        let mut direct = Stream::new(Isaac::new(&Seed::default()), Vec::new());
        let expected: Vec<u8> = (0..5).flat_map(|_| direct.next_block()).collect();

        let limited = Limited::new(5 * BLOCK_SIZE, ErrorKind::BrokenPipe);
        let sink = io::BufWriter::with_capacity(3 * BLOCK_SIZE, limited);
        let mut stream = Stream::new(Isaac::new(&Seed::default()), sink);
        assert!(stream.run().is_ok());
        let sink = stream.into_sink();
        assert_eq!(sink.get_ref().data, expected);
    }

    #[test]
    fn rejected_sink_is_fatal() {
        let sink = Limited::new(0, ErrorKind::WriteZero);
        let mut stream = Stream::new(Isaac::new(&Seed::default()), sink);
        assert!(matches!(stream.run(), Err(Error::Io(_))));
    }
}

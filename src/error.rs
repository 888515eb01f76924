//! Error types for the stream generator.

use std::{fmt, io};

use crate::BLOCK_SIZE;

/// The text written to the diagnostic channel when the program is misused.
pub const USAGE: &str = "Feed exactly 1024 bytes as binary random seed via standard input!\n\n\
Then read as many pseudorandom bytes as needed from standard output (which should be a pipe) \
and stop reading (or close the pipe) when done.\n";

/// Errors produced while loading a seed or delivering the output stream.
///
/// A consumer closing the output channel is not an error and has no variant here.
#[derive(Debug)]
pub enum Error {
    /// The input channel ended before a full seed was read.
    ShortSeed {
        /// The number of octets that were available.
        read: usize,
    },
    /// The input channel carried more octets than a seed holds.
    LongSeed,
    /// An argument was passed on the command line.
    UnexpectedArgument(String),
    /// Reading the seed or writing the output failed.
    Io(io::Error),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if the error is caused by how the program was invoked, in which case the
    /// usage text should be shown.
    pub fn is_usage(&self) -> bool {
        !matches!(self, Error::Io(_))
    }

    /// Returns the text written to the diagnostic channel before the program aborts: the error
    /// itself, then the usage text.
    pub fn diagnostic(&self) -> String {
        format!("{self}\n\n{USAGE}")
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShortSeed { read } => {
                write!(f, "Seed too short: got {read} of {BLOCK_SIZE} bytes")
            }
            Error::LongSeed => write!(f, "Seed too long: expected exactly {BLOCK_SIZE} bytes"),
            Error::UnexpectedArgument(arg) => write!(f, "Unexpected argument: {arg}"),
            Error::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

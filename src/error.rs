use std::io;
use thiserror::Error;

/// Failures surfaced by [`crate::Reverser`] when handing output to its sink
#[derive(Debug, Error)]
pub enum ReverseError {
    /// The reverser has no sink to write to
    #[error("no destination: reverser has no sink attached")]
    NoDestination,

    /// The sink accepted fewer bytes than requested without reporting an error
    #[error("short write: sink accepted {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },

    /// Error reported by the sink itself, passed through unchanged
    #[error(transparent)]
    Sink(#[from] io::Error),
}

impl From<ReverseError> for io::Error {
    fn from(err: ReverseError) -> Self {
        match err {
            ReverseError::Sink(inner) => inner,
            ReverseError::NoDestination => io::Error::new(io::ErrorKind::NotConnected, err),
            ReverseError::ShortWrite { .. } => io::Error::new(io::ErrorKind::WriteZero, err),
        }
    }
}

pub use anyhow::Result;
use core::{error::Error, fmt};

/// A reversible byte transform.
///
/// `drive_mutation` applies the transform (compress, encrypt), `revert_mutation` undoes it. Both write
/// into `buf`, replacing its previous contents, so buffers can be reused across stages.
pub trait Mutator {
    fn drive_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()>;
    fn revert_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()>;
}

impl<M: Mutator + ?Sized> Mutator for Box<M> {
    fn drive_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        (**self).drive_mutation(data, buf)
    }

    fn revert_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        (**self).revert_mutation(data, buf)
    }
}

/// Represents an error emitted by a decoder that is not specific enough to warrant its own type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecompressionError {
    /// Input given to the decoder was malformed, invalid, or otherwise incorrect for decoding.
    ///
    /// The argument is a string that describes what went wrong.
    InvalidInput(String),
}

impl Error for DecompressionError {}

impl fmt::Display for DecompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(message) => {
                write!(f, "Input data was malformed, and could not be decoded: {}", message)
            }
        }
    }
}

use std::collections::TryReserveError;

use thiserror::Error;

/// Everything that can go wrong while building a Huffman code, encoding with it, or decoding a blob.
///
/// All variants are recoverable. The encoder and decoder never hand back partial output alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// There was nothing to encode.
    #[error("input is empty")]
    EmptyInput,

    /// A single byte value occurred more often than a frequency slot can record.
    #[error("byte {byte:#04x} occurs {count} times, which does not fit in a frequency slot")]
    InputTooLarge { byte: u8, count: u64 },

    /// The blob ends before the fixed-size header does.
    #[error("compressed data is {len} bytes long, but the header alone needs {needed}")]
    TruncatedHeader { len: usize, needed: usize },

    /// Every frequency is zero, yet the header claims there is data to decode.
    #[error("header has no symbol frequencies but an original length of {original_len}")]
    InconsistentHeader { original_len: u64 },

    /// The bitstream ran dry before the original length was reached.
    #[error("bitstream exhausted after {decoded} of {expected} bytes")]
    LengthMismatch { decoded: usize, expected: u64 },

    /// A bit asked to step into a child the tree does not have.
    #[error("invalid path in huffman tree at bit {bit_position}")]
    InvalidPath { bit_position: u64 },

    /// An input byte has no code. Means the frequency table and the code table disagree.
    #[error("byte {0:#04x} has no entry in the code table")]
    CodeLookupMiss(u8),

    /// Reserving memory for the tree or an output buffer failed.
    #[error("allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// Codes were requested from a tree that has no root.
    #[error("cannot generate codes from an empty huffman tree")]
    TreeBuildFailure,

    /// `extract_min` was called on an empty priority queue.
    #[error("priority queue is empty")]
    EmptyQueue,
}

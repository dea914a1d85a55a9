//! Fixed-size header at the front of every compressed blob.
//!
//! ```text
//! +------------------------------+---------------------+------------------+
//! | 256 x u32 LE symbol counts   | u64 LE original len | packed bitstream |
//! +------------------------------+---------------------+------------------+
//! ```
//!
//! All 256 slots are written even when most are zero. A sparse table would be smaller, but this layout is
//! what existing blobs use.

use super::{ALPHABET_SIZE, FrequencyTable, HuffmanError};

pub const COUNT_WIDTH: usize = size_of::<u32>();
pub const LENGTH_WIDTH: usize = size_of::<u64>();
pub const HEADER_LEN: usize = ALPHABET_SIZE * COUNT_WIDTH + LENGTH_WIDTH;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub frequencies: FrequencyTable,
    pub original_len: u64,
}

impl Header {
    pub fn write_to(&self, out: &mut Vec<u8>) {
        for count in self.frequencies.counts() {
            out.extend_from_slice(&count.to_le_bytes());
        }
        out.extend_from_slice(&self.original_len.to_le_bytes());
    }

    /// Splits `blob` into its header and the bitstream that follows it.
    pub fn parse(blob: &[u8]) -> Result<(Self, &[u8]), HuffmanError> {
        let truncated = HuffmanError::TruncatedHeader {
            len: blob.len(),
            needed: HEADER_LEN,
        };

        let mut rest = blob;
        let mut counts = [0u32; ALPHABET_SIZE];
        for slot in &mut counts {
            let (bytes, tail) = rest.split_first_chunk::<COUNT_WIDTH>().ok_or_else(|| truncated.clone())?;
            *slot = u32::from_le_bytes(*bytes);
            rest = tail;
        }
        let (bytes, payload) = rest.split_first_chunk::<LENGTH_WIDTH>().ok_or(truncated)?;

        let header = Self {
            frequencies: FrequencyTable::from_counts(counts),
            original_len: u64::from_le_bytes(*bytes),
        };
        Ok((header, payload))
    }
}

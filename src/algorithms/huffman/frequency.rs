use core::fmt;

use super::HuffmanError;

/// Number of distinct symbols. One per byte value.
pub const ALPHABET_SIZE: usize = 256;

/// Occurrence counts for every byte value, indexed by the byte itself.
///
/// Counts are `u32` because that is the width they occupy on the wire.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Counts every byte in `data`.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::InputTooLarge`] if some byte occurs more than `u32::MAX` times.
    pub fn from_bytes(data: &[u8]) -> Result<Self, HuffmanError> {
        let mut wide = [0u64; ALPHABET_SIZE];
        for &byte in data {
            wide[byte as usize] += 1;
        }

        let mut counts = [0u32; ALPHABET_SIZE];
        for (byte, (slot, &count)) in counts.iter_mut().zip(wide.iter()).enumerate() {
            *slot = u32::try_from(count).map_err(|_| HuffmanError::InputTooLarge { byte: byte as u8, count })?;
        }

        Ok(Self { counts })
    }

    pub const fn from_counts(counts: [u32; ALPHABET_SIZE]) -> Self {
        Self { counts }
    }

    pub const fn counts(&self) -> &[u32; ALPHABET_SIZE] {
        &self.counts
    }

    pub const fn get(&self, byte: u8) -> u32 {
        self.counts[byte as usize]
    }

    /// Iterates over `(byte, count)` for every byte that actually occurs, in ascending byte order.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(byte, &count)| (byte as u8, count))
    }

    /// Number of byte values with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Sum of all counts, i.e. the length of the data the table was built from.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }
}

impl fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 256 mostly-zero slots are unreadable, only show the ones in use
        f.debug_map().entries(self.symbols()).finish()
    }
}

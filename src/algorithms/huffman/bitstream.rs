use super::Code;

/// Packs bits MSB-first into an output buffer.
///
/// The caller is expected to have reserved room in `out` already, this never checks for allocation failure.
pub struct BitWriter<'a> {
    out: &'a mut Vec<u8>,
    acc: u8,
    held: u8,
}

impl<'a> BitWriter<'a> {
    pub fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, acc: 0, held: 0 }
    }

    pub fn push_bit(&mut self, bit: bool) {
        self.acc = (self.acc << 1) | u8::from(bit);
        self.held += 1;
        if self.held == 8 {
            self.out.push(self.acc);
            self.acc = 0;
            self.held = 0;
        }
    }

    pub fn push_code(&mut self, code: &Code) {
        for &bit in code.bits() {
            self.push_bit(bit);
        }
    }

    /// Flushes a partial byte, left-aligned with zero padding in the low bits.
    ///
    /// Returns how many padding bits were added (0..=7).
    pub fn finish(self) -> u8 {
        if self.held == 0 {
            return 0;
        }
        let padding = 8 - self.held;
        self.out.push(self.acc << padding);
        padding
    }
}

/// Yields the bits of a byte slice, MSB first within each byte.
pub struct BitReader<'a> {
    data: &'a [u8],
    position: u64,
}

impl<'a> BitReader<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Index of the next bit to be read.
    pub const fn position(&self) -> u64 {
        self.position
    }

    pub fn remaining(&self) -> u64 {
        self.data.len() as u64 * 8 - self.position
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let byte = *self.data.get((self.position / 8) as usize)?;
        let shift = 7 - (self.position % 8) as u32;
        self.position += 1;
        Some((byte >> shift) & 1 == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn writer_packs_msb_first_and_pads_low_bits() {
        let mut out = vec![];
        let mut writer = BitWriter::new(&mut out);
        for bit in bits("00001111111010") {
            writer.push_bit(bit);
        }
        assert_eq!(writer.finish(), 2);
        assert_eq!(out, vec![0x0F, 0xE8]);
    }

    #[test]
    fn whole_bytes_need_no_padding() {
        let mut out = vec![];
        let mut writer = BitWriter::new(&mut out);
        for bit in bits("1010101100000001") {
            writer.push_bit(bit);
        }
        assert_eq!(writer.finish(), 0);
        assert_eq!(out, vec![0xAB, 0x01]);
    }

    #[test]
    fn reader_yields_every_bit_then_stops() {
        let mut reader = BitReader::new(&[0b1000_0001, 0b0100_0000]);
        assert_eq!(reader.remaining(), 16);
        let read = reader.by_ref().take(10).collect::<Vec<_>>();
        assert_eq!(read, bits("1000000101"));
        assert_eq!(reader.position(), 10);
        assert_eq!(reader.by_ref().count(), 6);
        assert_eq!(reader.next(), None);
    }
}

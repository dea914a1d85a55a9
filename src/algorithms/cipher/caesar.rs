use super::CipherError;
use crate::mutator::{Mutator, Result};

const LETTERS: i64 = 26;

/// Classic Caesar shift over ASCII letters. Everything that is not `a-z` or `A-Z` passes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caesar {
    /// always in `0..26`
    shift: u8,
}

impl Caesar {
    /// Any integer shift is accepted, it wraps into `0..26`.
    pub fn new(shift: i64) -> Self {
        Self {
            shift: shift.rem_euclid(LETTERS) as u8,
        }
    }

    fn apply(data: &[u8], shift: u8, buf: &mut Vec<u8>) -> Result<(), CipherError> {
        if data.is_empty() {
            return Err(CipherError::EmptyInput);
        }
        buf.clear();
        buf.extend(data.iter().map(|&byte| rotate(byte, shift)));
        Ok(())
    }
}

fn rotate(byte: u8, shift: u8) -> u8 {
    let base = match byte {
        b'a'..=b'z' => b'a',
        b'A'..=b'Z' => b'A',
        _ => return byte,
    };
    base + (byte - base + shift) % 26
}

impl Mutator for Caesar {
    fn drive_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        Ok(Self::apply(data, self.shift, buf)?)
    }

    fn revert_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        Ok(Self::apply(data, (26 - self.shift) % 26, buf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_tests() {
        crate::tests::roundtrip_test(Caesar::new(13));
        crate::tests::roundtrip_test(Caesar::new(-7));
    }

    #[test]
    fn shifts_letters_only() {
        let mut out = vec![];
        Caesar::new(3).drive_mutation(b"Hello, World! xyz 123", &mut out).unwrap();
        assert_eq!(out, b"Khoor, Zruog! abc 123");
    }

    #[test]
    fn shift_is_normalized() {
        assert_eq!(Caesar::new(29), Caesar::new(3));
        assert_eq!(Caesar::new(-1), Caesar::new(25));
        assert_eq!(Caesar::new(-52), Caesar::new(0));
    }

    #[test]
    fn decrypt_is_negated_shift() {
        let mut out = vec![];
        Caesar::new(5).revert_mutation(b"Mjqqt", &mut out).unwrap();
        assert_eq!(out, b"Hello");
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = Caesar::new(1).drive_mutation(b"", &mut vec![]).unwrap_err();
        assert_eq!(err.downcast_ref::<CipherError>(), Some(&CipherError::EmptyInput));
    }
}

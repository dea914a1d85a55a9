//! Keyed byte ciphers. Unlike the codecs in the registry these carry a key, so they are built per
//! invocation instead of living in a `const`.

use clap::ValueEnum;
use thiserror::Error;

use crate::mutator::Mutator;

pub mod caesar;
pub mod xor;

pub use caesar::Caesar;
pub use xor::XorCipher;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("input is empty")]
    EmptyInput,

    #[error("encryption key is empty")]
    EmptyKey,

    #[error("caesar shift must be an integer, got {0:?}")]
    InvalidShift(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CipherKind {
    /// Repeating-key XOR over every byte
    #[default]
    Xor,
    /// Rotates ASCII letters by a fixed shift
    Caesar,
}

/// Builds the cipher selected on the command line from its textual key.
pub fn build_cipher(kind: CipherKind, key: &str) -> Result<Box<dyn Mutator>, CipherError> {
    match kind {
        CipherKind::Xor => Ok(Box::new(XorCipher::new(key.as_bytes())?)),
        CipherKind::Caesar => {
            let shift = key.trim().parse::<i64>().map_err(|_| CipherError::InvalidShift(key.to_string()))?;
            Ok(Box::new(Caesar::new(shift)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_textual_keys() {
        let mut xor = build_cipher(CipherKind::Xor, "secret").unwrap();
        let mut out = vec![];
        xor.drive_mutation(b"hello", &mut out).unwrap();
        assert_eq!(out.len(), 5);

        let mut caesar = build_cipher(CipherKind::Caesar, " -3 ").unwrap();
        caesar.drive_mutation(b"abc", &mut out).unwrap();
        assert_eq!(out, b"xyz");
    }

    #[test]
    fn rejects_bad_keys() {
        assert_eq!(build_cipher(CipherKind::Xor, "").err(), Some(CipherError::EmptyKey));
        assert_eq!(
            build_cipher(CipherKind::Caesar, "three").err(),
            Some(CipherError::InvalidShift("three".to_string()))
        );
    }
}

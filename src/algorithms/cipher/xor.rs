use super::CipherError;
use crate::mutator::{Mutator, Result};

/// Repeating-key XOR. Applying it twice with the same key is the identity.
#[derive(Clone, Debug)]
pub struct XorCipher {
    key: Vec<u8>,
}

impl XorCipher {
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        Ok(Self { key: key.to_vec() })
    }

    fn apply(&self, data: &[u8], buf: &mut Vec<u8>) -> Result<(), CipherError> {
        if data.is_empty() {
            return Err(CipherError::EmptyInput);
        }
        buf.clear();
        buf.extend(data.iter().zip(self.key.iter().cycle()).map(|(&byte, &k)| byte ^ k));
        Ok(())
    }
}

impl Mutator for XorCipher {
    fn drive_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        if_tracing! {
            tracing::debug!(target = "xor", input_len = data.len(), key_len = self.key.len(), "xor encrypt");
        }
        Ok(self.apply(data, buf)?)
    }

    fn revert_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        if_tracing! {
            tracing::debug!(target = "xor", input_len = data.len(), key_len = self.key.len(), "xor decrypt");
        }
        Ok(self.apply(data, buf)?)
    }
}

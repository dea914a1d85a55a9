use anyhow::Result;

use crate::{
    algorithms::{DynMutator, huffman, rle},
    mutator::Mutator,
};

#[derive(Debug, Clone, Copy)]
pub struct RegisteredCompressor {
    pub mutator: DynMutator,
    pub name: &'static str,
    pub short_description: Option<&'static str>,
}

impl RegisteredCompressor {
    pub const fn new(mutator: DynMutator, name: &'static str, short_description: Option<&'static str>) -> Self {
        RegisteredCompressor {
            mutator,
            name,
            short_description,
        }
    }
}

/// Codecs that can be named in a pipeline.
#[rustfmt::skip]
pub static ALL_COMPRESSORS: &[RegisteredCompressor] = &[
    huffman::Huffman,
    rle::Rle,
];

/// Looks a codec up by its registered name.
pub fn find_compressor(name: &str) -> Option<RegisteredCompressor> {
    ALL_COMPRESSORS.iter().find(|comp| comp.name == name).copied()
}

impl Mutator for RegisteredCompressor {
    fn drive_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        if_tracing! {
            let span = tracing::span!(tracing::Level::DEBUG, "registered compressor", name = self.name);
            let _span = span.enter();
        }
        self.mutator.drive_mutation(data, buf)
    }

    fn revert_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        if_tracing! {
            let span = tracing::span!(tracing::Level::DEBUG, "registered decompressor", name = self.name);
            let _span = span.enter();
        }
        self.mutator.revert_mutation(data, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_resolvable() {
        for comp in ALL_COMPRESSORS {
            assert_eq!(find_compressor(comp.name).map(|c| c.name), Some(comp.name));
            assert_eq!(ALL_COMPRESSORS.iter().filter(|other| other.name == comp.name).count(), 1);
            assert!(comp.short_description.is_some());
        }
        assert!(find_compressor("lzma").is_none());
    }
}

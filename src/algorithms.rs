use crate::mutator::{Mutator, Result};

use voxell_timer::time_fn;

if_tracing! {
    use tracing::info;
}

pub mod cipher;
pub mod huffman;
pub mod pipeline;
pub mod rle;

/// A parameterless codec expressed as a pair of plain functions, so it can live in a `const`.
#[derive(Clone, Copy, Debug)]
pub struct DynMutator {
    pub drive_mutation: fn(data: &[u8], buf: &mut Vec<u8>) -> Result<()>,
    pub revert_mutation: fn(data: &[u8], buf: &mut Vec<u8>) -> Result<()>,
}

impl Mutator for DynMutator {
    fn drive_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        if_tracing! {
            let span = tracing::span!(tracing::Level::INFO, "mutator", kind = "dyn", func = "drive");
            let _enter = span.enter();
        }
        let (res, d) = time_fn(|| (self.drive_mutation)(data, buf));
        if_tracing! {
            info!(elapsed_us = %d.as_micros(), out_len = buf.len(), "dyn drive finished");
        }
        res
    }

    fn revert_mutation(&mut self, data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
        if_tracing! {
            let span = tracing::span!(tracing::Level::INFO, "mutator", kind = "dyn", func = "revert");
            let _enter = span.enter();
        }
        let (res, d) = time_fn(|| (self.revert_mutation)(data, buf));
        if_tracing! {
            info!(elapsed_us = %d.as_micros(), out_len = buf.len(), "dyn revert finished");
        }
        res
    }
}

use core::fmt::{self, Debug};

use anyhow::anyhow;

use crate::{
    algorithms::DynMutator,
    mutator::{DecompressionError, Result},
    registered::RegisteredCompressor,
};

pub const Rle: RegisteredCompressor = RegisteredCompressor::new(
    DynMutator {
        drive_mutation: rle_encode,
        revert_mutation: rle_decode,
    },
    "rle",
    Some(DESCRIPTION),
);
const DESCRIPTION: &str = "Run-length encoding, one (count, byte) pair per run";

/// Longest run a single record can describe.
const MAX_RUN: usize = 256;

#[derive(Clone, Copy, PartialEq, Eq)]
struct Run {
    /// this is `actual_repetitions - 1` so that we squeeze 1 more repetition since a 0 repetition is considered invalid.
    repetitions_minus_one: u8,
    byte: u8,
}

impl Run {
    const fn len(self) -> usize {
        self.repetitions_minus_one as usize + 1
    }
}

impl Debug for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Run")
            .field("repetitions", &self.len())
            .field("byte", &format_args!("{:#04x}", self.byte))
            .finish()
    }
}

/// Splits `data` into maximal runs of equal bytes, breaking runs longer than [`MAX_RUN`].
fn runs(data: &[u8]) -> impl Iterator<Item = Run> + '_ {
    data.chunk_by(|a, b| a == b).flat_map(|group| {
        group.chunks(MAX_RUN).map(|run| Run {
            repetitions_minus_one: (run.len() - 1) as u8,
            byte: run[0],
        })
    })
}

pub fn rle_encode(data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
    if_tracing! {
        tracing::debug!(target = "rle", input_len = data.len(), "rle encode start");
    }
    buf.clear();

    for run in runs(data) {
        buf.push(run.repetitions_minus_one);
        buf.push(run.byte);
    }

    if_tracing! {
        tracing::info!(target = "rle", input_len = data.len(), output_len = buf.len(), "rle encode complete");
    }
    Ok(())
}

pub fn rle_decode(data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
    if_tracing! {
        tracing::debug!(target = "rle", input_len = data.len(), "rle decode start");
    }
    buf.clear();

    if data.len() % 2 != 0 {
        if_tracing! {
            tracing::warn!(target = "rle", input_len = data.len(), "rle decode error: dangling count byte");
        }
        return Err(anyhow!(DecompressionError::InvalidInput(format!(
            "rle stream has odd length {}, last record is incomplete",
            data.len()
        ))));
    }

    let size_guess = data.chunks_exact(2).map(|pair| pair[0] as usize + 1).sum();
    buf.reserve(size_guess);

    for pair in data.chunks_exact(2) {
        let run = Run {
            repetitions_minus_one: pair[0],
            byte: pair[1],
        };
        buf.extend(core::iter::repeat_n(run.byte, run.len()));
    }

    if_tracing! {
        tracing::info!(target = "rle", input_len = data.len(), output_len = buf.len(), "rle decode complete");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_tests() {
        crate::tests::roundtrip_test(Rle);
    }

    #[test]
    fn encodes_runs() {
        let mut buf = vec![];
        rle_encode(b"aaab", &mut buf).unwrap();
        assert_eq!(buf, vec![2, b'a', 0, b'b']);
    }

    #[test]
    fn long_runs_are_split() {
        let data = vec![9u8; 600];
        let mut buf = vec![];
        rle_encode(&data, &mut buf).unwrap();
        assert_eq!(buf, vec![255, 9, 255, 9, 87, 9]);

        let mut back = vec![];
        rle_decode(&buf, &mut back).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn digits_survive() {
        let data = b"a2b33c999";
        let mut buf = vec![];
        rle_encode(data, &mut buf).unwrap();
        let mut back = vec![];
        rle_decode(&buf, &mut back).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn empty_is_empty_both_ways() {
        let mut buf = vec![1, 2];
        rle_encode(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
        rle_decode(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn odd_length_is_invalid() {
        let mut buf = vec![];
        let err = rle_decode(&[3, b'x', 1], &mut buf).unwrap_err();
        assert!(matches!(err.downcast_ref::<DecompressionError>(), Some(DecompressionError::InvalidInput(_))));
    }
}

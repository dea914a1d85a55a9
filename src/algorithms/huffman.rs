#![allow(unused)]
//! Static Huffman coding over the byte alphabet.
//!
//! A blob is a fixed header (see [`header`]) followed by the packed code bits of every input byte. The
//! decoder rebuilds the exact same tree from the stored frequencies, so no tree shape is ever written.
//!
//! Tree construction breaks weight ties by insertion order: leaves enter the queue in ascending byte
//! order and merged nodes are numbered after them. Any two encoders following that rule emit identical
//! blobs for identical input.
//!
//! Nothing here holds global state, so encoding and decoding are safe from any number of threads as
//! long as each call has its own buffers.

use anyhow::Result;

use crate::{algorithms::DynMutator, registered::RegisteredCompressor};

mod bitstream;
mod codes;
mod decoder;
mod encoder;
mod error;
mod frequency;
mod header;
mod heap;
mod tree;

pub use codes::{Code, CodeTable};
pub use decoder::{decode, decode_into};
pub use encoder::{encode, encode_into};
pub use error::HuffmanError;
pub use frequency::{ALPHABET_SIZE, FrequencyTable};
pub use header::HEADER_LEN;
pub use tree::HuffmanTree;

pub const Huffman: RegisteredCompressor = RegisteredCompressor::new(
    DynMutator {
        drive_mutation: huffman_encode,
        revert_mutation: huffman_decode,
    },
    "huffman",
    Some(DESCRIPTION),
);
const DESCRIPTION: &str = "Static Huffman coding with a 256-entry frequency header";

fn huffman_encode(data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
    if_tracing! {{
        tracing::debug!(target = "huffman", input_len = data.len(), "huffman encode start");
    }}

    let result = encode_into(data, buf);

    if_tracing! {{
        match result {
            Ok(()) => tracing::info!(target = "huffman", input_len = data.len(), output_len = buf.len(), "huffman encode complete"),
            Err(ref err) => tracing::error!(target = "huffman", error = %err, "huffman encode failed"),
        }
    }}

    Ok(result?)
}

fn huffman_decode(data: &[u8], buf: &mut Vec<u8>) -> Result<()> {
    if_tracing! {{
        tracing::debug!(target = "huffman", input_len = data.len(), "huffman decode start");
    }}

    let result = decode_into(data, buf);

    if_tracing! {{
        match result {
            Ok(()) => tracing::info!(target = "huffman", input_len = data.len(), output_len = buf.len(), "huffman decode complete"),
            Err(ref err) => tracing::error!(target = "huffman", error = %err, "huffman decode failed"),
        }
    }}

    Ok(result?)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn roundtrip_tests() {
        crate::tests::roundtrip_test(Huffman);
    }

    #[test]
    fn aaaabbbcc_roundtrip() {
        let blob = encode(b"aaaabbbcc").unwrap();
        assert_eq!(blob.len(), HEADER_LEN + 2);
        assert_eq!(decode(&blob).unwrap(), b"aaaabbbcc");
    }

    #[test]
    fn single_symbol_roundtrip() {
        for len in [1, 7, 8, 9, 4096] {
            let data = vec![b'!'; len];
            assert_eq!(decode(&encode(&data).unwrap()).unwrap(), data, "length {}", len);
        }
    }

    #[test]
    fn empty_input_is_an_error_through_the_mutator() {
        let mut buf = vec![];
        let err = huffman_encode(&[], &mut buf).unwrap_err();
        assert_eq!(err.downcast_ref::<HuffmanError>(), Some(&HuffmanError::EmptyInput));
    }

    #[test]
    fn concurrent_calls_do_not_interfere() {
        let handles = (0..8u8)
            .map(|seed| {
                std::thread::spawn(move || {
                    let data = (0..2000u32).map(|i| (i * u32::from(seed + 1) % 251) as u8).collect::<Vec<_>>();
                    let blob = encode(&data).unwrap();
                    assert_eq!(decode(&blob).unwrap(), data);
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }
    }

    fn code_table(data: &[u8]) -> (FrequencyTable, CodeTable) {
        let frequencies = FrequencyTable::from_bytes(data).unwrap();
        let codes = CodeTable::from_tree(&HuffmanTree::build(&frequencies).unwrap()).unwrap();
        (frequencies, codes)
    }

    proptest! {
        #[test]
        fn prop_roundtrip(data in prop::collection::vec(any::<u8>(), 1..2048)) {
            let blob = encode(&data).unwrap();
            prop_assert_eq!(decode(&blob).unwrap(), data);
        }

        #[test]
        fn prop_skewed_roundtrip(data in prop::collection::vec(prop_oneof![8 => Just(b'e'), 2 => any::<u8>()], 1..2048)) {
            let blob = encode(&data).unwrap();
            prop_assert_eq!(decode(&blob).unwrap(), data);
        }

        #[test]
        fn prop_codes_are_prefix_free(data in prop::collection::vec(any::<u8>(), 1..512)) {
            let (_, codes) = code_table(&data);
            let entries = codes.iter().collect::<Vec<_>>();
            for (a, code_a) in &entries {
                prop_assert!(!code_a.is_empty());
                for (b, code_b) in &entries {
                    if a != b {
                        prop_assert!(!code_a.is_prefix_of(code_b));
                    }
                }
            }
        }

        #[test]
        fn prop_rarer_bytes_get_longer_codes(data in prop::collection::vec(0u8..16, 1..512)) {
            let (frequencies, codes) = code_table(&data);
            for (a, code_a) in codes.iter() {
                for (b, code_b) in codes.iter() {
                    if frequencies.get(a) < frequencies.get(b) {
                        prop_assert!(code_a.len() >= code_b.len());
                    }
                }
            }
        }

        #[test]
        fn prop_truncated_blob_never_decodes_short(data in prop::collection::vec(any::<u8>(), 2..512), cut in 1usize..64) {
            let blob = encode(&data).unwrap();
            let keep = blob.len().saturating_sub(cut).max(HEADER_LEN);
            match decode(&blob[..keep]) {
                Ok(decoded) => prop_assert_eq!(decoded, data),
                Err(err) => {
                    let is_length_mismatch = matches!(err, HuffmanError::LengthMismatch { .. });
                    prop_assert!(is_length_mismatch);
                }
            }
        }
    }
}

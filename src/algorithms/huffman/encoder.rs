use super::{
    CodeTable, FrequencyTable, HuffmanError, HuffmanTree,
    bitstream::BitWriter,
    header::{HEADER_LEN, Header},
};

/// Compresses `input` into a fresh buffer.
pub fn encode(input: &[u8]) -> Result<Vec<u8>, HuffmanError> {
    let mut out = Vec::new();
    encode_into(input, &mut out)?;
    Ok(out)
}

/// Compresses `input` into `out`, replacing whatever it held.
///
/// On error `out` is left empty.
///
/// # Errors
///
/// [`HuffmanError::EmptyInput`] for empty input, [`HuffmanError::AllocationFailure`] if the output cannot
/// be reserved, [`HuffmanError::CodeLookupMiss`] if the code table is missing a byte.
pub fn encode_into(input: &[u8], out: &mut Vec<u8>) -> Result<(), HuffmanError> {
    out.clear();
    let result = write_blob(input, out);
    if result.is_err() {
        out.clear();
    }
    result
}

fn write_blob(input: &[u8], out: &mut Vec<u8>) -> Result<(), HuffmanError> {
    if input.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }

    let frequencies = FrequencyTable::from_bytes(input)?;
    let tree = HuffmanTree::build(&frequencies)?;
    let codes = CodeTable::from_tree(&tree)?;

    if_tracing! {
        tracing::debug!(target = "huffman", distinct = frequencies.distinct(), codes = ?codes, "code table generated");
    }

    let payload_bits = codes.encoded_bits(&frequencies);
    let payload_len = usize::try_from(payload_bits.div_ceil(8)).unwrap_or(usize::MAX);
    out.try_reserve_exact(HEADER_LEN.saturating_add(payload_len))?;

    Header {
        frequencies,
        original_len: input.len() as u64,
    }
    .write_to(out);

    let mut writer = BitWriter::new(out);
    for &byte in input {
        // every counted byte has a leaf, so this only fires if the tables disagree
        let code = codes.get(byte).ok_or(HuffmanError::CodeLookupMiss(byte))?;
        writer.push_code(code);
    }
    writer.finish();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aaaabbbcc_layout() {
        let blob = encode(b"aaaabbbcc").unwrap();
        assert_eq!(blob.len(), HEADER_LEN + 2);

        let (header, payload) = Header::parse(&blob).unwrap();
        assert_eq!(header.original_len, 9);
        assert_eq!(header.frequencies.get(b'a'), 4);
        assert_eq!(header.frequencies.get(b'b'), 3);
        assert_eq!(header.frequencies.get(b'c'), 2);
        assert_eq!(header.frequencies.distinct(), 3);
        // a=0 c=10 b=11: 0000 111111 1010 + 2 bits of padding
        assert_eq!(payload, &[0x0F, 0xE8]);
    }

    #[test]
    fn empty_input_is_rejected_and_output_cleared() {
        let mut out = vec![1, 2, 3];
        assert_eq!(encode_into(&[], &mut out), Err(HuffmanError::EmptyInput));
        assert!(out.is_empty());
    }

    #[test]
    fn single_symbol_spends_one_bit_per_byte() {
        let blob = encode(&[7u8; 20]).unwrap();
        assert_eq!(blob.len(), HEADER_LEN + 3);
        // 20 zero bits, padded with zeroes
        assert!(blob[HEADER_LEN..].iter().all(|&b| b == 0));
    }

    #[test]
    fn encoding_is_deterministic() {
        let data = b"the quick brown fox jumps over the lazy dog";
        assert_eq!(encode(data).unwrap(), encode(data).unwrap());
    }
}

use super::{
    HuffmanError, HuffmanTree,
    bitstream::BitReader,
    header::Header,
    tree::Node,
};

/// Decompresses `blob` into a fresh buffer.
pub fn decode(blob: &[u8]) -> Result<Vec<u8>, HuffmanError> {
    let mut out = Vec::new();
    decode_into(blob, &mut out)?;
    Ok(out)
}

/// Decompresses `blob` into `out`, replacing whatever it held.
///
/// The tree is rebuilt from the stored frequencies with the same tie-break the encoder used, then the
/// bitstream is walked until exactly the stored original length has been produced. Padding bits after
/// that point are ignored, as is anything after the last byte needed.
///
/// On error `out` is left empty.
pub fn decode_into(blob: &[u8], out: &mut Vec<u8>) -> Result<(), HuffmanError> {
    out.clear();
    let result = read_blob(blob, out);
    if result.is_err() {
        out.clear();
    }
    result
}

fn read_blob(blob: &[u8], out: &mut Vec<u8>) -> Result<(), HuffmanError> {
    let (header, payload) = Header::parse(blob)?;
    let expected = header.original_len;

    if header.frequencies.is_empty() {
        return if expected == 0 {
            Ok(())
        } else {
            Err(HuffmanError::InconsistentHeader { original_len: expected })
        };
    }

    let tree = HuffmanTree::build(&header.frequencies)?;
    let root = tree.root().ok_or(HuffmanError::TreeBuildFailure)?;
    let single_leaf = tree.is_single_leaf();

    // every symbol costs at least one bit, so the payload bounds the output size
    let mut bits = BitReader::new(payload);
    reserve_output(out, expected.min(bits.remaining()))?;

    let mut current = root;
    while (out.len() as u64) < expected {
        let Some(bit) = bits.next() else {
            if_tracing! {
                tracing::warn!(target = "huffman", decoded = out.len(), expected, "bitstream exhausted early");
            }
            return Err(HuffmanError::LengthMismatch {
                decoded: out.len(),
                expected,
            });
        };

        let next = match tree.child(current, bit) {
            Some(next) => next,
            // a lone leaf is coded as a single 0 bit
            None if single_leaf && !bit => current,
            None => {
                return Err(HuffmanError::InvalidPath {
                    bit_position: bits.position() - 1,
                });
            }
        };

        if let Node::Leaf { symbol, .. } = *tree.node(next) {
            out.push(symbol);
            current = root;
        } else {
            current = next;
        }
    }

    Ok(())
}

fn reserve_output(out: &mut Vec<u8>, len: u64) -> Result<(), HuffmanError> {
    out.try_reserve_exact(usize::try_from(len).unwrap_or(usize::MAX))?;
    Ok(())
}

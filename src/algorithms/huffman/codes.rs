use core::fmt;

use super::{ALPHABET_SIZE, FrequencyTable, HuffmanError, HuffmanTree, tree::Node};

/// A single codeword, most significant (first emitted) bit first.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({})", self)
    }
}

/// Direct byte -> codeword map. Bytes that never occurred have no entry.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; ALPHABET_SIZE],
}

impl CodeTable {
    /// Walks the tree depth-first, appending `0` for every left edge and `1` for every right edge.
    ///
    /// A tree whose root is a leaf gets the one-bit code `0` so the symbol still occupies space in the
    /// bitstream.
    ///
    /// # Errors
    ///
    /// [`HuffmanError::TreeBuildFailure`] if the tree has no root.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self, HuffmanError> {
        let root = tree.root().ok_or(HuffmanError::TreeBuildFailure)?;
        let mut codes: [Option<Code>; ALPHABET_SIZE] = core::array::from_fn(|_| None);

        if let Node::Leaf { symbol, .. } = *tree.node(root) {
            codes[symbol as usize] = Some(Code { bits: vec![false] });
            return Ok(Self { codes });
        }

        let mut stack = vec![(root, Vec::new())];
        while let Some((id, path)) = stack.pop() {
            match *tree.node(id) {
                Node::Leaf { symbol, .. } => codes[symbol as usize] = Some(Code { bits: path }),
                Node::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((right, right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((left, left_path));
                }
            }
        }

        Ok(Self { codes })
    }

    pub fn get(&self, byte: u8) -> Option<&Code> {
        self.codes[byte as usize].as_ref()
    }

    /// Iterates over `(byte, code)` in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(byte, code)| code.as_ref().map(|code| (byte as u8, code)))
    }

    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }

    /// Total number of bits needed to encode data with these frequencies.
    ///
    /// Bytes that are counted but have no code contribute nothing; the encoder reports them separately.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .symbols()
            .filter_map(|(byte, count)| self.get(byte).map(|code| u64::from(count) * code.len() as u64))
            .sum()
    }
}

impl fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|(byte, code)| (byte, code.to_string()))).finish()
    }
}

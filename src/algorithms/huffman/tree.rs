use core::cmp::Ordering;

use super::{FrequencyTable, HuffmanError, heap::MinHeap};

/// Index of a node inside the [`HuffmanTree`] arena that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: u8, weight: u64 },
    Internal { left: NodeId, right: NodeId, weight: u64 },
}

impl Node {
    pub const fn weight(&self) -> u64 {
        match *self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => weight,
        }
    }

    pub const fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// A queued subtree waiting to be merged.
///
/// Ordered by weight, then by the order it entered the queue. Leaves are queued in ascending byte order
/// and every merged node gets the next sequence number, so the resulting shape depends only on the
/// frequencies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Candidate {
    weight: u64,
    sequence: usize,
    node: NodeId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight).then(self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Huffman tree stored as an arena of nodes.
///
/// Every internal node has exactly two children and every leaf stands for a byte that occurred at
/// least once. A default tree is empty and has no root.
#[derive(Clone, Debug, Default)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lightest subtrees until one remains.
    ///
    /// With a single distinct byte the lone leaf becomes the root and nothing is merged.
    ///
    /// # Errors
    ///
    /// [`HuffmanError::EmptyInput`] if no byte has a non-zero count, [`HuffmanError::AllocationFailure`]
    /// if the arena or the queue cannot be allocated.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self, HuffmanError> {
        let distinct = frequencies.distinct();
        if distinct == 0 {
            return Err(HuffmanError::EmptyInput);
        }

        // a full binary tree with `distinct` leaves has `distinct - 1` internal nodes
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(2 * distinct - 1)?;
        let mut queue = MinHeap::with_capacity(distinct)?;
        let mut sequence = 0;

        for (symbol, count) in frequencies.symbols() {
            let weight = u64::from(count);
            let node = push_node(&mut nodes, Node::Leaf { symbol, weight });
            queue.insert(Candidate { weight, sequence, node })?;
            sequence += 1;
        }

        while queue.len() > 1 {
            let left = queue.extract_min()?;
            let right = queue.extract_min()?;
            let weight = left.weight + right.weight;
            let node = push_node(
                &mut nodes,
                Node::Internal {
                    left: left.node,
                    right: right.node,
                    weight,
                },
            );
            queue.insert(Candidate { weight, sequence, node })?;
            sequence += 1;
        }

        let root = queue.extract_min()?.node;

        if_tracing! {
            tracing::trace!(target = "huffman", leaves = distinct, nodes = nodes.len(), "huffman tree built");
        }

        Ok(Self { nodes, root: Some(root) })
    }

    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Looks up a node. `id` must come from this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The child reached from `id` by following `bit` (`false` = left, `true` = right).
    /// Leaves have no children.
    pub fn child(&self, id: NodeId, bit: bool) -> Option<NodeId> {
        match *self.node(id) {
            Node::Internal { left, right, .. } => Some(if bit { right } else { left }),
            Node::Leaf { .. } => None,
        }
    }

    /// True when the root itself is a leaf, i.e. the data had one distinct byte.
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_some_and(|root| self.node(root).is_leaf())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

fn push_node(nodes: &mut Vec<Node>, node: Node) -> NodeId {
    let id = NodeId(nodes.len());
    nodes.push(node);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_for(data: &[u8]) -> HuffmanTree {
        HuffmanTree::build(&FrequencyTable::from_bytes(data).unwrap()).unwrap()
    }

    #[test]
    fn no_symbols_is_empty_input() {
        let table = FrequencyTable::from_bytes(&[]).unwrap();
        assert_eq!(HuffmanTree::build(&table).unwrap_err(), HuffmanError::EmptyInput);
    }

    #[test]
    fn single_symbol_root_is_the_leaf() {
        let tree = tree_for(b"zzzzzz");
        let root = tree.root().unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.is_single_leaf());
        assert_eq!(*tree.node(root), Node::Leaf { symbol: b'z', weight: 6 });
        assert_eq!(tree.child(root, false), None);
    }

    #[test]
    fn root_weight_is_total_and_tree_is_full() {
        let tree = tree_for(b"a baba da babble da dabble");
        let root = tree.root().unwrap();
        assert_eq!(tree.node(root).weight(), 26);

        let leaves = (0..tree.len()).filter(|&i| tree.node(NodeId(i)).is_leaf()).count();
        assert_eq!(tree.len(), 2 * leaves - 1);
        for i in 0..tree.len() {
            if let Node::Internal { left, right, weight } = *tree.node(NodeId(i)) {
                assert_eq!(weight, tree.node(left).weight() + tree.node(right).weight());
            }
        }
    }

    #[test]
    fn ties_resolve_by_insertion_order() {
        // a:4 b:3 c:2 -> c and b merge first (c is lighter), then a joins on the left
        let tree = tree_for(b"aaaabbbcc");
        let root = tree.root().unwrap();
        let left = tree.child(root, false).unwrap();
        let right = tree.child(root, true).unwrap();
        assert_eq!(*tree.node(left), Node::Leaf { symbol: b'a', weight: 4 });
        assert_eq!(tree.node(right).weight(), 5);
        assert_eq!(*tree.node(tree.child(right, false).unwrap()), Node::Leaf { symbol: b'c', weight: 2 });
        assert_eq!(*tree.node(tree.child(right, true).unwrap()), Node::Leaf { symbol: b'b', weight: 3 });

        // all equal weights: lower bytes were queued first and end up merged first
        let tree = tree_for(b"abcd");
        let root = tree.root().unwrap();
        let left = tree.child(root, false).unwrap();
        assert_eq!(*tree.node(tree.child(left, false).unwrap()), Node::Leaf { symbol: b'a', weight: 1 });
        assert_eq!(*tree.node(tree.child(left, true).unwrap()), Node::Leaf { symbol: b'b', weight: 1 });
    }

    #[test]
    fn same_frequencies_same_tree() {
        let first = tree_for(b"mississippi river");
        let second = tree_for(b"river mississippi");
        assert_eq!(first.nodes, second.nodes);
        assert_eq!(first.root, second.root);
    }
}

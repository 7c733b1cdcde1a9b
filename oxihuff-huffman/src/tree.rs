//! Huffman tree construction and tree-walking decode.
//!
//! Nodes live in an arena owned by [`HuffmanTree`] and refer to each other by
//! [`NodeId`]. Parent links are plain indices and play no part in ownership:
//! dropping the tree frees every node at once.
//!
//! # Determinism
//!
//! The greedy merge always extracts the two lightest nodes. Equal weights are
//! ordered by insertion sequence: leaves are inserted in ascending symbol
//! order, and every merged node takes the next sequence number. Because the
//! arena index of a node is exactly its insertion sequence, the priority key is
//! simply `(weight, index)`, and the same frequency table always produces the
//! same tree.

use crate::frequency::FrequencyTable;
use oxihuff_core::bitstream::BitBuffer;
use oxihuff_core::error::{OxiHuffError, Result};
use oxihuff_core::traits::SymbolDecoder;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Write as _;
use tracing::{debug, trace};

/// Index of a node within a [`HuffmanTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena index of this node.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Shape of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A symbol.
    Leaf {
        /// The symbol stored at this leaf.
        symbol: u8,
    },
    /// A merge of two subtrees; `left` is bit 0, `right` is bit 1.
    Internal {
        /// Child reached by a 0 bit.
        left: NodeId,
        /// Child reached by a 1 bit.
        right: NodeId,
    },
}

/// A node in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Aggregate frequency of every leaf below this node.
    pub weight: u64,
    /// Leaf or internal.
    pub kind: NodeKind,
    /// The merging node, `None` for the root.
    pub parent: Option<NodeId>,
}

impl Node {
    /// Check whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

/// A Huffman tree built from a [`FrequencyTable`].
///
/// An empty table produces a tree with no root. A table with one distinct
/// symbol produces a tree whose root is that leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    leaf_count: usize,
}

impl HuffmanTree {
    /// Build a tree by greedy merging of the lightest nodes.
    ///
    /// Runs in O(n log n) for n distinct symbols, independent of input length.
    pub fn build(frequencies: &FrequencyTable) -> Self {
        let leaf_count = frequencies.len();
        let mut nodes = Vec::with_capacity((2 * leaf_count).saturating_sub(1));
        let mut heap = BinaryHeap::with_capacity(leaf_count);

        for (symbol, count) in frequencies.iter() {
            let id = NodeId(nodes.len());
            nodes.push(Node {
                weight: count as u64,
                kind: NodeKind::Leaf { symbol },
                parent: None,
            });
            heap.push(Reverse((count as u64, id)));
        }

        while heap.len() > 1 {
            let (Some(Reverse((left_weight, left))), Some(Reverse((right_weight, right)))) =
                (heap.pop(), heap.pop())
            else {
                break;
            };

            let id = NodeId(nodes.len());
            let weight = left_weight + right_weight;
            nodes[left.0].parent = Some(id);
            nodes[right.0].parent = Some(id);
            nodes.push(Node {
                weight,
                kind: NodeKind::Internal { left, right },
                parent: None,
            });
            trace!(
                left = left.0,
                right = right.0,
                merged = id.0,
                weight,
                "merged nodes"
            );
            heap.push(Reverse((weight, id)));
        }

        let root = heap.pop().map(|Reverse((_, id))| id);
        debug!(leaves = leaf_count, nodes = nodes.len(), "built Huffman tree");

        Self {
            nodes,
            root,
            leaf_count,
        }
    }

    /// Root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of nodes, `2 * leaves - 1` for a non-empty tree.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Check whether the tree is a single leaf.
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_some_and(|id| self.node(id).is_leaf())
    }

    /// Find the leaf holding `symbol`.
    pub fn leaf(&self, symbol: u8) -> Option<NodeId> {
        // Leaves occupy the first `leaf_count` slots
        self.nodes[..self.leaf_count]
            .iter()
            .position(|n| n.kind == NodeKind::Leaf { symbol })
            .map(NodeId)
    }

    /// Path from the root to `id`, following parent links upward.
    ///
    /// Left steps are 0 bits and right steps are 1 bits. The root's path is
    /// empty.
    pub fn path_to(&self, id: NodeId) -> BitBuffer {
        let mut steps = Vec::new();
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            if let NodeKind::Internal { right, .. } = self.node(parent).kind {
                steps.push(right == current);
            }
            current = parent;
        }
        steps.into_iter().rev().collect()
    }

    /// Depth of the deepest leaf; 0 for empty and single-leaf trees.
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        let mut max_depth = 0;
        let mut stack = vec![(root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            match self.node(id).kind {
                NodeKind::Leaf { .. } => max_depth = max_depth.max(depth),
                NodeKind::Internal { left, right } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
            }
        }
        max_depth
    }

    /// Recover the frequency table from the leaf weights.
    pub fn frequencies(&self) -> FrequencyTable {
        let mut pairs = Vec::with_capacity(self.leaf_count);
        for node in &self.nodes[..self.leaf_count] {
            if let NodeKind::Leaf { symbol } = node.kind {
                // Leaf weights were built from u32 counts
                pairs.push((symbol, node.weight as u32));
            }
        }
        FrequencyTable::from_counts(pairs).unwrap_or_default()
    }

    /// Render the tree as indented text, one node per line, pre-order.
    ///
    /// ```text
    /// root-> Internal [weight: 4]
    ///   L-> Leaf: 'p' (112) [weight: 2]
    ///   R-> Internal [weight: 2]
    ///     L-> Leaf: 'a' (97) [weight: 1]
    ///     R-> Leaf: 'm' (109) [weight: 1]
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        let Some(root) = self.root else {
            out.push_str("(empty tree)\n");
            return out;
        };

        let mut stack = vec![(root, 0usize, "root")];
        while let Some((id, depth, label)) = stack.pop() {
            let indent = "  ".repeat(depth);
            let node = self.node(id);
            match node.kind {
                NodeKind::Leaf { symbol } => {
                    let _ = writeln!(
                        out,
                        "{}{}-> Leaf: {} ({}) [weight: {}]",
                        indent,
                        label,
                        printable(symbol),
                        symbol,
                        node.weight
                    );
                }
                NodeKind::Internal { left, right } => {
                    let _ = writeln!(
                        out,
                        "{}{}-> Internal [weight: {}]",
                        indent, label, node.weight
                    );
                    stack.push((right, depth + 1, "R"));
                    stack.push((left, depth + 1, "L"));
                }
            }
        }
        out
    }
}

/// Quote a symbol for display, escaping non-printable bytes.
pub(crate) fn printable(symbol: u8) -> String {
    format!("'{}'", std::ascii::escape_default(symbol))
}

impl SymbolDecoder for HuffmanTree {
    /// Walk the tree one bit per step, emitting a symbol at each leaf.
    ///
    /// For a single-leaf tree every bit is one occurrence of the symbol,
    /// whatever its value.
    fn decode(&self, bits: &BitBuffer) -> Result<Vec<u8>> {
        let Some(root) = self.root else {
            if bits.is_empty() {
                return Ok(Vec::new());
            }
            return Err(OxiHuffError::EmptyAlphabet);
        };

        if let NodeKind::Leaf { symbol } = self.node(root).kind {
            return Ok(vec![symbol; bits.len() as usize]);
        }

        let mut output = Vec::with_capacity(bits.len() as usize / 2);
        let mut cursor = bits.cursor();

        while !cursor.is_exhausted() {
            let mut current = root;
            loop {
                match self.node(current).kind {
                    NodeKind::Leaf { symbol } => {
                        output.push(symbol);
                        break;
                    }
                    NodeKind::Internal { left, right } => {
                        let bit = cursor
                            .read_bit()
                            .ok_or_else(|| OxiHuffError::truncated(cursor.position()))?;
                        current = if bit { right } else { left };
                    }
                }
            }
        }

        trace!(symbols = output.len(), bits = bits.len(), "decoded bitstream");
        Ok(output)
    }
}

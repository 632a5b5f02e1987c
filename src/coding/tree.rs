//! Huffman tree construction.
//!
//! The builder starts with one leaf per (symbol, weight) pair and greedily
//! merges the two lightest nodes into a parent whose weight is their sum,
//! until a single root remains. Every interior node owns its two children
//! outright, so the finished tree is a plain acyclic ownership hierarchy
//! with no back-references.

use std::cmp::Ordering;

use log::trace;
use rustc_hash::FxHashMap;

use super::errors::CodingError;

/// A node is either a leaf holding exactly one symbol, or an interior node
/// owning exactly two children and no symbol of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(char),
}

/// One node of the Huffman tree.
///
/// `weight` of an interior node is always the sum of its children's weights;
/// it is set at construction and never mutated. `tie_sym` is the smallest
/// symbol found anywhere under the node, used only to break ties between
/// equal weights so the merge order is fully deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub weight: u32,
    pub tie_sym: char,
    pub node_data: NodeData,
}

impl Node {
    /// Create a leaf node for one symbol.
    pub fn leaf(symbol: char, weight: u32) -> Node {
        Node {
            weight,
            tie_sym: symbol,
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Combine two nodes under a new parent. The parent's weight is the sum
    /// of the children's weights.
    pub fn parent(left: Node, right: Node) -> Node {
        Node {
            weight: left.weight + right.weight,
            tie_sym: left.tie_sym.min(right.tie_sym),
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    /// True if this node holds a symbol and no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }
}

impl Ord for Node {
    /// Sort nodes by decreasing weight, ties by decreasing symbol key, so
    /// that after `sort_unstable()` the two lightest nodes sit at the tail
    /// where `pop()` can take them.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then(other.tie_sym.cmp(&self.tie_sym))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build a Huffman tree from a symbol -> weight map and return its root.
///
/// Repeatedly extracts the two minimum-weight nodes, merges them (first
/// extracted becomes the left, "0", child), and reinserts the parent until
/// one node remains. Ties on weight are broken by the smallest symbol under
/// each node, so a given weight map always yields the same tree.
///
/// A map with a single symbol yields a tree that is one parentless leaf;
/// the code table layer gives that symbol a well-defined code.
pub fn build_tree(weights: &FxHashMap<char, u32>) -> Result<Node, CodingError> {
    if weights.is_empty() {
        return Err(CodingError::EmptyAlphabet);
    }

    let mut nodes: Vec<Node> = weights
        .iter()
        .map(|(&symbol, &weight)| Node::leaf(symbol, weight))
        .collect();
    trace!("building Huffman tree over {} symbols", nodes.len());

    while nodes.len() > 1 {
        // Keep sorted so the two lightest nodes are at the tail.
        nodes.sort_unstable();
        let first = nodes.pop().unwrap();
        let second = nodes.pop().unwrap();
        nodes.push(Node::parent(first, second));
    }

    Ok(nodes.pop().unwrap())
}

#[cfg(test)]
mod test {
    use super::*;

    fn weights_of(pairs: &[(char, u32)]) -> FxHashMap<char, u32> {
        pairs.iter().copied().collect()
    }

    /// Walk the tree checking that every interior node's weight is the sum
    /// of its children's weights.
    fn check_weight_sums(node: &Node) -> u32 {
        match &node.node_data {
            NodeData::Leaf(_) => node.weight,
            NodeData::Kids(left, right) => {
                let sum = check_weight_sums(left) + check_weight_sums(right);
                assert_eq!(node.weight, sum);
                sum
            }
        }
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        let weights = FxHashMap::default();
        assert!(matches!(
            build_tree(&weights),
            Err(CodingError::EmptyAlphabet)
        ));
    }

    #[test]
    fn single_symbol_yields_lone_leaf() {
        let root = build_tree(&weights_of(&[('A', 5)])).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.weight, 5);
    }

    #[test]
    fn root_weight_is_total_weight() {
        let weights = weights_of(&[('H', 1), ('E', 1), ('L', 3), ('O', 2), (' ', 1), ('W', 1), ('R', 1), ('D', 1)]);
        let root = build_tree(&weights).unwrap();
        assert_eq!(root.weight, 11);
        check_weight_sums(&root);
    }

    #[test]
    fn equal_weights_build_deterministically() {
        let weights = weights_of(&[('a', 2), ('b', 2), ('c', 2), ('d', 2)]);
        let one = build_tree(&weights).unwrap();
        let two = build_tree(&weights).unwrap();
        assert_eq!(one, two);
    }
}

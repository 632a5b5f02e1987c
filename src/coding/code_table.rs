//! Code-table generation.
//!
//! Walks a finished Huffman tree depth-first and records the root-to-leaf
//! path of every symbol: '0' for each descent into a left child, '1' for
//! each descent into a right child. Because every code is a path to a leaf
//! of one binary tree, no code can be a prefix of another, which is what
//! makes the decode scan unambiguous.

use rustc_hash::FxHashMap;

use super::tree::{Node, NodeData};

/// Bidirectional symbol <-> code mapping derived from one tree.
/// Built once per initialization and never mutated afterward.
#[derive(Debug, Default)]
pub struct CodeTable {
    to_code: FxHashMap<char, String>,
    to_symbol: FxHashMap<String, char>,
}

impl CodeTable {
    /// Record a root-to-leaf path for every symbol in the tree.
    ///
    /// A root that is itself a leaf (single-symbol alphabet) would get the
    /// empty path, which decode could never match; that symbol is assigned
    /// the code "0" instead.
    pub fn from_tree(root: &Node) -> Self {
        let mut table = CodeTable::default();
        match &root.node_data {
            NodeData::Leaf(symbol) => table.insert(*symbol, "0".to_string()),
            NodeData::Kids(..) => table.walk(root, String::new()),
        }
        table
    }

    fn walk(&mut self, node: &Node, path: String) {
        match &node.node_data {
            NodeData::Leaf(symbol) => self.insert(*symbol, path),
            NodeData::Kids(left, right) => {
                // Each descent gets its own copy of the path, so there is
                // no truncation bookkeeping on the way back up.
                self.walk(left, path.clone() + "0");
                self.walk(right, path + "1");
            }
        }
    }

    fn insert(&mut self, symbol: char, code: String) {
        self.to_code.insert(symbol, code.clone());
        self.to_symbol.insert(code, symbol);
    }

    /// The code string for a symbol, if the symbol was in the alphabet.
    pub fn code(&self, symbol: char) -> Option<&str> {
        self.to_code.get(&symbol).map(String::as_str)
    }

    /// The symbol for an exact code string, if any.
    pub fn symbol(&self, code: &str) -> Option<char> {
        self.to_symbol.get(code).copied()
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.to_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_code.is_empty()
    }

    /// All (symbol, code) entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.to_code.iter().map(|(&s, c)| (s, c.as_str()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coding::tree::build_tree;
    use rustc_hash::FxHashMap;

    fn table_for(pairs: &[(char, u32)]) -> CodeTable {
        let weights: FxHashMap<char, u32> = pairs.iter().copied().collect();
        CodeTable::from_tree(&build_tree(&weights).unwrap())
    }

    #[test]
    fn lone_leaf_gets_nonempty_code() {
        let table = table_for(&[('A', 5)]);
        assert_eq!(table.code('A'), Some("0"));
        assert_eq!(table.symbol("0"), Some('A'));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn every_symbol_gets_a_code() {
        let table = table_for(&[('a', 4), ('b', 2), ('c', 1), ('d', 1)]);
        assert_eq!(table.len(), 4);
        for sym in ['a', 'b', 'c', 'd'] {
            let code = table.code(sym).unwrap();
            assert!(!code.is_empty());
            assert!(code.chars().all(|b| b == '0' || b == '1'));
            assert_eq!(table.symbol(code), Some(sym));
        }
    }

    #[test]
    fn no_code_is_a_prefix_of_another() {
        let table = table_for(&[('H', 1), ('E', 1), ('L', 3), ('O', 2), (' ', 1), ('W', 1), ('R', 1), ('D', 1)]);
        let codes: Vec<&str> = table.entries().map(|(_, c)| c).collect();
        for a in &codes {
            for b in &codes {
                if a != b {
                    assert!(!b.starts_with(a), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn heavier_symbols_get_shorter_codes() {
        let table = table_for(&[('x', 100), ('y', 1), ('z', 1)]);
        assert!(table.code('x').unwrap().len() < table.code('y').unwrap().len());
    }
}

//! Display-side helpers: tree rendering for human inspection and the
//! compression-ratio statistic. Neither participates in encoding or
//! decoding; both are fed by the codec's outputs.

use std::fmt::Write;

use crate::coding::tree::{Node, NodeData};

/// Render a tree one line per node, in code order: the left subtree under
/// the current prefix plus "0", then the node itself, then the right
/// subtree under the prefix plus "1". Leaves show their symbol, interior
/// nodes a `*`, so the left column reads as the code of each leaf.
pub fn render_tree(root: &Node) -> String {
    let mut out = String::new();
    render(root, String::new(), &mut out);
    out
}

fn render(node: &Node, prefix: String, out: &mut String) {
    match &node.node_data {
        NodeData::Leaf(symbol) => {
            let _ = writeln!(out, "{}: {:?} (weight {})", prefix, symbol, node.weight);
        }
        NodeData::Kids(left, right) => {
            render(left, prefix.clone() + "0", out);
            let _ = writeln!(out, "{}: * (weight {})", prefix, node.weight);
            render(right, prefix + "1", out);
        }
    }
}

/// Ratio of encoded size to the original at a fixed 8 bits per symbol.
/// Below 1.0 means the encoding is smaller. The ratio is undefined for an
/// empty original; 0.0 is returned in that case.
pub fn compression_ratio(original_symbols: usize, encoded_bits: usize) -> f64 {
    if original_symbols == 0 {
        return 0.0;
    }
    encoded_bits as f64 / (original_symbols * 8) as f64
}

//! The coding module holds the algorithmic heart of the codec.
//!
//! Initialization runs in two stages: tree construction (greedy
//! minimum-weight merging of leaves into a single rooted binary tree)
//! followed by code-table generation (recording every root-to-leaf path).
//! Once the table exists, encode and decode are stateless lookups against
//! it; the tree is kept only so diagnostics can render it.
//!
//! The stages are:
//! - tree: the weighted node type and the greedy tree builder.
//! - code_table: bidirectional symbol <-> code-string mapping from a tree.
//! - codec: the public encode/decode surface, built all-or-nothing.
//! - errors: every failure mode of initialization, encode and decode.
//!
pub mod code_table;
pub mod codec;
pub mod errors;
pub mod tree;

pub use code_table::CodeTable;
pub use codec::HuffmanCodec;
pub use errors::CodingError;
pub use tree::{build_tree, Node, NodeData};

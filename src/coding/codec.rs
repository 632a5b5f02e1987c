//! The public encode/decode surface.
//!
//! A codec is assembled all-or-nothing: the tree is built first, the code
//! table is derived from it, and only then is the codec handed back to the
//! caller. Any failure along the way returns an error and installs
//! nothing, so encode and decode never see a half-built table.

use std::path::Path;

use log::debug;
use rustc_hash::FxHashMap;

use super::code_table::CodeTable;
use super::errors::CodingError;
use super::tree::{build_tree, Node};
use crate::tools::{freq_count, weight_file};

/// A ready-to-use Huffman codec: the root of the tree it was built from
/// plus the code table derived from that tree. The tree is retained only
/// so diagnostics can render it; encode and decode consult the table alone.
#[derive(Debug)]
pub struct HuffmanCodec {
    root: Node,
    table: CodeTable,
}

impl HuffmanCodec {
    /// Build a codec from an explicit symbol -> weight map.
    pub fn from_weights(weights: &FxHashMap<char, u32>) -> Result<Self, CodingError> {
        let root = build_tree(weights)?;
        let table = CodeTable::from_tree(&root);
        debug!(
            "code table holds {} symbols, total weight {}",
            table.len(),
            root.weight
        );
        Ok(Self { root, table })
    }

    /// Build a codec from the symbol frequencies of a sample text.
    pub fn from_text(text: &str) -> Result<Self, CodingError> {
        Self::from_weights(&freq_count::freqs(text))
    }

    /// Build a codec from an external "symbol:relativeWeight" table file.
    pub fn from_weight_file(path: impl AsRef<Path>) -> Result<Self, CodingError> {
        let weights = weight_file::read_weight_table(path)?;
        Self::from_weights(&weights)
    }

    /// Root of the tree this codec was built from, for diagnostics.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The code table this codec encodes and decodes with.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Encode text as the concatenation of each symbol's code, in input
    /// order. The first symbol missing from the table fails the whole
    /// operation; no partial output is returned.
    pub fn encode(&self, text: &str) -> Result<String, CodingError> {
        let mut encoded = String::new();
        for symbol in text.chars() {
            match self.table.code(symbol) {
                Some(code) => encoded.push_str(code),
                None => return Err(CodingError::UnknownSymbol(symbol)),
            }
        }
        Ok(encoded)
    }

    /// Decode a code string back into text.
    ///
    /// Scans left to right, accumulating bits into a candidate buffer and
    /// emitting a symbol whenever the buffer exactly matches a code. The
    /// table is prefix-free, so the first exact match is the only possible
    /// parse of those bits. Leftover bits at end of input mean the string
    /// was not a concatenation of codes from this table.
    pub fn decode(&self, bits: &str) -> Result<String, CodingError> {
        let mut decoded = String::new();
        let mut candidate = String::new();
        for bit in bits.chars() {
            candidate.push(bit);
            if let Some(symbol) = self.table.symbol(&candidate) {
                decoded.push(symbol);
                candidate.clear();
            }
        }
        if !candidate.is_empty() {
            return Err(CodingError::InvalidEncoding {
                remainder: candidate,
            });
        }
        Ok(decoded)
    }
}

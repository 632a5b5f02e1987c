use std::io;

use thiserror::Error;

/// Everything that can go wrong while initializing a codec, encoding text,
/// or decoding a code string. All of these are terminal for the operation
/// in progress; none are retried, and a failed initialization installs no
/// partial state.
#[derive(Debug, Error)]
pub enum CodingError {
    /// The supplied frequency set had no symbols to build a tree from.
    #[error("cannot build a Huffman tree from an empty alphabet")]
    EmptyAlphabet,

    /// A weight-table line was not exactly two colon-separated fields.
    #[error("malformed weight line {line_no}: {line:?}")]
    BadWeightLine { line_no: usize, line: String },

    /// A weight field did not parse as a non-negative decimal number.
    #[error("bad weight value {value:?} on line {line_no}")]
    BadWeightValue { line_no: usize, value: String },

    /// Encode hit a symbol the table was never trained on.
    #[error("symbol {0:?} is not in the Huffman tree")]
    UnknownSymbol(char),

    /// Decode input ended with leftover bits matching no code in the table.
    #[error("invalid Huffman code: trailing bits {remainder:?} match no code")]
    InvalidEncoding { remainder: String },

    /// Failure reading an external weight table.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<CodingError> for io::Error {
    fn from(e: CodingError) -> Self {
        match e {
            CodingError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

//! A Rust implementation of the classic Huffman text codec.
//!
//! Builds a prefix-free variable-length code for a finite alphabet of
//! characters, derived either from symbol frequencies counted in a sample
//! text or from an external "symbol:weight" table, and uses that code to
//! reversibly transform text into a compact code string and back.
//!
//! The encoded output is a readable string of '0' and '1' characters rather
//! than a packed bitstream, which keeps the codes inspectable end to end.
//! Everything runs single-threaded; the tree and code table are built once
//! per initialization and are read-only afterward.
//!
//! Basic usage:
//!
//! `$> huffcode "HELLO WORLD"`
//!
//! This counts symbol frequencies in the input, builds the tree, then
//! encodes and decodes the text, reporting the compression ratio.
//!
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]
pub mod coding;
pub mod tools;

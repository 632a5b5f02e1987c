//! The tools module provides the peripheral collaborators around the codec.
//!
//! These feed symbol weights into initialization and display its results;
//! none of them participate in the encoding contract itself.
//!
//! The tools are:
//! - cli: command line interface for the huffcode binary.
//! - freq_count: symbol frequency count of a sample text.
//! - weight_file: parser for external "symbol:relativeWeight" tables.
//! - report: tree rendering and the compression-ratio statistic.
//!
pub mod cli;
pub mod freq_count;
pub mod report;
pub mod weight_file;

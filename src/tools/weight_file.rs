//! Parser for external weight tables.
//!
//! A table is a plain-text file with one "symbol:relativeWeight" entry per
//! line, e.g. `E:0.127`. The relative weight is a decimal fraction; it is
//! scaled by a fixed multiplier and rounded to the nearest integer to get
//! the integer weight the tree builder works with. The token `Space`
//! stands in for the space character, which cannot carry its own line.
//!
//! Any malformed line aborts the whole read; no partial table is returned.

use std::fs;
use std::path::Path;

use log::info;
use rustc_hash::FxHashMap;

use crate::coding::errors::CodingError;

/// Relative weights are decimal fractions; scale them up so the tree
/// builder can work with integer weights.
pub const WEIGHT_SCALE: f64 = 1000.0;

/// Stand-in token for the space character in weight tables.
const SPACE_TOKEN: &str = "Space";

/// Parse one `symbol:relativeWeight` line into a (symbol, weight) pair.
/// `line_no` is 1-based and used only for error reporting.
pub fn parse_weight_line(line: &str, line_no: usize) -> Result<(char, u32), CodingError> {
    let bad_line = || CodingError::BadWeightLine {
        line_no,
        line: line.to_string(),
    };

    let mut fields = line.split(':');
    let (sym_field, weight_field) = match (fields.next(), fields.next(), fields.next()) {
        (Some(s), Some(w), None) => (s, w),
        _ => return Err(bad_line()),
    };

    let symbol = if sym_field == SPACE_TOKEN {
        ' '
    } else {
        sym_field.chars().next().ok_or_else(bad_line)?
    };

    let relative: f64 = weight_field
        .trim()
        .parse()
        .map_err(|_| CodingError::BadWeightValue {
            line_no,
            value: weight_field.to_string(),
        })?;
    // Rejecting NaN as well, which fails every comparison.
    if !(relative >= 0.0) {
        return Err(CodingError::BadWeightValue {
            line_no,
            value: weight_field.to_string(),
        });
    }

    Ok((symbol, (relative * WEIGHT_SCALE).round() as u32))
}

/// Read a whole weight table from a file. Blank lines are skipped; any
/// malformed line fails the read with no partial result.
pub fn read_weight_table(path: impl AsRef<Path>) -> Result<FxHashMap<char, u32>, CodingError> {
    let contents = fs::read_to_string(path.as_ref())?;
    let mut weights = FxHashMap::default();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (symbol, weight) = parse_weight_line(line, idx + 1)?;
        weights.insert(symbol, weight);
    }
    info!(
        "read {} symbol weights from {}",
        weights.len(),
        path.as_ref().display()
    );
    Ok(weights)
}

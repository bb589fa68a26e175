//! Tab-separated benchmark export parser
//!
//! Each non-empty line is one record of exactly seven non-empty cells:
//!
//! ```text
//! <input>\t<char length>\t<byte length>\t<replacement effect>\t<algorithm>\t<unused>\t<duration ns>
//! ```
//!
//! Length cells degrade to zero when they are not integers; a bad duration
//! aborts the import.

use tracing::debug;

use super::error::ImportError;
use super::record::BenchmarkRecord;

/// Cells per export line
pub const CELLS_PER_LINE: usize = 7;

const INPUT_CELL: usize = 0;
const CHARACTERS_CELL: usize = 1;
const BYTES_CELL: usize = 2;
const EFFECT_CELL: usize = 3;
const ALGORITHM_CELL: usize = 4;
const DURATION_CELL: usize = 6;

/// Characters accepted as digit grouping separators.
const GROUPING_SEPARATORS: [char; 6] = [',', '_', '\'', ' ', '\u{00A0}', '\u{202F}'];

/// Parse a whole export into records.
pub fn parse(text: &str) -> Result<Vec<BenchmarkRecord>, ImportError> {
    text.split(is_newline)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(id, line)| parse_line(id, line))
        .collect()
}

/// Parse one non-empty line. `id` is its zero-based position among non-empty lines.
pub fn parse_line(id: usize, line: &str) -> Result<BenchmarkRecord, ImportError> {
    // Empty cells are dropped, so a trailing tab does not add a cell
    let cells: Vec<&str> = line.split('\t').filter(|c| !c.is_empty()).collect();

    if cells.len() != CELLS_PER_LINE {
        return Err(ImportError::Format {
            line: id + 1,
            cells: cells.len(),
        });
    }

    let duration =
        parse_lenient_integer(cells[DURATION_CELL]).ok_or_else(|| ImportError::InvalidDuration {
            line: id + 1,
            value: cells[DURATION_CELL].to_string(),
        })?;

    Ok(BenchmarkRecord {
        id,
        input: cells[INPUT_CELL].to_string(),
        input_length_in_characters: parse_length(id, cells[CHARACTERS_CELL]),
        input_length_in_bytes: parse_length(id, cells[BYTES_CELL]),
        replacement_effect: cells[EFFECT_CELL].to_string(),
        algorithm: cells[ALGORITHM_CELL].to_string(),
        duration,
    })
}

fn parse_length(id: usize, cell: &str) -> u64 {
    parse_lenient_integer(cell).unwrap_or_else(|| {
        debug!(line = id + 1, cell, "length cell is not an integer, using 0");
        0
    })
}

/// Parse a non-negative integer, tolerating surrounding whitespace, a leading
/// `+` and digit grouping separators such as `1,000,000`.
pub fn parse_lenient_integer(cell: &str) -> Option<u64> {
    let trimmed = cell.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let digits: String = unsigned
        .chars()
        .filter(|c| !GROUPING_SEPARATORS.contains(c))
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}

fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

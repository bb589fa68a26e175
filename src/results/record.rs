//! One measured data point from a benchmark export

use serde::{Deserialize, Serialize};

/// A single benchmark measurement.
///
/// Records are immutable once parsed. `id` is the position of the source line
/// among the non-empty lines of the export and carries no other meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub id: usize,
    /// Label of the test input, e.g. "Many matches (ASCII)"
    pub input: String,
    pub input_length_in_characters: u64,
    pub input_length_in_bytes: u64,
    /// Transformation category, e.g. "Length unchanged"
    pub replacement_effect: String,
    /// Implementation variant that was measured
    pub algorithm: String,
    /// Nanoseconds per operation
    pub duration: u64,
}

impl BenchmarkRecord {
    /// Duration per input byte, using integer division.
    ///
    /// `None` for zero-length inputs.
    pub fn duration_per_byte(&self) -> Option<u64> {
        self.duration.checked_div(self.input_length_in_bytes)
    }

    /// The six meaningful cells in export order. The unused sixth column of
    /// the export is not kept, so it is not reproduced here.
    pub fn to_cells(&self) -> [String; 6] {
        [
            self.input.clone(),
            self.input_length_in_characters.to_string(),
            self.input_length_in_bytes.to_string(),
            self.replacement_effect.clone(),
            self.algorithm.clone(),
            self.duration.to_string(),
        ]
    }

    /// Re-serialise as an export line, writing `0` into the unused column.
    pub fn to_tsv_line(&self) -> String {
        let [input, chars, bytes, effect, algorithm, duration] = self.to_cells();
        [input, chars, bytes, effect, algorithm, "0".to_string(), duration].join("\t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(duration: u64, bytes: u64) -> BenchmarkRecord {
        BenchmarkRecord {
            id: 0,
            input: "Few matches".into(),
            input_length_in_characters: bytes,
            input_length_in_bytes: bytes,
            replacement_effect: "Length unchanged".into(),
            algorithm: "AlgoA".into(),
            duration,
        }
    }

    #[test]
    fn test_duration_per_byte() {
        assert_eq!(record(10, 2).duration_per_byte(), Some(5));
        assert_eq!(record(10, 3).duration_per_byte(), Some(3));
        assert_eq!(record(10, 0).duration_per_byte(), None);
    }

    #[test]
    fn test_to_tsv_line() {
        assert_eq!(
            record(500, 12).to_tsv_line(),
            "Few matches\t12\t12\tLength unchanged\tAlgoA\t0\t500"
        );
    }
}

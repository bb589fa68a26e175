//! Display order of input labels

use std::cmp::Ordering;

use crate::core::labels::INPUT_PREFIX_ORDER;

/// Position of the first matching prefix; unmatched labels rank after all of them.
pub fn input_rank(input: &str) -> usize {
    INPUT_PREFIX_ORDER
        .iter()
        .position(|prefix| input.starts_with(prefix))
        .unwrap_or(INPUT_PREFIX_ORDER.len())
}

/// Order by prefix rank, then by the full label.
pub fn compare_inputs(a: &str, b: &str) -> Ordering {
    input_rank(a)
        .cmp(&input_rank(b))
        .then_with(|| a.cmp(b))
}

pub fn sort_inputs<S: AsRef<str>>(inputs: &mut [S]) {
    inputs.sort_by(|a, b| compare_inputs(a.as_ref(), b.as_ref()));
}

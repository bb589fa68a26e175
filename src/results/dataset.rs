//! An imported record set and the label lists derived from it

use serde::Serialize;
use std::collections::BTreeSet;

use super::record::BenchmarkRecord;
use crate::aggregate::ordering::sort_inputs;
use crate::core::labels::{InputSelection, EMPTY_STRING_INPUT};

/// Records from one import. Never mutated after construction; a new import
/// replaces the whole dataset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dataset {
    records: Vec<BenchmarkRecord>,
}

impl Dataset {
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&BenchmarkRecord> {
        self.records.first()
    }

    /// Distinct input labels, lexicographically sorted
    pub fn inputs(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.input.as_str()))
    }

    /// Distinct input labels in display order (prefix table, then label)
    pub fn inputs_in_display_order(&self) -> Vec<String> {
        let mut inputs = self.inputs();
        sort_inputs(&mut inputs);
        inputs
    }

    /// Distinct algorithm labels, lexicographically sorted
    pub fn algorithms(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.algorithm.as_str()))
    }

    /// Replacement effects offered for an input selection, lexicographically
    /// sorted. The comparison view offers every effect of a non-empty input.
    pub fn replacement_effects_for(&self, selection: &InputSelection) -> Vec<String> {
        let effects = self
            .records
            .iter()
            .filter(|r| match selection {
                InputSelection::Comparison => r.input != EMPTY_STRING_INPUT,
                InputSelection::Input(input) => r.input == *input,
            })
            .map(|r| r.replacement_effect.as_str());
        distinct(effects)
    }
}

fn distinct<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    labels
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::parser::parse;

    fn dataset() -> Dataset {
        Dataset::new(
            parse(
                "Many matches\t1\t1\tLength unchanged\tZeta\t0\t5\n\
                 Few matches\t1\t1\tLength increased\tAlpha\t0\t5\n\
                 Few matches\t1\t1\tLength unchanged\tAlpha\t0\t5\n\
                 Empty string\t0\t0\tOnly on empty\tAlpha\t0\t5\n",
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_distinct_labels() {
        let data = dataset();
        assert_eq!(data.len(), 4);
        assert_eq!(data.inputs(), vec!["Empty string", "Few matches", "Many matches"]);
        assert_eq!(data.algorithms(), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_replacement_effects_for_input() {
        let data = dataset();
        assert_eq!(
            data.replacement_effects_for(&InputSelection::Input("Few matches".into())),
            vec!["Length increased", "Length unchanged"]
        );
        assert!(data
            .replacement_effects_for(&InputSelection::Input("Missing".into()))
            .is_empty());
    }

    #[test]
    fn test_replacement_effects_for_comparison_skip_empty_input() {
        let data = dataset();
        assert_eq!(
            data.replacement_effects_for(&InputSelection::Comparison),
            vec!["Length increased", "Length unchanged"]
        );
    }
}

//! Well-known labels shared by the parser, engine and CLI
//!
//! Input labels come straight from the benchmark export, so a handful of them
//! carry meaning: the zero-length input gets its own bar chart, and inputs
//! suffixed with the ASCII marker form a separate subset in the comparison view.

use serde::{Deserialize, Serialize};

/// Input label of the zero-length input.
pub const EMPTY_STRING_INPUT: &str = "Empty string";

/// Picker label of the cross-input comparison view.
pub const COMPARISON_ACROSS_INPUTS: &str = "Comparison across inputs";

/// Suffix marking inputs restricted to ASCII characters.
pub const ASCII_MARKER: &str = "(ASCII)";

/// Input label prefixes in display order. Inputs matching none sort last.
pub const INPUT_PREFIX_ORDER: [&str; 5] = ["Empty ", "No ", "Few ", "Many ", "Only "];

/// Whether an input label belongs to the ASCII subset.
pub fn is_ascii_input(input: &str) -> bool {
    input.ends_with(ASCII_MARKER)
}

/// What the input picker currently points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSelection {
    /// Cross-input comparison
    Comparison,
    /// A concrete input label
    Input(String),
}

impl InputSelection {
    /// Map a picker label to a selection, recognising the comparison sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == COMPARISON_ACROSS_INPUTS {
            Self::Comparison
        } else {
            Self::Input(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Comparison => COMPARISON_ACROSS_INPUTS,
            Self::Input(input) => input,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        match self {
            Self::Comparison => ViewMode::Comparison,
            Self::Input(input) if input == EMPTY_STRING_INPUT => ViewMode::EmptyInput,
            Self::Input(_) => ViewMode::SingleInput,
        }
    }
}

/// The three mutually exclusive chart layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    /// Bar per algorithm for the zero-length input
    EmptyInput,
    /// Per-byte averages across all inputs
    Comparison,
    /// Runtime against input length for one input
    SingleInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_from_label() {
        assert_eq!(
            InputSelection::from_label(EMPTY_STRING_INPUT).view_mode(),
            ViewMode::EmptyInput
        );
        assert_eq!(
            InputSelection::from_label(COMPARISON_ACROSS_INPUTS).view_mode(),
            ViewMode::Comparison
        );
        assert_eq!(
            InputSelection::from_label("Few matches").view_mode(),
            ViewMode::SingleInput
        );
    }

    #[test]
    fn test_label_round_trip() {
        let selection = InputSelection::from_label(COMPARISON_ACROSS_INPUTS);
        assert_eq!(selection.label(), COMPARISON_ACROSS_INPUTS);
        assert_eq!(InputSelection::Input("No matches".into()).label(), "No matches");
    }

    #[test]
    fn test_ascii_marker() {
        assert!(is_ascii_input("Many matches (ASCII)"));
        assert!(!is_ascii_input("Many matches"));
        assert!(!is_ascii_input("(ASCII) prefix only"));
    }
}

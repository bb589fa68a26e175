//! Interactive chart selection
//!
//! Owned by whatever drives the UI. The engine only ever reads it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::aggregate::axis::XWindow;
use crate::core::labels::{InputSelection, ViewMode};
use crate::results::Dataset;

/// A UI toggle whose value may be pinned by the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub value: bool,
    pub enabled: bool,
}

/// Everything the user has picked for the current chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected_input: Option<InputSelection>,
    selected_replacement_effect: Option<String>,
    algorithm_enabled: BTreeMap<String, bool>,
    x_domain_min: usize,
    x_domain_max: usize,
    normalise_by_input_byte_length: bool,
    show_ascii_inputs_in_comparison_chart: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_input: None,
            selected_replacement_effect: None,
            algorithm_enabled: BTreeMap::new(),
            x_domain_min: 0,
            x_domain_max: usize::MAX,
            normalise_by_input_byte_length: false,
            show_ascii_inputs_in_comparison_chart: false,
        }
    }
}

impl SelectionState {
    /// Start-up selection: the first record's input and replacement effect,
    /// every algorithm enabled, the whole x-domain, no normalisation.
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            selected_input: dataset
                .first()
                .map(|r| InputSelection::Input(r.input.clone())),
            selected_replacement_effect: dataset.first().map(|r| r.replacement_effect.clone()),
            ..Default::default()
        }
    }

    pub fn selected_input(&self) -> Option<&InputSelection> {
        self.selected_input.as_ref()
    }

    pub fn selected_replacement_effect(&self) -> Option<&str> {
        self.selected_replacement_effect.as_deref()
    }

    /// Current layout, `None` while nothing is selected
    pub fn view_mode(&self) -> Option<ViewMode> {
        self.selected_input.as_ref().map(InputSelection::view_mode)
    }

    /// Pick an input (or the comparison view). If the selected replacement
    /// effect does not apply to the new input it is reset to the first one
    /// that does, or cleared if none does.
    pub fn select_input(&mut self, dataset: &Dataset, input: Option<InputSelection>) {
        if input == self.selected_input {
            return;
        }

        let old_input = std::mem::replace(&mut self.selected_input, input);

        let applicable = match &self.selected_input {
            Some(selection) => dataset.replacement_effects_for(selection),
            None => Vec::new(),
        };

        let still_valid = self
            .selected_replacement_effect
            .as_ref()
            .is_some_and(|effect| applicable.contains(effect));

        if !still_valid {
            let new_effect = applicable.into_iter().next();
            info!(
                old_input = ?old_input.as_ref().map(InputSelection::label),
                new_input = ?self.selected_input.as_ref().map(InputSelection::label),
                old_effect = ?self.selected_replacement_effect,
                new_effect = ?new_effect,
                "selected replacement effect no longer applies, resetting it"
            );
            self.selected_replacement_effect = new_effect;
        }
    }

    pub fn select_replacement_effect(&mut self, effect: Option<String>) {
        self.selected_replacement_effect = effect;
    }

    /// Algorithms are enabled unless explicitly switched off
    pub fn is_algorithm_enabled(&self, algorithm: &str) -> bool {
        self.algorithm_enabled.get(algorithm).copied().unwrap_or(true)
    }

    pub fn set_algorithm_enabled(&mut self, algorithm: &str, enabled: bool) {
        self.algorithm_enabled.insert(algorithm.to_string(), enabled);
    }

    pub fn x_domain_min(&self) -> usize {
        self.x_domain_min
    }

    pub fn x_domain_max(&self) -> usize {
        self.x_domain_max
    }

    /// Move the lower slider, dragging the upper one along if needed
    pub fn set_x_domain_min(&mut self, min: usize) {
        self.x_domain_min = min;
        if self.x_domain_max < min {
            self.x_domain_max = min;
        }
    }

    /// Move the upper slider, dragging the lower one along if needed
    pub fn set_x_domain_max(&mut self, max: usize) {
        self.x_domain_max = max;
        if self.x_domain_min > max {
            self.x_domain_min = max;
        }
    }

    pub fn x_window(&self) -> XWindow {
        XWindow::new(self.x_domain_min, self.x_domain_max)
    }

    /// The normalisation toggle as the current view presents it. The
    /// comparison view is always per byte; the empty input never is.
    pub fn normalisation(&self) -> Toggle {
        match self.view_mode() {
            Some(ViewMode::Comparison) => Toggle {
                value: true,
                enabled: false,
            },
            Some(ViewMode::EmptyInput) => Toggle {
                value: false,
                enabled: false,
            },
            _ => Toggle {
                value: self.normalise_by_input_byte_length,
                enabled: true,
            },
        }
    }

    pub fn normalise_by_input_byte_length(&self) -> bool {
        self.normalisation().value
    }

    /// Returns false, leaving the state alone, when the view pins the toggle
    pub fn set_normalise_by_input_byte_length(&mut self, normalise: bool) -> bool {
        if !self.normalisation().enabled {
            return false;
        }
        self.normalise_by_input_byte_length = normalise;
        true
    }

    pub fn show_ascii_inputs_in_comparison_chart(&self) -> bool {
        self.show_ascii_inputs_in_comparison_chart
    }

    pub fn set_show_ascii_inputs_in_comparison_chart(&mut self, show: bool) {
        self.show_ascii_inputs_in_comparison_chart = show;
    }
}

//! Chart presentation
//!
//! Pairs a computed [`ChartView`] with titles and per-algorithm styles, ready
//! to hand to a renderer as JSON or to print in the terminal.

pub mod format;
pub mod render;
pub mod style;

pub use render::render_text;
pub use style::{SeriesStyle, StyleTable, Symbol};

use serde::Serialize;
use std::collections::BTreeMap;

use crate::aggregate::ChartView;
use crate::selection::SelectionState;

/// Everything a renderer needs for one redraw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub view: ChartView,
    /// Styles of the algorithms drawn in `view`
    pub styles: BTreeMap<String, SeriesStyle>,
    pub generated_at_ms: i64,
}

impl ChartFrame {
    pub fn new(view: ChartView, selection: &SelectionState, styles: &StyleTable) -> Self {
        let styles = view
            .algorithms()
            .into_iter()
            .map(|algorithm| (algorithm.to_string(), styles.get(algorithm)))
            .collect();

        Self {
            title: selection.selected_input().map(|input| input.label().to_string()),
            subtitle: selection.selected_replacement_effect().map(str::to_string),
            view,
            styles,
            generated_at_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

//! Benchmark Charts
//!
//! Imports tab-separated benchmark exports and turns them into chart-ready
//! views for comparing string-replacement algorithms.
//!
//! ## Features
//!
//! - **Result Parser**: lenient TSV import that rejects malformed rows
//! - **Three Chart Layouts**: empty-input bars, cross-input comparison, and
//!   per-input runtime-vs-length lines
//! - **Selection State**: input, replacement effect, algorithm toggles,
//!   x-domain window, normalisation and the ASCII-subset toggle
//! - **Styling**: stable palette colours, keyphrase-based symbols and dashes
//! - **Session**: atomic re-import behind an async lock

pub mod aggregate;
pub mod chart;
pub mod core;
pub mod results;
pub mod selection;
pub mod session;

// Re-exports
pub use aggregate::{applicable_replacement_effects, compute_view, ChartView};
pub use chart::{render_text, ChartFrame, StyleTable};
pub use core::config::{ChartConfig, ConfigError};
pub use core::labels::{InputSelection, ViewMode};
pub use results::{parse, BenchmarkRecord, Dataset, ImportError};
pub use selection::{SelectionState, Toggle};
pub use session::ChartSession;

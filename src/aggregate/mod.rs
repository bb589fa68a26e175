//! Aggregation & selection engine
//!
//! Filters, groups and sorts records for the current selection and derives
//! axis domains and ranges for one of three chart layouts.

pub mod axis;
pub mod engine;
pub mod ordering;
pub mod view;

pub use axis::{AxisRange, XDomain, XWindow};
pub use engine::{applicable_replacement_effects, compute_view};
pub use view::{
    AggregatedPoint, Bar, BarChart, ChartView, ComparisonChart, ComparisonSeries, LineChart,
    LinePoint, LineSeries,
};

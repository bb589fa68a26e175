//! Chart-ready output of the engine
//!
//! These structures are serialisable so an external renderer can consume them
//! as JSON.

use serde::Serialize;
use std::hash::{Hash, Hasher};

use super::axis::{AxisRange, XDomain};

/// One computed chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ChartView {
    /// Nothing selected
    Blank,
    EmptyInput(BarChart),
    Comparison(ComparisonChart),
    SingleInput(LineChart),
}

impl ChartView {
    /// Algorithms that have something drawn, in drawing order
    pub fn algorithms(&self) -> Vec<&str> {
        let mut algorithms: Vec<&str> = match self {
            Self::Blank => Vec::new(),
            Self::EmptyInput(chart) => chart.bars.iter().map(|b| b.algorithm.as_str()).collect(),
            Self::Comparison(chart) => chart.points.iter().map(|p| p.algorithm.as_str()).collect(),
            Self::SingleInput(chart) => chart.series.iter().map(|s| s.algorithm.as_str()).collect(),
        };
        algorithms.dedup();
        algorithms
    }
}

/// Runtime of one algorithm on the zero-length input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub algorithm: String,
    pub duration: u64,
}

/// Categorical bar-per-algorithm chart. `x_range` covers every algorithm,
/// enabled or not, so toggling algorithms never rescales the axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub x_range: AxisRange,
}

/// Mean per-byte runtime of one algorithm on one input.
///
/// Identity is the (input, algorithm) pair only; the average never takes part
/// in equality or hashing. It is NaN when no record contributed.
#[derive(Debug, Clone, Serialize)]
pub struct AggregatedPoint {
    pub input: String,
    pub algorithm: String,
    pub average_duration_per_byte: f64,
}

impl AggregatedPoint {
    pub fn new(input: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            algorithm: algorithm.into(),
            average_duration_per_byte: f64::NAN,
        }
    }

    pub fn is_defined(&self) -> bool {
        !self.average_duration_per_byte.is_nan()
    }
}

impl PartialEq for AggregatedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.input == other.input && self.algorithm == other.algorithm
    }
}

impl Eq for AggregatedPoint {}

impl Hash for AggregatedPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.input.hash(state);
        self.algorithm.hash(state);
    }
}

/// Points of one algorithm across inputs
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSeries<'a> {
    pub algorithm: &'a str,
    pub points: &'a [AggregatedPoint],
}

/// Per-byte runtime of every algorithm across inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonChart {
    /// Sorted by algorithm, then input display order
    pub points: Vec<AggregatedPoint>,
    /// X-axis categories in display order
    pub inputs: Vec<String>,
    pub x_domain: XDomain,
    pub restricted_x_domain: XDomain,
    pub y_range: AxisRange,
}

impl ComparisonChart {
    /// Consecutive runs of `points` sharing an algorithm
    pub fn series(&self) -> Vec<ComparisonSeries<'_>> {
        let mut series = Vec::new();
        let mut start = 0;

        while start < self.points.len() {
            let algorithm = &self.points[start].algorithm;
            let len = self.points[start..]
                .iter()
                .take_while(|p| p.algorithm == *algorithm)
                .count();
            series.push(ComparisonSeries {
                algorithm,
                points: &self.points[start..start + len],
            });
            start += len;
        }

        series
    }

    pub fn point(&self, input: &str, algorithm: &str) -> Option<&AggregatedPoint> {
        let key = AggregatedPoint::new(input, algorithm);
        self.points.iter().find(|p| **p == key)
    }
}

/// Runtime (or runtime per byte) at one input length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinePoint {
    /// Id of the record this point came from
    pub id: usize,
    /// Input length in bytes
    pub x: u64,
    pub y: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSeries {
    pub algorithm: String,
    /// Sorted by input length
    pub points: Vec<LinePoint>,
}

/// Runtime against input length for one input and replacement effect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub input: String,
    pub replacement_effect: Option<String>,
    /// Sorted by algorithm
    pub series: Vec<LineSeries>,
    pub x_domain: XDomain,
    pub restricted_x_domain: XDomain,
    pub x_bounds: AxisRange,
    pub y_range: AxisRange,
    pub normalised: bool,
}

impl LineChart {
    pub fn points(&self) -> impl Iterator<Item = (&str, &LinePoint)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(move |p| (s.algorithm.as_str(), p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_point_identity_ignores_average() {
        let mut point = AggregatedPoint::new("Few matches", "AlgoA");
        point.average_duration_per_byte = 4.0;

        assert_eq!(point, AggregatedPoint::new("Few matches", "AlgoA"));
        assert_ne!(point, AggregatedPoint::new("Few matches", "AlgoB"));

        let mut set = HashSet::new();
        set.insert(AggregatedPoint::new("Few matches", "AlgoA"));
        assert!(set.contains(&point));
        assert!(!set.insert(point));
    }

    #[test]
    fn test_undefined_average_serialises_as_null() {
        let point = AggregatedPoint::new("No matches", "AlgoA");
        assert!(!point.is_defined());
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"average_duration_per_byte\":null"));
    }

    #[test]
    fn test_comparison_series_split_by_algorithm() {
        let chart = ComparisonChart {
            points: vec![
                AggregatedPoint::new("Few matches", "AlgoA"),
                AggregatedPoint::new("Many matches", "AlgoA"),
                AggregatedPoint::new("Few matches", "AlgoB"),
            ],
            inputs: vec!["Few matches".into(), "Many matches".into()],
            x_domain: XDomain::default(),
            restricted_x_domain: XDomain::default(),
            y_range: AxisRange::UNIT,
        };

        let series = chart.series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].algorithm, "AlgoA");
        assert_eq!(series[0].points.len(), 2);
        assert_eq!(series[1].algorithm, "AlgoB");
        assert!(chart.point("Many matches", "AlgoA").is_some());
        assert!(chart.point("Many matches", "AlgoB").is_none());
        assert_eq!(
            ChartView::Comparison(chart).algorithms(),
            vec!["AlgoA", "AlgoB"]
        );
    }
}

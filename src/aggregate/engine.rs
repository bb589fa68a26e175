//! Aggregation & selection engine
//!
//! A pure function from (records, selection) to chart data. It is cheap enough
//! to run on every selection change and never fails: empty groups and empty
//! domains come back as NaN averages and unit ranges.

use std::collections::HashMap;
use tracing::debug;

use super::axis::{within, AxisRange, XDomain};
use super::ordering::{compare_inputs, sort_inputs};
use super::view::{
    AggregatedPoint, Bar, BarChart, ChartView, ComparisonChart, LineChart, LinePoint, LineSeries,
};
use crate::core::labels::{is_ascii_input, InputSelection, EMPTY_STRING_INPUT};
use crate::results::{BenchmarkRecord, Dataset};
use crate::selection::SelectionState;

/// Compute the chart for the current selection.
pub fn compute_view(dataset: &Dataset, selection: &SelectionState) -> ChartView {
    match selection.selected_input() {
        None => ChartView::Blank,
        Some(InputSelection::Comparison) => {
            ChartView::Comparison(comparison_chart(dataset.records(), selection))
        }
        Some(InputSelection::Input(input)) if input == EMPTY_STRING_INPUT => {
            ChartView::EmptyInput(empty_input_chart(dataset.records(), selection))
        }
        Some(InputSelection::Input(input)) => {
            ChartView::SingleInput(single_input_chart(dataset.records(), input, selection))
        }
    }
}

/// Replacement effects the picker offers for the current input
pub fn applicable_replacement_effects(dataset: &Dataset, selection: &SelectionState) -> Vec<String> {
    selection
        .selected_input()
        .map(|input| dataset.replacement_effects_for(input))
        .unwrap_or_default()
}

/// Bar per enabled algorithm on the zero-length input.
pub fn empty_input_chart(records: &[BenchmarkRecord], selection: &SelectionState) -> BarChart {
    let empty_input = || records.iter().filter(|r| r.input == EMPTY_STRING_INPUT);

    let bars = empty_input()
        .filter(|r| selection.is_algorithm_enabled(&r.algorithm))
        .map(|r| Bar {
            algorithm: r.algorithm.clone(),
            duration: r.duration,
        })
        .collect();

    let x_range = AxisRange::log_rounded(empty_input().map(|r| r.duration as f64));
    debug!(?x_range, "empty input chart");

    BarChart { bars, x_range }
}

/// Mean per-byte runtime per (input, algorithm) across inputs.
///
/// Each record's ratio is computed on its own with integer division and the
/// ratios are then averaged, rather than dividing total duration by total bytes.
pub fn comparison_chart(records: &[BenchmarkRecord], selection: &SelectionState) -> ComparisonChart {
    let show_ascii = selection.show_ascii_inputs_in_comparison_chart();

    let candidates: Vec<&BenchmarkRecord> = records
        .iter()
        .filter(|r| r.input != EMPTY_STRING_INPUT)
        .filter(|r| Some(r.replacement_effect.as_str()) == selection.selected_replacement_effect())
        .filter(|r| selection.is_algorithm_enabled(&r.algorithm))
        .filter(|r| is_ascii_input(&r.input) == show_ascii)
        .collect();

    let x_domain = XDomain::from_lengths(candidates.iter().map(|r| r.input_length_in_bytes));
    let restricted_x_domain = x_domain.restrict(selection.x_window());
    let span = restricted_x_domain.span();

    // Every candidate group gets a point, even if the window empties it
    let mut groups: HashMap<AggregatedPoint, (f64, usize)> = candidates
        .iter()
        .map(|r| (AggregatedPoint::new(r.input.as_str(), r.algorithm.as_str()), (0.0, 0)))
        .collect();

    for record in candidates
        .iter()
        .filter(|r| within(span.as_ref(), r.input_length_in_bytes))
    {
        let Some(ratio) = record.duration_per_byte() else {
            continue;
        };
        let key = AggregatedPoint::new(record.input.as_str(), record.algorithm.as_str());
        if let Some((sum, count)) = groups.get_mut(&key) {
            *sum += ratio as f64;
            *count += 1;
        }
    }

    let mut points: Vec<AggregatedPoint> = groups
        .into_iter()
        .map(|(mut point, (sum, count))| {
            point.average_duration_per_byte = if count == 0 {
                f64::NAN
            } else {
                sum / count as f64
            };
            point
        })
        .collect();

    points.sort_by(|a, b| {
        a.algorithm
            .cmp(&b.algorithm)
            .then_with(|| compare_inputs(&a.input, &b.input))
    });

    let mut inputs: Vec<String> = points.iter().map(|p| p.input.clone()).collect();
    sort_inputs(&mut inputs);
    inputs.dedup();

    let y_range = AxisRange::log_rounded(points.iter().map(|p| p.average_duration_per_byte));
    debug!(
        x_domain = ?x_domain.values(),
        restricted = ?restricted_x_domain.values(),
        ?y_range,
        "comparison chart"
    );

    ComparisonChart {
        points,
        inputs,
        x_domain,
        restricted_x_domain,
        y_range,
    }
}

/// Runtime against input length for one input and replacement effect.
pub fn single_input_chart(
    records: &[BenchmarkRecord],
    input: &str,
    selection: &SelectionState,
) -> LineChart {
    let normalised = selection.normalise_by_input_byte_length();
    let y_value = |r: &BenchmarkRecord| {
        if normalised {
            r.duration_per_byte().unwrap_or(0)
        } else {
            r.duration
        }
    };

    let mut selected: Vec<&BenchmarkRecord> = records
        .iter()
        .filter(|r| r.input == input)
        .filter(|r| Some(r.replacement_effect.as_str()) == selection.selected_replacement_effect())
        .filter(|r| selection.is_algorithm_enabled(&r.algorithm))
        .collect();
    selected.sort_by(|a, b| {
        a.algorithm
            .cmp(&b.algorithm)
            .then(a.input_length_in_bytes.cmp(&b.input_length_in_bytes))
    });

    let x_domain = XDomain::from_lengths(selected.iter().map(|r| r.input_length_in_bytes));
    let restricted_x_domain = x_domain.restrict(selection.x_window());
    let span = restricted_x_domain.span();

    let mut series: Vec<LineSeries> = Vec::new();
    for record in selected
        .iter()
        .filter(|r| within(span.as_ref(), r.input_length_in_bytes))
    {
        let point = LinePoint {
            id: record.id,
            x: record.input_length_in_bytes,
            y: y_value(*record),
        };
        match series.last_mut() {
            Some(last) if last.algorithm == record.algorithm => last.points.push(point),
            _ => series.push(LineSeries {
                algorithm: record.algorithm.clone(),
                points: vec![point],
            }),
        }
    }

    // Scaled over every non-empty input so switching input keeps the axis put
    let y_range = AxisRange::log_rounded(
        records
            .iter()
            .filter(|r| r.input != EMPTY_STRING_INPUT)
            .filter(|r| within(span.as_ref(), r.input_length_in_bytes))
            .map(|r| y_value(r) as f64),
    );
    let x_bounds = restricted_x_domain.bounds();
    debug!(
        x_domain = ?x_domain.values(),
        restricted = ?restricted_x_domain.values(),
        ?y_range,
        "single input chart"
    );

    LineChart {
        input: input.to_string(),
        replacement_effect: selection.selected_replacement_effect().map(str::to_string),
        series,
        x_domain,
        restricted_x_domain,
        x_bounds,
        y_range,
        normalised,
    }
}

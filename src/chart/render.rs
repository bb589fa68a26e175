//! Plain-text rendering of a chart frame

use std::fmt::Write as _;

use super::format::{format_byte_count, format_duration_ns};
use super::ChartFrame;
use crate::aggregate::axis::AxisRange;
use crate::aggregate::{BarChart, ChartView, ComparisonChart, LineChart};

const BAR_WIDTH: usize = 40;
const RULE_WIDTH: usize = 60;

/// Render a frame for the terminal
pub fn render_text(frame: &ChartFrame) -> String {
    let mut out = String::new();
    let title = frame.title.as_deref().unwrap_or("No input selected");

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "{}", title);
    if let Some(subtitle) = &frame.subtitle {
        let _ = writeln!(out, "{}", subtitle);
    }
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    match &frame.view {
        ChartView::Blank => {
            let _ = writeln!(out, "Nothing to chart.");
        }
        ChartView::EmptyInput(chart) => render_bars(&mut out, frame, chart),
        ChartView::Comparison(chart) => render_comparison(&mut out, frame, chart),
        ChartView::SingleInput(chart) => render_lines(&mut out, frame, chart),
    }

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    out
}

fn render_bars(out: &mut String, frame: &ChartFrame, chart: &BarChart) {
    let label_width = label_width(chart.bars.iter().map(|b| b.algorithm.as_str()));

    for bar in &chart.bars {
        let filled = log_fraction(bar.duration as f64, chart.x_range)
            .map(|f| (f * BAR_WIDTH as f64).round() as usize)
            .unwrap_or(0)
            .min(BAR_WIDTH);
        let _ = writeln!(
            out,
            "{} {:<label_width$} [{}{}] {}",
            glyph(frame, &bar.algorithm),
            bar.algorithm,
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            format_duration_ns(bar.duration as f64),
        );
    }

    let _ = writeln!(
        out,
        "\nRuntime axis: {} .. {} (log)",
        format_duration_ns(chart.x_range.lower),
        format_duration_ns(chart.x_range.upper),
    );
}

fn render_lines(out: &mut String, frame: &ChartFrame, chart: &LineChart) {
    let columns = chart.restricted_x_domain.values();
    let label_width = label_width(chart.series.iter().map(|s| s.algorithm.as_str()));
    let cell = |y: u64| {
        if chart.normalised {
            format!("{}/B", format_duration_ns(y as f64))
        } else {
            format_duration_ns(y as f64)
        }
    };

    let _ = write!(out, "  {:<label_width$}", "Input length");
    for x in columns {
        let _ = write!(out, " {:>12}", format_byte_count(*x));
    }
    let _ = writeln!(out);

    for series in &chart.series {
        let _ = write!(
            out,
            "{} {:<label_width$}",
            glyph(frame, &series.algorithm),
            series.algorithm
        );
        for x in columns {
            let value = series
                .points
                .iter()
                .find(|p| p.x == *x)
                .map(|p| cell(p.y))
                .unwrap_or_else(|| "-".to_string());
            let _ = write!(out, " {:>12}", value);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(
        out,
        "\nInput length axis: {} .. {} (log)",
        format_byte_count(chart.x_bounds.lower as u64),
        format_byte_count(chart.x_bounds.upper as u64),
    );
    let _ = writeln!(
        out,
        "Runtime axis: {} .. {} (log)",
        format_duration_ns(chart.y_range.lower),
        format_duration_ns(chart.y_range.upper),
    );
}

fn render_comparison(out: &mut String, frame: &ChartFrame, chart: &ComparisonChart) {
    let series = chart.series();
    let label_width = label_width(series.iter().map(|s| s.algorithm));
    let column_width = chart
        .inputs
        .iter()
        .map(|i| i.chars().count())
        .max()
        .unwrap_or(0)
        .max(12);

    let _ = write!(out, "  {:<label_width$}", "Input");
    for input in &chart.inputs {
        let _ = write!(out, " {:>column_width$}", input);
    }
    let _ = writeln!(out);

    for s in &series {
        let _ = write!(out, "{} {:<label_width$}", glyph(frame, s.algorithm), s.algorithm);
        for input in &chart.inputs {
            let value = s
                .points
                .iter()
                .find(|p| p.input == *input)
                .filter(|p| p.is_defined())
                .map(|p| format!("{}/B", format_duration_ns(p.average_duration_per_byte)))
                .unwrap_or_else(|| "-".to_string());
            let _ = write!(out, " {:>column_width$}", value);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(
        out,
        "\nRuntime per byte axis: {} .. {} (log)",
        format_duration_ns(chart.y_range.lower),
        format_duration_ns(chart.y_range.upper),
    );
}

fn glyph(frame: &ChartFrame, algorithm: &str) -> char {
    frame
        .styles
        .get(algorithm)
        .map(|s| s.symbol.glyph())
        .unwrap_or(' ')
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0)
}

/// Position of a value on a log axis, 0 at the lower bound and 1 at the upper
fn log_fraction(value: f64, range: AxisRange) -> Option<f64> {
    if value <= 0.0 || range.lower <= 0.0 {
        return None;
    }
    let span = range.upper.log10() - range.lower.log10();
    if span <= 0.0 {
        return Some(1.0);
    }
    Some(((value.log10() - range.lower.log10()) / span).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::compute_view;
    use crate::chart::StyleTable;
    use crate::core::config::ChartConfig;
    use crate::core::labels::{InputSelection, EMPTY_STRING_INPUT};
    use crate::results::{parse, Dataset};
    use crate::selection::SelectionState;

    fn dataset() -> Dataset {
        Dataset::new(
            parse(
                "Few matches\t10\t12\tLength unchanged\tN-pass via replace\t0\t500\n\
                 Few matches\t10\t1200\tLength unchanged\tN-pass via replace\t0\t5000\n\
                 Few matches\t10\t12\tLength unchanged\tAlgoB\t0\t300\n\
                 Empty string\t0\t0\tLength unchanged\tAlgoB\t0\t50\n",
            )
            .unwrap(),
        )
    }

    fn frame(data: &Dataset, selection: &SelectionState) -> ChartFrame {
        let styles = StyleTable::build(&data.algorithms(), &ChartConfig::default());
        ChartFrame::new(compute_view(data, selection), selection, &styles)
    }

    #[test]
    fn test_render_line_chart() {
        let data = dataset();
        let selection = SelectionState::initial(&data);
        let text = render_text(&frame(&data, &selection));

        assert!(text.contains("Few matches"));
        assert!(text.contains("Length unchanged"));
        assert!(text.contains("12 B"));
        assert!(text.contains("1.2 kB"));
        assert!(text.contains("■ N-pass via replace"));
        assert!(text.contains("5 µs"));
        assert!(text.contains("Runtime axis: 100 ns .. 10 µs (log)"));
    }

    #[test]
    fn test_render_bars() {
        let data = dataset();
        let mut selection = SelectionState::initial(&data);
        selection.select_input(&data, Some(InputSelection::from_label(EMPTY_STRING_INPUT)));
        let text = render_text(&frame(&data, &selection));

        assert!(text.contains("AlgoB"));
        assert!(text.contains("50 ns"));
        assert!(text.contains("Runtime axis: 10 ns .. 100 ns (log)"));
    }

    #[test]
    fn test_render_comparison() {
        let data = dataset();
        let mut selection = SelectionState::initial(&data);
        selection.select_input(&data, Some(InputSelection::Comparison));
        let text = render_text(&frame(&data, &selection));

        assert!(text.contains("Comparison across inputs"));
        assert!(text.contains("/B"));
    }

    #[test]
    fn test_render_blank() {
        let data = Dataset::default();
        let selection = SelectionState::initial(&data);
        let text = render_text(&frame(&data, &selection));
        assert!(text.contains("No input selected"));
        assert!(text.contains("Nothing to chart."));
    }

    #[test]
    fn test_log_fraction() {
        let range = AxisRange { lower: 10.0, upper: 1_000.0 };
        assert!(log_fraction(10.0, range).unwrap().abs() < 1e-12);
        assert!((log_fraction(1_000.0, range).unwrap() - 1.0).abs() < 1e-12);
        assert!((log_fraction(100.0, range).unwrap() - 0.5).abs() < 1e-12);
        assert_eq!(log_fraction(0.0, range), None);
        assert_eq!(log_fraction(5.0, AxisRange::UNIT), Some(1.0));
    }
}

//! Axis domains, slider windows and log-scale ranges

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Slider window over an x-domain, as offsets into its sorted values.
/// `max` may exceed the domain; it is clamped when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XWindow {
    pub min: usize,
    pub max: usize,
}

impl XWindow {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn full() -> Self {
        Self::new(0, usize::MAX)
    }

    /// Drop the first `min` values and the last `len - max - 1`.
    pub fn apply<'a>(&self, values: &'a [u64]) -> &'a [u64] {
        let len = values.len();
        let drop_last = len.saturating_sub(self.max.saturating_add(1));
        let end = len - drop_last;
        let start = self.min.min(end);
        &values[start..end]
    }
}

impl Default for XWindow {
    fn default() -> Self {
        Self::full()
    }
}

/// Distinct input byte lengths, strictly increasing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XDomain {
    values: Vec<u64>,
}

impl XDomain {
    pub fn from_lengths(lengths: impl IntoIterator<Item = u64>) -> Self {
        Self {
            values: lengths.into_iter().collect::<BTreeSet<_>>().into_iter().collect(),
        }
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The part of the domain inside a slider window
    pub fn restrict(&self, window: XWindow) -> XDomain {
        XDomain {
            values: window.apply(&self.values).to_vec(),
        }
    }

    /// Inclusive value range spanned by the domain, `None` when empty
    pub fn span(&self) -> Option<RangeInclusive<u64>> {
        match (self.values.first(), self.values.last()) {
            (Some(&first), Some(&last)) => Some(first..=last),
            _ => None,
        }
    }

    /// Axis bounds for display. An empty domain becomes the single point `[1, 1]`.
    pub fn bounds(&self) -> AxisRange {
        match self.span() {
            Some(span) => AxisRange {
                lower: *span.start() as f64,
                upper: *span.end() as f64,
            },
            None => AxisRange::UNIT,
        }
    }
}

/// Whether a byte length falls inside an optional span
pub fn within(span: Option<&RangeInclusive<u64>>, value: u64) -> bool {
    span.is_some_and(|span| span.contains(&value))
}

/// Closed numeric axis range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub lower: f64,
    pub upper: f64,
}

impl AxisRange {
    pub const UNIT: AxisRange = AxisRange {
        lower: 1.0,
        upper: 1.0,
    };

    /// Log-scale range rounded outward to powers of ten:
    /// `[10^floor(log10(min)), 10^ceil(log10(max))]`.
    ///
    /// Zero, negative and non-finite values cannot sit on a log axis and are
    /// ignored. With nothing left the range is `[1, 1]`.
    pub fn log_rounded(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite() && *v > 0.0)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            });

        if min > max {
            return Self::UNIT;
        }

        Self {
            lower: 10f64.powf(min.log10().floor()),
            upper: 10f64.powf(max.log10().ceil()),
        }
    }
}

//! Axis label formatting

/// Duration units from largest to smallest, in nanoseconds
const DURATION_UNITS: [(&str, f64); 5] = [
    ("s", 1e9),
    ("ms", 1e6),
    ("µs", 1e3),
    ("ns", 1.0),
    ("ps", 1e-3),
];

/// Format nanoseconds in the largest unit that keeps the value at least 1,
/// falling back to picoseconds.
pub fn format_duration_ns(nanoseconds: f64) -> String {
    if !nanoseconds.is_finite() {
        return "-".to_string();
    }

    let (unit, scale) = DURATION_UNITS
        .iter()
        .find(|(_, scale)| nanoseconds.abs() / scale >= 1.0)
        .copied()
        .unwrap_or(DURATION_UNITS[DURATION_UNITS.len() - 1]);

    format!("{} {}", trim_fraction(nanoseconds / scale), unit)
}

/// Format a byte count in decimal units (1 kB = 1000 B).
pub fn format_byte_count(bytes: u64) -> String {
    const KB: u64 = 1000;
    const MB: u64 = KB * 1000;
    const GB: u64 = MB * 1000;

    if bytes >= GB {
        format!("{} GB", trim_fraction(bytes as f64 / GB as f64))
    } else if bytes >= MB {
        format!("{} MB", trim_fraction(bytes as f64 / MB as f64))
    } else if bytes >= KB {
        format!("{} kB", trim_fraction(bytes as f64 / KB as f64))
    } else {
        format!("{} B", bytes)
    }
}

/// At most two fractional digits, trailing zeros dropped
fn trim_fraction(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

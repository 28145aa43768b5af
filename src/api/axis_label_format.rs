use chrono::{DateTime, Utc};

const MAX_LABEL_PRECISION: usize = 12;

/// Formats a value-axis label with just enough decimals to tell ticks
/// `step` apart, trimming trailing zeros.
pub(super) fn format_value_label(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let precision = label_precision(step);
    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

fn label_precision(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    let digits = (-step.log10() - 1e-9).ceil();
    (digits.max(0.0) as usize).min(MAX_LABEL_PRECISION)
}

/// `Apr 24`, used when labelling every other sample.
pub(super) fn format_sample_axis_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d").to_string()
}

/// `24 Apr 2007`.
pub(super) fn format_tooltip_date(date: DateTime<Utc>) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Shortest round-trip text of the raw sample value.
pub(super) fn format_tooltip_value(value: f64) -> String {
    value.to_string()
}

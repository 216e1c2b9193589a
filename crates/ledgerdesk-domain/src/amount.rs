//! Monetary amount helpers.
//!
//! Back-office forms accept amounts typed with either `,` or `.` as the
//! decimal separator; everything is normalized before parsing.

/// Parse a user-entered decimal, accepting `,` or `.` as the decimal
/// separator. When both appear, the right-most one is taken as the
/// decimal separator and the other as a grouping separator.
///
/// Returns `None` for empty or non-numeric input.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    let normalized = match (compact.rfind(','), compact.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => compact.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => compact.replace(',', ""),
        (Some(_), None) => compact.replace(',', "."),
        (None, _) => compact,
    };
    let value: f64 = normalized.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format with exactly two decimal places.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

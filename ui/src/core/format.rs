//! Formatting helpers for presenting values in markup and tables.

/// Format a data value for display: up to two decimals, trailing zeros
/// trimmed, `-0` normalized to `0`.
pub fn value(v: f64) -> String {
    let mut s = format!("{v:.2}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Format an SVG coordinate. Same trimming as [`value`]; kept separate so
/// coordinate precision can change without touching table display.
pub fn coord(v: f64) -> String {
    value(v)
}

/// Axis tick label: integers only, the way the chart has always labeled
/// its y axis.
pub fn tick(v: f64) -> String {
    format!("{v:.0}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(value(640.0), "640");
        assert_eq!(value(12.5), "12.5");
        assert_eq!(value(12.34), "12.34");
        assert_eq!(value(12.345), "12.35");
    }

    #[test]
    fn normalizes_negative_zero() {
        assert_eq!(value(-0.0001), "0");
        assert_eq!(value(-0.0), "0");
    }

    #[test]
    fn tick_labels_are_integers() {
        assert_eq!(tick(12.6), "13");
        assert_eq!(tick(-3.2), "-3");
    }
}

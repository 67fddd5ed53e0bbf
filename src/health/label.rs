//! Metric-label sanitization for RRD-backed monitoring

/// Replace characters that break RRD/Nagios metric naming.
///
/// `.` becomes `:`, space and `-` become `_`, `%` becomes `perc`. Each input
/// character is considered once; replacement output is never rescanned.
pub fn safe_label(label: &str) -> String {
    let mut safe = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '.' => safe.push(':'),
            ' ' | '-' => safe.push('_'),
            '%' => safe.push_str("perc"),
            other => safe.push(other),
        }
    }
    safe
}

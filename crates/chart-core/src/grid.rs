// File: crates/chart-core/src/grid.rs
// Summary: Log-axis gridline placement and power-of-ten labels.

/// Integer decades strictly inside `(min, max)` of a log10 axis.
///
/// Nothing is returned unless `ceil(min) < floor(max)`; values touching the
/// bounds are skipped so gridlines never overdraw the frame.
pub fn interior_decades(min: f64, max: f64) -> Vec<i32> {
    let lo = min.ceil();
    let hi = max.floor();
    if lo >= hi {
        return Vec::new();
    }
    (lo as i32..=hi as i32)
        .filter(|&k| (k as f64) > min && (k as f64) < max)
        .collect()
}

/// Label of the gridline at decade `k`.
pub fn decade_label(k: i32) -> String {
    format!("1e{k}")
}

//! Raw indicator value → fitness contribution.

/// Default upper bound for percentage and 0–100 index indicators.
pub const DEFAULT_MAX_VALUE: f64 = 100.0;

/// Divisor applied after the natural log in [`log_norm`].
const LOG_SCALE_DIVISOR: f64 = 10.0;

/// Linear normalization: `min(value / max_value, 1.0)`, flipped to
/// `1 - x` when `invert` is set (lower is better).
///
/// Missing values map to `0.0` regardless of `invert`. Values above
/// `max_value` clamp to `1.0`. Negative values are not clamped and produce
/// negative contributions.
pub fn norm(value: Option<f64>, max_value: f64, invert: bool) -> f64 {
    let Some(v) = value else {
        return 0.0;
    };
    let x = (v / max_value).min(1.0);
    if invert {
        1.0 - x
    } else {
        x
    }
}

/// Logarithmic compression for large monetary magnitudes:
/// `ln(value + 1) / 10`, or `0.0` for missing and non-positive values.
///
/// Unbounded above; tens of thousands of millions land around 1.0–1.2.
pub fn log_norm(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v > 0.0 => (v + 1.0).ln() / LOG_SCALE_DIVISOR,
        _ => 0.0,
    }
}

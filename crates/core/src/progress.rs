//! Progress/usage percentage helper used by dashboard snapshots.

/// Percentage of `target` reached by `current`, clamped to `0.0..=100.0` and
/// rounded to one decimal place.
///
/// A zero target yields `0.0` rather than a division fault.
pub fn progress_percent(current: u64, target: u64) -> f64 {
    if target == 0 {
        return 0.0;
    }
    let raw = current as f64 / target as f64 * 100.0;
    let clamped = raw.clamp(0.0, 100.0);
    (clamped * 10.0).round() / 10.0
}

//! Value-to-pixel mapping shared by the bar charts.

/// Vertical value range that always contains zero and every `value ± error`.
pub(crate) fn value_range(values: &[f64], errors: &[f64]) -> (f64, f64) {
    let mut lo = 0.0_f64;
    let mut hi = 0.0_f64;
    for (i, &v) in values.iter().enumerate() {
        let e = errors.get(i).copied().unwrap_or(0.0).abs();
        lo = lo.min(v - e);
        hi = hi.max(v + e);
    }
    if hi - lo < f64::EPSILON {
        hi = lo + 1.0;
    }
    (lo, hi)
}

/// Screen y for `value`, with `top`/`bottom` the pixel rows of `hi`/`lo`.
pub(crate) fn value_to_y(value: f64, (lo, hi): (f64, f64), top: f32, bottom: f32) -> f32 {
    let t = ((value - lo) / (hi - lo)) as f32;
    bottom - t * (bottom - top)
}

/// Start and sweep angles (radians, clockwise from 12 o'clock) of each
/// slice. Negative shares count as zero.
pub(crate) fn slice_angles(shares: &[f64]) -> Vec<(f32, f32)> {
    let total: f64 = shares.iter().map(|s| s.max(0.0)).sum();
    if total <= 0.0 {
        return shares.iter().map(|_| (0.0, 0.0)).collect();
    }
    let mut start = 0.0_f32;
    shares
        .iter()
        .map(|s| {
            let sweep = (s.max(0.0) / total) as f32 * std::f32::consts::TAU;
            let slice = (start, sweep);
            start += sweep;
            slice
        })
        .collect()
}

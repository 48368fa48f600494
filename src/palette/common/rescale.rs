/// Linearly maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// No clamping is applied; values outside the input range extrapolate.
/// A degenerate input range (`in_min == in_max`) yields a non-finite result.
#[inline]
pub fn rescale(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

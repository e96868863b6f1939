//! Phase folding

/// Fractional position of `time` within `period`, measured from `t0`.
///
/// Uses the truncating remainder, so times before `t0` fold to negative
/// phases in `(-1, 0]`.
#[inline]
pub fn phase(time: f64, t0: f64, period: f64) -> f64 {
    ((time - t0) % period) / period
}

/// Phase remapped so the reference epoch sits at 0: values above 0.5 are
/// shifted down by one, giving `(-0.5, 0.5]` for times at or after `t0`.
#[inline]
pub fn centered_phase(time: f64, t0: f64, period: f64) -> f64 {
    let p = phase(time, t0, period);
    if p > 0.5 {
        p - 1.0
    } else {
        p
    }
}

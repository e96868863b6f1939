//! Utility functions for working with data slices
//!
//! Medians are computed by selection rather than sorting, so a call is
//! O(n) on average. The period search evaluates a median for every trial
//! period, which is where this matters.

use ordered_float::OrderedFloat;

/// Median by selection, reordering `data` in place.
///
/// For an even count the **upper** middle element (index `n / 2` of the
/// ordered values) is returned; the two middle values are never averaged.
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use transit_core::utils::median_in_place;
///
/// let mut data = vec![4.0, 1.0, 3.0, 2.0];
/// assert_eq!(median_in_place(&mut data), Some(3.0));
/// ```
pub fn median_in_place(data: &mut [f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let mid = data.len() / 2;
    let (_, value, _) = data.select_nth_unstable_by_key(mid, |&x| OrderedFloat(x));
    Some(*value)
}

/// Median of a slice without touching the caller's data.
///
/// Same tie-break as [`median_in_place`].
///
/// # Examples
///
/// ```rust
/// use transit_core::utils::median;
///
/// assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
/// assert_eq!(median(&[]), None);
/// ```
pub fn median(data: &[f64]) -> Option<f64> {
    let mut scratch = data.to_vec();
    median_in_place(&mut scratch)
}

/// Arithmetic mean, 0 for an empty slice
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Smallest value, `None` for an empty slice
pub fn min_value(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::min)
}

/// Largest value, `None` for an empty slice
pub fn max_value(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::max)
}

/// Check that every value is finite
pub fn all_finite(data: &[f64]) -> bool {
    data.iter().all(|x| x.is_finite())
}

//! Secondary-eclipse probe and false-alarm proxy
//!
//! Neither value takes part in the accept/reject decision. An eclipsing
//! binary tends to show a second dip half an orbit after the first, so a
//! deep `secondary_eclipse_depth` is a hint for whoever reads the report.

use transit_core::utils::min_value;
use transit_core::Series;
use transit_search::phase;

/// Lower and upper phase bounds of the secondary-eclipse window
pub const SECONDARY_PHASE_WINDOW: (f64, f64) = (0.4, 0.6);

/// Depth of the deepest sample around phase 0.5 when folded at `period`
///
/// Folds about the first timestamp, like the period search. Returns 0 for a
/// non-positive period or when no sample falls inside the window.
pub fn secondary_eclipse_depth(detrended: &Series, period: f64) -> f64 {
    let Some(t0) = detrended.first_time() else {
        return 0.0;
    };
    if !(period > 0.0 && period.is_finite()) {
        return 0.0;
    }

    let (lo, hi) = SECONDARY_PHASE_WINDOW;
    let window: Vec<f64> = detrended
        .samples()
        .iter()
        .filter(|s| {
            let p = phase(s.time, t0, period);
            p > lo && p < hi
        })
        .map(|s| s.flux)
        .collect();

    min_value(&window).map_or(0.0, |m| (1.0 - m).max(0.0))
}

/// Logistic false-alarm proxy, `1 / (1 + e^(snr - 5))`
///
/// 0.5 at SNR 5, approaching 1 for weak signals and 0 for strong ones.
pub fn false_alarm_probability(snr: f64) -> f64 {
    1.0 / (1.0 + (snr - 5.0).exp())
}

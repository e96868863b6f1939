//! Flux normalization
//!
//! Every flux is divided by the median flux so the baseline sits at 1.0.
//! The median uses the upper-middle tie-break for even counts, so the
//! normalized median is exactly 1.0 by construction.

use tracing::{debug, instrument};
use transit_core::utils::{all_finite, median};
use transit_core::{Error, Result, Series};

const STAGE: &str = "normalize";

/// A series rescaled to a unit baseline
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// The rescaled series
    pub series: Series,
    /// Median flux of the input, the divisor applied to every sample
    pub baseline: f64,
}

/// Divide every flux by the median flux.
///
/// Fails with an analysis error when the median is zero or non-finite,
/// since the division would produce non-finite values.
#[instrument(level = "debug", skip(series), fields(n = series.len()))]
pub fn normalize(series: &Series) -> Result<Normalized> {
    let flux = series.flux_vec();
    let baseline = median(&flux).ok_or_else(|| Error::analysis(STAGE, "empty series"))?;

    if !baseline.is_finite() || baseline == 0.0 {
        return Err(Error::analysis(
            STAGE,
            format!("median flux {baseline} cannot be used as a baseline"),
        ));
    }

    let normalized = series.map_flux(|_, s| s.flux / baseline);
    if !all_finite(&normalized.flux_vec()) {
        return Err(Error::non_finite(STAGE, "normalized flux"));
    }

    debug!(baseline, "normalized flux");
    Ok(Normalized {
        series: normalized,
        baseline,
    })
}

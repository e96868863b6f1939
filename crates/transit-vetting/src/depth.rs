//! Transit depth and signal-to-noise

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use transit_core::utils::min_value;
use transit_core::{Error, Result, Series};
use transit_spread::robust_std_dev;

/// Deepest dip of a detrended light curve and its significance
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DepthEstimate {
    /// `max(0, 1 - min(flux))`
    pub depth: f64,
    /// Robust standard deviation of the detrended flux about 1.0
    pub noise: f64,
    /// `depth / noise`, 0 when the noise is 0
    pub snr: f64,
}

/// Measure depth, noise and SNR of a detrended series
///
/// An empty series has no dip and no noise; every field is 0.
#[instrument(level = "debug", skip(detrended), fields(n = detrended.len()))]
pub fn estimate_depth(detrended: &Series) -> Result<DepthEstimate> {
    let flux = detrended.flux_vec();
    let Some(min_flux) = min_value(&flux) else {
        return Ok(DepthEstimate::default());
    };

    let depth = (1.0 - min_flux).max(0.0);
    let noise = robust_std_dev(&flux)?;
    let snr = if noise > 0.0 { depth / noise } else { 0.0 };

    if !snr.is_finite() {
        return Err(Error::non_finite("depth", "snr"));
    }

    debug!(depth, noise, snr, "depth estimate");
    Ok(DepthEstimate { depth, noise, snr })
}

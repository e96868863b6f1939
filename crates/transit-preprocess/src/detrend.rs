//! Sliding-median detrending
//!
//! Each flux is divided by the median of a centered window around it. The
//! window is wide compared to a transit (5% of the series on each side by
//! default), so slow stellar or instrumental trends are flattened while
//! short dips survive.

use crate::kernel::CenteredWindowKernel;
use tracing::{debug, instrument};
use transit_core::utils::median_in_place;
use transit_core::{Error, Result, Series};

const STAGE: &str = "detrend";

/// Centered sliding-median detrender
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidingMedianDetrender {
    window_fraction: f64,
    min_half_window: usize,
}

impl Default for SlidingMedianDetrender {
    fn default() -> Self {
        Self {
            window_fraction: 0.05,
            min_half_window: 5,
        }
    }
}

impl SlidingMedianDetrender {
    pub fn new(window_fraction: f64, min_half_window: usize) -> Self {
        Self {
            window_fraction,
            min_half_window,
        }
    }

    /// Samples on each side of the center: `max(min, floor(n * fraction))`
    pub fn half_window(&self, n: usize) -> usize {
        let scaled = (n as f64 * self.window_fraction).floor() as usize;
        scaled.max(self.min_half_window)
    }

    /// Divide every flux by its local window median
    #[instrument(level = "debug", skip(self, series), fields(n = series.len()))]
    pub fn detrend(&self, series: &Series) -> Result<Series> {
        let flux = series.flux_vec();
        let kernel = CenteredWindowKernel::new(self.half_window(flux.len()));
        let trend = kernel.compute_window_stats(&flux, |window| median_in_place(window));

        let mut detrended = Vec::with_capacity(flux.len());
        for (i, (f, local)) in flux.iter().zip(trend).enumerate() {
            let local = local.ok_or_else(|| Error::analysis(STAGE, "empty window"))?;
            if local == 0.0 || !local.is_finite() {
                return Err(Error::analysis(
                    STAGE,
                    format!("window median {local} at index {i} cannot be used as a divisor"),
                ));
            }
            detrended.push(f / local);
        }

        debug!(half_window = kernel.half_width(), "detrended flux");
        Ok(series.map_flux(|i, _| detrended[i]))
    }
}

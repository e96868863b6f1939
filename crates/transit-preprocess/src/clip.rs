//! Sigma clipping about the unit baseline
//!
//! One pass only: the noise estimate is not recomputed and re-applied.

use tracing::{debug, instrument};
use transit_core::Series;

/// Default clip multiplier
pub const DEFAULT_CLIP_SIGMA: f64 = 5.0;

/// Single-pass k-sigma clip about a fixed center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmaClip {
    k: f64,
    center: f64,
}

/// Clipped series plus how many samples were removed
#[derive(Debug, Clone, PartialEq)]
pub struct ClipOutcome {
    pub series: Series,
    pub removed: usize,
}

impl Default for SigmaClip {
    fn default() -> Self {
        Self::new(DEFAULT_CLIP_SIGMA)
    }
}

impl SigmaClip {
    /// Clip at `k` robust standard deviations about 1.0
    pub fn new(k: f64) -> Self {
        Self { k, center: 1.0 }
    }

    pub fn with_center(mut self, center: f64) -> Self {
        self.center = center;
        self
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    /// Drop every sample whose `|flux - center|` exceeds `k * sigma`.
    ///
    /// A sample exactly on the limit is kept. With `sigma == 0` only samples
    /// sitting exactly on the center survive.
    #[instrument(level = "debug", skip(self, series), fields(n = series.len()))]
    pub fn apply(&self, series: &Series, sigma: f64) -> ClipOutcome {
        let limit = self.k * sigma;
        let clipped = series.filter(|s| (s.flux - self.center).abs() <= limit);
        let removed = series.len() - clipped.len();
        debug!(limit, removed, "sigma clip");
        ClipOutcome {
            series: clipped,
            removed,
        }
    }
}

//! Dip symmetry scoring

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use transit_core::{Error, Result, Series};

/// Parameters of the symmetric-minimum score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Only samples strictly below this flux are considered
    pub dip_flux: f64,
    /// Distance to the neighbors compared on each side
    pub neighbor_offset: usize,
    /// Lower bound of the symmetry denominator
    pub symmetry_floor: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            dip_flux: 0.998,
            neighbor_offset: 2,
            symmetry_floor: 0.001,
        }
    }
}

impl ShapeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.neighbor_offset == 0 {
            return Err(Error::InvalidParameter("neighbor_offset must be at least 1".into()));
        }
        if self.symmetry_floor.is_nan() || self.symmetry_floor <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "symmetry_floor must be positive, got {}",
                self.symmetry_floor
            )));
        }
        Ok(())
    }
}

/// Scores local minima of a detrended light curve by how symmetric their
/// flanks are. Every qualifying minimum adds
/// `1 - |left - right| / max(left, right, floor)`, so a train of clean U or
/// V shaped dips accumulates a large score while lone noise spikes add
/// little.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeAnalyzer {
    config: ShapeConfig,
}

impl ShapeAnalyzer {
    pub fn new(config: ShapeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    /// Sum of symmetry contributions over every qualifying local minimum
    #[instrument(level = "debug", skip(self, detrended), fields(n = detrended.len()))]
    pub fn score(&self, detrended: &Series) -> f64 {
        let k = self.config.neighbor_offset;
        let samples = detrended.samples();
        if samples.len() < 2 * k + 1 {
            return 0.0;
        }

        let mut total = 0.0;
        let mut minima = 0usize;
        for i in k..samples.len() - k {
            let center = samples[i].flux;
            if center >= self.config.dip_flux {
                continue;
            }
            let left = samples[i - k].flux;
            let right = samples[i + k].flux;
            if left > center && right > center {
                let scale = left.max(right).max(self.config.symmetry_floor);
                total += 1.0 - (left - right).abs() / scale;
                minima += 1;
            }
        }

        debug!(minima, score = total, "shape score");
        total
    }
}

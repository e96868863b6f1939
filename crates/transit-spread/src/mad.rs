//! Median Absolute Deviation (MAD) estimators
//!
//! Light curves are normalized to a baseline of 1.0 before noise is
//! measured, so deviations are usually taken about that fixed baseline
//! rather than about the sample median. Both centers are supported.

use crate::traits::SpreadEstimator;
use transit_core::utils::median_in_place;
use transit_core::{Error, Result};

/// Consistency factor that makes MAD comparable to the standard deviation
/// for normally distributed data.
pub const NORMAL_CONSISTENCY: f64 = 1.4826;

/// Point the absolute deviations are measured from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Center {
    /// A known baseline (1.0 for normalized flux)
    Fixed(f64),
    /// The sample median (upper middle for even counts)
    Median,
}

impl Default for Center {
    fn default() -> Self {
        Center::Fixed(1.0)
    }
}

/// Median Absolute Deviation (MAD) estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct Mad {
    center: Center,
}

impl Mad {
    /// MAD about a fixed baseline
    pub fn about(center: f64) -> Self {
        Self {
            center: Center::Fixed(center),
        }
    }

    /// MAD about the sample median
    pub fn about_median() -> Self {
        Self {
            center: Center::Median,
        }
    }

    pub fn center(&self) -> Center {
        self.center
    }
}

impl SpreadEstimator for Mad {
    fn estimate_in_place(&self, data: &mut [f64]) -> Result<f64> {
        let center = match self.center {
            Center::Fixed(c) => c,
            Center::Median => median_in_place(data).ok_or_else(empty)?,
        };
        for x in data.iter_mut() {
            *x = (*x - center).abs();
        }
        median_in_place(data).ok_or_else(empty)
    }
}

fn empty() -> Error {
    Error::InsufficientData {
        expected: 1,
        actual: 0,
    }
}

/// Standardized MAD estimator (scaled by consistency factor)
///
/// This is the pipeline's robust noise estimate: `MAD * 1.4826`.
#[derive(Debug, Clone, Copy)]
pub struct StandardizedMad {
    mad: Mad,
    factor: f64,
}

impl StandardizedMad {
    /// Standardized MAD about a fixed baseline with the default consistency factor
    pub fn about(center: f64) -> Self {
        Self {
            mad: Mad::about(center),
            factor: NORMAL_CONSISTENCY,
        }
    }

    /// Create with custom consistency factor
    pub fn with_factor(mad: Mad, consistency_factor: f64) -> Self {
        Self {
            mad,
            factor: consistency_factor,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Default for StandardizedMad {
    fn default() -> Self {
        Self::about(1.0)
    }
}

impl SpreadEstimator for StandardizedMad {
    fn estimate_in_place(&self, data: &mut [f64]) -> Result<f64> {
        Ok(self.mad.estimate_in_place(data)? * self.factor)
    }
}

/// Robust standard deviation of normalized flux: `median(|f - 1|) * 1.4826`
pub fn robust_std_dev(flux: &[f64]) -> Result<f64> {
    StandardizedMad::default().estimate(flux)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mad_about_fixed_center() {
        // deviations from 1.0: 0.0, 0.1, 0.2, 0.3, 0.4 -> median 0.2
        let data = vec![1.0, 1.1, 0.8, 1.3, 0.6];
        let mad = Mad::about(1.0).estimate(&data).unwrap();
        assert_relative_eq!(mad, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_mad_about_median() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let mad = Mad::about_median().estimate(&data).unwrap();
        // center 3, deviations 2,1,0,1,2 -> 1
        assert_relative_eq!(mad, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_standardized_mad() {
        let data = vec![1.0, 1.1, 0.8, 1.3, 0.6];
        let smad = StandardizedMad::about(1.0).estimate(&data).unwrap();
        assert_relative_eq!(smad, 0.2 * NORMAL_CONSISTENCY, epsilon = 1e-12);
        assert_relative_eq!(robust_std_dev(&data).unwrap(), smad, epsilon = 1e-15);
    }

    #[test]
    fn test_mad_with_outlier() {
        let data = vec![1.0, 1.01, 0.99, 1.02, 0.98, 50.0];
        let mad = Mad::about(1.0).estimate(&data).unwrap();
        assert!(mad < 0.05);
    }

    #[test]
    fn test_flat_series_has_zero_spread() {
        let data = vec![1.0; 32];
        assert_eq!(robust_std_dev(&data).unwrap(), 0.0);
    }

    #[test]
    fn test_estimate_leaves_input_untouched() {
        let data = vec![1.2, 0.9, 1.0];
        let _ = Mad::about(1.0).estimate(&data).unwrap();
        assert_eq!(data, vec![1.2, 0.9, 1.0]);
    }

    #[test]
    fn test_empty_sample() {
        let data: Vec<f64> = vec![];
        assert!(Mad::about(1.0).estimate(&data).is_err());
        assert!(Mad::about_median().estimate(&data).is_err());
    }

    #[test]
    fn test_gaussian_consistency() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;
        use rand_distr::{Distribution, Normal};

        let mut rng = StdRng::seed_from_u64(42);
        let normal = Normal::new(1.0, 0.002).unwrap();
        let data: Vec<f64> = (0..20000).map(|_| normal.sample(&mut rng)).collect();

        let sigma = robust_std_dev(&data).unwrap();
        assert_relative_eq!(sigma, 0.002, max_relative = 0.05);
    }
}

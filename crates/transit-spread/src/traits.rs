//! Core traits for spread estimation

use transit_core::Result;

/// Trait for spread/scale estimators over flux values
pub trait SpreadEstimator {
    /// Estimate spread, free to reorder `data` as scratch space
    fn estimate_in_place(&self, data: &mut [f64]) -> Result<f64>;

    /// Estimate spread without modifying the caller's data
    fn estimate(&self, data: &[f64]) -> Result<f64> {
        let mut scratch = data.to_vec();
        self.estimate_in_place(&mut scratch)
    }
}

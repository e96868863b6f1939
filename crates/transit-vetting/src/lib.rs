//! Vetting diagnostics for candidate transits
//!
//! Everything the decision gate looks at besides the period search lives
//! here:
//!
//! - [`estimate_depth`]: deepest dip of the detrended curve and its SNR
//! - [`detect_artifacts`]: jump ratio and straight-line R² of the
//!   pre-detrend curve
//! - [`ShapeAnalyzer`]: symmetric local-minimum score
//! - [`secondary_eclipse_depth`] and [`false_alarm_probability`]:
//!   report-only diagnostics
//!
//! ```rust
//! use transit_core::Series;
//! use transit_vetting::{estimate_depth, ShapeAnalyzer};
//!
//! let series = Series::from_pairs((0..100).map(|i| {
//!     let flux = if i % 20 == 10 { 0.99 } else { 1.0 };
//!     (i as f64 * 0.1, flux)
//! })).unwrap();
//!
//! let depth = estimate_depth(&series).unwrap();
//! assert!((depth.depth - 0.01).abs() < 1e-12);
//! assert!(ShapeAnalyzer::default().score(&series) >= 4.0);
//! ```

pub mod artifacts;
pub mod depth;
pub mod secondary;
pub mod shape;

pub use artifacts::{detect_artifacts, jump_ratio, ArtifactMetrics, LinearTrendKernel};
pub use depth::{estimate_depth, DepthEstimate};
pub use secondary::{false_alarm_probability, secondary_eclipse_depth, SECONDARY_PHASE_WINDOW};
pub use shape::{ShapeAnalyzer, ShapeConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use transit_core::{Sample, Series};

    fn series(flux: &[f64]) -> Series {
        Series::from_samples(
            flux.iter()
                .enumerate()
                .map(|(i, &f)| Sample::new(i as f64 * 0.02, f))
                .collect(),
        )
    }

    proptest! {
        #[test]
        fn prop_depth_and_snr_non_negative(flux in prop::collection::vec(0.9f64..1.1, 1..200)) {
            let est = estimate_depth(&series(&flux)).unwrap();
            prop_assert!(est.depth >= 0.0);
            prop_assert!(est.noise >= 0.0);
            prop_assert!(est.snr >= 0.0);
        }

        #[test]
        fn prop_r_squared_in_unit_interval(flux in prop::collection::vec(0.9f64..1.1, 2..200)) {
            let metrics = detect_artifacts(&series(&flux)).unwrap();
            prop_assert!((0.0..=1.0).contains(&metrics.linear_trend_r_squared));
            prop_assert!(metrics.jump_ratio >= 0.0);
        }
    }
}

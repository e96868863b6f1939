//! Robust spread measurements for light-curve noise estimation
//!
//! The detection pipeline measures noise with the Median Absolute
//! Deviation, scaled to be comparable with a standard deviation:
//!
//! ```text
//! robust_std_dev = median(|flux - 1.0|) * 1.4826
//! ```
//!
//! MAD has a 50% breakdown point, so the estimate is not dragged around by
//! the very outliers and transit dips the pipeline is looking at.
//!
//! # Examples
//!
//! ```rust
//! use transit_spread::{robust_std_dev, Mad, SpreadEstimator};
//!
//! let flux = vec![1.0, 1.001, 0.999, 1.002, 0.998, 0.95]; // one deep point
//! let sigma = robust_std_dev(&flux).unwrap();
//! assert!(sigma < 0.01);
//!
//! let mad = Mad::about_median().estimate(&flux).unwrap();
//! assert!(mad > 0.0);
//! ```

pub mod mad;
pub mod traits;

// Re-exports
pub use mad::{robust_std_dev, Center, Mad, StandardizedMad, NORMAL_CONSISTENCY};
pub use traits::SpreadEstimator;

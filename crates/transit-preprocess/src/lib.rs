//! Light-curve preprocessing
//!
//! The first stages of the detection pipeline:
//!
//! 1. [`parse_light_curve`] turns header + `time,flux,...` rows into a
//!    [`Series`](transit_core::Series), dropping unusable rows.
//! 2. [`normalize`] divides by the median flux.
//! 3. [`SigmaClip`] removes samples far from the baseline.
//! 4. [`SlidingMedianDetrender`] flattens slow trends.
//!
//! Noise estimation between steps 2 and 3 lives in `transit-spread`.
//!
//! ```rust
//! use transit_core::Series;
//! use transit_preprocess::{normalize, SigmaClip, SlidingMedianDetrender};
//! use transit_spread::robust_std_dev;
//!
//! let series = Series::from_pairs((0..200).map(|i| {
//!     let t = i as f64 * 0.05;
//!     (t, 5000.0 + if i % 37 == 0 { 40.0 } else { (i % 5) as f64 })
//! })).unwrap();
//!
//! let normalized = normalize(&series).unwrap().series;
//! let sigma = robust_std_dev(&normalized.flux_vec()).unwrap();
//! let clipped = SigmaClip::default().apply(&normalized, sigma).series;
//! let flat = SlidingMedianDetrender::default().detrend(&clipped).unwrap();
//! assert_eq!(flat.len(), clipped.len());
//! ```

pub mod clip;
pub mod detrend;
pub mod kernel;
pub mod normalize;
pub mod parser;

pub use clip::{ClipOutcome, SigmaClip, DEFAULT_CLIP_SIGMA};
pub use detrend::SlidingMedianDetrender;
pub use kernel::CenteredWindowKernel;
pub use normalize::{normalize, Normalized};
pub use parser::{parse_file, parse_light_curve, parse_reader};

//! End-to-end transit detection
//!
//! [`TransitDetector`] wires the workspace together:
//!
//! ```text
//! parse -> validate -> normalize -> noise -> clip -> artifacts -> detrend
//!       -> depth/SNR -> period search -> shape -> gate -> classify
//! ```
//!
//! A light curve that shows no transit is an ordinary
//! [`DetectionResult::Rejection`]; only malformed input
//! ([`Error::InsufficientData`](transit_core::Error::InsufficientData)) and
//! numeric faults inside a stage are errors.
//!
//! # Example
//!
//! ```rust
//! use transit_core::Series;
//! use transit_detector::{DetectionReport, TransitDetectorBuilder};
//!
//! let flat = Series::from_pairs((0..500).map(|i| (i as f64 * 0.01, 1.0))).unwrap();
//! let detector = TransitDetectorBuilder::new().build().unwrap();
//! let result = detector.analyze(&flat).unwrap();
//!
//! assert!(!result.is_exoplanet());
//! let report = DetectionReport::from(&result);
//! assert_eq!(report.planet_type, "None");
//! ```

pub mod builder;
pub mod classifier;
pub mod config;
pub mod detector;
pub mod gate;
pub mod properties;
pub mod report;
pub mod result;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_data;

pub use builder::{default_detector, TransitDetectorBuilder};
pub use classifier::{Classification, Classifier, ClassifierConfig, PlanetType};
pub use config::{DetectorConfig, PreprocessConfig};
pub use detector::{AnalysisOptions, TransitDetector};
pub use gate::{
    acceptance_scores, rejection_scores, Criterion, DecisionGate, DetectionThresholds, GateFailure,
};
pub use properties::{HostStar, OrbitalProperties};
pub use report::{DetectionReport, ReportMetrics};
pub use result::{Acceptance, DetectionMetrics, DetectionResult, Rejection};

pub use transit_search::PeriodSearchConfig;
pub use transit_vetting::ShapeConfig;

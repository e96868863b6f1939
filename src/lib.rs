//! # transit-detect
//!
//! Robust light-curve transit detection.
//!
//! The workspace is split by pipeline stage:
//!
//! - [`transit_core`]: `Sample`/`Series`, the error type, median helpers
//!   and the pipeline context and event bus
//! - [`transit_spread`]: MAD-based noise estimation
//! - [`transit_preprocess`]: parsing, normalization, sigma clipping,
//!   detrending
//! - [`transit_search`]: the phase-folding period search
//! - [`transit_vetting`]: depth/SNR, artifact and dip-shape diagnostics
//! - [`transit_detector`]: the decision gate, classifier and the end-to-end
//!   [`TransitDetector`]
//!
//! ## Quick start
//!
//! ```rust
//! use transit_detect::prelude::*;
//!
//! let mut text = String::from("time,flux\n");
//! for i in 0..400 {
//!     text.push_str(&format!("{},{}\n", i as f64 * 0.02, 1.0));
//! }
//!
//! let detector = TransitDetector::default();
//! let result = detector.analyze_text(&text).unwrap();
//! let report = DetectionReport::from(&result);
//! assert!(!report.is_exoplanet);
//! ```
//!
//! ## Features
//!
//! - `parallel`: score the trial periods on the rayon thread pool

pub use transit_core;
pub use transit_detector;
pub use transit_preprocess;
pub use transit_search;
pub use transit_spread;
pub use transit_vetting;

pub use transit_core::{Error, Result, Sample, Series};
pub use transit_detector::{
    AnalysisOptions, DetectionReport, DetectionResult, DetectorConfig, TransitDetector,
    TransitDetectorBuilder,
};

/// Common imports
pub mod prelude {
    pub use transit_core::pipeline::{EventBus, EventHandler, LoggingHandler, MetricsHandler};
    pub use transit_core::{Error, Result, Sample, Series};
    pub use transit_detector::{
        AnalysisOptions, Criterion, DetectionMetrics, DetectionReport, DetectionResult,
        DetectorConfig, PlanetType, TransitDetector, TransitDetectorBuilder,
    };
    pub use transit_preprocess::{parse_file, parse_light_curve};
    pub use transit_search::{PeriodSearch, PeriodSearchProperties, PhaseFoldSearch};
}

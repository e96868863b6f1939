//! Core types and plumbing for light-curve transit detection
//!
//! This crate holds what every stage of the detection pipeline shares:
//!
//! - [`Sample`] and [`Series`], the in-memory light curve
//! - the unified [`Error`] type and [`Result`] alias
//! - selection-based median helpers in [`utils`]
//! - the [`pipeline`] context and event bus used by the orchestrator
//!
//! # Example
//!
//! ```rust
//! use transit_core::{Series, utils::median};
//!
//! let series = Series::from_pairs((0..20).map(|i| (i as f64 * 0.1, 1.0))).unwrap();
//! let flux = series.flux_vec();
//! assert_eq!(median(&flux), Some(1.0));
//! ```

pub mod error;
pub mod pipeline;
pub mod types;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use types::{Sample, Series, MIN_SAMPLES};

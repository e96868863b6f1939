//! Period search for transit light curves
//!
//! Given a detrended light curve whose baseline sits at 1.0, the search
//! folds the data at each period of a linear grid and ranks the periods by
//! a signal detection efficiency (SDE). Only samples inside a narrow phase
//! window around the epoch *and* below a flux cutoff count as in-transit.
//!
//! # Algorithms
//!
//! - [`PhaseFoldSearch`]: the BLS-flavoured grid scan, optionally on the
//!   rayon pool with the `parallel` feature
//!
//! # Example
//!
//! ```rust
//! use transit_core::Series;
//! use transit_search::{PeriodSearch, PhaseFoldSearch};
//!
//! // Box-shaped dips every 5 days
//! let series = Series::from_pairs((0..5000).map(|i| {
//!     let t = i as f64 * 0.01;
//!     let p = (t % 5.0) / 5.0;
//!     let in_dip = p < 0.02 || p > 0.98;
//!     (t, if in_dip { 0.99 } else { 1.0 })
//! })).unwrap();
//!
//! let result = PhaseFoldSearch::default().search(&series, 0.001).unwrap();
//! assert!((result.best_period() - 5.0).abs() < 0.25);
//! ```

pub mod bls;
pub mod fold;
pub mod grid;
pub mod traits;
pub mod types;

pub use bls::{PeriodSearchConfig, PhaseFoldSearch};
pub use fold::{centered_phase, phase};
pub use grid::PeriodGrid;
pub use traits::{PeriodSearch, PeriodSearchProperties};
pub use types::{PeriodScore, PeriodSearchResult, PeriodogramPoint};

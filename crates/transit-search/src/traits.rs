//! Core traits for period searches

use crate::types::PeriodSearchResult;
use transit_core::{Result, Series};

/// Properties of a period search that don't depend on the data
pub trait PeriodSearchProperties {
    /// Name reported with search results and pipeline events
    fn algorithm_name(&self) -> &'static str;
}

/// Scan trial periods over a detrended, unit-baseline light curve
pub trait PeriodSearch: PeriodSearchProperties {
    /// `noise` is the robust standard deviation of `series`
    fn search(&self, series: &Series, noise: f64) -> Result<PeriodSearchResult>;
}

//! Light-curve data types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Minimum number of usable samples required before any analysis runs
pub const MIN_SAMPLES: usize = 10;

/// A single brightness measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Observation time (days)
    pub time: f64,
    /// Measured flux (arbitrary units until normalized)
    pub flux: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(time: f64, flux: f64) -> Self {
        Self { time, flux }
    }

    /// Both fields are finite
    pub fn is_finite(&self) -> bool {
        self.time.is_finite() && self.flux.is_finite()
    }
}

impl From<(f64, f64)> for Sample {
    fn from((time, flux): (f64, f64)) -> Self {
        Self::new(time, flux)
    }
}

/// An ordered light curve.
///
/// Samples keep the order they were given in; nothing here re-sorts by time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Wrap already-clean samples without validating length.
    ///
    /// Pipeline stages use this for intermediate series, which may be
    /// shorter than [`MIN_SAMPLES`] after clipping.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Build a series from raw pairs, dropping non-finite rows and
    /// requiring at least [`MIN_SAMPLES`] survivors.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Sample>,
    {
        let samples: Vec<Sample> = pairs
            .into_iter()
            .map(Into::into)
            .filter(Sample::is_finite)
            .collect();
        Self::validated(samples)
    }

    /// Build a series from parallel time/flux columns.
    pub fn from_columns(time: &[f64], flux: &[f64]) -> Result<Self> {
        if time.len() != flux.len() {
            return Err(Error::InvalidParameter(format!(
                "time and flux columns differ in length: {} vs {}",
                time.len(),
                flux.len()
            )));
        }
        Self::from_pairs(time.iter().copied().zip(flux.iter().copied()))
    }

    /// Enforce the minimum-length invariant
    pub fn validated(samples: Vec<Sample>) -> Result<Self> {
        if samples.len() < MIN_SAMPLES {
            return Err(Error::InsufficientData {
                expected: MIN_SAMPLES,
                actual: samples.len(),
            });
        }
        Ok(Self { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    /// Iterate over timestamps
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.time)
    }

    /// Iterate over flux values
    pub fn fluxes(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.flux)
    }

    /// Flux values collected into a fresh vector
    pub fn flux_vec(&self) -> Vec<f64> {
        self.fluxes().collect()
    }

    /// First timestamp, if any
    pub fn first_time(&self) -> Option<f64> {
        self.samples.first().map(|s| s.time)
    }

    /// `last(time) - first(time)`, or 0 for fewer than two samples
    pub fn time_span(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.time - first.time,
            _ => 0.0,
        }
    }

    /// Replace every flux with `f(sample)`, keeping times.
    pub fn map_flux<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, &Sample) -> f64,
    {
        let samples = self
            .samples
            .iter()
            .enumerate()
            .map(|(i, s)| Sample::new(s.time, f(i, s)))
            .collect();
        Self { samples }
    }

    /// Keep only the samples matching the predicate
    pub fn filter<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Sample) -> bool,
    {
        Self {
            samples: self.samples.iter().copied().filter(|s| keep(s)).collect(),
        }
    }
}

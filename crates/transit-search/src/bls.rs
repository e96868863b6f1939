//! Phase-folding period search
//!
//! A box-least-squares flavoured scan: for each trial period the light
//! curve is folded about its first timestamp, samples within a fixed phase
//! window that also sit below a flux cutoff count as "in transit", and the
//! period is scored with a signal detection efficiency
//!
//! ```text
//! SDE = depth * sqrt(in_transit_count) * out_of_transit_median / (noise + noise_floor)
//! ```
//!
//! This is a heuristic ranking score, not the least-squares statistic of
//! Kovács et al.; it rewards deep, repeated dips relative to the noise.
//!
//! Cost is O(periods × n). With the `parallel` feature the trial periods
//! are scored on the rayon pool; the best period is still chosen by a
//! sequential low-to-high pass, so the result is identical.

use crate::fold::centered_phase;
use crate::grid::PeriodGrid;
use crate::traits::{PeriodSearch, PeriodSearchProperties};
use crate::types::{PeriodScore, PeriodSearchResult, PeriodogramPoint};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, instrument, trace};
use transit_core::utils::{median_in_place, min_value};
use transit_core::{Error, Result, Sample, Series};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Parameters of the phase-folding search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodSearchConfig {
    /// Shortest trial period (days)
    pub min_period: f64,
    /// Longest trial period (days), further capped at half the time span
    pub max_period: f64,
    /// Number of linearly spaced trial periods
    pub period_count: usize,
    /// Half-width of the transit window in phase units
    pub phase_half_width: f64,
    /// In-window samples must be strictly below this flux
    pub in_transit_flux: f64,
    /// Periods with fewer in-transit samples are skipped
    pub min_transit_samples: usize,
    /// Added to the noise in the SDE denominator
    pub noise_floor: f64,
}

impl Default for PeriodSearchConfig {
    fn default() -> Self {
        Self {
            min_period: 0.5,
            max_period: 50.0,
            period_count: 300,
            phase_half_width: 0.1,
            in_transit_flux: 0.995,
            min_transit_samples: 3,
            noise_floor: 1e-4,
        }
    }
}

impl PeriodSearchConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.min_period > 0.0 && self.min_period.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "min_period must be positive, got {}",
                self.min_period
            )));
        }
        if matches!(
            self.max_period.partial_cmp(&self.min_period),
            None | Some(Ordering::Less)
        ) {
            return Err(Error::InvalidParameter(format!(
                "max_period {} is below min_period {}",
                self.max_period, self.min_period
            )));
        }
        if self.period_count == 0 {
            return Err(Error::InvalidParameter("period_count must be at least 1".into()));
        }
        if !(self.phase_half_width > 0.0 && self.phase_half_width <= 0.5) {
            return Err(Error::InvalidParameter(format!(
                "phase_half_width must be in (0, 0.5], got {}",
                self.phase_half_width
            )));
        }
        if self.noise_floor < 0.0 {
            return Err(Error::InvalidParameter("noise_floor must be non-negative".into()));
        }
        Ok(())
    }
}

/// BLS-like phase-folding period search
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseFoldSearch {
    config: PeriodSearchConfig,
}

impl PhaseFoldSearch {
    pub fn new(config: PeriodSearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PeriodSearchConfig {
        &self.config
    }

    /// The trial periods that will be evaluated for `series`
    pub fn grid_for(&self, series: &Series) -> PeriodGrid {
        PeriodGrid::for_time_span(
            self.config.min_period,
            self.config.max_period,
            self.config.period_count,
            series.time_span(),
        )
    }

    /// Score one trial period, `None` if too few samples fall in transit
    pub fn score_period(
        &self,
        samples: &[Sample],
        t0: f64,
        period: f64,
        noise: f64,
    ) -> Option<PeriodScore> {
        let cfg = &self.config;
        let mut in_transit = Vec::new();
        let mut out_of_transit = Vec::with_capacity(samples.len());

        for s in samples {
            let phase = centered_phase(s.time, t0, period);
            if phase.abs() < cfg.phase_half_width && s.flux < cfg.in_transit_flux {
                in_transit.push(s.flux);
            } else {
                out_of_transit.push(s.flux);
            }
        }

        if in_transit.len() < cfg.min_transit_samples {
            return None;
        }

        let depth = 1.0 - min_value(&in_transit)?;
        let out_of_transit_median = median_in_place(&mut out_of_transit).unwrap_or(1.0);
        let transit_count = in_transit.len();
        let sde = depth
            * (transit_count as f64).sqrt()
            * (out_of_transit_median / (noise + cfg.noise_floor));

        Some(PeriodScore {
            period,
            sde,
            transit_count,
            depth,
            out_of_transit_median,
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn scan(
        &self,
        samples: &[Sample],
        t0: f64,
        periods: &[f64],
        noise: f64,
    ) -> Vec<PeriodogramPoint> {
        periods
            .iter()
            .map(|&period| PeriodogramPoint {
                period,
                score: self.score_period(samples, t0, period, noise),
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn scan(
        &self,
        samples: &[Sample],
        t0: f64,
        periods: &[f64],
        noise: f64,
    ) -> Vec<PeriodogramPoint> {
        periods
            .par_iter()
            .map(|&period| PeriodogramPoint {
                period,
                score: self.score_period(samples, t0, period, noise),
            })
            .collect()
    }
}

/// First maximum in grid order; a later period must be strictly better
fn select_best(periodogram: &[PeriodogramPoint]) -> Option<PeriodScore> {
    let mut best: Option<PeriodScore> = None;
    for score in periodogram.iter().filter_map(|p| p.score) {
        match best {
            Some(current) if score.sde <= current.sde => {}
            _ => best = Some(score),
        }
    }
    best
}

impl PeriodSearchProperties for PhaseFoldSearch {
    fn algorithm_name(&self) -> &'static str {
        "Phase-fold SDE"
    }
}

impl PeriodSearch for PhaseFoldSearch {
    #[instrument(level = "debug", skip(self, series), fields(n = series.len()))]
    fn search(&self, series: &Series, noise: f64) -> Result<PeriodSearchResult> {
        let Some(t0) = series.first_time() else {
            return Ok(PeriodSearchResult::default());
        };

        let periods = self.grid_for(series).periods();
        let periodogram = self.scan(series.samples(), t0, &periods, noise);
        let best = select_best(&periodogram);

        if let Some(best) = &best {
            if !best.sde.is_finite() {
                return Err(Error::non_finite("period_search", "best SDE"));
            }
            trace!(period = best.period, depth = best.depth, "best trial period");
        }

        let result = PeriodSearchResult::new(best, periodogram);
        debug!(
            evaluated = result.periods_evaluated(),
            best_period = result.best_period(),
            best_sde = result.best_sde(),
            "period search finished"
        );
        Ok(result)
    }
}
